use std::io::{stdout, Stdout};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stencil::config::Config;
use stencil::tea::Model;
use stencil::{app, catalog, stlog, Result};

/// Stencil - interactive project scaffolding from a directory of templates
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    STENCIL_DEBUG=1    Enable debug logging (alternative to --verbose)"
)]
pub struct Cli {
    /// Max depth for the template preview tree (-1 for unlimited)
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i32>,

    /// Enable debug logging (writes to ~/.stencil/stencil.log)
    #[arg(short, long)]
    pub verbose: bool,

    /// Template root directory (overrides the config file)
    #[arg(short, long)]
    pub templates: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Service commands. Placeholders until the cloud surface exists; they
/// print a status line and exit.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Initialize authentication
    Auth,
    /// Sync cloud changes on the local machine
    Sync,
    /// Show system and sync status
    Status,
}

fn main() -> Result<()> {
    // Single parse for flags and subcommands: help/version exit 0,
    // anything unrecognized exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    stencil::log::init_with_debug(cli.verbose);

    if let Some(command) = cli.command {
        run_stub(&command);
        return Ok(());
    }

    stlog!("Stencil starting");

    let config = Config::load()?;
    if config.verbose && !cli.verbose {
        stencil::log::set_level(stencil::log::LogLevel::Debug);
    }

    let root = config.template_root(cli.templates.as_deref())?;
    let templates = catalog::list(&root)?;
    let depth = cli.depth.or(config.depth).unwrap_or(1);
    let model = Model::new(templates, depth);

    let mut terminal = setup_terminal()?;
    let result = app::run(&mut terminal, model);
    restore_terminal(&mut terminal)?;

    match result?.fatal {
        Some(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
        None => {
            stlog!("Stencil exiting");
            Ok(())
        }
    }
}

fn run_stub(command: &Command) {
    match command {
        Command::Auth => println!("Initializing authentication..."),
        Command::Sync => println!("Syncing cloud changes with local machine..."),
        Command::Status => println!("Checking system status..."),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
