//! Terminal UI rendering for the stencil TUI.
//!
//! This module renders from `&Model` - it never mutates application
//! state. Styling lives here as module constants; the rest of the crate
//! produces plain text.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tea::{Model, Stage};

// Color tokens
const COLOR_ACCENT: Color = Color::LightGreen;
const COLOR_MARKER: Color = Color::Green;
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_ERROR: Color = Color::Red;
const COLOR_CURSOR: Color = Color::Magenta;

// Layout constants
const HEADER_HEIGHT: u16 = 3;
const LIST_PANEL_WIDTH: u16 = 38;
const LEGEND_HEIGHT: u16 = 6;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, model: &Model) {
    if let Some(err) = &model.fatal {
        render_fatal(frame, err);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)])
        .split(frame.area());

    render_header(frame, chunks[0]);

    match model.stage {
        Stage::SelectTemplate => render_select(frame, model, chunks[1]),
        Stage::ProjectName => render_name_entry(frame, model, chunks[1]),
        Stage::Copying => render_copying(frame, model, chunks[1]),
        Stage::Done => render_done(frame, chunks[1]),
    }
}

fn render_fatal(frame: &mut Frame, err: &str) {
    let text = Paragraph::new(format!("Error: {err}"))
        .style(Style::default().fg(COLOR_ERROR));
    frame.render_widget(text, frame.area());
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Stencil ⚡")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Selection stage: template list (or live search) on the left, a tree
/// preview of the highlighted template on the right.
fn render_select(frame: &mut Frame, model: &Model, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Length(LIST_PANEL_WIDTH),
        Constraint::Fill(1),
    ])
    .split(area);

    let left = Layout::vertical([Constraint::Fill(1), Constraint::Length(LEGEND_HEIGHT)])
        .split(columns[0]);

    if model.search.is_some() {
        render_search_panel(frame, model, left[0]);
    } else {
        render_template_list(frame, model, left[0]);
    }
    render_legend(frame, model, left[1]);
    render_preview(frame, model, columns[1]);
}

fn render_template_list(frame: &mut Frame, model: &Model, area: Rect) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let (start, end) = list_window(model.templates.len(), model.cursor, inner_height);

    let mut lines = Vec::new();
    for (i, template) in model.templates[start..end].iter().enumerate() {
        lines.push(list_item_line(&template.name, start + i == model.cursor));
    }

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_search_panel(frame: &mut Frame, model: &Model, area: Rect) {
    let Some(search) = &model.search else { return };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Search: "),
            Span::raw(search.query.clone()),
            cursor_span(model.blink),
        ]),
        Line::default(),
    ];

    if search.results.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matching templates",
            Style::default().fg(COLOR_TEXT_MUTED),
        )));
    } else {
        for (i, template) in search.results.iter().enumerate() {
            lines.push(list_item_line(&template.name, i == search.cursor));
        }
    }

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn list_item_line(name: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("⬥ ", Style::default().fg(COLOR_MARKER)),
            Span::styled(
                name.to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("⬦ ", Style::default().fg(COLOR_TEXT_MUTED)),
            Span::styled(name.to_string(), Style::default().fg(COLOR_TEXT_DIMMED)),
        ])
    }
}

/// Context-sensitive key legend under the list: search instructions while
/// searching, the full key list when help is expanded, a one-line hint
/// otherwise.
fn render_legend(frame: &mut Frame, model: &Model, area: Rect) {
    let lines: Vec<&str> = if model.search.is_some() {
        vec![
            " Navigate : ↑/↓",
            " Select   : Enter",
            " Cancel   : Esc",
            " Exit     : Ctrl+C",
        ]
    } else if model.show_help {
        vec![
            " Navigate : ↑/↓ or j/k",
            " Select   : Enter",
            " Search   : /",
            " Help     : ?",
            " Exit     : Ctrl+C",
        ]
    } else {
        vec![" / find • q quit • ? help"]
    };

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let legend = Paragraph::new(text).style(Style::default().fg(COLOR_TEXT_MUTED));
    frame.render_widget(legend, area);
}

/// Tree preview of the highlighted template. Re-rendered from the
/// filesystem on every draw; never cached.
fn render_preview(frame: &mut Frame, model: &Model, area: Rect) {
    let Some(template) = model.highlighted_template() else {
        return;
    };
    let tree = crate::tree::render(&template.path, model.tree_depth);
    let preview = Paragraph::new(Text::from(tree))
        .style(Style::default().fg(COLOR_TEXT_DIMMED))
        .block(Block::default().borders(Borders::ALL).title(template.name.clone()));
    frame.render_widget(preview, area);
}

fn render_name_entry(frame: &mut Frame, model: &Model, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Enter project name: ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(model.input_buffer.clone()),
            cursor_span(model.blink),
        ]),
        Line::default(),
        hint_line(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_copying(frame: &mut Frame, model: &Model, area: Rect) {
    let spinner = SPINNER_FRAMES[model.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(COLOR_ACCENT)),
            Span::raw(model.status_line.clone()),
        ]),
        Line::default(),
        hint_line(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_done(frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new("Done"), area);
}

fn cursor_span(blink: bool) -> Span<'static> {
    if blink {
        Span::styled("│", Style::default().fg(COLOR_CURSOR).add_modifier(Modifier::BOLD))
    } else {
        Span::raw(" ")
    }
}

fn hint_line() -> Line<'static> {
    Line::from(Span::styled(
        "Press Ctrl+C to exit at any point.",
        Style::default().fg(COLOR_TEXT_MUTED),
    ))
}

/// Visible window of the template list, kept centered on the cursor.
fn list_window(len: usize, cursor: usize, visible: usize) -> (usize, usize) {
    if visible == 0 || len == 0 {
        return (0, 0);
    }
    let start = cursor.saturating_sub(visible / 2);
    let end = (start + visible).min(len);
    let start = end.saturating_sub(visible);
    (start, end)
}
