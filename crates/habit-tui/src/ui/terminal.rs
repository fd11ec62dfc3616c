use habit_core::{
    command::CommandHistory,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The command terminal: bounded history pane, suggestion row, and the
/// `root@habits:~$` prompt line.
pub fn render_terminal(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    history: &CommandHistory,
    input: &str,
    suggestions: &[&str],
    focused: bool,
) {
    let block = Block::new()
        .borders(Borders::ALL)
        .title(" terminal ")
        .style(theme.ratatui_style(Element::Panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // history
            Constraint::Length(1), // suggestions
            Constraint::Length(1), // prompt
        ])
        .split(inner);

    if history.is_empty() {
        let hint = Paragraph::new("Press Ctrl+K for help with available commands")
            .style(theme.ratatui_style(Element::Faint));
        frame.render_widget(hint, chunks[0]);
    } else {
        let lines: Vec<Line> = history
            .lines()
            .map(|entry| {
                if entry.starts_with("Error:") {
                    Line::from(Span::styled(
                        entry.to_string(),
                        theme.ratatui_style(Element::Error),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("> {entry}"),
                        theme.ratatui_style(Element::Panel),
                    ))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[0]);
    }

    if !suggestions.is_empty() {
        let row = Paragraph::new(suggestions.join("  "))
            .style(theme.ratatui_style(Element::Faint));
        frame.render_widget(row, chunks[1]);
    }

    let mut spans = vec![Span::styled("root@habits:~$ ", theme.dim_style())];
    if input.is_empty() {
        spans.push(Span::styled(
            "type command or press Ctrl+K for help",
            theme.ratatui_style(Element::Faint),
        ));
    } else {
        spans.push(Span::styled(input, theme.text_style()));
    }
    if focused {
        spans.push(Span::styled("_", theme.highlight_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
}
