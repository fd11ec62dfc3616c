use habit_core::{
    store::GOAL,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The command reference overlay, toggled by Ctrl+K or `/help`.
pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::new()
        .title(" Command Reference ")
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entry = |label: String, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {label:<22}"), theme.title_style()),
            Span::styled(desc.to_string(), theme.dim_style()),
        ])
    };
    let heading = |text: &str| Line::from(Span::styled(text.to_string(), theme.text_style()));

    let mut lines = vec![heading("Available Commands:")];
    lines.extend([
        entry("/add habit_name".into(), "Add a new habit"),
        entry("/rm habit_name".into(), "Remove a habit"),
        entry(
            "/p habit_name value".into(),
            &format!("Set days completed (0-{GOAL})"),
        ),
        entry("/export".into(), "Export habits to JSON"),
        entry("/clear".into(), "Clear command history"),
        entry("/stats".into(), "Show habit statistics"),
        entry("/help".into(), "Show this reference"),
        entry("/close".into(), "Close this reference"),
    ]);
    lines.push(Line::default());
    lines.push(heading("Keyboard Shortcuts:"));
    lines.extend([
        entry("Alt+N".into(), "Focus new habit input"),
        entry("Alt+C".into(), "Focus command input"),
        entry("Ctrl+K".into(), "Show command help"),
        entry("Alt+T".into(), "Cycle through themes"),
        entry("Tab".into(), "Cycle pane focus"),
        entry("+ / - / x".into(), "Adjust or delete the selected habit"),
        entry("Esc".into(), "Close help panel"),
    ]);
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Press Esc to close",
            theme.ratatui_style(Element::Faint),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}
