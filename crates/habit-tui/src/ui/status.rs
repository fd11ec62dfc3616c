use chrono::Local;
use habit_core::theme::{Element, Theme, ThemeVariant};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Bottom status bar: system stats line, theme selector row, date line.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    uptime_secs: u64,
    habit_count: usize,
) {
    let block = Block::new()
        .borders(Borders::TOP)
        .style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
    frame.render_widget(
        Paragraph::new(format!("sys.uptime: {uptime_secs}s")).style(theme.dim_style()),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(format!("mem: {}kb", habit_count * 128))
            .alignment(Alignment::Center)
            .style(theme.dim_style()),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
            .alignment(Alignment::Right)
            .style(theme.dim_style()),
        cols[2],
    );

    let mut spans = vec![Span::styled("theme.color: ", theme.dim_style())];
    for variant in ThemeVariant::all() {
        let active = variant == theme.variant();
        let swatch = Style::default()
            .fg(variant.primary())
            .bg(theme.colors().background);
        spans.push(Span::styled(
            if active { "[■]" } else { " ■ " },
            if active {
                swatch.add_modifier(Modifier::BOLD)
            } else {
                swatch
            },
        ));
    }
    spans.push(Span::styled(
        format!(" {}", theme.variant().label()),
        theme.dim_style(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    let date = Local::now().format("%a, %b %-d");
    frame.render_widget(
        Paragraph::new(format!("sys.{date}")).style(theme.ratatui_style(Element::Faint)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{habit_count} tasks_active"))
            .alignment(Alignment::Right)
            .style(theme.ratatui_style(Element::Faint)),
        halves[1],
    );
}
