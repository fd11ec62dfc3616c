use habit_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    widgets::{block::Title, Block, Borders, Gauge},
};

/// Title row plus the aggregate progress bar, the terminal analog of the
/// page header.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, progress: u32) {
    let title = Title::from(" HABIT.SYS ").alignment(Alignment::Left);

    let gauge = Gauge::default()
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.ratatui_style(Element::Text)),
        )
        .gauge_style(theme.ratatui_style(Element::Text))
        .ratio(f64::from(progress.min(100)) / 100.0)
        .label(format!("{progress}% _progress"));

    frame.render_widget(gauge, area);
}
