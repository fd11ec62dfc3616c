use habit_core::{
    store::{HabitStore, GOAL},
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BAR_WIDTH: usize = 12;

pub fn render_habits(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    store: &HabitStore,
    selected: usize,
    focused: bool,
) {
    let block = Block::new()
        .borders(Borders::ALL)
        .title(format!(" habits [{}] ", store.len()))
        .style(if focused {
            theme.text_style()
        } else {
            theme.border_style()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if store.is_empty() {
        let hint = Paragraph::new("no habits tracked. /add one to begin")
            .alignment(Alignment::Center)
            .style(theme.ratatui_style(Element::Faint));
        frame.render_widget(hint, inner);
        return;
    }

    let items: Vec<ListItem> = store
        .habits()
        .iter()
        .enumerate()
        .map(|(i, habit)| {
            let is_selected = focused && i == selected;
            let row_style = if is_selected {
                theme.highlight_style()
            } else {
                theme.text_style()
            };

            let filled = (habit.days_completed as usize * BAR_WIDTH) / GOAL as usize;
            let bar: String =
                "█".repeat(filled) + &"░".repeat(BAR_WIDTH.saturating_sub(filled));
            let marker = if habit.is_complete() { " *" } else { "" };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<24}", habit.name),
                    row_style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    bar,
                    if is_selected {
                        row_style
                    } else {
                        theme.dim_style()
                    },
                ),
                Span::styled(
                    format!(" {:>2}/{} days{}", habit.days_completed, GOAL, marker),
                    row_style,
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).style(theme.ratatui_style(Element::Text));
    frame.render_widget(list, inner);
}
