use super::{
    habits::render_habits, header::render_header, help_modal::render_help_modal,
    status::render_status, terminal::render_terminal,
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use habit_core::{
    session::{Effect, Session},
    settings::Settings,
    storage,
    store::HabitStore,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Rect, Terminal},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const WELCOME_MESSAGE: &str = "Initializing HABIT.SYS v1.0.3...";
const TYPE_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

/// Which pane receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    HabitInput,
    CommandInput,
    HabitList,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::HabitInput => Self::CommandInput,
            Self::CommandInput => Self::HabitList,
            Self::HabitList => Self::HabitInput, // Loop back to the top
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::HabitInput => Self::HabitList, // Loop back to the bottom
            Self::CommandInput => Self::HabitInput,
            Self::HabitList => Self::CommandInput,
        }
    }
}

/// Reveals the boot banner one character per tick. Presentation only; it
/// never reaches the habit store and dies with the run loop.
struct Typewriter {
    revealed: usize,
    last: Instant,
}

impl Typewriter {
    fn new() -> Self {
        Self {
            revealed: 0,
            last: Instant::now(),
        }
    }

    fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        while self.revealed < WELCOME_MESSAGE.len()
            && now.saturating_duration_since(self.last) >= TYPE_INTERVAL
        {
            self.revealed += 1;
            self.last += TYPE_INTERVAL;
        }
    }

    fn visible(&self) -> &'static str {
        &WELCOME_MESSAGE[..self.revealed]
    }
}

pub struct App {
    session: Session,
    settings: Settings,
    theme: Theme,
    mode: AppMode,
    focus: Focus,
    habit_input: String,
    command_input: String,
    selected: usize,
    typewriter: Typewriter,
    started: Instant,
    data_path: PathBuf,
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings, store: HabitStore, data_path: PathBuf) -> Self {
        let theme = Theme::new(settings.theme);
        Self {
            session: Session::new(store),
            settings,
            theme,
            mode: AppMode::Normal,
            focus: Focus::default(),
            habit_input: String::new(),
            command_input: String::new(),
            selected: 0,
            typewriter: Typewriter::new(),
            started: Instant::now(),
            data_path,
            should_quit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.typewriter.tick();
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.size();
            let backdrop = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));
            frame.render_widget(backdrop, area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // boot banner
                    Constraint::Length(3), // header + aggregate progress
                    Constraint::Min(3),    // habit list
                    Constraint::Length(3), // new habit input
                    Constraint::Length(9), // command terminal
                    Constraint::Length(4), // status bar
                ])
                .split(area);

            let welcome =
                Paragraph::new(self.typewriter.visible()).style(self.theme.dim_style());
            frame.render_widget(welcome, chunks[0]);

            render_header(
                frame,
                chunks[1],
                &self.theme,
                self.session.store().aggregate_progress(),
            );
            render_habits(
                frame,
                chunks[2],
                &self.theme,
                self.session.store(),
                self.selected,
                self.focus == Focus::HabitList,
            );
            self.render_habit_input(frame, chunks[3]);

            let suggestions = self.session.suggestions(&self.command_input);
            render_terminal(
                frame,
                chunks[4],
                &self.theme,
                self.session.history(),
                &self.command_input,
                &suggestions,
                self.focus == Focus::CommandInput,
            );
            render_status(
                frame,
                chunks[5],
                &self.theme,
                self.started.elapsed().as_secs(),
                self.session.store().len(),
            );

            if self.mode == AppMode::Help {
                let size = frame.size();
                // Modal size: 80% of terminal, but at least 40x12 and at most 64x24
                let modal_width = (((size.width as f32) * 0.8).round() as u16)
                    .clamp(40, 64)
                    .min(size.width);
                let modal_height = (((size.height as f32) * 0.8).round() as u16)
                    .clamp(12, 24)
                    .min(size.height);
                let modal_area = Rect::new(
                    (size.width.saturating_sub(modal_width)) / 2,
                    (size.height.saturating_sub(modal_height)) / 2,
                    modal_width,
                    modal_height,
                );
                frame.render_widget(Clear, modal_area); // clears the background
                render_help_modal(frame, modal_area, &self.theme);
            }
        })?;
        Ok(())
    }

    fn render_habit_input(&self, frame: &mut ratatui::prelude::Frame, area: Rect) {
        let focused = self.focus == Focus::HabitInput;
        let block = Block::new()
            .borders(Borders::ALL)
            .title(" new habit ")
            .style(if focused {
                self.theme.text_style()
            } else {
                self.theme.border_style()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = if self.habit_input.is_empty() {
            vec![Span::styled(
                "_new_habit",
                self.theme.ratatui_style(Element::Faint),
            )]
        } else {
            vec![Span::styled(self.habit_input.as_str(), self.theme.text_style())]
        };
        if focused {
            spans.push(Span::styled("_", self.theme.highlight_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.on_key(key);
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('k') => self.mode = AppMode::Help,
                _ => {}
            }
            return;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('n') => self.focus = Focus::HabitInput,
                KeyCode::Char('c') => self.focus = Focus::CommandInput,
                KeyCode::Char('t') => self.cycle_theme(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => {
                if self.mode == AppMode::Help {
                    self.mode = AppMode::Normal;
                }
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Enter => self.submit(),
            code => self.on_focused_key(code),
        }
    }

    fn on_focused_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::HabitInput => match code {
                KeyCode::Char(c) => self.habit_input.push(c),
                KeyCode::Backspace => {
                    self.habit_input.pop();
                }
                _ => {}
            },
            Focus::CommandInput => match code {
                KeyCode::Char(c) => self.command_input.push(c),
                KeyCode::Backspace => {
                    self.command_input.pop();
                }
                _ => {}
            },
            Focus::HabitList => match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1)
                        .min(self.session.store().len().saturating_sub(1));
                }
                KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_selected(true),
                KeyCode::Char('-') => self.adjust_selected(false),
                KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn submit(&mut self) {
        match self.focus {
            Focus::HabitInput => {
                let name = std::mem::take(&mut self.habit_input);
                if self.session.store_mut().add(&name) {
                    self.persist();
                }
            }
            Focus::CommandInput => {
                let line = std::mem::take(&mut self.command_input);
                if line.trim().is_empty() {
                    return;
                }
                self.dispatch(&line);
            }
            Focus::HabitList => {}
        }
    }

    fn dispatch(&mut self, line: &str) {
        tracing::debug!(line, "dispatching command");
        match self.session.dispatch(line) {
            Effect::Export => {
                let path = Path::new(storage::EXPORT_FILE_NAME);
                if let Err(err) = storage::export(path, self.session.store().habits()) {
                    tracing::warn!(error = %err, "export failed");
                }
            }
            Effect::OpenHelp => self.mode = AppMode::Help,
            Effect::CloseHelp => self.mode = AppMode::Normal,
            Effect::None => {}
        }
        self.clamp_selection();
        self.persist();
    }

    fn adjust_selected(&mut self, increment: bool) {
        let Some(habit) = self.session.store().habits().get(self.selected) else {
            return;
        };
        let id = habit.id.clone();
        self.session.store_mut().adjust(&id, increment);
        self.persist();
    }

    fn delete_selected(&mut self) {
        let Some(habit) = self.session.store().habits().get(self.selected) else {
            return;
        };
        let id = habit.id.clone();
        self.session.store_mut().remove(&id);
        self.clamp_selection();
        self.persist();
    }

    fn cycle_theme(&mut self) {
        self.theme.cycle();
        self.settings.theme = self.theme.variant();
        self.settings.save().unwrap_or_default();
    }

    fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.session.store().len().saturating_sub(1));
    }

    fn persist(&self) {
        if let Err(err) = storage::save(&self.data_path, self.session.store().habits()) {
            tracing::warn!(error = %err, "failed to persist habits");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_forward_and_back() {
        let mut focus = Focus::default();
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::HabitInput);
        assert_eq!(Focus::HabitInput.previous(), Focus::HabitList);
    }

    #[test]
    fn typewriter_reveals_the_full_banner() {
        let mut tw = Typewriter::new();
        tw.tick_at(Instant::now() + Duration::from_secs(10));
        assert_eq!(tw.visible(), WELCOME_MESSAGE);
    }

    #[test]
    fn typewriter_starts_hidden() {
        let tw = Typewriter::new();
        assert_eq!(tw.visible(), "");
    }
}
