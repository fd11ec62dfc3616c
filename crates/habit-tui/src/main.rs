use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use habit_core::{settings::Settings, storage};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
mod ui;
use ui::App;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };

    let data_path = storage::habits_path();
    let store = storage::load_or_default(&data_path);
    tracing::info!(habits = store.len(), "loaded habit state");

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, store, data_path);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;

    result
}

/// The terminal owns stdout, so logs go to a file, and only when asked for
/// via HABITSYS_LOG.
fn init_tracing() {
    if std::env::var_os("HABITSYS_LOG").is_none() {
        return;
    }
    match std::fs::File::create("habitsys.log") {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("Warning: Failed to open habitsys.log: {}", e),
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
