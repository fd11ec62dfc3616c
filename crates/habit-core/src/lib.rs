//! # Habit Core Library
//!
//! This crate provides the core functionality for the HABIT.SYS terminal
//! application. It contains all the business logic and data structures that
//! are independent of any specific user interface.
//!
//! ## Modules
//!
//! - `store`: the ordered habit collection and its pure operations
//! - `command`: the slash-command grammar, suggestions and bounded history
//! - `session`: the controller tying store and history together
//! - `settings`: application configuration management
//! - `storage`: persisted state, export and import
//! - `theme`: UI theming system

pub mod command;
pub mod session;
pub mod settings;
pub mod storage;
pub mod store;
pub mod theme;

#[cfg(test)]
mod tests {
    use crate::session::{Effect, Session};
    use crate::store::{HabitStore, GOAL};

    // A full sitting at the terminal, end to end through the session.
    #[test]
    fn test_terminal_session_walkthrough() {
        let mut session = Session::new(HabitStore::sample());

        session.dispatch("/add Drink water");
        assert_eq!(session.store().len(), 4);

        session.dispatch("/p Drink water 25");
        let added = session
            .store()
            .habits()
            .iter()
            .find(|h| h.name == "Drink water")
            .unwrap();
        assert_eq!(added.days_completed, GOAL);

        session.dispatch("/rm DRINK WATER");
        assert_eq!(session.store().len(), 3);

        assert_eq!(session.dispatch("/help"), Effect::OpenHelp);
        assert_eq!(session.dispatch("/close"), Effect::CloseHelp);

        session.dispatch("/stats");
        let last = session.history().lines().last().unwrap().to_string();
        assert_eq!(last, "Stats: 3 habits, 0 completed, 48% average progress");
    }

    #[test]
    fn test_history_survives_a_burst_of_commands() {
        let mut session = Session::new(HabitStore::default());
        for i in 0..10 {
            session.dispatch(&format!("/add habit {i}"));
        }
        assert_eq!(session.history().lines().count(), 5);
        assert_eq!(session.store().len(), 10);
    }

    #[test]
    fn test_suggestions_track_the_input_prefix() {
        let session = Session::new(HabitStore::default());
        assert_eq!(session.suggestions("/e"), vec!["/export"]);
        assert!(session.suggestions("stats").is_empty());
    }
}
