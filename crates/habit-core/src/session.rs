//! The session controller: one object owning the habit store and the
//! command history, dispatched into by every input path (typed commands,
//! keyboard shortcuts, list actions). Side effects the core cannot perform
//! itself are handed back to the caller as an [`Effect`].

use crate::command::{self, Command, CommandHistory};
use crate::storage::EXPORT_FILE_NAME;
use crate::store::HabitStore;

/// What the caller must do after a dispatch, beyond the state the session
/// already mutated. The help overlay and the filesystem belong to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Export,
    OpenHelp,
    CloseHelp,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: HabitStore,
    history: CommandHistory,
}

impl Session {
    pub fn new(store: HabitStore) -> Self {
        Self {
            store,
            history: CommandHistory::default(),
        }
    }

    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HabitStore {
        &mut self.store
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn suggestions(&self, input: &str) -> Vec<&'static str> {
        command::suggestions(input)
    }

    /// Interprets one typed line. Lines without the command prefix are
    /// ignored entirely. Prefixed lines land in the history verbatim before
    /// execution; failures append an error line and leave the store alone.
    pub fn dispatch(&mut self, line: &str) -> Effect {
        if !line.starts_with('/') {
            return Effect::None;
        }
        self.history.push(line);

        let (matched, effect) = match command::parse(line) {
            Some(cmd) => self.execute(cmd),
            None => (false, Effect::None),
        };
        if !matched {
            self.history.push(format!("Error: Unknown command \"{line}\""));
        }
        effect
    }

    /// Runs an already-parsed command, for callers that bypass text parsing
    /// (keyboard shortcuts map straight to `Command` values). Returns
    /// whether the command succeeded and the follow-up effect.
    pub fn execute(&mut self, cmd: Command) -> (bool, Effect) {
        match cmd {
            Command::Add { name } => {
                self.store.add(&name);
                (true, Effect::None)
            }
            Command::Remove { name } => (self.store.remove_by_name(&name), Effect::None),
            Command::SetProgress { name, value } => {
                (self.store.set_by_name(&name, value), Effect::None)
            }
            Command::Export => {
                self.history
                    .push(format!("Habits exported to {EXPORT_FILE_NAME}"));
                (true, Effect::Export)
            }
            Command::Clear => {
                self.history.clear();
                (true, Effect::None)
            }
            Command::Stats => {
                let stats = self.store.stats();
                self.history.push(format!(
                    "Stats: {} habits, {} completed, {}% average progress",
                    stats.habits, stats.completed, stats.average_progress
                ));
                (true, Effect::None)
            }
            Command::Help => (true, Effect::OpenHelp),
            Command::Close => (true, Effect::CloseHelp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GOAL;

    fn session() -> Session {
        Session::new(HabitStore::sample())
    }

    #[test]
    fn add_then_stats_reports_the_new_count() {
        let mut s = session();
        s.dispatch("/add Sleep early");
        s.dispatch("/stats");
        assert_eq!(s.store().len(), 4);
        let last = s.history().lines().last().unwrap().to_string();
        assert!(last.starts_with("Stats: 4 habits"), "got {last:?}");
    }

    #[test]
    fn rm_is_case_insensitive() {
        let mut s = session();
        s.dispatch("/rm MEDITATE");
        assert_eq!(s.store().len(), 2);
        assert!(!s.store().habits().iter().any(|h| h.name == "Meditate"));
    }

    #[test]
    fn rm_miss_reports_a_failed_command() {
        let mut s = session();
        s.dispatch("/rm Juggling");
        assert_eq!(s.store().len(), 3);
        let last = s.history().lines().last().unwrap().to_string();
        assert_eq!(last, "Error: Unknown command \"/rm Juggling\"");
    }

    #[test]
    fn progress_clamps_to_goal() {
        let mut s = session();
        s.dispatch("/p Meditate 25");
        let habit = &s.store().habits()[0];
        assert_eq!(habit.days_completed, GOAL);
    }

    #[test]
    fn non_numeric_progress_leaves_state_alone() {
        let mut s = session();
        let before = s.store().habits().to_vec();
        s.dispatch("/p Meditate abc");
        assert_eq!(s.store().habits(), before.as_slice());
        let last = s.history().lines().last().unwrap().to_string();
        assert_eq!(last, "Error: Unknown command \"/p Meditate abc\"");
    }

    #[test]
    fn bare_p_is_unmatched_and_mutates_nothing() {
        let mut s = session();
        let before = s.store().habits().to_vec();
        s.dispatch("/p");
        assert_eq!(s.store().habits(), before.as_slice());
        let last = s.history().lines().last().unwrap().to_string();
        assert_eq!(last, "Error: Unknown command \"/p\"");
    }

    #[test]
    fn every_prefixed_line_lands_in_history_verbatim() {
        let mut s = session();
        s.dispatch("/add Stretch");
        assert_eq!(s.history().lines().next(), Some("/add Stretch"));
    }

    #[test]
    fn non_prefixed_input_is_ignored() {
        let mut s = session();
        assert_eq!(s.dispatch("hello there"), Effect::None);
        assert!(s.history().is_empty());
        assert_eq!(s.store().len(), 3);
    }

    #[test]
    fn clear_empties_the_history() {
        let mut s = session();
        s.dispatch("/stats");
        s.dispatch("/clear");
        assert!(s.history().is_empty());
    }

    #[test]
    fn export_confirms_and_requests_the_side_effect() {
        let mut s = session();
        assert_eq!(s.dispatch("/export"), Effect::Export);
        let last = s.history().lines().last().unwrap().to_string();
        assert_eq!(last, "Habits exported to habits_export.json");
    }

    #[test]
    fn help_and_close_drive_the_overlay() {
        let mut s = session();
        assert_eq!(s.dispatch("/help"), Effect::OpenHelp);
        assert_eq!(s.dispatch("/?"), Effect::OpenHelp);
        assert_eq!(s.dispatch("/close"), Effect::CloseHelp);
    }
}
