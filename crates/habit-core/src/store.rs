//! The habit store: the authoritative, ordered collection of habits.
//!
//! All mutations run to completion synchronously and keep two invariants:
//! habit ids are unique, and insertion order is the display order. Absence
//! is reported as a `bool` or absorbed as a no-op, never as an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of completed days at which a habit counts as done.
pub const GOAL: u32 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub days_completed: u32,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            days_completed: 0,
        }
    }

    fn with_days(name: &str, days_completed: u32) -> Self {
        Self {
            days_completed,
            ..Self::new(name)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.days_completed >= GOAL
    }
}

/// Summary produced for the `/stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub habits: usize,
    pub completed: usize,
    pub average_progress: u32,
}

#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// The three habits a fresh install starts with.
    pub fn sample() -> Self {
        Self::new(vec![
            Habit::with_days("Meditate", 15),
            Habit::with_days("Read a book", 9),
            Habit::with_days("Exercise", 6),
        ])
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Appends a new habit with a fresh id and a zeroed counter.
    /// A name that trims to empty is a no-op.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.habits.push(Habit::new(name));
        true
    }

    /// Removes the habit with the given id, if present.
    pub fn remove(&mut self, id: &str) {
        self.habits.retain(|h| h.id != id);
    }

    /// Removes the first habit whose name matches case-insensitively.
    /// Returns whether a match was found.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.find_by_name(name) {
            Some(index) => {
                self.habits.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves the counter one day up or down, clamped to `[0, GOAL]`.
    /// Unknown ids are a no-op.
    pub fn adjust(&mut self, id: &str, increment: bool) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            habit.days_completed = if increment {
                (habit.days_completed + 1).min(GOAL)
            } else {
                habit.days_completed.saturating_sub(1)
            };
        }
    }

    /// Sets the counter of the first case-insensitive name match, clamping
    /// the value to `[0, GOAL]`. Returns whether a match was found.
    pub fn set_by_name(&mut self, name: &str, value: i64) -> bool {
        match self.find_by_name(name) {
            Some(index) => {
                self.habits[index].days_completed = value.clamp(0, GOAL as i64) as u32;
                true
            }
            None => false,
        }
    }

    /// Percentage-normalized mean of all counters, in `[0, 100]`.
    /// An empty collection is exactly 0.
    pub fn aggregate_progress(&self) -> u32 {
        if self.habits.is_empty() {
            return 0;
        }
        let sum: u32 = self.habits.iter().map(|h| h.days_completed).sum();
        let total = (self.habits.len() as u32) * GOAL;
        (100.0 * f64::from(sum) / f64::from(total)).round() as u32
    }

    pub fn stats(&self) -> Stats {
        Stats {
            habits: self.habits.len(),
            completed: self.habits.iter().filter(|h| h.is_complete()).count(),
            average_progress: self.aggregate_progress(),
        }
    }

    fn find_by_name(&self, name: &str) -> Option<usize> {
        self.habits
            .iter()
            .position(|h| h.name.eq_ignore_ascii_case(name))
    }
}
