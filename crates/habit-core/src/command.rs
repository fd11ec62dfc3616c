//! Command line grammar for the terminal pane.
//!
//! A command is a `/`-prefixed token followed by space-separated arguments.
//! Tokens compare case-insensitively; splitting is on single spaces. A line
//! with too few arguments for its token does not match that pattern and
//! falls through to the unknown-command report.

use std::collections::VecDeque;

/// Maximum number of lines the terminal history retains.
pub const HISTORY_CAP: usize = 5;

/// Recognized command tokens, in declaration order. Auto-completion offers
/// suggestions in exactly this order.
pub const COMMANDS: &[&str] = &[
    "/add", "/rm", "/remove", "/p", "/progress", "/export", "/clear", "/stats", "/help", "/close",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String },
    Remove { name: String },
    SetProgress { name: String, value: i64 },
    Export,
    Clear,
    Stats,
    Help,
    Close,
}

/// Parses a single line into a command. `None` means the line matched no
/// pattern: an unrecognized token, missing arguments, or a `/p` value that
/// is not a base-10 integer.
pub fn parse(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split(' ').collect();
    let token = parts.first()?.to_ascii_lowercase();

    match token.as_str() {
        "/add" if parts.len() > 1 => Some(Command::Add {
            name: parts[1..].join(" "),
        }),
        "/rm" | "/remove" if parts.len() > 1 => Some(Command::Remove {
            name: parts[1..].join(" "),
        }),
        "/p" | "/progress" if parts.len() > 2 => {
            let value: i64 = parts.last()?.parse().ok()?;
            Some(Command::SetProgress {
                name: parts[1..parts.len() - 1].join(" "),
                value,
            })
        }
        "/export" => Some(Command::Export),
        "/clear" => Some(Command::Clear),
        "/stats" => Some(Command::Stats),
        "/help" | "/?" => Some(Command::Help),
        "/close" => Some(Command::Close),
        _ => None,
    }
}

/// Completions for an in-progress input line: the recognized tokens that
/// start with the literal input text. Empty unless the input starts with
/// the command prefix.
pub fn suggestions(input: &str) -> Vec<&'static str> {
    if !input.starts_with('/') {
        return Vec::new();
    }
    COMMANDS
        .iter()
        .filter(|cmd| cmd.starts_with(input))
        .copied()
        .collect()
}

/// Bounded log of issued commands and their result/error lines.
/// Oldest entries are evicted first.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
}

impl CommandHistory {
    pub fn push(&mut self, line: impl Into<String>) {
        if self.entries.len() == HISTORY_CAP {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_multi_word_name() {
        assert_eq!(
            parse("/add Read a book"),
            Some(Command::Add {
                name: "Read a book".into()
            })
        );
    }

    #[test]
    fn add_without_a_name_does_not_match() {
        assert_eq!(parse("/add"), None);
    }

    #[test]
    fn rm_and_remove_are_aliases() {
        let expected = Some(Command::Remove {
            name: "Exercise".into(),
        });
        assert_eq!(parse("/rm Exercise"), expected);
        assert_eq!(parse("/remove Exercise"), expected);
    }

    #[test]
    fn tokens_compare_case_insensitively() {
        assert_eq!(
            parse("/ADD Meditate"),
            Some(Command::Add {
                name: "Meditate".into()
            })
        );
        assert_eq!(parse("/Stats"), Some(Command::Stats));
    }

    #[test]
    fn progress_takes_the_last_token_as_value() {
        assert_eq!(
            parse("/p Read a book 12"),
            Some(Command::SetProgress {
                name: "Read a book".into(),
                value: 12,
            })
        );
        assert_eq!(
            parse("/progress Meditate -3"),
            Some(Command::SetProgress {
                name: "Meditate".into(),
                value: -3,
            })
        );
    }

    #[test]
    fn progress_without_a_value_does_not_match() {
        assert_eq!(parse("/p"), None);
        assert_eq!(parse("/p Meditate"), None);
    }

    #[test]
    fn progress_with_a_non_numeric_value_does_not_match() {
        assert_eq!(parse("/p Meditate abc"), None);
    }

    #[test]
    fn unknown_tokens_do_not_match() {
        assert_eq!(parse("/frobnicate"), None);
        assert_eq!(parse("hello"), None);
    }

    #[test]
    fn help_has_a_question_mark_alias() {
        assert_eq!(parse("/help"), Some(Command::Help));
        assert_eq!(parse("/?"), Some(Command::Help));
    }

    #[test]
    fn suggestions_filter_by_literal_prefix() {
        assert_eq!(suggestions("/p"), vec!["/p", "/progress"]);
        assert_eq!(suggestions("/c"), vec!["/clear", "/close"]);
        assert_eq!(suggestions("/"), COMMANDS.to_vec());
    }

    #[test]
    fn suggestions_are_empty_without_the_prefix() {
        assert!(suggestions("").is_empty());
        assert!(suggestions("add").is_empty());
    }

    #[test]
    fn history_evicts_oldest_beyond_the_cap() {
        let mut history = CommandHistory::default();
        for i in 0..7 {
            history.push(format!("line {i}"));
        }
        let lines: Vec<_> = history.lines().collect();
        assert_eq!(lines, ["line 2", "line 3", "line 4", "line 5", "line 6"]);
    }

    #[test]
    fn history_clear_empties_it() {
        let mut history = CommandHistory::default();
        history.push("/stats");
        history.clear();
        assert!(history.is_empty());
    }
}
