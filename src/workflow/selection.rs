// file: src/workflow/selection.rs
// description: parsing of menu choices and repository selection lines

use crate::models::{Repository, Selection, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MakePrivate,
    MakePublic,
    Exit,
}

impl Action {
    /// Target visibility, `None` for exit.
    pub fn target(self) -> Option<Visibility> {
        match self {
            Self::MakePrivate => Some(Visibility::Private),
            Self::MakePublic => Some(Visibility::Public),
            Self::Exit => None,
        }
    }
}

pub fn parse_action(input: &str) -> Option<Action> {
    match input.trim() {
        "1" => Some(Action::MakePrivate),
        "2" => Some(Action::MakePublic),
        "3" => Some(Action::Exit),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInput {
    /// Blank line: keep the current selection and move on.
    Commit,
    All,
    /// Integer tokens as typed; range checks happen against the available list.
    Numbers(Vec<String>),
}

/// Returns the offending token when the line is neither blank, `all`, nor numbers.
pub fn parse_selection_input(line: &str) -> Result<SelectionInput, String> {
    let line = line.trim().to_lowercase();

    if line.is_empty() {
        return Ok(SelectionInput::Commit);
    }

    if line == "all" {
        return Ok(SelectionInput::All);
    }

    line.split_whitespace()
        .map(|token| {
            if is_integer(token) {
                Ok(token.to_string())
            } else {
                Err(token.to_string())
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(SelectionInput::Numbers)
}

// Optional sign then digits, of any length.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Builds a selection from 1-based numbers; out-of-range numbers are returned separately.
/// Numbers too large for `usize` are simply out of range.
pub fn apply_numbers(numbers: &[String], available: &[Repository]) -> (Selection, Vec<String>) {
    let mut selection = Selection::new();
    let mut invalid = Vec::new();

    for number in numbers {
        match number.parse::<usize>() {
            Ok(n) if (1..=available.len()).contains(&n) => {
                selection.insert(available[n - 1].clone());
            }
            _ => invalid.push(number.clone()),
        }
    }

    (selection, invalid)
}
