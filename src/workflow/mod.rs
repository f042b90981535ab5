// file: src/workflow/mod.rs
// description: interactive fetch, select, confirm and update workflow
// reference: internal module structure

pub mod progress;
pub mod prompt;
pub mod selection;
pub mod session;

pub use progress::{BatchOutcome, FetchSpinner};
pub use prompt::Prompter;
pub use selection::{Action, SelectionInput, apply_numbers, parse_action, parse_selection_input};
pub use session::{Session, SessionOutcome};
