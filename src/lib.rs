// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod repository;
pub mod utils;
pub mod workflow;

pub use config::{ClassifierConfig, Config, GithubConfig, UiConfig};
pub use error::{Result, VisibilityError};
pub use github::{GithubClient, RepositoryHost, fetch_all_repositories};
pub use models::{Repository, Selection, Visibility};
pub use repository::{MatchRule, ProjectClassifier};
pub use workflow::{BatchOutcome, Prompter, Session, SessionOutcome};
