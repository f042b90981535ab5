// file: src/repository/mod.rs
// description: Repository classification module exports
// reference: Internal module structure

pub mod classifier;
pub mod patterns;

pub use classifier::{MatchRule, ProjectClassifier};
