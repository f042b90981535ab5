// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod repository;
pub mod selection;

pub use repository::{Repository, Visibility};
pub use selection::Selection;
