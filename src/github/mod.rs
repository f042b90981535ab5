// file: src/github/mod.rs
// description: GitHub REST API access module exports
// reference: internal module structure

pub mod client;
pub mod fetcher;

pub use client::GithubClient;
pub use fetcher::{RepositoryHost, fetch_all_repositories, fetch_all_repositories_with};
