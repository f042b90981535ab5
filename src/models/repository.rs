// file: src/models/repository.rs
// description: repository record as returned by the GitHub REST API
// reference: https://docs.github.com/en/rest/repos/repos

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub private: bool,
}

impl Repository {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>, private: bool) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            private,
        }
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_private(self.private)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_private(private: bool) -> Self {
        if private {
            Self::Private
        } else {
            Self::Public
        }
    }

    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }

    /// The visibility a repository must currently have to be a candidate for `self`.
    pub fn opposite(self) -> Self {
        match self {
            Self::Public => Self::Private,
            Self::Private => Self::Public,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 1296269,
            "name": "libft",
            "full_name": "octocat/libft",
            "private": false,
            "html_url": "https://github.com/octocat/libft",
            "fork": false
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo, Repository::new("libft", "octocat/libft", false));
        assert_eq!(repo.visibility(), Visibility::Public);
    }

    #[test]
    fn test_visibility_helpers() {
        assert!(Visibility::Private.is_private());
        assert!(!Visibility::Public.is_private());
        assert_eq!(Visibility::Private.opposite(), Visibility::Public);
        assert_eq!(Visibility::Public.to_string(), "public");
    }
}
