// file: src/models/selection.rs
// description: ordered, duplicate-free subset of repositories picked in one run
// reference: internal data structures

use crate::models::Repository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    repositories: Vec<Repository>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every available repository, in listing order.
    pub fn all(available: &[Repository]) -> Self {
        let mut selection = Self::new();
        for repo in available {
            selection.insert(repo.clone());
        }
        selection
    }

    /// Returns false when the repository was already selected.
    pub fn insert(&mut self, repo: Repository) -> bool {
        if self.contains(&repo) {
            return false;
        }
        self.repositories.push(repo);
        true
    }

    pub fn contains(&self, repo: &Repository) -> bool {
        self.repositories
            .iter()
            .any(|selected| selected.full_name == repo.full_name)
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Repository> {
        self.repositories.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.repositories.iter().map(|r| r.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Repository;
    type IntoIter = std::slice::Iter<'a, Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> Repository {
        Repository::new(name, format!("student/{}", name), false)
    }

    #[test]
    fn test_insert_collapses_duplicates() {
        let mut selection = Selection::new();
        assert!(selection.insert(repo("libft")));
        assert!(selection.insert(repo("pipex")));
        assert!(!selection.insert(repo("libft")));

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.names(), vec!["libft", "pipex"]);
    }

    #[test]
    fn test_all_preserves_order() {
        let available = vec![repo("so_long"), repo("fdf"), repo("minitalk")];
        let selection = Selection::all(&available);
        let collected: Vec<Repository> = selection.iter().cloned().collect();
        assert_eq!(collected, available);
    }
}
