// file: src/repository/classifier.rs
// description: name-based detection of 42 curriculum repositories
// reference: substring, prefix and suffix matching against static tables

use crate::config::ClassifierConfig;
use crate::models::Repository;
use crate::repository::patterns::{NORMALIZED_PATTERNS, PROJECT_SUFFIXES, SCHOOL_MARKER};
use std::fmt;

/// Why a repository name was recognised as coursework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    SchoolMarker,
    Prefix(String),
    Contains(String),
    Suffix(String),
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchoolMarker => write!(f, "contains '{}'", SCHOOL_MARKER),
            Self::Prefix(p) => write!(f, "starts with '{}'", p),
            Self::Contains(p) => write!(f, "contains '{}'", p),
            Self::Suffix(s) => write!(f, "ends with '{}'", s),
        }
    }
}

pub struct ProjectClassifier {
    extra_patterns: Vec<String>,
    extra_suffixes: Vec<String>,
}

impl ProjectClassifier {
    pub fn new(extra_patterns: Vec<String>, extra_suffixes: Vec<String>) -> Self {
        Self {
            extra_patterns: normalize(extra_patterns),
            extra_suffixes: normalize(extra_suffixes),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(
            config.extra_patterns.clone(),
            config.extra_suffixes.clone(),
        )
    }

    pub fn is_curriculum_project(&self, name: &str) -> bool {
        self.matched_rule(name).is_some()
    }

    /// First rule that matches, checked in order: marker, patterns, suffixes.
    pub fn matched_rule(&self, name: &str) -> Option<MatchRule> {
        let name = name.to_lowercase();

        if name.contains(SCHOOL_MARKER) {
            return Some(MatchRule::SchoolMarker);
        }

        let patterns = NORMALIZED_PATTERNS.iter().chain(self.extra_patterns.iter());
        for pattern in patterns {
            if name.starts_with(pattern.as_str()) {
                return Some(MatchRule::Prefix(pattern.clone()));
            }
            if name.contains(pattern.as_str()) {
                return Some(MatchRule::Contains(pattern.clone()));
            }
        }

        let suffixes = PROJECT_SUFFIXES
            .iter()
            .map(|s| s.to_string())
            .chain(self.extra_suffixes.iter().cloned());
        for suffix in suffixes {
            if name.ends_with(suffix.as_str()) {
                return Some(MatchRule::Suffix(suffix));
            }
        }

        None
    }

    /// Keeps the repositories whose names classify as coursework, in input order.
    pub fn filter<'a, I>(&self, repositories: I) -> Vec<Repository>
    where
        I: IntoIterator<Item = &'a Repository>,
    {
        repositories
            .into_iter()
            .filter(|repo| self.is_curriculum_project(&repo.name))
            .cloned()
            .collect()
    }
}

impl Default for ProjectClassifier {
    fn default() -> Self {
        Self::new(vec![], vec![])
    }
}

// An empty pattern would match every name.
fn normalize(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_school_marker_any_case() {
        let classifier = ProjectClassifier::default();

        assert!(classifier.is_curriculum_project("random42project"));
        assert!(classifier.is_curriculum_project("Ecole42"));
        assert!(classifier.is_curriculum_project("42"));
        assert_eq!(
            classifier.matched_rule("something-42"),
            Some(MatchRule::SchoolMarker)
        );
    }

    #[test]
    fn test_known_projects() {
        let classifier = ProjectClassifier::default();

        for name in [
            "libft",
            "ft_printf",
            "Get_Next_Line",
            "push_swap",
            "Philosophers",
            "cub3D",
            "miniRT",
            "webserv",
            "ft_transcendence",
            "Born2beRoot",
            "exam-rank-03",
        ] {
            assert!(classifier.is_curriculum_project(name), "{} should match", name);
        }
    }

    #[test]
    fn test_prefix_and_substring_rules() {
        let classifier = ProjectClassifier::default();

        assert_eq!(
            classifier.matched_rule("libft"),
            Some(MatchRule::Prefix("libft".to_string()))
        );
        assert_eq!(
            classifier.matched_rule("my-awesome-pipex"),
            Some(MatchRule::Contains("pipex".to_string()))
        );
    }

    #[test]
    fn test_unrelated_names() {
        let classifier = ProjectClassifier::default();

        assert!(!classifier.is_curriculum_project("my-portfolio-site"));
        assert!(!classifier.is_curriculum_project("dotfiles"));
        assert!(!classifier.is_curriculum_project("blog"));
        assert!(!classifier.is_curriculum_project(""));
    }

    #[test]
    fn test_extra_rules_from_config() {
        let config = ClassifierConfig {
            extra_patterns: vec!["Dotfiles".to_string(), "  ".to_string()],
            extra_suffixes: vec!["-campus".to_string()],
        };
        let classifier = ProjectClassifier::from_config(&config);

        assert_eq!(
            classifier.matched_rule("dotfiles"),
            Some(MatchRule::Prefix("dotfiles".to_string()))
        );
        assert_eq!(
            classifier.matched_rule("notes-campus"),
            Some(MatchRule::Suffix("-campus".to_string()))
        );
        assert!(!classifier.is_curriculum_project("blog"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let classifier = ProjectClassifier::default();
        let repos = vec![
            Repository::new("so_long", "me/so_long", false),
            Repository::new("blog", "me/blog", false),
            Repository::new("libft", "me/libft", true),
        ];

        let names: Vec<String> = classifier
            .filter(&repos)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["so_long", "libft"]);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(MatchRule::SchoolMarker.to_string(), "contains '42'");
        assert_eq!(
            MatchRule::Suffix("_42".to_string()).to_string(),
            "ends with '_42'"
        );
    }
}
