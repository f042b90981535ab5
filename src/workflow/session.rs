// file: src/workflow/session.rs
// description: drives one interactive run from fetch to visibility updates
// reference: sequential fetch, filter, select, confirm and apply steps

use crate::error::Result;
use crate::github::{RepositoryHost, fetch_all_repositories_with};
use crate::models::{Repository, Selection, Visibility};
use crate::repository::ProjectClassifier;
use crate::utils::{
    format_error, format_info, format_step, format_success, format_visibility, format_warning,
};
use crate::workflow::progress::{BatchOutcome, FetchSpinner};
use crate::workflow::prompt::Prompter;
use crate::workflow::selection::{
    Action, SelectionInput, apply_numbers, parse_action, parse_selection_input,
};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How a run ended. Only `Completed` means visibility changes were attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    NoProjects,
    NothingAvailable(Visibility),
    Exited,
    NothingSelected,
    Cancelled,
    Completed(BatchOutcome),
}

pub struct Session<'a, H, R, W> {
    host: &'a H,
    classifier: &'a ProjectClassifier,
    prompter: Prompter<R, W>,
    show_progress: bool,
    colored: bool,
}

impl<'a, H, R, W> Session<'a, H, R, W>
where
    H: RepositoryHost,
    R: BufRead,
    W: Write,
{
    pub fn new(host: &'a H, classifier: &'a ProjectClassifier, prompter: Prompter<R, W>) -> Self {
        Self {
            host,
            classifier,
            prompter,
            show_progress: false,
            colored: false,
        }
    }

    pub fn with_progress(mut self, enabled: bool, colored: bool) -> Self {
        self.show_progress = enabled;
        self.colored = colored;
        self
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    pub async fn run(&mut self) -> Result<SessionOutcome> {
        let projects = self.fetch_projects().await?;

        if projects.is_empty() {
            self.report_no_projects()?;
            return Ok(SessionOutcome::NoProjects);
        }

        self.show_projects(&projects)?;

        let Some(target) = self.choose_action()?.target() else {
            self.prompter.say("Goodbye!")?;
            return Ok(SessionOutcome::Exited);
        };

        let current = target.opposite();
        let available: Vec<Repository> = projects
            .into_iter()
            .filter(|repo| repo.visibility() == current)
            .collect();

        if available.is_empty() {
            self.prompter.say(format_warning(&format!(
                "No {} 42 projects found to make {}!",
                current, target
            )))?;
            return Ok(SessionOutcome::NothingAvailable(target));
        }

        let selection = self.select(&available, target)?;

        if selection.is_empty() {
            self.prompter.say("No repositories selected. Exiting.")?;
            return Ok(SessionOutcome::NothingSelected);
        }

        if !self.confirm(&selection, target)? {
            self.prompter.say("Operation cancelled - no changes made")?;
            return Ok(SessionOutcome::Cancelled);
        }

        let outcome = self.apply(&selection, target).await?;
        Ok(SessionOutcome::Completed(outcome))
    }

    /// Fetches and displays the detected projects without changing anything.
    pub async fn list(&mut self) -> Result<Vec<Repository>> {
        let projects = self.fetch_projects().await?;

        if projects.is_empty() {
            self.report_no_projects()?;
        } else {
            self.show_projects(&projects)?;
        }

        Ok(projects)
    }

    async fn fetch_projects(&mut self) -> Result<Vec<Repository>> {
        self.prompter.say("Fetching repositories...")?;

        let spinner = FetchSpinner::new(self.show_progress, self.colored);
        let repositories =
            fetch_all_repositories_with(self.host, |page, total| spinner.page_loaded(page, total))
                .await?;
        spinner.finish(repositories.len());

        let projects = self.classifier.filter(&repositories);
        info!(
            "Fetched {} repositories, {} look like 42 projects",
            repositories.len(),
            projects.len()
        );

        for project in &projects {
            if let Some(rule) = self.classifier.matched_rule(&project.name) {
                debug!("{} matched: {}", project.name, rule);
            }
        }

        Ok(projects)
    }

    fn report_no_projects(&mut self) -> Result<()> {
        self.prompter
            .say(format_warning("No 42 projects found in your repositories"))?;
        self.prompter
            .say("Searched for common project names and '42' in repository names")
    }

    fn show_projects(&mut self, projects: &[Repository]) -> Result<()> {
        self.prompter
            .say(format!("\nFound {} 42 projects:", projects.len()))?;
        self.prompter.say("-".repeat(60))?;
        self.prompter.say("")?;

        for (idx, repo) in projects.iter().enumerate() {
            self.prompter.say(format!(
                "{:2}. {:<25} {}",
                idx + 1,
                repo.name,
                format_visibility(repo.private)
            ))?;
        }

        let public = projects.iter().filter(|r| !r.private).count();
        let private = projects.len() - public;
        self.prompter
            .say(format!("\nSummary: {} public, {} private", public, private))
    }

    fn choose_action(&mut self) -> Result<Action> {
        self.prompter.say("\nWhat would you like to do?")?;
        self.prompter.say("   1. Make repositories private")?;
        self.prompter.say("   2. Make repositories public")?;
        self.prompter.say("   3. Exit")?;

        loop {
            let Some(answer) = self.prompter.ask("\nChoose action (1/2/3): ")? else {
                return Ok(Action::Exit);
            };

            match parse_action(&answer) {
                Some(action) => return Ok(action),
                None => self.prompter.say("Invalid choice. Enter 1, 2, or 3")?,
            }
        }
    }

    fn select(&mut self, available: &[Repository], target: Visibility) -> Result<Selection> {
        let current = target.opposite();

        self.prompter
            .say(format!("\nSelect repositories to make {}:", target))?;
        self.prompter
            .say(format!("   Available {} repositories:\n", current))?;

        for (idx, repo) in available.iter().enumerate() {
            self.prompter.say(format!(
                "   {:2}. {:<25} {}",
                idx + 1,
                repo.name,
                format_visibility(repo.private)
            ))?;
        }

        self.prompter
            .say("\n   Enter numbers separated by spaces (e.g., '1 3 5')")?;
        self.prompter
            .say(format!("   Enter 'all' to select all {} repositories", current))?;
        self.prompter.say("   Press Enter to skip")?;

        let question = format!(
            "\nSelect repositories (1-{}, 'all', or Enter to continue): ",
            available.len()
        );
        let mut selection = Selection::new();

        loop {
            if !selection.is_empty() {
                self.prompter.say(format!(
                    "\nCurrently selected: {}",
                    selection.names().join(", ")
                ))?;
            }

            let Some(line) = self.prompter.ask(&question)? else {
                break;
            };

            match parse_selection_input(&line) {
                Ok(SelectionInput::Commit) => break,
                Ok(SelectionInput::All) => {
                    selection = Selection::all(available);
                    self.prompter.say(format!(
                        "Selected all {} {} repositories",
                        selection.len(),
                        current
                    ))?;
                    break;
                }
                Ok(SelectionInput::Numbers(numbers)) => {
                    let (chosen, invalid) = apply_numbers(&numbers, available);

                    for number in invalid {
                        self.prompter.say(format!(
                            "Invalid number: {} (valid range: 1-{})",
                            number,
                            available.len()
                        ))?;
                    }

                    selection = chosen;
                    if selection.is_empty() {
                        self.prompter.say("No valid repositories selected")?;
                    } else {
                        self.prompter
                            .say(format!("Selected: {}", selection.names().join(", ")))?;
                    }
                }
                Err(token) => {
                    debug!("Rejected selection token: {}", token);
                    self.prompter.say(
                        "Invalid input. Enter numbers separated by spaces, 'all', or press Enter",
                    )?;
                }
            }
        }

        Ok(selection)
    }

    fn confirm(&mut self, selection: &Selection, target: Visibility) -> Result<bool> {
        self.prompter.say(format!(
            "\nWill make these {} repositories {}:",
            selection.len(),
            target
        ))?;
        for repo in selection {
            self.prompter.say(format!("   • {}", repo.name))?;
        }

        let answer = self.prompter.ask(&format!(
            "\nProceed with making {} repositories {}? (y/N): ",
            selection.len(),
            target
        ))?;

        Ok(matches!(
            answer.map(|a| a.to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    async fn apply(&mut self, selection: &Selection, target: Visibility) -> Result<BatchOutcome> {
        let total = selection.len();
        self.prompter.say(format_info(&format!(
            "Making {} repositories {}...\n",
            total, target
        )))?;

        let mut outcome = BatchOutcome::new();

        for (idx, repo) in selection.iter().enumerate() {
            self.prompter.say_inline(format!(
                "   {} ",
                format_step(idx + 1, total, &format!("Processing {}...", repo.name))
            ))?;

            let ok = self.host.set_visibility(&repo.full_name, target).await;
            outcome.record(ok);

            if ok {
                self.prompter.say(format_success("Done"))?;
            } else {
                self.prompter.say(format_error("Failed"))?;
            }
        }

        info!(
            "Visibility update finished: {}/{} succeeded",
            outcome.succeeded, outcome.attempted
        );

        self.prompter.say(format!(
            "\nCompleted! {}/{} repositories made {}",
            outcome.succeeded, outcome.attempted, target
        ))?;

        if !outcome.all_succeeded() {
            self.prompter.say(format_warning(&format!(
                "Warning: {} repositories failed (check permissions)",
                outcome.failed
            )))?;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fetcher::tests::FakeHost;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn repo(name: &str, private: bool) -> Repository {
        Repository::new(name, format!("student/{}", name), private)
    }

    fn sample_host() -> FakeHost {
        FakeHost::with_single_page(vec![
            repo("libft", false),
            repo("blog", false),
            repo("pipex", false),
            repo("so_long", true),
            repo("dotfiles", true),
        ])
    }

    async fn run_with(host: &FakeHost, input: &str) -> (SessionOutcome, String) {
        let classifier = ProjectClassifier::default();
        let prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let mut session = Session::new(host, &classifier, prompter);

        let outcome = session.run().await.unwrap();
        let output = String::from_utf8(session.into_prompter().into_output()).unwrap();
        (outcome, output)
    }

    fn patched(host: &FakeHost) -> Vec<(String, Visibility)> {
        host.patches.borrow().clone()
    }

    #[tokio::test]
    async fn test_declined_confirmation_changes_nothing() {
        let host = sample_host();

        let (outcome, output) = run_with(&host, "1\nall\nn\n").await;

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert!(patched(&host).is_empty());
        assert!(output.contains("Operation cancelled"));
    }

    #[tokio::test]
    async fn test_confirmed_batch_patches_each_selected_once() {
        let host = sample_host();

        let (outcome, output) = run_with(&host, "1\n1 2 2\n\ny\n").await;

        assert_eq!(
            outcome,
            SessionOutcome::Completed(BatchOutcome {
                attempted: 2,
                succeeded: 2,
                failed: 0,
            })
        );
        assert_eq!(
            patched(&host),
            vec![
                ("student/libft".to_string(), Visibility::Private),
                ("student/pipex".to_string(), Visibility::Private),
            ]
        );
        assert!(output.contains("Completed! 2/2 repositories made private"));
    }

    #[tokio::test]
    async fn test_failed_update_does_not_stop_batch() {
        let host = sample_host().rejecting("student/libft");

        let (outcome, output) = run_with(&host, "1\nall\nyes\n").await;

        assert_eq!(
            outcome,
            SessionOutcome::Completed(BatchOutcome {
                attempted: 2,
                succeeded: 1,
                failed: 1,
            })
        );
        assert_eq!(patched(&host).len(), 2);
        assert!(output.contains("1 repositories failed"));
    }

    #[tokio::test]
    async fn test_invalid_action_reprompts() {
        let host = sample_host();

        let (outcome, output) = run_with(&host, "9\nabc\n2\nall\nY\n").await;

        assert_eq!(
            patched(&host),
            vec![("student/so_long".to_string(), Visibility::Public)]
        );
        assert!(matches!(outcome, SessionOutcome::Completed(_)));
        assert_eq!(output.matches("Invalid choice").count(), 2);
    }

    #[tokio::test]
    async fn test_exit_action() {
        let host = sample_host();

        let (outcome, _) = run_with(&host, "3\n").await;

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(patched(&host).is_empty());
    }

    #[tokio::test]
    async fn test_no_projects_found() {
        let host = FakeHost::with_single_page(vec![repo("blog", false), repo("notes", true)]);

        let (outcome, output) = run_with(&host, "").await;

        assert_eq!(outcome, SessionOutcome::NoProjects);
        assert!(output.contains("No 42 projects found"));
    }

    #[tokio::test]
    async fn test_nothing_available_for_action() {
        let host = FakeHost::with_single_page(vec![repo("libft", true), repo("fdf", true)]);

        let (outcome, _) = run_with(&host, "1\n").await;

        assert_eq!(outcome, SessionOutcome::NothingAvailable(Visibility::Private));
    }

    #[tokio::test]
    async fn test_empty_selection_exits() {
        let host = sample_host();

        let (outcome, _) = run_with(&host, "1\n\n").await;

        assert_eq!(outcome, SessionOutcome::NothingSelected);
        assert!(patched(&host).is_empty());
    }

    #[tokio::test]
    async fn test_malformed_line_keeps_previous_selection() {
        let host = sample_host();

        let (_, output) = run_with(&host, "1\n2\n2 x\n\ny\n").await;

        assert_eq!(
            patched(&host),
            vec![("student/pipex".to_string(), Visibility::Private)]
        );
        assert!(output.contains("Invalid input."));
    }

    #[tokio::test]
    async fn test_new_line_replaces_selection() {
        let host = sample_host();

        let (outcome, output) = run_with(&host, "1\n1\n7\n\n").await;

        assert_eq!(outcome, SessionOutcome::NothingSelected);
        assert!(output.contains("Invalid number: 7 (valid range: 1-2)"));
    }

    #[tokio::test]
    async fn test_overlong_number_is_out_of_range() {
        let host = sample_host();

        let (outcome, output) = run_with(&host, "1\n2\n99999999999999999999\n\n").await;

        assert_eq!(outcome, SessionOutcome::NothingSelected);
        assert!(output.contains("Invalid number: 99999999999999999999 (valid range: 1-2)"));
        assert!(!output.contains("Invalid input."));
    }

    #[tokio::test]
    async fn test_end_of_input_cancels() {
        let host = sample_host();

        let (outcome, _) = run_with(&host, "1\nall\n").await;

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert!(patched(&host).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_aborts_run() {
        let host = sample_host().failing_on(1);
        let classifier = ProjectClassifier::default();
        let prompter = Prompter::new(Cursor::new("1\nall\ny\n"), Vec::new());
        let mut session = Session::new(&host, &classifier, prompter);

        assert!(session.run().await.is_err());
        assert!(patched(&host).is_empty());
    }

    #[tokio::test]
    async fn test_list_shows_projects_only() {
        let host = sample_host();
        let classifier = ProjectClassifier::default();
        let prompter = Prompter::new(Cursor::new(""), Vec::new());
        let mut session = Session::new(&host, &classifier, prompter);

        let projects = session.list().await.unwrap();
        let names: Vec<&str> = projects.iter().map(|r| r.name.as_str()).collect();
        let output = String::from_utf8(session.into_prompter().into_output()).unwrap();

        assert_eq!(names, vec!["libft", "pipex", "so_long"]);
        assert!(output.contains("Summary: 2 public, 1 private"));
        assert!(patched(&host).is_empty());
    }
}
