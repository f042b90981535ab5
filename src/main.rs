// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use ft_visibility::{
    Config, GithubClient, ProjectClassifier, Prompter, Session, SessionOutcome, VisibilityError,
    config::TOKEN_ENV,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "ft_visibility")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Find 42 school projects on GitHub and batch-toggle their visibility", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Wait for Enter before exiting
    #[arg(long, action = ArgAction::SetTrue)]
    pause: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick 42 projects and make them private or public (default)
    Run,

    /// Show detected 42 projects and their visibility without changing anything
    List,

    /// Check repository names against the 42 project rules, offline
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    ft_visibility::utils::logging::init_logger(cli.color, cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            report_failure(&e);
            if cli.pause {
                pause_for_enter();
            }
            return ExitCode::FAILURE;
        }
    };
    let pause = cli.pause || config.ui.pause_on_exit;

    let code = match dispatch(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    };

    if pause {
        pause_for_enter();
    }

    code
}

fn pause_for_enter() {
    println!();
    Prompter::new(io::stdin().lock(), io::stdout()).pause().ok();
}

fn load_config(cli: &Cli) -> Result<Config> {
    debug!("Loading configuration from: {}", cli.config.display());

    Config::load_or_default(&cli.config).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config.display()
        )
    })
}

async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Run) => cmd_run(cli, config).await,
        Some(Commands::List) => cmd_list(cli, config).await,
        Some(Commands::Classify { names }) => cmd_classify(config, names),
    }
}

fn print_banner() {
    println!("42 Project Visibility Tool v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(40));
    println!();
}

fn connect(config: &Config) -> Result<GithubClient> {
    let token = config.resolve_token()?;
    GithubClient::new(&config.github, &token).context("Failed to create GitHub client")
}

fn show_progress(cli: &Cli) -> bool {
    cli.color && io::stderr().is_terminal()
}

async fn cmd_run(cli: &Cli, config: &Config) -> Result<()> {
    print_banner();

    let client = connect(config)?;
    let classifier = ProjectClassifier::from_config(&config.classifier);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    let mut session =
        Session::new(&client, &classifier, prompter).with_progress(show_progress(cli), cli.color);
    let outcome = session.run().await.context("Failed to process repositories")?;

    match outcome {
        SessionOutcome::Completed(batch) => info!(
            "Run complete: {}/{} updated ({:.0}%)",
            batch.succeeded,
            batch.attempted,
            batch.success_rate()
        ),
        other => debug!("Run ended without changes: {:?}", other),
    }

    Ok(())
}

async fn cmd_list(cli: &Cli, config: &Config) -> Result<()> {
    print_banner();

    let client = connect(config)?;
    let classifier = ProjectClassifier::from_config(&config.classifier);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    let mut session =
        Session::new(&client, &classifier, prompter).with_progress(show_progress(cli), cli.color);
    let projects = session.list().await.context("Failed to list repositories")?;

    debug!("Listed {} projects", projects.len());
    Ok(())
}

fn cmd_classify(config: &Config, names: &[String]) -> Result<()> {
    let classifier = ProjectClassifier::from_config(&config.classifier);
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);

    for name in names {
        match classifier.matched_rule(name) {
            Some(rule) => println!("{:<width$}  42 project ({})", name, rule, width = width),
            None => println!("{:<width$}  not a 42 project", name, width = width),
        }
    }

    Ok(())
}

fn report_failure(error: &anyhow::Error) {
    use ft_visibility::utils::format_error;

    match error.downcast_ref::<VisibilityError>() {
        Some(VisibilityError::MissingToken) => {
            eprintln!("{}", format_error(&format!("{} environment variable not set", TOKEN_ENV)));
            eprintln!();
            eprintln!("Setup instructions:");
            eprintln!("   1. Go to: https://github.com/settings/tokens");
            eprintln!("   2. Generate a token with 'repo' scope");
            eprintln!("   3. Set environment variable:");
            eprintln!("      Linux/Mac: export {}=your_token_here", TOKEN_ENV);
            eprintln!("      Windows:   set {}=your_token_here", TOKEN_ENV);
        }
        Some(e) if e.is_remote() => {
            eprintln!("\n{}", format_error(&format!("{:#}", error)));
            eprintln!("\nTroubleshooting:");
            eprintln!("   • Check your internet connection");
            eprintln!("   • Verify your GitHub token is valid");
            eprintln!("   • Ensure the token has 'repo' scope permissions");
        }
        _ => {
            eprintln!("\n{}", format_error(&format!("{:#}", error)));
        }
    }
}
