//! commit-wizard - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commit_wizard::config::{StandaloneOptions, build_standalone_config};
use commit_wizard::git::{commit_staged, open_repository};
use commit_wizard::host::{JsonLinesSink, JsonLinesSource};
use commit_wizard::prompt::TerminalPrompter;
use commit_wizard::session::{run_host_session, run_local_session};

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV_VAR: &str = "COMMIT_WIZARD_LOG";

/// Build a reviewed, single-line commit message step by step.
#[derive(Parser, Debug)]
#[command(name = "commit-wizard")]
#[command(about = "Build a reviewed, single-line commit message step by step")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run under a host application, exchanging JSON lines on stdin/stdout.
    ///
    /// Prompts render on stderr, so the host must leave stderr attached to a
    /// terminal.
    Host,

    /// Run without a host, configured from flags or a file
    Run {
        /// JSON file shaped like the host's init data: {"reviewers": [...], "prefix": "..."}
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Reviewer as "Display Name=value" or "value" (repeatable)
        #[arg(short, long = "reviewer")]
        reviewers: Vec<String>,

        /// Issue tracker prefix (falls back to COMMIT_WIZARD_PREFIX)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Commit the staged changes instead of printing the message
        #[arg(long)]
        commit: bool,

        /// Repository to commit to
        #[arg(long, default_value = ".")]
        repo: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Host => run_host().await,
        Command::Run {
            config,
            reviewers,
            prefix,
            commit,
            repo,
        } => {
            let options = StandaloneOptions {
                config_file: config,
                reviewers,
                prefix,
            };
            run_standalone(&options, commit.then_some(repo))
        }
    }
}

/// Log to stderr so stdout stays free for the host protocol and the message.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_host() -> Result<()> {
    let mut prompter = TerminalPrompter::attended().context("Cannot prompt in host mode")?;
    let mut source = JsonLinesSource::stdin();
    let mut sink = JsonLinesSink::stdout();

    run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .context("Host session failed")?;

    Ok(())
}

fn run_standalone(options: &StandaloneOptions, commit_to: Option<PathBuf>) -> Result<()> {
    let config = build_standalone_config(options).context("Invalid configuration")?;
    let mut prompter = TerminalPrompter::attended().context("Cannot prompt")?;

    let message = run_local_session(config, &mut prompter).context("Questionnaire failed")?;

    match commit_to {
        Some(path) => {
            let repo = open_repository(&path)
                .context("Not a git repository. Use --repo to point at one.")?;
            let oid = commit_staged(&repo, &message).context("Failed to commit")?;
            info!("Committed {}", oid);
            eprintln!("✓ Committed {}", oid);
        }
        None => println!("{}", message),
    }

    Ok(())
}
