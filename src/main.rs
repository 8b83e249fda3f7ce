//! Renamr CLI application entry point
//!
//! Collects the files named on the command line, shows the rename plan and
//! lets the operator adjust it before anything on disk changes.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session over every jpg in the folder
//! renamr '*.jpg' -p '{i}_{o}'
//!
//! # Scripted: set a pattern, reverse the order, then confirm
//! renamr a.txt b.txt -c p '{i}.{e}' r 3
//!
//! # Rename through temporary names so swapped names cannot collide
//! renamr a.txt b.txt --staged -c p '{cba}'
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory
//! (`~/.config/renamr/config.toml` on Linux). Logging is controlled with
//! `RENAMR_LOG` or `-v`.

use renamr::{
    RenamrError,
    cli::Cli,
    commands::PromptHandler,
    config::RenamrConfig,
    fs::StdFilesystem,
    session::{CommitStrategy, Outcome, Session},
    ui::{DialoguerInput, OutputWriter, ScriptedInput, StdoutWriter},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, RenamrError>;

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RENAMR_LOG").unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print what a finished session did
fn report(output: &impl OutputWriter, outcome: &Outcome) {
    match outcome {
        Outcome::Committed(report) => {
            for rename in &report.renamed {
                output.info(&format!(
                    "{} -> {}",
                    rename.from.display(),
                    rename.to.display()
                ));
            }
            output.success(&format!("Renamed {} file(s)", report.renamed.len()));
        }
        Outcome::Aborted => output.info("Aborted, no file renamed."),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let config = RenamrConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not load configuration, using defaults");
        RenamrConfig::default()
    });

    let pattern = match &cli.pattern {
        Some(pattern) => pattern.clone(),
        None => config.pattern()?,
    };
    let strategy = if cli.staged {
        CommitStrategy::Staged
    } else {
        config.commit
    };
    let files = cli.expand_files();
    tracing::debug!(files = files.len(), %pattern, ?strategy, "starting");

    let mut session = Session::new(StdFilesystem, pattern, files).with_commit_strategy(strategy);

    let outcome = if let Some(commands) = cli.commands {
        let output = StdoutWriter::new(true);
        if commands.is_empty() {
            output.warning("No command received.");
        }
        let mut handler = PromptHandler::new(ScriptedInput::new(commands), output);
        session.interact(&mut handler)?
    } else {
        let output = StdoutWriter::new(cli.quiet || config.quiet);
        let mut handler =
            PromptHandler::new(DialoguerInput::new(), output).with_confirmation(config.confirm);
        let outcome = session.interact(&mut handler)?;
        report(&output, &outcome);
        outcome
    };

    tracing::debug!(?outcome, "session finished");
    Ok(())
}
