//! CLI for URL Guardian.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::config;
use crate::game::Difficulty;
use crate::store::Store;

pub use commands::{
    format_verdict, run_batch, run_challenge, run_check, run_history, run_learn, run_play,
    run_profile, BatchSummary,
};

/// Top-level CLI for URL Guardian.
#[derive(Debug, Parser)]
#[command(name = "url-guardian")]
#[command(about = "URL Guardian: spot phishing URLs and train your eye", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check one or more URLs and record them in the scan history.
    Check {
        /// URLs to check (must start with http:// or https://).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print verdicts as JSON, one document per line.
        #[arg(long)]
        json: bool,
    },

    /// Check every non-empty line of a file without recording history.
    Batch {
        /// File with one URL per line.
        path: PathBuf,
        /// Print a JSON array of results instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show recent scans.
    History {
        /// Forget all recorded scans.
        #[arg(long)]
        clear: bool,
    },

    /// Show profile statistics.
    Profile,

    /// Play the timed "find the invalid URL" quiz.
    Play {
        /// easy, medium or hard (defaults to the configured difficulty).
        #[arg(long, short)]
        difficulty: Option<Difficulty>,
    },

    /// List learning modules, or read one.
    Learn {
        /// Module id: phishing, social or browsing.
        module: Option<String>,
    },

    /// Show the daily challenge, or answer it by number or URL.
    Challenge {
        /// Option number (1-based) or the URL itself.
        answer: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().context("loading configuration")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let store = match &cfg.data_file {
            Some(path) => Store::at(path),
            None => Store::open_default()?,
        };
        let mut state = store
            .load(cfg.history_limit)
            .with_context(|| format!("loading saved data from {}", store.path().display()))?;
        let classifier = cfg.classifier();

        let stdout = io::stdout();
        let mut out = stdout.lock();

        let changed = match cli.command {
            CliCommand::Check { urls, json } => {
                run_check(&mut out, &mut state, &classifier, &urls, json)?;
                true
            }
            CliCommand::Batch { path, json } => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                run_batch(&mut out, &classifier, &contents, json)?;
                false
            }
            CliCommand::History { clear } => {
                run_history(&mut out, &mut state, clear)?;
                clear
            }
            CliCommand::Profile => {
                run_profile(&mut out, &state)?;
                false
            }
            CliCommand::Play { difficulty } => {
                let difficulty = difficulty.unwrap_or(cfg.default_difficulty);
                let stdin = io::stdin();
                run_play(&mut stdin.lock(), &mut out, &mut state, difficulty, cfg.stage_time_limit_secs)?;
                true
            }
            CliCommand::Learn { module } => {
                run_learn(&mut out, &mut state, module.as_deref())?;
                module.is_some()
            }
            CliCommand::Challenge { answer } => {
                run_challenge(&mut out, &mut state, answer.as_deref())?;
                answer.is_some()
            }
        };

        if changed {
            store.save(&state).context("saving data")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
