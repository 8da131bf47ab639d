//! Command-line interface for scoring and ranking CHAINPLAY profiles.
//!
//! Profiles, standings, and stats live in the managed backend at runtime;
//! this tool works on JSON exports of the same records so matching policy
//! can be exercised and tuned offline.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;

use chainplay_match::{CategoryWeights, WeightedMatcher};

mod rank;
mod score;
mod tier;

pub(crate) const ARG_SUBJECT: &str = "subject";
pub(crate) const ARG_CANDIDATE: &str = "candidate";
pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_STATS: &str = "stats";
pub(crate) const ENV_SCORE_SUBJECT: &str = "CHAINPLAY_CMDS_SCORE_SUBJECT";
pub(crate) const ENV_SCORE_CANDIDATE: &str = "CHAINPLAY_CMDS_SCORE_CANDIDATE";
pub(crate) const ENV_RANK_SUBJECT: &str = "CHAINPLAY_CMDS_RANK_SUBJECT";
pub(crate) const ENV_RANK_CANDIDATES: &str = "CHAINPLAY_CMDS_RANK_CANDIDATES";
pub(crate) const ENV_TIER_STATS: &str = "CHAINPLAY_CMDS_TIER_STATS";

/// Run the CHAINPLAY CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// input loading, or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => score::run_score(args),
        Command::Rank(args) => rank::run_rank(args),
        Command::Tier(args) => tier::run_tier(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "chainplay",
    about = "Offline matching utilities for the CHAINPLAY engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one candidate against a subject profile.
    Score(score::ScoreArgs),
    /// Rank a list of candidates against a subject profile.
    Rank(rank::RankArgs),
    /// Derive a member tier from participation stats.
    Tier(tier::TierArgs),
}

/// Errors emitted by the CHAINPLAY CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI flag.
        field: &'static str,
        /// Environment variable that can also supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Flag the path was supplied for.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// Opening an input file failed.
    #[error("failed to open {path}")]
    OpenInput {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing an input file as JSON failed.
    #[error("failed to parse {path}")]
    ParseInput {
        /// Path holding the malformed payload.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Provided category weights were unusable.
    #[error(transparent)]
    InvalidWeights(#[from] chainplay_match::WeightsError),
    /// Serialising the output payload failed.
    #[error("failed to serialise output")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// Loads and parses a JSON-encoded value from disk.
pub(crate) fn load_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a value as pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize>(
    writer: &mut dyn Write,
    payload: &T,
) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(payload).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(text.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

/// Builds the matcher for a command invocation, loading weight overrides
/// when a path is given.
pub(crate) fn build_matcher(weights: Option<&Utf8Path>) -> Result<WeightedMatcher, CliError> {
    match weights {
        None => Ok(WeightedMatcher::new()),
        Some(path) => {
            require_existing(path, ARG_WEIGHTS)?;
            let overrides: CategoryWeights = load_json(path)?;
            Ok(WeightedMatcher::with_weights(overrides)?)
        }
    }
}
