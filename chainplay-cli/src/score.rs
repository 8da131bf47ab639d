//! Score command implementation for the CHAINPLAY CLI.

use camino::Utf8PathBuf;
use chainplay_core::{MatchProfile, Matcher};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CANDIDATE, ARG_SUBJECT, ARG_WEIGHTS, CliError, ENV_SCORE_CANDIDATE, ENV_SCORE_SUBJECT,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a single candidate against a subject profile. Both \
                 profiles are provided as JSON files; optional category \
                 weights override the built-in defaults.",
    about = "Score one candidate against a subject profile"
)]
#[ortho_config(prefix = "CHAINPLAY")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the subject profile.
    #[arg(long = ARG_SUBJECT, value_name = "path")]
    #[serde(default)]
    pub(crate) subject: Option<Utf8PathBuf>,
    /// Path to a JSON file containing the candidate profile.
    #[arg(long = ARG_CANDIDATE, value_name = "path")]
    #[serde(default)]
    pub(crate) candidate: Option<Utf8PathBuf>,
    /// Path to a JSON file overriding the category weights.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreConfig {
    subject: Utf8PathBuf,
    candidate: Utf8PathBuf,
    weights: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        crate::require_existing(&self.subject, ARG_SUBJECT)?;
        crate::require_existing(&self.candidate, ARG_CANDIDATE)?;
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let subject = args.subject.ok_or(CliError::MissingArgument {
            field: ARG_SUBJECT,
            env: ENV_SCORE_SUBJECT,
        })?;
        let candidate = args.candidate.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATE,
            env: ENV_SCORE_CANDIDATE,
        })?;
        Ok(Self {
            subject,
            candidate,
            weights: args.weights,
        })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let subject: MatchProfile = crate::load_json(&config.subject)?;
    let candidate: MatchProfile = crate::load_json(&config.candidate)?;
    let matcher = crate::build_matcher(config.weights.as_deref())?;
    let result = matcher.score(&subject, &candidate);
    crate::write_json(writer, &result)
}
