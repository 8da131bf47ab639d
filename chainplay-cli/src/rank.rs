//! Rank command implementation for the CHAINPLAY CLI.

use camino::Utf8PathBuf;
use chainplay_core::{MatchProfile, Matcher, RankedMatch};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CANDIDATES, ARG_SUBJECT, ARG_WEIGHTS, CliError, ENV_RANK_CANDIDATES, ENV_RANK_SUBJECT,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a list of candidates against a subject profile. The \
                 subject is a JSON profile and the candidates a JSON array \
                 of profiles; candidates come back ordered by descending \
                 score, with equal scores keeping their input order.",
    about = "Rank candidates against a subject profile"
)]
#[ortho_config(prefix = "CHAINPLAY")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the subject profile.
    #[arg(long = ARG_SUBJECT, value_name = "path")]
    #[serde(default)]
    pub(crate) subject: Option<Utf8PathBuf>,
    /// Path to a JSON file containing an array of candidate profiles.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Path to a JSON file overriding the category weights.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Emit only the best `count` candidates.
    #[arg(long = "top", value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RankConfig {
    subject: Utf8PathBuf,
    candidates: Utf8PathBuf,
    weights: Option<Utf8PathBuf>,
    top: Option<usize>,
}

impl RankConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        crate::require_existing(&self.subject, ARG_SUBJECT)?;
        crate::require_existing(&self.candidates, ARG_CANDIDATES)?;
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let subject = args.subject.ok_or(CliError::MissingArgument {
            field: ARG_SUBJECT,
            env: ENV_RANK_SUBJECT,
        })?;
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_RANK_CANDIDATES,
        })?;
        Ok(Self {
            subject,
            candidates,
            weights: args.weights,
            top: args.top,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let subject: MatchProfile = crate::load_json(&config.subject)?;
    let candidates: Vec<MatchProfile> = crate::load_json(&config.candidates)?;
    let matcher = crate::build_matcher(config.weights.as_deref())?;
    let ranked = matcher.rank(&subject, &candidates);
    let shortlist: Vec<&RankedMatch<'_>> = ranked
        .iter()
        .take(config.top.unwrap_or(usize::MAX))
        .collect();
    crate::write_json(writer, &shortlist)
}
