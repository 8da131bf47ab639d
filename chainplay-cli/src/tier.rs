//! Tier command implementation for the CHAINPLAY CLI.

use camino::Utf8PathBuf;
use chainplay_core::{ActivityStats, MemberTier};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_STATS, CliError, ENV_TIER_STATS};

/// CLI arguments for the `tier` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Derive a member tier from participation stats. The stats \
                 are provided as a JSON object with total points, sessions \
                 attended and hosted, attendance rate, and the trusted flag.",
    about = "Derive a member tier from participation stats"
)]
#[ortho_config(prefix = "CHAINPLAY")]
pub(crate) struct TierArgs {
    /// Path to a JSON file containing participation stats.
    #[arg(long = ARG_STATS, value_name = "path")]
    #[serde(default)]
    pub(crate) stats: Option<Utf8PathBuf>,
}

impl TierArgs {
    fn into_config(self) -> Result<TierConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TierConfig::try_from(merged)
    }
}

/// Resolved `tier` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TierConfig {
    stats: Utf8PathBuf,
}

impl TryFrom<TierArgs> for TierConfig {
    type Error = CliError;

    fn try_from(args: TierArgs) -> Result<Self, Self::Error> {
        let stats = args.stats.ok_or(CliError::MissingArgument {
            field: ARG_STATS,
            env: ENV_TIER_STATS,
        })?;
        Ok(Self { stats })
    }
}

/// Output payload of the `tier` subcommand.
#[derive(Debug, Serialize)]
struct TierReport {
    tier: MemberTier,
    label: &'static str,
}

pub(super) fn run_tier(args: TierArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_tier_with(args, &mut stdout)
}

pub(super) fn run_tier_with(args: TierArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    crate::require_existing(&config.stats, ARG_STATS)?;
    let stats: ActivityStats = crate::load_json(&config.stats)?;
    let tier = MemberTier::for_stats(&stats);
    crate::write_json(
        writer,
        &TierReport {
            tier,
            label: tier.label(),
        },
    )
}
