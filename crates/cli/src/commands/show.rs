//! Show command implementation.

use anyhow::Result;
use photosync_config::{Config, SynologyTier};
use tracing::info;

use crate::commands::print_output;
use crate::formatters::{OutputFormat, ShowOutput, get_formatter};

pub fn run(config: &Config, synology_tier: SynologyTier, output_format: &str) -> Result<()> {
    info!(
        "Resolved {} Synology account(s) from the {:?} tier",
        config.synology_accounts.len(),
        synology_tier
    );

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_config(&ShowOutput {
        synology_tier,
        config,
    })?;
    print_output(&output);

    Ok(())
}
