//! Pairing lookup command implementation.

use anyhow::Result;
use photosync_config::Config;
use tracing::debug;

use crate::commands::print_output;
use crate::error::CliError;
use crate::formatters::{OutputFormat, PairingOutput, get_formatter};

pub fn run(config: &Config, google_account: &str, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let Some(synology_account) = config.paired_synology_account(google_account) else {
        if let Some(pairing) = config.pairing_for(google_account) {
            debug!(
                "Google account '{}' is paired with unknown Synology account '{}'",
                google_account, pairing.synology_account_name
            );
        }
        return Err(CliError::PairingNotFound {
            google: google_account.to_string(),
        }
        .into());
    };

    let output = get_formatter(format).format_pairing(&PairingOutput {
        google_account,
        synology_account,
    })?;
    print_output(&output);

    Ok(())
}
