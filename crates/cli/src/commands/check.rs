//! Check command implementation.

use anyhow::Result;
use photosync_config::Config;

use crate::commands::print_output;
use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter};

/// Print configuration warnings; in strict mode any warning is a failure.
pub fn run(config: &Config, strict: bool, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let warnings = config.diagnostics();

    let output = get_formatter(format).format_diagnostics(&warnings)?;
    print_output(&output);

    if strict && !warnings.is_empty() {
        return Err(CliError::ValidationFailed {
            count: warnings.len(),
        }
        .into());
    }

    Ok(())
}
