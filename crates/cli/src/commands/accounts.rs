//! Accounts command implementation.

use anyhow::Result;
use photosync_config::Config;

use crate::commands::print_output;
use crate::formatters::{AccountsOutput, OutputFormat, get_formatter};

pub fn run(config: &Config, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_accounts(&AccountsOutput::from_config(config))?;
    print_output(&output);

    Ok(())
}
