//! Output formatters for CLI commands.
//!
//! Provides two output formats: JSON and Table. Table output is
//! tab-separated so it stays friendly to `cut` and `awk`.

use anyhow::Result;
use photosync_config::{Config, ConfigWarning, SynologyAccountConfig, SynologyTier};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Resolved configuration together with the tier that produced its NAS accounts.
#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    pub synology_tier: SynologyTier,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// One Google account and where its photos go.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleAccountRow {
    pub name: String,
    pub paired_synology_account: Option<String>,
}

/// One NAS account without its secrets.
#[derive(Debug, Clone, Serialize)]
pub struct SynologyAccountRow {
    pub name: String,
    pub base_url: String,
    pub username: String,
    pub photo_library_path: String,
    pub has_credentials: bool,
}

/// Account listing output structure.
#[derive(Debug, Clone, Serialize)]
pub struct AccountsOutput {
    pub google_accounts: Vec<GoogleAccountRow>,
    pub synology_accounts: Vec<SynologyAccountRow>,
}

impl AccountsOutput {
    pub fn from_config(config: &Config) -> Self {
        let google_accounts = config
            .google_accounts
            .iter()
            .map(|g| GoogleAccountRow {
                name: g.name.clone(),
                paired_synology_account: config
                    .paired_synology_account(&g.name)
                    .map(|s| s.name.clone()),
            })
            .collect();
        let synology_accounts = config
            .synology_accounts
            .iter()
            .map(|s| SynologyAccountRow {
                name: s.name.clone(),
                base_url: s.base_url(),
                username: s.username.clone(),
                photo_library_path: s.photo_library_path.clone(),
                has_credentials: s.has_credentials(),
            })
            .collect();

        Self {
            google_accounts,
            synology_accounts,
        }
    }
}

/// A resolved pairing.
#[derive(Debug, Serialize)]
pub struct PairingOutput<'a> {
    pub google_account: &'a str,
    pub synology_account: &'a SynologyAccountConfig,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the full resolved configuration.
    fn format_config(&self, output: &ShowOutput<'_>) -> Result<String>;

    /// Format the account listing.
    fn format_accounts(&self, accounts: &AccountsOutput) -> Result<String>;

    /// Format a single pairing lookup.
    fn format_pairing(&self, pairing: &PairingOutput<'_>) -> Result<String>;

    /// Format configuration warnings.
    fn format_diagnostics(&self, warnings: &[ConfigWarning]) -> Result<String>;
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, output: &ShowOutput<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_accounts(&self, accounts: &AccountsOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(accounts)?)
    }

    fn format_pairing(&self, pairing: &PairingOutput<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(pairing)?)
    }

    fn format_diagnostics(&self, warnings: &[ConfigWarning]) -> Result<String> {
        Ok(serde_json::to_string_pretty(warnings)?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl TableFormatter {
    fn push_synology_rows<'a>(
        output: &mut String,
        accounts: impl Iterator<Item = &'a SynologyAccountConfig>,
    ) {
        output.push_str("Name\tURL\tUsername\tPhoto Path\n");
        for account in accounts {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                account.name,
                account.base_url(),
                if account.username.is_empty() {
                    "N/A"
                } else {
                    account.username.as_str()
                },
                account.photo_library_path
            ));
        }
    }
}

impl Formatter for TableFormatter {
    fn format_config(&self, output: &ShowOutput<'_>) -> Result<String> {
        let config = output.config;
        let mut out = String::new();

        out.push_str(&format!(
            "Synology Tier: {}\n\
             Storage Threshold: {}%\n\
             Database Path: {}\n\
             Dry Run: {}\n\
             Log Level: {}\n",
            tier_label(output.synology_tier),
            config.storage_threshold_percent,
            config.database_path.display(),
            config.dry_run,
            config.log_level,
        ));

        out.push_str("\nGoogle Accounts:\n");
        if config.google_accounts.is_empty() {
            out.push_str("  (none)\n");
        }
        for account in &config.google_accounts {
            out.push_str(&format!("  {}\n", account.name));
        }

        out.push_str("\nSynology Accounts:\n");
        if config.synology_accounts.is_empty() {
            out.push_str("  (none)\n");
        } else {
            Self::push_synology_rows(&mut out, config.synology_accounts.iter());
        }

        out.push_str("\nPairings:\n");
        if config.account_pairings.is_empty() {
            out.push_str("  (none)\n");
        }
        for pairing in &config.account_pairings {
            out.push_str(&format!(
                "  {} -> {}\n",
                pairing.google_account_name, pairing.synology_account_name
            ));
        }

        Ok(out)
    }

    fn format_accounts(&self, accounts: &AccountsOutput) -> Result<String> {
        let mut output = String::new();

        output.push_str("Google Account\tPaired Synology Account\n");
        for row in &accounts.google_accounts {
            output.push_str(&format!(
                "{}\t{}\n",
                row.name,
                row.paired_synology_account.as_deref().unwrap_or("N/A")
            ));
        }

        output.push('\n');
        output.push_str("Synology Account\tURL\tUsername\tCredentials\n");
        for row in &accounts.synology_accounts {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                row.name,
                row.base_url,
                if row.username.is_empty() {
                    "N/A"
                } else {
                    row.username.as_str()
                },
                if row.has_credentials { "Y" } else { "N" }
            ));
        }

        Ok(output)
    }

    fn format_pairing(&self, pairing: &PairingOutput<'_>) -> Result<String> {
        let account = pairing.synology_account;
        Ok(format!(
            "{} -> {} ({}, {})\n",
            pairing.google_account,
            account.name,
            account.base_url(),
            account.photo_library_path
        ))
    }

    fn format_diagnostics(&self, warnings: &[ConfigWarning]) -> Result<String> {
        if warnings.is_empty() {
            return Ok("No issues found.\n".to_string());
        }

        let mut output = String::new();
        for warning in warnings {
            output.push_str(&format!("warning: {}\n", warning));
        }
        Ok(output)
    }
}

fn tier_label(tier: SynologyTier) -> &'static str {
    match tier {
        SynologyTier::Named => "named (SYNOLOGY_ACCOUNTS)",
        SynologyTier::Legacy => "numbered (SYNOLOGY_ACCOUNT_{i}_*)",
        SynologyTier::SingleHost => "single host (SYNOLOGY_HOST)",
        SynologyTier::Unconfigured => "unconfigured",
    }
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
