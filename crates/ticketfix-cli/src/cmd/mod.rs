pub mod config;
pub mod improve;
pub mod list;
pub mod scan;

use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use ticketfix_core::config::{Config, ConfigWarning, WarnLevel};
use ticketfix_core::ticket::TicketFamily;

/// Overrides shared by every command that reads the source document.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Source ticket document (default from ticketfix.yaml)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Ticket identifier prefix, e.g. BUXMAX
    #[arg(long)]
    pub prefix: Option<String>,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
    }
}

pub fn load_config(root: &Path) -> anyhow::Result<Config> {
    Config::load(root).context("failed to load ticketfix.yaml")
}

pub fn family(config: &Config) -> anyhow::Result<TicketFamily> {
    TicketFamily::new(&config.prefix)
        .with_context(|| format!("cannot scan for '{}' tickets", config.prefix))
}

pub fn read_document(path: &Path) -> anyhow::Result<String> {
    ticketfix_core::io::read_text(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Run config validation and fail on any error-level finding.
///
/// Returns the warnings that remain once errors have been ruled out.
pub fn check_config(config: &Config, root: &Path) -> anyhow::Result<Vec<ConfigWarning>> {
    let warnings = config.validate(root);
    let errors: Vec<&str> = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .map(|w| w.message.as_str())
        .collect();
    if !errors.is_empty() {
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }
    Ok(warnings)
}
