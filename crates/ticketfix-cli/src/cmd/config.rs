use crate::output::print_json;
use clap::Subcommand;
use std::path::Path;
use ticketfix_core::config::WarnLevel;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration and resolved paths
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(root)?;

    if json {
        let value = serde_json::json!({
            "config": config,
            "paths": {
                "source": config.source_path(root),
                "output": config.output_path(root),
                "base": config.base_path(root),
            },
        });
        return print_json(&value);
    }

    println!("prefix:     {}", config.prefix);
    println!("source:     {}", config.source_path(root).display());
    println!("output:     {}", config.output_path(root).display());
    println!("base:       {}", config.base_path(root).display());
    println!("skip_first: {}", config.skip_first);
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(root)?;
    let warnings = config.validate(root);

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let level = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{level}] {}", w.message);
        }
    }

    super::check_config(&config, root)?;
    Ok(())
}
