use super::SourceArgs;
use crate::output::{group_thousands, print_json};
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use ticketfix_core::pipeline::{self, Options, TicketOutcome};
use ticketfix_core::rules::Insertion;

#[derive(Args, Debug, Clone, Default)]
pub struct ImproveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Document to write (default from ticketfix.yaml)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Partial document to start from (default: the output document)
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Also rewrite the first ticket in the source
    #[arg(long)]
    pub include_first: bool,

    /// Rewrite only these tickets, in the given order
    #[arg(long = "ticket", value_name = "ID")]
    pub tickets: Vec<String>,

    /// Print the assembled document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(root: &Path, args: ImproveArgs, json: bool) -> anyhow::Result<()> {
    let mut config = super::load_config(root)?;
    args.source.apply(&mut config);
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(base) = args.base {
        config.base = Some(base);
    }
    if args.include_first {
        config.skip_first = false;
    }
    for w in super::check_config(&config, root)? {
        tracing::warn!("{}", w.message);
    }

    let family = super::family(&config)?;
    let quiet = json || args.dry_run;
    let say = |line: String| {
        if !quiet {
            println!("{line}");
        }
    };

    say("🚀 Starting ticket improvement generation...".to_string());

    say(format!("📖 Reading {}...", config.source.display()));
    let source = super::read_document(&config.source_path(root))?;

    let base_display = config.base.as_ref().unwrap_or(&config.output).display();
    say(format!("📖 Reading current {base_display}..."));
    let base = super::read_document(&config.base_path(root))?;

    let ids = family.discover_ids(&source);
    say(format!("✓ Found {} tickets", ids.len()));

    let options = Options {
        skip_first: config.skip_first,
    };
    let selected = if args.tickets.is_empty() {
        pipeline::select(&ids, options)
    } else {
        &args.tickets[..]
    };

    let mut assembled = pipeline::assemble_ids(&source, &base, &family, selected, |outcome| {
        match outcome {
            TicketOutcome::Improved {
                id,
                complexity,
                rules,
            } => {
                for rule in rules.iter().filter(|r| r.insertion == Insertion::AnchorMissing) {
                    tracing::debug!(ticket = %id, section = %rule.section, "anchor missing, section not inserted");
                }
                say(format!("Processing {id}... ✓ ({complexity})"));
            }
            TicketOutcome::NotFound { id } => {
                tracing::warn!(ticket = %id, "ticket not found in source");
                say(format!("Processing {id}... ❌ Not found"));
            }
        }
    });
    assembled.report.discovered = ids.len();
    let report = &assembled.report;

    let output_path = config.output_path(root);
    if args.dry_run {
        if !json {
            print!("{}", assembled.document);
        }
    } else {
        say(format!("\n💾 Writing to {}...", config.output.display()));
        ticketfix_core::io::atomic_write(&output_path, assembled.document.as_bytes())
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        tracing::info!(path = %output_path.display(), bytes = assembled.document.len(), "output written");
    }

    if json {
        let mut value = serde_json::json!({
            "output": output_path,
            "written": !args.dry_run,
            "report": report,
        });
        if args.dry_run {
            value["document"] = serde_json::Value::String(assembled.document.clone());
        }
        print_json(&value)?;
    } else {
        say(format!(
            "✅ Complete! Generated {} lines",
            group_thousands(report.line_count)
        ));
        say(format!(
            "📊 Improvement rate: {} tickets processed",
            report.discovered
        ));
    }

    Ok(())
}
