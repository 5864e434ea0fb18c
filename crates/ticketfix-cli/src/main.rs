mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, improve::ImproveArgs, SourceArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ticketfix",
    about = "Rewrite markdown tickets: add missing sections and replace vague wording",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from ticketfix.yaml or .git/)
    #[arg(long, global = true, env = "TICKETFIX_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Defaults to `improve` with no overrides
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every ticket onto the output document
    Improve(ImproveArgs),

    /// List tickets with their complexity and missing sections
    List(SourceArgs),

    /// Report placeholder code and vague wording per ticket
    Scan(SourceArgs),

    /// Inspect and validate ticketfix.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        None => cmd::improve::run(&root, ImproveArgs::default(), cli.json),
        Some(Commands::Improve(args)) => cmd::improve::run(&root, args, cli.json),
        Some(Commands::List(args)) => cmd::list::run(&root, args, cli.json),
        Some(Commands::Scan(args)) => cmd::scan::run(&root, args, cli.json),
        Some(Commands::Config { subcommand }) => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
