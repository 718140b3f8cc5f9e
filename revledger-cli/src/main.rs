//! revledger CLI
//!
//! Builds a revision ledger from command-line revisions and reports which
//! paths it blacklists.

mod check;
mod revision_arg;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::revision_arg::RevisionArg;

#[derive(Parser, Debug)]
#[command(name = "revledger")]
#[command(author = "revledger Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Query file blacklisting across database revisions", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether paths are blacklisted by the given revisions
    Check {
        /// Revision as NAME[:added=P,..][:removed=P,..][:modified=P,..]
        #[arg(short, long = "revision")]
        revisions: Vec<RevisionArg>,

        /// Paths to check, normalized the same way as the revision paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn init_tracing(debug: bool) {
    let env_filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Check { revisions, paths } => {
            let ledger = check::build_ledger(revisions);
            info!("Ledger holds {} revision(s)", ledger.len());

            let reports = check::check_paths(&ledger, &paths);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", check::format_report(report));
                }
            }
        }
    }

    Ok(())
}
