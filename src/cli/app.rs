//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::list::ListArgs;
use super::output::Output;
use super::{cache_cmd, get, list};
use crate::storage::{Config, DocumentFormat, OutputFormat, Session};

#[derive(Parser)]
#[command(name = "rfcs")]
#[command(author, version, about = "Query the RFC index and read RFCs from a local cache")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to `default_format` from the config file)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Cache directory for the index and documents
    #[arg(long, global = true, env = "RFCS_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "RFCS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List RFCs from the index
    List(ListArgs),

    /// Print the body of an RFC
    Get {
        /// RFC number
        number: u32,

        /// Document format
        #[arg(long = "as", value_enum, default_value = "txt")]
        document_format: DocumentFormat,
    },

    /// Inspect or clear the local cache
    #[command(subcommand)]
    Cache(cache_cmd::CacheCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let output = Output::new(cli.format.unwrap_or(config.default_format));
    let session = Session::open(config, cli.cache_dir);

    match cli.command {
        Commands::List(args) => list::run(args, &session, &output)?,
        Commands::Get {
            number,
            document_format,
        } => get::run(number, document_format, &session, &output)?,
        Commands::Cache(cmd) => cache_cmd::run(cmd, &session, &output)?,
    }

    tracing::debug!("command completed");
    Ok(())
}

/// Installs a stderr subscriber; `RUST_LOG` directives still apply
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn get_defaults_to_text() {
        let cli = Cli::try_parse_from(["rfcs", "get", "791"]).unwrap();
        match cli.command {
            Commands::Get {
                number,
                document_format,
            } => {
                assert_eq!(number, 791);
                assert_eq!(document_format, DocumentFormat::Text);
            }
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["rfcs", "-vv", "cache", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn get_format_is_independent_of_output_format() {
        let cli =
            Cli::try_parse_from(["rfcs", "--format", "json", "get", "2119", "--as", "pdf"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Get {
                document_format, ..
            } => assert_eq!(document_format, DocumentFormat::Pdf),
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn rejects_unknown_document_format() {
        assert!(Cli::try_parse_from(["rfcs", "get", "1", "--as", "html"]).is_err());
    }
}
