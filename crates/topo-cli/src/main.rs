//! # topo-schema CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use topo_cli::export::{run_export, ExportArgs};
use topo_cli::generate::{run_generate, GenerateArgs};
use topo_cli::list::{run_list, ListArgs};

/// Exchange topology schema generator.
///
/// Produces JSON Schema (draft-04) documents for RabbitMQ exchange entries
/// of type direct, fanout, topic and x-lvc.
#[derive(Parser, Debug)]
#[command(name = "topo-schema", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the schema for one exchange type.
    Generate(GenerateArgs),

    /// Write the schema for every exchange type to a directory.
    Export(ExportArgs),

    /// List supported exchange types and their schema ids.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so generated schemas on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "topo-schema starting");

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, &mut stdout),
        Commands::Export(args) => run_export(&args, &mut stdout),
        Commands::List(args) => run_list(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["topo-schema", "-vv", "generate", "x-lvc", "--format", "yaml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.exchange_type, "x-lvc");
                assert_eq!(args.format, topo_cli::generate::OutputFormat::Yaml);
                assert!(!args.compact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_export_default_dir() {
        let cli = Cli::try_parse_from(["topo-schema", "export"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.output_dir, std::path::PathBuf::from("schemas"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
