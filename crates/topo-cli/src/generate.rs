//! # Generate Subcommand
//!
//! Prints the schema for a single exchange type.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use topo_schema::generate_exchange_schema;

/// Output encoding for a printed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for the `topo-schema generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Exchange type: direct, fanout, topic or x-lvc.
    #[arg(value_name = "TYPE")]
    pub exchange_type: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Emit single-line JSON (ignored for YAML).
    #[arg(long)]
    pub compact: bool,
}

/// Execute the generate subcommand, writing the schema to `out`.
///
/// Returns exit code 0 on success.
pub fn run_generate(args: &GenerateArgs, out: &mut impl Write) -> Result<u8> {
    let document = generate_exchange_schema(&args.exchange_type)
        .with_context(|| format!("cannot generate schema for {:?}", args.exchange_type))?;

    let rendered = match (args.format, args.compact) {
        (OutputFormat::Json, false) => document.to_json_pretty()?,
        (OutputFormat::Json, true) => document.to_json_compact()?,
        (OutputFormat::Yaml, _) => document.to_yaml()?,
    };

    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }

    tracing::info!(id = %document.id, "generated schema");
    Ok(0)
}
