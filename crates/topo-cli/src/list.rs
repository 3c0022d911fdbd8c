//! # List Subcommand
//!
//! Prints each supported exchange type alongside its schema id.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use topo_core::ExchangeType;
use topo_schema::exchange_schema;

/// Arguments for the `topo-schema list` subcommand.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print the list as a JSON array of `{ "type", "id" }` objects.
    #[arg(long)]
    pub json: bool,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, out: &mut impl Write) -> Result<u8> {
    let rows: Vec<(ExchangeType, String)> = ExchangeType::all()
        .iter()
        .map(|t| (*t, exchange_schema(*t).id))
        .collect();

    if args.json {
        let value: Vec<serde_json::Value> = rows
            .iter()
            .map(|(t, id)| serde_json::json!({ "type": t, "id": id }))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        for (t, id) in &rows {
            writeln!(out, "{:<8} {id}", t.as_str())?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_plain() {
        let mut buf = Vec::new();
        run_list(&ListArgs::default(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "direct   directExchange");
        assert_eq!(lines[3], "x-lvc    x-lvcExchange");
    }

    #[test]
    fn test_list_json() {
        let mut buf = Vec::new();
        run_list(&ListArgs { json: true }, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[2], serde_json::json!({ "type": "topic", "id": "topicExchange" }));
    }
}
