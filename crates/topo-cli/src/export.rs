//! # Export Subcommand
//!
//! Writes the schema for every exchange type to a directory as
//! `<id>.schema.json`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use topo_schema::SchemaCatalog;

/// Arguments for the `topo-schema export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write schema files into. Created if missing.
    #[arg(long, value_name = "DIR", default_value = "schemas")]
    pub output_dir: PathBuf,
}

/// Execute the export subcommand. Prints one line per written file.
///
/// Returns exit code 0 on success.
pub fn run_export(args: &ExportArgs, out: &mut impl Write) -> Result<u8> {
    let written = export_catalog(&args.output_dir)?;
    for path in &written {
        writeln!(out, "wrote {}", path.display())?;
    }
    Ok(0)
}

fn export_catalog(dir: &Path) -> Result<Vec<PathBuf>> {
    SchemaCatalog::generate()
        .write_to_dir(dir)
        .with_context(|| format!("failed to export schemas to {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_all_schemas() {
        let tmp = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            output_dir: tmp.path().join("out"),
        };
        let mut buf = Vec::new();
        assert_eq!(run_export(&args, &mut buf).unwrap(), 0);

        let printed = String::from_utf8(buf).unwrap();
        assert_eq!(printed.lines().count(), 4);
        for id in ["directExchange", "fanoutExchange", "topicExchange", "x-lvcExchange"] {
            let path = args.output_dir.join(format!("{id}.schema.json"));
            assert!(path.is_file(), "missing {}", path.display());
            assert!(printed.contains(&format!("{id}.schema.json")));
        }
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let args = ExportArgs {
            output_dir: tmp.path().to_path_buf(),
        };
        let err = run_export(&args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("failed to export schemas to"));
    }
}
