//! # topo-cli — Command-Line Interface for Exchange Topology Schemas
//!
//! Provides the `topo-schema` binary.
//!
//! ## Subcommands
//!
//! - `topo-schema generate <TYPE>` — Print the schema for one exchange type.
//! - `topo-schema export` — Write every exchange schema to a directory.
//! - `topo-schema list` — List supported exchange types and their schema ids.
//!
//! ```bash
//! topo-schema generate topic
//! topo-schema generate x-lvc --format yaml
//! topo-schema export --output-dir schemas
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers write to a caller-supplied `Write` so they can be tested
//!   without capturing stdout.
//! - Schema construction lives in `topo-schema`; nothing here builds schemas.

pub mod export;
pub mod generate;
pub mod list;
