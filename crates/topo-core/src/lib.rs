//! # topo-core — Foundational Types for Exchange Topology Schemas
//!
//! Defines the primitives shared by the schema generator and the CLI.
//! Every other crate in the workspace depends on `topo-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `ExchangeType` enum.** The set of supported exchange types
//!    (`direct`, `fanout`, `topic`, `x-lvc`) is defined once. Parsing and
//!    every per-type table match on it exhaustively, so adding a type is a
//!    compile error until each consumer handles it.
//!
//! 2. **No bare strings past the boundary.** A type tag is parsed into
//!    `ExchangeType` at the edge; everything downstream takes the enum.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `topo-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod exchange;
pub mod text;

pub use error::TopoError;
pub use exchange::{ExchangeType, RoutingRule, EXCHANGE_TYPE_COUNT};
pub use text::capitalize;
