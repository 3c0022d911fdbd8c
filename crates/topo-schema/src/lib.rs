//! # topo-schema — Exchange Topology Schema Generation
//!
//! Produces JSON Schema (draft-04) documents describing the valid shape of
//! exchange entries in a message-broker topology file. One schema exists
//! per exchange type; each embeds the schema for that exchange's bindings.
//!
//! ## Generation (`generate`)
//!
//! - [`generate_exchange_schema`] — parses a type tag and builds the
//!   exchange schema, failing with [`TopoError::InvalidExchangeType`] for
//!   unknown tags.
//! - [`generate_binding_schema`] — builds the binding schema nested at
//!   `properties.bindings.items[0]`.
//!
//! ## Document Model (`document`)
//!
//! Schemas are typed values whose serde field order is the emitted key
//! order. They serialize to JSON or YAML and compare structurally.
//!
//! ## Catalog (`catalog`)
//!
//! [`SchemaCatalog`] holds the schema for every exchange type, indexed by
//! its `id`, and can export them as `<id>.schema.json` files.
//!
//! ## Crate Policy
//!
//! - Depends only on `topo-core` internally.
//! - Schema `id` values and the `topology` `$ref` are consumed by external
//!   validators and must not change without updating every consumer.
//! - This crate never validates topology documents itself.

pub mod catalog;
pub mod document;
pub mod generate;

pub use catalog::SchemaCatalog;
pub use document::{
    BindingProperties, BindingSchemaDocument, BindingsSchema, ExchangeProperties,
    ExchangeSchemaDocument, JsonType, ObjectSchema, RefSchema, StringSchema,
    DRAFT_04_SCHEMA_URI, TOPOLOGY_SCHEMA_REF,
};
pub use generate::{exchange_schema, generate_binding_schema, generate_exchange_schema};
pub use topo_core::{ExchangeType, TopoError};
