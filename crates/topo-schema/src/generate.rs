//! # Exchange Schema Generation
//!
//! Builds the JSON Schema for an exchange entry of a given type, with the
//! schema for its bindings embedded.
//!
//! ## Per-Type Fields
//!
//! The exchange schema pins its `type` property to the exact type tag, so a
//! `topic` entry cannot validate against the `direct` schema. The binding
//! schema gains a `routingPattern` property according to
//! [`ExchangeType::routing_rule`]; `fanout` bindings have none.

use topo_core::{capitalize, ExchangeType, TopoError};

use crate::document::{
    BindingProperties, BindingSchemaDocument, BindingsSchema, ExchangeProperties,
    ExchangeSchemaDocument, JsonType, ObjectSchema, RefSchema, StringSchema,
    DRAFT_04_SCHEMA_URI, TOPOLOGY_SCHEMA_REF,
};

/// Exchange names: letters, digits, `_`, `.`, `:` and `-`; may be empty.
const EXCHANGE_NAME_PATTERN: &str = "^[0-9A-Za-z_.:-]*$";

/// Generate the exchange schema for a type tag.
///
/// The tag must be exactly one of `direct`, `fanout`, `topic` or `x-lvc`.
///
/// # Errors
///
/// Returns [`TopoError::InvalidExchangeType`] for any other tag.
pub fn generate_exchange_schema(exchange_type: &str) -> Result<ExchangeSchemaDocument, TopoError> {
    let exchange_type: ExchangeType = exchange_type.parse()?;
    Ok(exchange_schema(exchange_type))
}

/// Build the exchange schema for an already-parsed exchange type.
pub fn exchange_schema(exchange_type: ExchangeType) -> ExchangeSchemaDocument {
    let tag = exchange_type.as_str();

    let document = ExchangeSchemaDocument {
        schema: DRAFT_04_SCHEMA_URI.to_string(),
        id: format!("{tag}Exchange"),
        json_type: JsonType::Object,
        title: format!("RabbitMQ {} Exchange", capitalize(tag)),
        description: format!("A RabbitMQ {tag} exchange"),
        properties: ExchangeProperties {
            exchange: StringSchema::new("Exchange name, unique identifier", EXCHANGE_NAME_PATTERN),
            exchange_type: StringSchema::new(
                "Exchange type, eg. direct, fanout, topic or x-lvc",
                format!("^{tag}$"),
            ),
            options: ObjectSchema::new("Exchange options"),
            bindings: BindingsSchema {
                description: "Exchange bindings (destinations)".to_string(),
                json_type: JsonType::Array,
                min_items: 1,
                items: vec![generate_binding_schema(exchange_type)],
            },
        },
        required: vec![
            "exchange".to_string(),
            "type".to_string(),
            "bindings".to_string(),
        ],
    };

    tracing::debug!(exchange_type = %exchange_type, id = %document.id, "generated exchange schema");
    document
}

/// Build the binding schema for bindings on an exchange of `exchange_type`.
pub fn generate_binding_schema(exchange_type: ExchangeType) -> BindingSchemaDocument {
    let tag = exchange_type.as_str();
    let mut required = vec!["destination".to_string()];

    let routing_pattern = exchange_type.routing_rule().map(|rule| {
        if rule.required {
            required.push("routingPattern".to_string());
        }
        StringSchema::new(rule.description, rule.pattern)
    });

    BindingSchemaDocument {
        schema: DRAFT_04_SCHEMA_URI.to_string(),
        title: format!("RabbitMQ {} Exchange Binding", capitalize(tag)),
        description: format!("A RabbitMQ {tag} exchange binding"),
        json_type: JsonType::Object,
        properties: BindingProperties {
            destination: RefSchema {
                reference: TOPOLOGY_SCHEMA_REF.to_string(),
            },
            args: ObjectSchema::new("Binding args"),
            routing_pattern,
        },
        required,
    }
}
