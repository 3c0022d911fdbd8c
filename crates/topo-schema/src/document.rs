//! # Schema Document Model
//!
//! Typed representation of the generated JSON Schema documents. Field
//! declaration order is the serialized key order, matching the layout
//! downstream tooling diffs against.

use serde::{Deserialize, Serialize};

use topo_core::TopoError;

/// Meta-schema URI stamped on every generated document.
pub const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// Name of the externally registered schema describing binding destinations.
pub const TOPOLOGY_SCHEMA_REF: &str = "topology";

/// JSON Schema primitive type names used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Object,
    Array,
    String,
}

/// A string property constrained by a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSchema {
    pub description: String,
    #[serde(rename = "type")]
    pub json_type: JsonType,
    pub pattern: String,
}

impl StringSchema {
    pub fn new(description: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            json_type: JsonType::String,
            pattern: pattern.into(),
        }
    }
}

/// An unconstrained object property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSchema {
    pub description: String,
    #[serde(rename = "type")]
    pub json_type: JsonType,
}

impl ObjectSchema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            json_type: JsonType::Object,
        }
    }
}

/// A `$ref` to a schema resolved by the consuming validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefSchema {
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// The `bindings` array property of an exchange.
///
/// `items` is positional (draft-04 tuple form): only the first binding is
/// checked against the binding schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsSchema {
    pub description: String,
    #[serde(rename = "type")]
    pub json_type: JsonType,
    #[serde(rename = "minItems")]
    pub min_items: u64,
    pub items: Vec<BindingSchemaDocument>,
}

/// Properties of an exchange entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeProperties {
    pub exchange: StringSchema,
    #[serde(rename = "type")]
    pub exchange_type: StringSchema,
    pub options: ObjectSchema,
    pub bindings: BindingsSchema,
}

/// Schema for one exchange entry of a given type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSchemaDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub id: String,
    #[serde(rename = "type")]
    pub json_type: JsonType,
    pub title: String,
    pub description: String,
    pub properties: ExchangeProperties,
    pub required: Vec<String>,
}

/// Properties of a binding entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingProperties {
    pub destination: RefSchema,
    pub args: ObjectSchema,
    #[serde(
        rename = "routingPattern",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub routing_pattern: Option<StringSchema>,
}

/// Schema for a binding on an exchange of a given type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSchemaDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub json_type: JsonType,
    pub properties: BindingProperties,
    pub required: Vec<String>,
}

impl ExchangeSchemaDocument {
    /// The embedded binding schema at `properties.bindings.items[0]`.
    pub fn binding(&self) -> Option<&BindingSchemaDocument> {
        self.properties.bindings.items.first()
    }

    /// File name used when the document is written to disk.
    pub fn file_name(&self) -> String {
        format!("{}.schema.json", self.id)
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Object keys in the returned value follow `serde_json`'s map
    /// ordering; use [`to_json_pretty`](Self::to_json_pretty) when the
    /// emitted key order matters.
    pub fn to_value(&self) -> Result<serde_json::Value, TopoError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as indented JSON in declaration key order.
    pub fn to_json_pretty(&self) -> Result<String, TopoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as single-line JSON in declaration key order.
    pub fn to_json_compact(&self) -> Result<String, TopoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String, TopoError> {
        serde_yaml::to_string(self).map_err(|e| TopoError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_binding(routing: Option<StringSchema>) -> BindingSchemaDocument {
        let mut required = vec!["destination".to_string()];
        if routing.is_some() {
            required.push("routingPattern".to_string());
        }
        BindingSchemaDocument {
            schema: DRAFT_04_SCHEMA_URI.to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            json_type: JsonType::Object,
            properties: BindingProperties {
                destination: RefSchema {
                    reference: TOPOLOGY_SCHEMA_REF.to_string(),
                },
                args: ObjectSchema::new("Binding args"),
                routing_pattern: routing,
            },
            required,
        }
    }

    #[test]
    fn test_absent_routing_pattern_is_not_serialized() {
        let value = serde_json::to_value(sample_binding(None)).unwrap();
        assert_eq!(
            value["properties"],
            json!({
                "destination": { "$ref": "topology" },
                "args": { "description": "Binding args", "type": "object" }
            })
        );
    }

    #[test]
    fn test_routing_pattern_key_is_camel_case() {
        let binding = sample_binding(Some(StringSchema::new("k", "^a$")));
        let value = serde_json::to_value(&binding).unwrap();
        assert_eq!(
            value["properties"]["routingPattern"],
            json!({ "description": "k", "type": "string", "pattern": "^a$" })
        );
        assert_eq!(value["required"], json!(["destination", "routingPattern"]));
    }

    #[test]
    fn test_binding_deserializes_without_routing_pattern() {
        let value = serde_json::to_value(sample_binding(None)).unwrap();
        let back: BindingSchemaDocument = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample_binding(None));
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(serde_json::to_value(JsonType::Object).unwrap(), json!("object"));
        assert_eq!(serde_json::to_value(JsonType::Array).unwrap(), json!("array"));
        assert_eq!(serde_json::to_value(JsonType::String).unwrap(), json!("string"));
    }
}
