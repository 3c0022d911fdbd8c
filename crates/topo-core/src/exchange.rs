//! # Exchange Type — Single Source of Truth
//!
//! Defines the `ExchangeType` enum with the four supported exchange types.
//! This is the ONE definition of "what is valid": the string parser and
//! the routing-pattern table both match on it exhaustively, so the valid
//! set and the per-type schema fields cannot drift apart.
//!
//! ## Routing Patterns
//!
//! Bindings on `direct` and `x-lvc` exchanges carry a literal routing key
//! (dot-separated segments, no wildcards). Bindings on `topic` exchanges
//! carry a pattern whose segments may be `*`, with at most one `#`
//! segment. Bindings on `fanout` exchanges carry no routing key.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TopoError;

/// Literal routing key: one or more dot-separated segments.
const LITERAL_KEY_PATTERN: &str = r"^[a-zA-Z0-9_:-]+(\.[a-zA-Z0-9_:-]+)*$";

/// Topic routing pattern: any segment may be `*`; at most one segment may be `#`.
const TOPIC_PATTERN: &str =
    r"^((([a-zA-Z0-9_:-]+|\*)\.)*([a-zA-Z0-9_:-]+|[*#])(\.([a-zA-Z0-9_:-]+|\*))*)$";

/// A message-broker exchange type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    /// Routes on exact routing-key match.
    Direct,
    /// Routes to every binding unconditionally.
    Fanout,
    /// Routes on wildcard routing-pattern match.
    Topic,
    /// Last-value-cache exchange; routes like `direct`.
    #[serde(rename = "x-lvc")]
    XLvc,
}

/// Total number of exchange types.
pub const EXCHANGE_TYPE_COUNT: usize = 4;

/// How a binding on a given exchange type constrains its `routingPattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingRule {
    /// ECMA-262 regular expression the routing pattern must match.
    pub pattern: &'static str,
    /// Description emitted alongside the pattern.
    pub description: &'static str,
    /// Whether `routingPattern` is a required binding property.
    pub required: bool,
}

impl ExchangeType {
    /// Returns all exchange types in declaration order.
    pub fn all() -> &'static [ExchangeType] {
        &[Self::Direct, Self::Fanout, Self::Topic, Self::XLvc]
    }

    /// The wire tag used in topology documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Fanout => "fanout",
            Self::Topic => "topic",
            Self::XLvc => "x-lvc",
        }
    }

    /// Routing-pattern constraint for bindings on this exchange type, if any.
    pub fn routing_rule(&self) -> Option<RoutingRule> {
        match self {
            Self::Direct | Self::XLvc => Some(RoutingRule {
                pattern: LITERAL_KEY_PATTERN,
                description: "Direct binding routing key",
                required: true,
            }),
            Self::Topic => Some(RoutingRule {
                pattern: TOPIC_PATTERN,
                description: "Topic binding routing pattern",
                required: true,
            }),
            Self::Fanout => None,
        }
    }
}

impl std::fmt::Display for ExchangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeType {
    type Err = TopoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "fanout" => Ok(Self::Fanout),
            "topic" => Ok(Self::Topic),
            "x-lvc" => Ok(Self::XLvc),
            other => Err(TopoError::InvalidExchangeType {
                value: other.to_string(),
            }),
        }
    }
}
