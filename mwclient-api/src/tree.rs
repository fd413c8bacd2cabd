//! Read-only access to a decoded response tree.
//!
//! The classifier only needs key lookup, string access and object iteration,
//! so it is written against [`ResponseNode`] instead of a concrete JSON type.

use std::fmt;

use serde_json::Value;

/// The JSON type of a node, used when reporting malformed responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of a parsed API response.
pub trait ResponseNode {
    /// The JSON type of this node
    fn kind(&self) -> NodeKind;

    /// Child of an object node by key; `None` for missing keys and non-objects
    fn get(&self, key: &str) -> Option<&Self>;

    /// String value of a string node
    fn as_str(&self) -> Option<&str>;

    /// Key/child pairs of an object node, in the node's iteration order
    fn entries(&self) -> Option<Vec<(&str, &Self)>>;

    fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }
}

impl ResponseNode for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn entries(&self) -> Option<Vec<(&str, &Self)>> {
        let map = self.as_object()?;
        Some(map.iter().map(|(k, v)| (k.as_str(), v)).collect())
    }
}
