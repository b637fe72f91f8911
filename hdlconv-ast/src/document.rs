//! Interchange documents
//!
//! Every AST node can turn itself into a [`Document`], an ordered key-value
//! mapping that exporters consume without knowing the node types. Children are
//! serialized recursively and arrays of children keep their source order.

use hdlconv_common::HdlError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Ordered mapping from keys to document values
pub type Document = Map<String, Value>;

/// Which keys a function document carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionShape {
    /// `returnType`, `params`, `locals` and `body` are always present
    #[default]
    Complete,

    /// A declared return type suppresses `params`, `locals` and `body`
    Legacy,
}

impl fmt::Display for FunctionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionShape::Complete => write!(f, "complete"),
            FunctionShape::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for FunctionShape {
    type Err = HdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(FunctionShape::Complete),
            "legacy" => Ok(FunctionShape::Legacy),
            _ => Err(HdlError::InvalidShape {
                value: s.to_string(),
            }),
        }
    }
}

/// Options controlling document output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    pub function_shape: FunctionShape,
}

impl DocumentOptions {
    pub fn new(function_shape: FunctionShape) -> Self {
        Self { function_shape }
    }

    /// Options producing the legacy function shape
    pub fn legacy() -> Self {
        Self::new(FunctionShape::Legacy)
    }
}

/// Nodes that serialize into an interchange document
pub trait ToDocument {
    fn document_with(&self, options: &DocumentOptions) -> Document;

    /// Serialize with default options
    fn to_document(&self) -> Document {
        self.document_with(&DocumentOptions::default())
    }
}

/// Nodes identified by a name; their documents start with `"name"`
pub trait Named {
    fn name(&self) -> &str;

    fn named_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name".to_string(), Value::String(self.name().to_string()));
        doc
    }
}

/// Serialize `items` in order and store them under `key`
pub fn add_document_array<T: ToDocument>(
    doc: &mut Document,
    key: &str,
    items: &[T],
    options: &DocumentOptions,
) {
    let values = items
        .iter()
        .map(|item| Value::Object(item.document_with(options)))
        .collect();
    doc.insert(key.to_string(), Value::Array(values));
}

/// Serialize an optional child, `null` when absent
pub fn optional_document<T: ToDocument>(item: Option<&T>, options: &DocumentOptions) -> Value {
    item.map(|item| Value::Object(item.document_with(options)))
        .unwrap_or(Value::Null)
}
