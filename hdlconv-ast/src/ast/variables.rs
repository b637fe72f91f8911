//! Variable declarations (parameters, locals, ports, signals)

use super::expressions::Expr;
use crate::document::{optional_document, Document, DocumentOptions, Named, ToDocument};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A declared variable with its type and optional default value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub var_type: Expr,
    pub value: Option<Expr>,
}

impl Variable {
    pub fn new(name: impl Into<String>, var_type: Expr) -> Self {
        Self {
            name: name.into(),
            var_type,
            value: None,
        }
    }

    /// Attach a default value
    pub fn with_value(mut self, value: Expr) -> Self {
        self.value = Some(value);
        self
    }
}

impl Named for Variable {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ToDocument for Variable {
    fn document_with(&self, options: &DocumentOptions) -> Document {
        let mut doc = self.named_document();
        doc.insert("type".to_string(), Value::Object(self.var_type.document_with(options)));
        doc.insert("value".to_string(), optional_document(self.value.as_ref(), options));
        doc
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.var_type)?;
        if let Some(value) = &self.value {
            write!(f, " := {}", value)?;
        }
        Ok(())
    }
}
