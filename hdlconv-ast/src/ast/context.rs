//! Root of one parsed translation unit

use super::function::Function;
use crate::document::{add_document_array, Document, DocumentOptions, ToDocument};
use hdlconv_common::{Language, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything parsed out of one source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub language: Language,
    pub functions: Vec<Function>,
}

impl Context {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            functions: Vec::new(),
        }
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// Render the interchange document as JSON text
    pub fn to_json_string(&self, options: &DocumentOptions, pretty: bool) -> Result<String> {
        log::debug!(
            "rendering {} context with {} functions",
            self.language,
            self.functions.len()
        );
        let doc = Value::Object(self.document_with(options));
        let text = if pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(text)
    }
}

impl ToDocument for Context {
    fn document_with(&self, options: &DocumentOptions) -> Document {
        let mut doc = Document::new();
        doc.insert("language".to_string(), Value::from(self.language.name()));
        add_document_array(&mut doc, "functions", &self.functions, options);
        doc
    }
}
