//! Function and procedure declarations
//!
//! A callable is parsed in two passes: the signature first, then the body.
//! [`FunctionBuilder`] holds the signature fixed while locals and statements
//! are appended, and [`FunctionBuilder::build`] seals the result into an
//! immutable [`Function`].

use super::expressions::Expr;
use super::statements::Statement;
use super::variables::Variable;
use crate::document::{
    add_document_array, optional_document, Document, DocumentOptions, FunctionShape, Named,
    ToDocument,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Function or procedure declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    name: String,
    is_operator: bool,
    return_type: Option<Box<Expr>>,
    params: Vec<Variable>,
    locals: Vec<Variable>,
    body: Vec<Statement>,
}

impl Function {
    /// Create a declaration with an empty body (a bare signature)
    pub fn new(
        name: impl Into<String>,
        is_operator: bool,
        return_type: Option<Expr>,
        params: Vec<Variable>,
    ) -> Self {
        Self {
            name: name.into(),
            is_operator,
            return_type: return_type.map(Box::new),
            params,
            locals: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Start building a function from its signature
    pub fn builder(
        name: impl Into<String>,
        is_operator: bool,
        return_type: Option<Expr>,
        params: Vec<Variable>,
    ) -> FunctionBuilder {
        FunctionBuilder::new(name, is_operator, return_type, params)
    }

    /// True if the function overloads an operator symbol (`"+"`, `"and"`)
    pub fn is_operator(&self) -> bool {
        self.is_operator
    }

    /// Declared return type; `None` for procedures
    pub fn return_type(&self) -> Option<&Expr> {
        self.return_type.as_deref()
    }

    pub fn is_procedure(&self) -> bool {
        self.return_type.is_none()
    }

    pub fn params(&self) -> &[Variable] {
        &self.params
    }

    pub fn locals(&self) -> &[Variable] {
        &self.locals
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

impl Named for Function {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ToDocument for Function {
    fn document_with(&self, options: &DocumentOptions) -> Document {
        log::trace!(
            "serializing function '{}' ({} shape)",
            self.name,
            options.function_shape
        );

        let mut doc = self.named_document();
        doc.insert("isOperator".to_string(), Value::Bool(self.is_operator));

        match (self.return_type(), options.function_shape) {
            // Legacy consumers expect a typed signature without its body
            (Some(return_type), FunctionShape::Legacy) => {
                doc.insert(
                    "returnType".to_string(),
                    Value::Object(return_type.document_with(options)),
                );
            }
            (return_type, _) => {
                doc.insert("returnType".to_string(), optional_document(return_type, options));
                add_document_array(&mut doc, "params", &self.params, options);
                add_document_array(&mut doc, "locals", &self.locals, options);
                add_document_array(&mut doc, "body", &self.body, options);
            }
        }

        doc
    }
}

/// Mutable handle used while a function body is being parsed
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    function: Function,
}

impl FunctionBuilder {
    pub fn new(
        name: impl Into<String>,
        is_operator: bool,
        return_type: Option<Expr>,
        params: Vec<Variable>,
    ) -> Self {
        Self {
            function: Function::new(name, is_operator, return_type, params),
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Append a local declaration
    pub fn add_local(&mut self, local: Variable) -> &mut Self {
        self.function.locals.push(local);
        self
    }

    /// Append a body statement
    pub fn add_statement(&mut self, statement: Statement) -> &mut Self {
        self.function.body.push(statement);
        self
    }

    pub fn extend_locals(&mut self, locals: impl IntoIterator<Item = Variable>) -> &mut Self {
        self.function.locals.extend(locals);
        self
    }

    pub fn extend_body(&mut self, statements: impl IntoIterator<Item = Statement>) -> &mut Self {
        self.function.body.extend(statements);
        self
    }

    /// Seal the function; no further locals or statements can be added
    pub fn build(self) -> Function {
        log::debug!(
            "sealed function '{}': {} params, {} locals, {} statements",
            self.function.name,
            self.function.params.len(),
            self.function.locals.len(),
            self.function.body.len()
        );
        self.function
    }
}
