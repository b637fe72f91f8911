//! Statement AST nodes
//!
//! Sequential statements as they appear in function and process bodies.

use super::expressions::Expr;
use crate::document::{add_document_array, optional_document, Document, DocumentOptions, ToDocument};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Return statement
    Return(Option<Expr>),

    /// Variable or signal assignment
    Assignment {
        target: Expr,
        value: Expr,
    },

    /// Expression evaluated for its side effects (procedure call)
    Expression(Expr),

    /// If statement with optional elsif branches and else branch
    If {
        cond: Expr,
        if_true: Vec<Statement>,
        elifs: Vec<IfBranch>,
        if_false: Option<Vec<Statement>>,
    },

    /// While loop
    While {
        cond: Expr,
        body: Vec<Statement>,
    },

    /// `exit` / `break`
    Break,

    /// `next` / `continue`
    Continue,
}

/// An `elsif` branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfBranch {
    pub cond: Expr,
    pub body: Vec<Statement>,
}

impl Statement {
    /// Uppercase statement kind, written as `"type"` in documents
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Return(_) => "RETURN",
            Statement::Assignment { .. } => "ASSIGNMENT",
            Statement::Expression(_) => "EXPRESSION",
            Statement::If { .. } => "IF",
            Statement::While { .. } => "WHILE",
            Statement::Break => "BREAK",
            Statement::Continue => "CONTINUE",
        }
    }

    pub fn assignment(target: Expr, value: Expr) -> Self {
        Statement::Assignment { target, value }
    }
}

impl ToDocument for IfBranch {
    fn document_with(&self, options: &DocumentOptions) -> Document {
        let mut doc = Document::new();
        doc.insert("cond".to_string(), Value::Object(self.cond.document_with(options)));
        add_document_array(&mut doc, "body", &self.body, options);
        doc
    }
}

impl ToDocument for Statement {
    fn document_with(&self, options: &DocumentOptions) -> Document {
        let mut doc = Document::new();
        doc.insert("type".to_string(), Value::from(self.kind_name()));

        match self {
            Statement::Return(value) => {
                doc.insert("value".to_string(), optional_document(value.as_ref(), options));
            }
            Statement::Assignment { target, value } => {
                doc.insert("target".to_string(), Value::Object(target.document_with(options)));
                doc.insert("value".to_string(), Value::Object(value.document_with(options)));
            }
            Statement::Expression(expr) => {
                doc.insert("expr".to_string(), Value::Object(expr.document_with(options)));
            }
            Statement::If { cond, if_true, elifs, if_false } => {
                doc.insert("cond".to_string(), Value::Object(cond.document_with(options)));
                add_document_array(&mut doc, "ifTrue", if_true, options);
                add_document_array(&mut doc, "elifs", elifs, options);
                match if_false {
                    Some(stmts) => add_document_array(&mut doc, "ifFalse", stmts, options),
                    None => {
                        doc.insert("ifFalse".to_string(), Value::Null);
                    }
                }
            }
            Statement::While { cond, body } => {
                doc.insert("cond".to_string(), Value::Object(cond.document_with(options)));
                add_document_array(&mut doc, "body", body, options);
            }
            Statement::Break | Statement::Continue => {}
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::OperatorType;
    use serde_json::json;

    #[test]
    fn test_return_document() {
        let stmt = Statement::Return(Some(Expr::id("q")));
        assert_eq!(
            Value::Object(stmt.to_document()),
            json!({"type": "RETURN", "value": {"literal": {"type": "ID", "value": "q"}}})
        );

        let bare = Statement::Return(None);
        assert_eq!(Value::Object(bare.to_document()), json!({"type": "RETURN", "value": null}));
    }

    #[test]
    fn test_assignment_document() {
        let stmt = Statement::assignment(Expr::id("y"), Expr::int(0));
        let doc = stmt.to_document();
        assert_eq!(doc["type"], "ASSIGNMENT");
        assert_eq!(doc["target"], json!({"literal": {"type": "ID", "value": "y"}}));
    }

    #[test]
    fn test_if_document() {
        let stmt = Statement::If {
            cond: Expr::binary(OperatorType::Eq, Expr::id("sel"), Expr::int(0)),
            if_true: vec![Statement::Return(Some(Expr::id("a")))],
            elifs: vec![IfBranch {
                cond: Expr::binary(OperatorType::Eq, Expr::id("sel"), Expr::int(1)),
                body: vec![Statement::Return(Some(Expr::id("b")))],
            }],
            if_false: None,
        };
        let doc = stmt.to_document();

        assert_eq!(doc["type"], "IF");
        assert_eq!(doc["ifTrue"].as_array().unwrap().len(), 1);
        assert_eq!(doc["elifs"][0]["body"][0]["type"], "RETURN");
        assert_eq!(doc["ifFalse"], Value::Null);

        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "cond", "ifTrue", "elifs", "ifFalse"]);
    }

    #[test]
    fn test_loop_control_documents() {
        assert_eq!(Value::Object(Statement::Break.to_document()), json!({"type": "BREAK"}));
        assert_eq!(Value::Object(Statement::Continue.to_document()), json!({"type": "CONTINUE"}));
    }

    #[test]
    fn test_while_document() {
        let stmt = Statement::While {
            cond: Expr::id("busy"),
            body: vec![Statement::Continue, Statement::Break],
        };
        let doc = stmt.to_document();
        assert_eq!(doc["body"], json!([{"type": "CONTINUE"}, {"type": "BREAK"}]));
    }
}
