//! Expression AST nodes
//!
//! Expressions are built bottom-up by the parser. Each node owns its operands.

use super::literals::LiteralValue;
use super::ops::OperatorType;
use crate::document::{add_document_array, Document, DocumentOptions, ToDocument};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal symbol (identifier, number, string, open, all, null)
    Literal(LiteralValue),

    /// Unary operation
    Unary {
        op: OperatorType,
        operand: Box<Expr>,
    },

    /// Binary operation, including ranges (`7 downto 0`) and attributes
    Binary {
        op: OperatorType,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional expression (`a when c else b`, `c ? a : b`)
    Ternary {
        cond: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },

    /// Function call or indexed name
    Call {
        function: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Identifier reference
    pub fn id(name: impl Into<String>) -> Self {
        Expr::Literal(LiteralValue::id(name))
    }

    /// Integer literal
    pub fn int(value: impl Into<BigInt>) -> Self {
        Expr::Literal(LiteralValue::int(value))
    }

    pub fn unary(op: OperatorType, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: OperatorType, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ternary(cond: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Ternary {
            cond: Box::new(cond),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    pub fn call(function: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            function: Box::new(function),
            args,
        }
    }

    /// Literal payload, if this is a literal
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Expr::Literal(value) => Some(value),
            _ => None,
        }
    }
}

impl From<LiteralValue> for Expr {
    fn from(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }
}

impl ToDocument for Expr {
    fn document_with(&self, options: &DocumentOptions) -> Document {
        let (key, body) = match self {
            Expr::Literal(value) => return value.document_with(options),
            Expr::Unary { op, operand } => {
                let mut body = Document::new();
                body.insert("operator".to_string(), Value::from(op.name()));
                body.insert("op0".to_string(), Value::Object(operand.document_with(options)));
                ("unOperator", body)
            }
            Expr::Binary { op, left, right } => {
                let mut body = Document::new();
                body.insert("op0".to_string(), Value::Object(left.document_with(options)));
                body.insert("operator".to_string(), Value::from(op.name()));
                body.insert("op1".to_string(), Value::Object(right.document_with(options)));
                ("binOperator", body)
            }
            Expr::Ternary { cond, if_true, if_false } => {
                let mut body = Document::new();
                body.insert("cond".to_string(), Value::Object(cond.document_with(options)));
                body.insert("ifTrue".to_string(), Value::Object(if_true.document_with(options)));
                body.insert("ifFalse".to_string(), Value::Object(if_false.document_with(options)));
                ("ternary", body)
            }
            Expr::Call { function, args } => {
                let mut body = Document::new();
                body.insert("fn".to_string(), Value::Object(function.document_with(options)));
                add_document_array(&mut body, "args", args, options);
                ("call", body)
            }
        };

        let mut doc = Document::new();
        doc.insert(key.to_string(), Value::Object(body));
        doc
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Unary { op, operand } => write!(f, "{} ({})", op, operand),
            Expr::Binary { op: OperatorType::Index, left, right } => {
                write!(f, "{}({})", left, right)
            }
            Expr::Binary { op: OperatorType::Dot, left, right } => write!(f, "{}.{}", left, right),
            Expr::Binary { op: OperatorType::Apostrophe, left, right } => {
                write!(f, "{}'{}", left, right)
            }
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Ternary { cond, if_true, if_false } => {
                write!(f, "{} when {} else {}", if_true, cond, if_false)
            }
            Expr::Call { function, args } => {
                write!(f, "{}(", function)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
