//! HDL converter - AST
//!
//! This crate provides the language-agnostic AST produced by the HDL front
//! ends and its serialization into interchange documents:
//! - Literals: symbol kinds and tagged literal values
//! - AST: expressions, variables, statements, functions and the file context
//! - Documents: the ordered key-value form every node serializes into

pub mod ast;
pub mod document;

pub use ast::{
    symbol_type_name, Context, Expr, Function, FunctionBuilder, IfBranch, LiteralValue,
    OperatorType, Statement, SymbolType, Variable,
};
pub use document::{Document, DocumentOptions, FunctionShape, Named, ToDocument};
