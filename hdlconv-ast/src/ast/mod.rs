//! Abstract Syntax Tree definitions for HDL sources
//!
//! The AST is built bottom-up by a language front end and walked top-down by
//! exporters through [`crate::document::ToDocument`].

pub mod context;
pub mod expressions;
pub mod function;
pub mod literals;
pub mod ops;
pub mod statements;
pub mod variables;

// Re-export commonly used types at module level
pub use context::Context;
pub use expressions::Expr;
pub use function::{Function, FunctionBuilder};
pub use literals::{symbol_type_name, LiteralValue, SymbolType};
pub use ops::OperatorType;
pub use statements::{IfBranch, Statement};
pub use variables::Variable;
