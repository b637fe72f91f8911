//! HDL converter - Common Types and Errors
//!
//! This crate contains the error type and small shared definitions used by
//! the AST crate and the driver.

pub mod error;
pub mod language;

pub use error::{HdlError, Result};
pub use language::Language;
