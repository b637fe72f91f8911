//! Operator definitions for HDL expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operators shared by the VHDL and Verilog front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    // Unary
    Not, Neg, Plus, Abs,

    // Logical / bitwise
    And, Or, Xor, Nand, Nor, Xnor,

    // Arithmetic
    Add, Sub, Mul, Div, Mod, Rem, Pow,

    // Shifts and rotates
    Sll, Srl, Sla, Sra, Rol, Ror,

    // Relational
    Eq, Neq, Lt, Le, Gt, Ge,

    // Concatenation
    Concat,

    // Range direction
    Downto, To,

    // Indexing, selection and attributes
    Index, Dot, Apostrophe,
}

impl OperatorType {
    /// Canonical uppercase name used in documents
    pub fn name(&self) -> &'static str {
        match self {
            OperatorType::Not => "NOT",
            OperatorType::Neg => "NEG",
            OperatorType::Plus => "PLUS",
            OperatorType::Abs => "ABS",
            OperatorType::And => "AND",
            OperatorType::Or => "OR",
            OperatorType::Xor => "XOR",
            OperatorType::Nand => "NAND",
            OperatorType::Nor => "NOR",
            OperatorType::Xnor => "XNOR",
            OperatorType::Add => "ADD",
            OperatorType::Sub => "SUB",
            OperatorType::Mul => "MUL",
            OperatorType::Div => "DIV",
            OperatorType::Mod => "MOD",
            OperatorType::Rem => "REM",
            OperatorType::Pow => "POW",
            OperatorType::Sll => "SLL",
            OperatorType::Srl => "SRL",
            OperatorType::Sla => "SLA",
            OperatorType::Sra => "SRA",
            OperatorType::Rol => "ROL",
            OperatorType::Ror => "ROR",
            OperatorType::Eq => "EQ",
            OperatorType::Neq => "NEQ",
            OperatorType::Lt => "LT",
            OperatorType::Le => "LE",
            OperatorType::Gt => "GT",
            OperatorType::Ge => "GE",
            OperatorType::Concat => "CONCAT",
            OperatorType::Downto => "DOWNTO",
            OperatorType::To => "TO",
            OperatorType::Index => "INDEX",
            OperatorType::Dot => "DOT",
            OperatorType::Apostrophe => "APOSTROPHE",
        }
    }

    /// VHDL spelling of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorType::Not => "not",
            OperatorType::Neg | OperatorType::Sub => "-",
            OperatorType::Plus | OperatorType::Add => "+",
            OperatorType::Abs => "abs",
            OperatorType::And => "and",
            OperatorType::Or => "or",
            OperatorType::Xor => "xor",
            OperatorType::Nand => "nand",
            OperatorType::Nor => "nor",
            OperatorType::Xnor => "xnor",
            OperatorType::Mul => "*",
            OperatorType::Div => "/",
            OperatorType::Mod => "mod",
            OperatorType::Rem => "rem",
            OperatorType::Pow => "**",
            OperatorType::Sll => "sll",
            OperatorType::Srl => "srl",
            OperatorType::Sla => "sla",
            OperatorType::Sra => "sra",
            OperatorType::Rol => "rol",
            OperatorType::Ror => "ror",
            OperatorType::Eq => "=",
            OperatorType::Neq => "/=",
            OperatorType::Lt => "<",
            OperatorType::Le => "<=",
            OperatorType::Gt => ">",
            OperatorType::Ge => ">=",
            OperatorType::Concat => "&",
            OperatorType::Downto => "downto",
            OperatorType::To => "to",
            OperatorType::Index => "()",
            OperatorType::Dot => ".",
            OperatorType::Apostrophe => "'",
        }
    }

    /// Check if the operator takes a single operand
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            OperatorType::Not | OperatorType::Neg | OperatorType::Plus | OperatorType::Abs
        )
    }

    /// Check if the operator yields a boolean
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            OperatorType::Eq
                | OperatorType::Neq
                | OperatorType::Lt
                | OperatorType::Le
                | OperatorType::Gt
                | OperatorType::Ge
        )
    }
}

impl fmt::Display for OperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
