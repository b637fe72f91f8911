//! Source languages understood by the front end

use crate::error::HdlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HDL a translation unit was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Vhdl,
    Verilog,
    SystemVerilog,
}

impl Language {
    /// Canonical lowercase name, as written into documents
    pub fn name(&self) -> &'static str {
        match self {
            Language::Vhdl => "vhdl",
            Language::Verilog => "verilog",
            Language::SystemVerilog => "system_verilog",
        }
    }

    /// Check if identifiers are case-insensitive in this language
    pub fn is_case_insensitive(&self) -> bool {
        matches!(self, Language::Vhdl)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = HdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vhdl" => Ok(Language::Vhdl),
            "verilog" => Ok(Language::Verilog),
            "system_verilog" | "systemverilog" | "sv" => Ok(Language::SystemVerilog),
            _ => Err(HdlError::InvalidLanguage {
                value: s.to_string(),
            }),
        }
    }
}
