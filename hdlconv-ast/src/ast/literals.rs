//! Literal tokens
//!
//! Every literal the lexer produces is one of seven symbol kinds. The kind and
//! its payload travel together in [`LiteralValue`], so an integer tag can never
//! carry text and `open` can never carry a number.

use crate::document::{Document, DocumentOptions, ToDocument};
use hdlconv_common::HdlError;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Kind of a literal symbol, numbered as in the lexer tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum SymbolType {
    Id = 0,
    Int = 1,
    Float = 2,
    String = 3,
    Open = 4,
    All = 5,
    Null = 6,
}

impl SymbolType {
    /// All symbol kinds in tag order
    pub const VARIANTS: [SymbolType; 7] = [
        SymbolType::Id,
        SymbolType::Int,
        SymbolType::Float,
        SymbolType::String,
        SymbolType::Open,
        SymbolType::All,
        SymbolType::Null,
    ];

    /// Canonical uppercase name
    pub fn name(&self) -> &'static str {
        match self {
            SymbolType::Id => "ID",
            SymbolType::Int => "INT",
            SymbolType::Float => "FLOAT",
            SymbolType::String => "STRING",
            SymbolType::Open => "OPEN",
            SymbolType::All => "ALL",
            SymbolType::Null => "NULL",
        }
    }

    /// Look up a kind by its raw tag value
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index).copied())
    }

    /// Raw tag value
    pub fn raw(&self) -> i32 {
        *self as i32
    }
}

/// Name of a raw tag value; anything out of range reads as "NULL"
pub fn symbol_type_name(raw: i32) -> &'static str {
    SymbolType::from_raw(raw).unwrap_or(SymbolType::Null).name()
}

impl TryFrom<i32> for SymbolType {
    type Error = HdlError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        SymbolType::from_raw(raw).ok_or(HdlError::InvalidSymbolType { raw })
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A literal token together with its payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// Identifier reference
    Id(String),

    /// Integer literal of any width
    Int(BigInt),

    /// Real literal
    Float(f64),

    /// String literal (without quotes)
    String(String),

    /// VHDL `open` port association
    Open,

    /// VHDL `all` (sensitivity lists, `use lib.pkg.all`)
    All,

    /// VHDL `null`
    Null,
}

impl LiteralValue {
    pub fn id(name: impl Into<String>) -> Self {
        LiteralValue::Id(name.into())
    }

    pub fn int(value: impl Into<BigInt>) -> Self {
        LiteralValue::Int(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        LiteralValue::String(value.into())
    }

    pub fn symbol_type(&self) -> SymbolType {
        match self {
            LiteralValue::Id(_) => SymbolType::Id,
            LiteralValue::Int(_) => SymbolType::Int,
            LiteralValue::Float(_) => SymbolType::Float,
            LiteralValue::String(_) => SymbolType::String,
            LiteralValue::Open => SymbolType::Open,
            LiteralValue::All => SymbolType::All,
            LiteralValue::Null => SymbolType::Null,
        }
    }

    /// Uppercase name of this literal's kind
    pub fn display_name(&self) -> &'static str {
        self.symbol_type().name()
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            LiteralValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            LiteralValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Text payload of identifiers and strings
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LiteralValue::Id(text) | LiteralValue::String(text) => Some(text),
            _ => None,
        }
    }

    /// Payload as a document value
    fn payload_value(&self) -> Value {
        match self {
            LiteralValue::Id(text) | LiteralValue::String(text) => Value::String(text.clone()),
            LiteralValue::Int(value) => big_int_value(value),
            // JSON has no NaN or infinity
            LiteralValue::Float(value) => Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            LiteralValue::Open | LiteralValue::All | LiteralValue::Null => Value::Null,
        }
    }
}

/// Integers that fit a JSON number stay numbers, wider ones become decimal text
fn big_int_value(value: &BigInt) -> Value {
    if let Ok(small) = i64::try_from(value) {
        Value::from(small)
    } else if let Ok(small) = u64::try_from(value) {
        Value::from(small)
    } else {
        Value::String(value.to_string())
    }
}

impl ToDocument for LiteralValue {
    fn document_with(&self, _options: &DocumentOptions) -> Document {
        let mut literal = Document::new();
        literal.insert("type".to_string(), Value::from(self.display_name()));
        literal.insert("value".to_string(), self.payload_value());

        let mut doc = Document::new();
        doc.insert("literal".to_string(), Value::Object(literal));
        doc
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Id(name) => write!(f, "{}", name),
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::String(text) => write!(f, "\"{}\"", text),
            LiteralValue::Open => write!(f, "open"),
            LiteralValue::All => write!(f, "all"),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbol_type_names() {
        let names: Vec<&str> = SymbolType::VARIANTS.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["ID", "INT", "FLOAT", "STRING", "OPEN", "ALL", "NULL"]);
    }

    #[test]
    fn test_raw_tag_names() {
        for symbol in SymbolType::VARIANTS {
            assert_eq!(symbol_type_name(symbol.raw()), symbol.name());
        }
        assert_eq!(symbol_type_name(7), "NULL");
        assert_eq!(symbol_type_name(-1), "NULL");
        assert_eq!(symbol_type_name(i32::MAX), "NULL");
    }

    #[test]
    fn test_try_from_raw() {
        assert_eq!(SymbolType::try_from(2), Ok(SymbolType::Float));
        assert_eq!(
            SymbolType::try_from(9),
            Err(HdlError::InvalidSymbolType { raw: 9 })
        );
    }

    #[test]
    fn test_literal_kind_matches_payload() {
        assert_eq!(LiteralValue::id("clk").symbol_type(), SymbolType::Id);
        assert_eq!(LiteralValue::int(3).display_name(), "INT");
        assert_eq!(LiteralValue::Float(0.5).display_name(), "FLOAT");
        assert_eq!(LiteralValue::string("abc").display_name(), "STRING");
        assert_eq!(LiteralValue::Open.display_name(), "OPEN");
        assert_eq!(LiteralValue::All.display_name(), "ALL");
        assert_eq!(LiteralValue::Null.display_name(), "NULL");
    }

    #[test]
    fn test_payload_accessors() {
        let value = LiteralValue::int(42);
        assert_eq!(value.as_int(), Some(&BigInt::from(42)));
        assert_eq!(value.as_float(), None);
        assert_eq!(value.as_text(), None);

        assert_eq!(LiteralValue::id("rst").as_text(), Some("rst"));
        assert_eq!(LiteralValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(LiteralValue::Open.as_text(), None);
    }

    #[test]
    fn test_literal_documents() {
        assert_eq!(
            Value::Object(LiteralValue::id("clk").to_document()),
            json!({"literal": {"type": "ID", "value": "clk"}})
        );
        assert_eq!(
            Value::Object(LiteralValue::Float(2.5).to_document()),
            json!({"literal": {"type": "FLOAT", "value": 2.5}})
        );
        assert_eq!(
            Value::Object(LiteralValue::All.to_document()),
            json!({"literal": {"type": "ALL", "value": null}})
        );
    }

    #[test]
    fn test_wide_integer_document() {
        let wide: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            Value::Object(LiteralValue::Int(wide).to_document()),
            json!({"literal": {"type": "INT", "value": "123456789012345678901234567890"}})
        );
        assert_eq!(
            Value::Object(LiteralValue::int(u64::MAX).to_document()),
            json!({"literal": {"type": "INT", "value": u64::MAX}})
        );
    }

    #[test]
    fn test_non_finite_float_document() {
        let doc = LiteralValue::Float(f64::NAN).to_document();
        assert_eq!(doc["literal"]["value"], Value::Null);
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(LiteralValue::id("a").to_string(), "a");
        assert_eq!(LiteralValue::int(-7).to_string(), "-7");
        assert_eq!(LiteralValue::string("hi").to_string(), "\"hi\"");
        assert_eq!(LiteralValue::Open.to_string(), "open");
    }
}
