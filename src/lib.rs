mod errors;
pub mod generator;
pub mod utils;

use std::{fmt, str::FromStr};

pub use errors::GeneratorError;

/// Go integer types accepted as an explicit backing type in `int:<type>`.
pub const GO_INTEGER_TYPES: [&str; 13] = [
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "byte", "rune",
];

const DEFAULT_INT_BACKING: &str = "int";

/// Which template family renders the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumKind {
    String,
    /// `backing` is set when the kind token names the underlying type (`int:uint8`).
    Int { backing: Option<String> },
}

impl EnumKind {
    /// Underlying Go type of the generated enum.
    pub fn go_type(&self) -> &str {
        match self {
            EnumKind::String => "string",
            EnumKind::Int { backing } => backing.as_deref().unwrap_or(DEFAULT_INT_BACKING),
        }
    }

    pub fn has_explicit_backing(&self) -> bool {
        matches!(self, EnumKind::Int { backing: Some(_) })
    }
}

impl FromStr for EnumKind {
    type Err = GeneratorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim().to_ascii_lowercase();
        match token.split_once(':') {
            None if token == "string" => Ok(EnumKind::String),
            None if token == "int" => Ok(EnumKind::Int { backing: None }),
            Some(("int", backing)) if GO_INTEGER_TYPES.contains(&backing) => Ok(EnumKind::Int {
                backing: Some(backing.to_owned()),
            }),
            Some(("int", backing)) => Err(GeneratorError::Usage(format!(
                "unsupported backing type '{}', expected one of: {}",
                backing,
                GO_INTEGER_TYPES.join(", ")
            ))),
            _ => Err(GeneratorError::Usage(format!(
                "unknown enum kind '{}', expected 'string', 'int' or 'int:<type>'",
                token
            ))),
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumKind::String => write!(f, "string"),
            EnumKind::Int { backing: None } => write!(f, "int"),
            EnumKind::Int {
                backing: Some(backing),
            } => write!(f, "int:{}", backing),
        }
    }
}
