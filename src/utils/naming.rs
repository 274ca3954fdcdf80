use std::collections::HashSet;

use super::helpers::{capitalize, combine, first_char, lower};
use crate::{EnumKind, GeneratorError};

const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Predeclared identifiers plus the imports of the generated file; shadowing
/// any of them at package level breaks the generated bodies.
const GO_RESERVED: [&str; 46] = [
    "any", "append", "bool", "byte", "cap", "clear", "close", "comparable", "complex",
    "complex128", "complex64", "copy", "delete", "error", "errors", "false", "float32",
    "float64", "fmt", "imag", "int", "int16", "int32", "int64", "int8", "iota", "len", "make",
    "max", "min", "new", "nil", "panic", "print", "println", "real", "recover", "rune",
    "string", "true", "uint", "uint16", "uint32", "uint64", "uint8", "uintptr",
];

/// Go package, directory and file stem for an enum name.
pub fn package_name(enum_name: &str) -> String {
    lower(enum_name)
}

/// Exported Go identifier for a value.
pub fn constant_name(value: &str) -> String {
    capitalize(value)
}

pub fn generated_file_name(enum_name: &str) -> String {
    format!("{}.gen.go", package_name(enum_name))
}

/// Method receiver: the lowercased first letter, `e` (or `v`) when that is not
/// an ASCII letter or would shadow the type itself.
pub fn receiver_name(enum_name: &str) -> String {
    let receiver = lower(&first_char(enum_name));
    let fallback = if enum_name == "e" { "v" } else { "e" };
    let first = receiver.chars().next();
    match first {
        Some(c) if c.is_ascii_alphabetic() && receiver != enum_name => receiver,
        _ => fallback.to_owned(),
    }
}

pub fn parse_func(enum_name: &str) -> String {
    combine("Parse", enum_name)
}

pub fn values_func(enum_name: &str) -> String {
    combine(enum_name, "Values")
}

pub fn invalid_error(enum_name: &str) -> String {
    combine("ErrInvalid", enum_name)
}

/// Lookup table holding the value names of an int enum.
pub fn names_table(enum_name: &str) -> String {
    combine(&package_name(enum_name), "Names")
}

/// Method returning the backing value, e.g. `Uint8`.
pub fn backing_method(backing: &str) -> String {
    capitalize(backing)
}

/// Constructor from the backing type, e.g. `LevelFromUint8`.
pub fn from_func(enum_name: &str, backing: &str) -> String {
    format!("{}From{}", enum_name, backing_method(backing))
}

pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            name != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Package-level identifiers the templates emit besides the value constants.
fn generated_identifiers(enum_name: &str, kind: &EnumKind) -> Vec<String> {
    let mut identifiers = vec![
        enum_name.to_owned(),
        parse_func(enum_name),
        values_func(enum_name),
        invalid_error(enum_name),
    ];
    if let EnumKind::Int { backing } = kind {
        identifiers.push(names_table(enum_name));
        if let Some(backing) = backing {
            identifiers.push(from_func(enum_name, backing));
        }
    }
    identifiers
}

/// Rejects names that would make the generated file fail to compile.
pub fn check_names(
    enum_name: &str,
    kind: &EnumKind,
    values: &[String],
) -> Result<(), GeneratorError> {
    let package = package_name(enum_name);
    if !is_go_identifier(enum_name)
        || GO_KEYWORDS.contains(&enum_name)
        || GO_RESERVED.contains(&enum_name)
        || GO_KEYWORDS.contains(&package.as_str())
    {
        return Err(GeneratorError::Usage(format!(
            "enum name '{}' cannot be used as a Go type and package name",
            enum_name
        )));
    }

    let mut taken: HashSet<String> = generated_identifiers(enum_name, kind).into_iter().collect();
    for value in values {
        let constant = constant_name(value);
        if !is_go_identifier(&constant) {
            return Err(GeneratorError::Usage(format!(
                "value '{}' does not form a Go identifier",
                value
            )));
        }
        if !taken.insert(constant.clone()) {
            return Err(GeneratorError::Usage(format!(
                "value '{}' collides with another identifier named {}",
                value, constant
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_names_for_enum() {
        assert_eq!(package_name("HttpMethod"), "httpmethod");
        assert_eq!(generated_file_name("HttpMethod"), "httpmethod.gen.go");
        assert_eq!(parse_func("HttpMethod"), "ParseHttpMethod");
        assert_eq!(values_func("HttpMethod"), "HttpMethodValues");
        assert_eq!(invalid_error("HttpMethod"), "ErrInvalidHttpMethod");
        assert_eq!(names_table("HttpMethod"), "httpmethodNames");
        assert_eq!(from_func("Level", "uint8"), "LevelFromUint8");
    }

    #[test]
    fn test_constant_name_is_exported() {
        assert_eq!(constant_name("red"), "Red");
        assert_eq!(constant_name("Green"), "Green");
    }

    #[test]
    fn test_receiver_name() {
        assert_eq!(receiver_name("Color"), "c");
        assert_eq!(receiver_name("_x"), "e");
        assert_eq!(receiver_name("Ärger"), "e");
        assert_eq!(receiver_name("s"), "e");
        assert_eq!(receiver_name("e"), "v");
    }

    #[test]
    fn test_is_go_identifier() {
        assert!(is_go_identifier("Red"));
        assert!(is_go_identifier("_x"));
        assert!(is_go_identifier("Größe2"));
        assert!(!is_go_identifier("_"));
        assert!(!is_go_identifier(""));
        assert!(!is_go_identifier("2xl"));
        assert!(!is_go_identifier("in-progress"));
    }

    #[test]
    fn test_enum_named_like_helper_is_accepted() {
        for name in ["Values", "Parse", "ErrInvalid"] {
            assert!(check_names(name, &EnumKind::String, &values(&["A", "B"])).is_ok());
        }
    }

    #[test]
    fn test_first_letter_case_collision_is_rejected() {
        let result = check_names("Color", &EnumKind::String, &values(&["red", "Red"]));
        assert!(matches!(result, Err(GeneratorError::Usage(_))));
    }

    #[test]
    fn test_value_colliding_with_generated_identifier_is_rejected() {
        for value in ["Color", "ParseColor", "ColorValues", "ErrInvalidColor"] {
            let result = check_names("Color", &EnumKind::String, &values(&[value]));
            assert!(matches!(result, Err(GeneratorError::Usage(_))), "{}", value);
        }
        let typed = EnumKind::Int {
            backing: Some("uint8".to_owned()),
        };
        assert!(check_names("Level", &typed, &values(&["LevelFromUint8"])).is_err());
    }

    #[test]
    fn test_unusable_enum_names_are_rejected() {
        for name in ["_", "2D", "Func", "type", "string", "fmt", "my-enum"] {
            let result = check_names(name, &EnumKind::String, &values(&["A"]));
            assert!(matches!(result, Err(GeneratorError::Usage(_))), "{}", name);
        }
    }

    #[test]
    fn test_unusable_values_are_rejected() {
        for value in ["_", "", "1st", "in progress"] {
            let result = check_names("Color", &EnumKind::String, &values(&[value]));
            assert!(matches!(result, Err(GeneratorError::Usage(_))), "{:?}", value);
        }
    }
}
