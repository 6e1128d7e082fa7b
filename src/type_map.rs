//! Maps IFC property types to C++ type strings, and derives C++ names.
//!
//! # Type Mapping Table
//!
//! | `PropertyValueKind` | `DataType` | C++ type | Notes |
//! |---------------------|------------|----------|-------|
//! | `SINGLE` | `BOOLEAN` | `bool` | |
//! | `SINGLE` | `INTEGER` | `int` | |
//! | `SINGLE` | `REAL` | `double` | |
//! | `SINGLE` | `STRING` or unknown | `std::string` | |
//! | `LIST` | any | `std::vector<T>` | `T` picked as for `SINGLE` |
//! | `COMPLEX` | any | `std::string` | Placeholder, no decomposition |
//! | missing or unknown | any | `std::string` | Fallback |
//!
//! Both tags are matched case-insensitively.

use std::fmt;

/// Prefix carried by IFC entity codes (e.g., `IfcWall`).
pub const IFC_PREFIX: &str = "Ifc";

/// A C++ scalar value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Bool,
    Int,
    Double,
    String,
}

impl ScalarType {
    /// Map a `DataType` tag to a scalar, or `None` if the tag is missing or
    /// unrecognized.
    pub fn from_data_type(data_type: Option<&str>) -> Option<Self> {
        match data_type.unwrap_or_default().to_uppercase().as_str() {
            "BOOLEAN" => Some(Self::Bool),
            "INTEGER" => Some(Self::Int),
            "REAL" => Some(Self::Double),
            "STRING" => Some(Self::String),
            _ => None,
        }
    }

    /// The C++ spelling of this type.
    pub fn cpp_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "std::string",
        }
    }
}

/// The type of the single `value` field in a generated property struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Scalar(ScalarType),
    List(ScalarType),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(scalar.cpp_name()),
            Self::List(element) => write!(f, "std::vector<{}>", element.cpp_name()),
        }
    }
}

/// Map a property's `DataType` and `PropertyValueKind` to its C++ value type.
///
/// The flag is `true` when the type came from the `std::string` fallback
/// rather than a recognized tag pair. `COMPLEX` counts as recognized.
pub fn map_value_type(
    data_type: Option<&str>,
    property_value_kind: Option<&str>,
) -> (ValueType, bool) {
    let scalar = ScalarType::from_data_type(data_type);
    let element = scalar.unwrap_or(ScalarType::String);
    match property_value_kind.unwrap_or_default().to_uppercase().as_str() {
        "LIST" => (ValueType::List(element), scalar.is_none()),
        "SINGLE" => (ValueType::Scalar(element), scalar.is_none()),
        "COMPLEX" => (ValueType::Scalar(ScalarType::String), false),
        _ => (ValueType::Scalar(ScalarType::String), true),
    }
}

/// Strip the `Ifc` prefix from an entity code.
///
/// - `"IfcWall"` → `"Wall"`
/// - `"Wall"` → `"Wall"`
pub fn strip_ifc_prefix(code: &str) -> &str {
    code.strip_prefix(IFC_PREFIX).unwrap_or(code)
}

/// Convert a raw allowed value into a C++ identifier for its constant.
///
/// - `""` → `"UNKNOWN"`
/// - `"1P"` → `"_1P"`
/// - `"a-b c"` → `"A_B_C"`
///
/// A leading decimal digit gets an underscore prefix, every character
/// that is neither alphanumeric nor `_` becomes `_`, and the result is
/// upper-cased. Distinct inputs may map to the same identifier.
pub fn sanitize_identifier(raw: &str) -> String {
    let Some(first) = raw.chars().next() else {
        return "UNKNOWN".to_string();
    };

    let mut ident = String::with_capacity(raw.len() + 1);
    if first.is_ascii_digit() {
        ident.push('_');
    }
    ident.extend(raw.chars().map(|c| {
        if c.is_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    ident.to_uppercase()
}
