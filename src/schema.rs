//! IFC dictionary types and loading.
//!
//! The input is the buildingSMART dictionary export for IFC: a single JSON
//! document with top-level `Classes` and `Properties` arrays. Only the keys
//! the generator reads are modelled; every other key in the export is
//! ignored, and `null` values are treated as absent.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Placeholder struct name for a class without a `Code`.
pub const UNNAMED_CLASS: &str = "UnnamedClass";

/// Placeholder struct name for a property without a `Code`.
pub const UNNAMED_PROPERTY: &str = "UnnamedProperty";

/// The parsed IFC dictionary export.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IfcDictionary {
    /// Entity classes (e.g., `IfcWall`, `IfcDoor`). Input order is preserved.
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,

    /// Property definitions. Input order is preserved.
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

/// An IFC entity class.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassDefinition {
    /// Class code, usually `Ifc`-prefixed (e.g., `"IfcWall"`).
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable definition, emitted as a comment.
    #[serde(default)]
    pub definition: Option<String>,
}

impl ClassDefinition {
    /// The class code, or [`UNNAMED_CLASS`] when absent.
    pub fn code_or_placeholder(&self) -> &str {
        self.code.as_deref().unwrap_or(UNNAMED_CLASS)
    }
}

/// An IFC property definition.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDefinition {
    /// Property code (e.g., `"PoleUsage"`, `"IsExternal"`).
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Scalar type tag: `BOOLEAN`, `INTEGER`, `REAL`, `STRING`, ...
    #[serde(default)]
    pub data_type: Option<String>,

    /// Value shape tag: `SINGLE`, `LIST` or `COMPLEX`. Case varies in the wild.
    #[serde(default)]
    pub property_value_kind: Option<String>,

    /// Permitted literals. A non-empty list makes this an enumerated property.
    #[serde(default)]
    pub allowed_values: Option<Vec<AllowedValue>>,
}

impl PropertyDefinition {
    /// The property code, or [`UNNAMED_PROPERTY`] when absent.
    pub fn code_or_placeholder(&self) -> &str {
        self.code.as_deref().unwrap_or(UNNAMED_PROPERTY)
    }

    /// The allowed values, or an empty slice when absent.
    pub fn allowed_values(&self) -> &[AllowedValue] {
        self.allowed_values.as_deref().unwrap_or_default()
    }

    /// Whether this property is rendered as an enumeration.
    pub fn is_enumerated(&self) -> bool {
        !self.allowed_values().is_empty()
    }
}

/// One permitted literal of an enumerated property.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllowedValue {
    /// Raw display string (e.g., `"1P"`, `"3PN"`).
    #[serde(default)]
    pub value: Option<String>,
}

impl AllowedValue {
    /// The raw value, or `"UNKNOWN"` when absent.
    pub fn raw(&self) -> &str {
        self.value.as_deref().unwrap_or("UNKNOWN")
    }
}

/// Returns the text with surrounding whitespace removed, or `None` if blank.
pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Load an IFC dictionary export from disk.
pub fn load_dictionary(path: &Path) -> Result<IfcDictionary> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_dictionary(&content)
}

/// Parse an IFC dictionary export from a JSON string.
pub fn parse_dictionary(json: &str) -> Result<IfcDictionary> {
    let dictionary: IfcDictionary = serde_json::from_str(json)?;
    tracing::debug!(
        classes = dictionary.classes.len(),
        properties = dictionary.properties.len(),
        "parsed IFC dictionary"
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_dictionary_json() -> &'static str {
        r#"{
            "ModelVersion": "2.0",
            "DictionaryCode": "ifc",
            "Classes": [
                {
                    "Code": "IfcWall",
                    "Name": "Wall",
                    "Definition": "Vertical construction that bounds or subdivides spaces.",
                    "ClassType": "Class"
                },
                { "Code": "IfcDoor" }
            ],
            "Properties": [
                {
                    "Code": "IsExternal",
                    "Description": "Indication whether the element is designed for use in the exterior.",
                    "DataType": "Boolean",
                    "PropertyValueKind": "Single"
                },
                {
                    "Code": "PoleUsage",
                    "DataType": "String",
                    "AllowedValues": [
                        { "Code": "1P", "Value": "1P" },
                        { "Code": "3PN", "Value": "3PN" }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn parse_minimal_dictionary() {
        let dict = parse_dictionary(minimal_dictionary_json()).unwrap();
        assert_eq!(dict.classes.len(), 2);
        assert_eq!(dict.properties.len(), 2);
        assert_eq!(dict.classes[0].code.as_deref(), Some("IfcWall"));
        assert!(dict.classes[1].definition.is_none());
    }

    #[test]
    fn parse_property_fields() {
        let dict = parse_dictionary(minimal_dictionary_json()).unwrap();

        let is_external = &dict.properties[0];
        assert_eq!(is_external.data_type.as_deref(), Some("Boolean"));
        assert_eq!(is_external.property_value_kind.as_deref(), Some("Single"));
        assert!(!is_external.is_enumerated());

        let pole_usage = &dict.properties[1];
        assert!(pole_usage.is_enumerated());
        let raws: Vec<&str> = pole_usage.allowed_values().iter().map(|v| v.raw()).collect();
        assert_eq!(raws, ["1P", "3PN"]);
    }

    #[test]
    fn missing_top_level_keys_default_to_empty() {
        let dict = parse_dictionary("{}").unwrap();
        assert!(dict.classes.is_empty());
        assert!(dict.properties.is_empty());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let dict = parse_dictionary(
            r#"{"Properties": [{"Code": null, "Description": null, "AllowedValues": null}]}"#,
        )
        .unwrap();
        let prop = &dict.properties[0];
        assert_eq!(prop.code_or_placeholder(), UNNAMED_PROPERTY);
        assert!(prop.description.is_none());
        assert!(!prop.is_enumerated());
    }

    #[test]
    fn missing_allowed_value_is_unknown() {
        let dict =
            parse_dictionary(r#"{"Properties": [{"Code": "X", "AllowedValues": [{}]}]}"#).unwrap();
        assert_eq!(dict.properties[0].allowed_values()[0].raw(), "UNKNOWN");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_dictionary(r#"{"Classes": [ "#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn non_blank_trims_and_filters() {
        assert_eq!(non_blank(Some("  A door \n")), Some("A door"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
