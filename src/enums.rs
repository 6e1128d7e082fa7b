//! Enumeration table collected from property definitions.
//!
//! A property with a non-empty `AllowedValues` list is an enumerated property.
//! It is rendered as a struct of string constants and never as a value
//! struct. The table records each such property in first-seen order. A later
//! property with the same code replaces the values but keeps the position.

use std::collections::BTreeMap;

use crate::schema::PropertyDefinition;

/// One enumerated property: its code and the raw allowed-value strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub code: String,
    pub values: Vec<String>,
}

/// Insertion-ordered map from property code to raw allowed values.
#[derive(Debug, Default, Clone)]
pub struct EnumTable {
    entries: Vec<EnumEntry>,
    index: BTreeMap<String, usize>,
    overwritten: usize,
}

impl EnumTable {
    /// Collect every enumerated property, in input order.
    ///
    /// Values are copied verbatim: no trimming, deduplication or sorting.
    pub fn collect(properties: &[PropertyDefinition]) -> Self {
        let mut table = Self::default();
        for prop in properties.iter().filter(|p| p.is_enumerated()) {
            let values = prop
                .allowed_values()
                .iter()
                .map(|v| v.raw().to_string())
                .collect();
            table.insert(prop.code_or_placeholder().to_string(), values);
        }
        tracing::debug!(
            enums = table.len(),
            overwritten = table.overwritten,
            "collected enumerations"
        );
        table
    }

    /// Insert or replace the values for `code`. Returns `true` if an earlier
    /// entry was overwritten.
    pub fn insert(&mut self, code: String, values: Vec<String>) -> bool {
        if let Some(&i) = self.index.get(&code) {
            tracing::warn!(code = %code, "duplicate enumerated property code, later values win");
            self.entries[i].values = values;
            self.overwritten += 1;
            return true;
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push(EnumEntry { code, values });
        false
    }

    /// Whether `code` names an enumerated property.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumEntry> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of duplicate codes that replaced an earlier entry.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AllowedValue;

    fn values<'a>(table: &'a EnumTable, code: &str) -> Vec<&'a str> {
        table
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn prop(code: &str, values: &[&str]) -> PropertyDefinition {
        PropertyDefinition {
            code: Some(code.to_string()),
            allowed_values: Some(
                values
                    .iter()
                    .map(|v| AllowedValue {
                        value: Some(v.to_string()),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn collects_only_properties_with_allowed_values() {
        let props = vec![
            prop("PoleUsage", &["1P", "3PN"]),
            prop("IsExternal", &[]),
            PropertyDefinition {
                code: Some("Width".to_string()),
                ..Default::default()
            },
        ];
        let table = EnumTable::collect(&props);

        assert_eq!(table.len(), 1);
        assert!(table.contains("PoleUsage"));
        assert!(!table.contains("IsExternal"));
        assert!(!table.contains("Width"));
        assert_eq!(values(&table, "PoleUsage"), ["1P", "3PN"]);
    }

    #[test]
    fn values_are_kept_verbatim() {
        let table = EnumTable::collect(&[prop("Status", &[" new ", "new", "new", ""])]);
        assert_eq!(values(&table, "Status"), [" new ", "new", "new", ""]);
    }

    #[test]
    fn preserves_insertion_order() {
        let table = EnumTable::collect(&[
            prop("Zeta", &["Z"]),
            prop("Alpha", &["A"]),
            prop("Mid", &["M"]),
        ]);
        let codes: Vec<&str> = table.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn duplicate_code_overwrites_in_place() {
        let table = EnumTable::collect(&[
            prop("Status", &["OLD"]),
            prop("Other", &["X"]),
            prop("Status", &["NEW", "NEWER"]),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.overwritten(), 1);
        assert_eq!(values(&table, "Status"), ["NEW", "NEWER"]);
        let codes: Vec<&str> = table.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["Status", "Other"]);
    }

    #[test]
    fn missing_code_uses_placeholder() {
        let mut p = prop("ignored", &["A"]);
        p.code = None;
        let table = EnumTable::collect(&[p]);
        assert!(table.contains("UnnamedProperty"));
    }
}
