//! C++ header generation from an IFC dictionary.
//!
//! Produces three headers, all inside `namespace IFC`:
//! - `IfcEnums.h`: one struct of `static constexpr const char*` constants per
//!   enumerated property
//! - `IfcClassComponents.h`: one empty struct per entity class, `Ifc` prefix
//!   stripped
//! - `IfcPropertyComponents.h`: one single-field struct per non-enumerated
//!   property
//!
//! The generated output is deterministic: identical input always produces
//! byte-identical output. Entries follow input order.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::enums::EnumTable;
use crate::error::{Error, Result};
use crate::schema::{ClassDefinition, IfcDictionary, PropertyDefinition, non_blank};
use crate::type_map::{map_value_type, sanitize_identifier, strip_ifc_prefix};

/// Namespace wrapping every generated declaration.
pub const NAMESPACE: &str = "IFC";

pub const ENUM_HEADER_FILE: &str = "IfcEnums.h";
pub const CLASS_HEADER_FILE: &str = "IfcClassComponents.h";
pub const PROPERTY_HEADER_FILE: &str = "IfcPropertyComponents.h";

const ENUM_GUARD: &str = "IFC_ENUM_COMPONENTS_H";
const CLASS_GUARD: &str = "IFC_CLASS_COMPONENTS_H";
const PROPERTY_GUARD: &str = "IFC_PROPERTY_COMPONENTS_H";

const ENUM_BANNER: &str = "// ===== AUTO-GENERATED ENUM-STRINGS =====";
const CLASS_BANNER: &str = "// ===== AUTO-GENERATED CLASSES =====";

/// Statistics collected during generation for reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub classes_generated: usize,
    pub enums_generated: usize,
    pub properties_generated: usize,
    pub enum_properties_skipped: usize,
    pub duplicate_enum_codes: usize,
    pub identifier_collisions: usize,
    pub unknown_types_defaulted: usize,
}

/// The three rendered headers, not yet written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedHeaders {
    pub enums: String,
    pub classes: String,
    pub properties: String,
    pub stats: GenerationStats,
}

/// Paths of the written headers plus generation statistics.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub enum_header: PathBuf,
    pub class_header: PathBuf,
    pub property_header: PathBuf,
    pub stats: GenerationStats,
}

impl GenerationReport {
    /// Written paths in generation order.
    pub fn paths(&self) -> [&Path; 3] {
        [&self.enum_header, &self.class_header, &self.property_header]
    }
}

/// Render all three headers in memory.
///
/// The enumeration table is built once and shared by the enum and property
/// passes, so every property ends up in exactly one of the two headers.
pub fn render(dictionary: &IfcDictionary) -> GeneratedHeaders {
    let mut stats = GenerationStats::default();

    let enum_table = EnumTable::collect(&dictionary.properties);
    stats.duplicate_enum_codes = enum_table.overwritten();

    let enums = write_enum_header(&enum_table, &mut stats);
    let classes = write_class_header(&dictionary.classes, &mut stats);
    let properties = write_property_header(&dictionary.properties, &enum_table, &mut stats);

    GeneratedHeaders {
        enums,
        classes,
        properties,
        stats,
    }
}

/// Render the headers and write them into `output_dir`, creating it if needed.
///
/// Files are written one after another; a failure aborts the run and may
/// leave earlier files in place.
pub fn generate(dictionary: &IfcDictionary, output_dir: &Path) -> Result<GenerationReport> {
    let headers = render(dictionary);

    let report = GenerationReport {
        enum_header: output_dir.join(ENUM_HEADER_FILE),
        class_header: output_dir.join(CLASS_HEADER_FILE),
        property_header: output_dir.join(PROPERTY_HEADER_FILE),
        stats: headers.stats,
    };

    write_file(&report.enum_header, &headers.enums)?;
    write_file(&report.class_header, &headers.classes)?;
    write_file(&report.property_header, &headers.properties)?;

    Ok(report)
}

// ── Enumeration header ─────────────────────────────────────────────────

/// Render `IfcEnums.h` from an enumeration table.
pub fn render_enum_header(table: &EnumTable) -> String {
    write_enum_header(table, &mut GenerationStats::default())
}

fn write_enum_header(table: &EnumTable, stats: &mut GenerationStats) -> String {
    let mut out = String::new();
    write_prologue(&mut out, ENUM_GUARD, Some(ENUM_BANNER));

    for entry in table.iter() {
        let mut seen = BTreeSet::new();

        writeln!(out, "struct {} {{", entry.code).unwrap();
        for raw in &entry.values {
            let ident = sanitize_identifier(raw);
            if !seen.insert(ident.clone()) {
                tracing::warn!(
                    code = %entry.code,
                    identifier = %ident,
                    value = %raw,
                    "allowed values collide on the same identifier"
                );
                stats.identifier_collisions += 1;
            }
            writeln!(out, "    static constexpr const char* {ident} = \"{raw}\";").unwrap();
        }
        writeln!(out, "}};").unwrap();
        writeln!(out).unwrap();

        stats.enums_generated += 1;
    }

    write_epilogue(&mut out, ENUM_GUARD);
    tracing::debug!(enums = stats.enums_generated, "rendered enum header");
    out
}

// ── Class header ───────────────────────────────────────────────────────

/// Render `IfcClassComponents.h` from the dictionary's classes.
pub fn render_class_header(classes: &[ClassDefinition]) -> String {
    write_class_header(classes, &mut GenerationStats::default())
}

fn write_class_header(classes: &[ClassDefinition], stats: &mut GenerationStats) -> String {
    let mut out = String::new();
    write_prologue(&mut out, CLASS_GUARD, Some(CLASS_BANNER));

    for cls in classes {
        let name = strip_ifc_prefix(cls.code_or_placeholder());

        if let Some(definition) = non_blank(cls.definition.as_deref()) {
            writeln!(out, "// {definition}").unwrap();
        }
        writeln!(out, "struct {name} {{}};").unwrap();
        writeln!(out).unwrap();

        stats.classes_generated += 1;
    }

    write_epilogue(&mut out, CLASS_GUARD);
    tracing::debug!(classes = stats.classes_generated, "rendered class header");
    out
}

// ── Property header ────────────────────────────────────────────────────

/// Render `IfcPropertyComponents.h`, skipping every property whose code is
/// in `enum_table`.
pub fn render_property_header(properties: &[PropertyDefinition], enum_table: &EnumTable) -> String {
    write_property_header(properties, enum_table, &mut GenerationStats::default())
}

fn write_property_header(
    properties: &[PropertyDefinition],
    enum_table: &EnumTable,
    stats: &mut GenerationStats,
) -> String {
    let mut out = String::new();
    write_prologue(&mut out, PROPERTY_GUARD, None);

    for prop in properties {
        let code = prop.code_or_placeholder();
        if enum_table.contains(code) {
            stats.enum_properties_skipped += 1;
            continue;
        }

        if let Some(description) = non_blank(prop.description.as_deref()) {
            writeln!(out, "// {description}").unwrap();
        }

        let data_type = prop.data_type.as_deref();
        let kind = prop.property_value_kind.as_deref();
        let (cpp_type, defaulted) = map_value_type(data_type, kind);
        if defaulted {
            tracing::trace!(
                code,
                data_type = data_type.unwrap_or_default(),
                kind = kind.unwrap_or_default(),
                "defaulted property type to std::string"
            );
            stats.unknown_types_defaulted += 1;
        }

        writeln!(out, "struct {code} {{ {cpp_type} value; }};").unwrap();
        writeln!(out).unwrap();

        stats.properties_generated += 1;
    }

    write_epilogue(&mut out, PROPERTY_GUARD);
    tracing::debug!(
        properties = stats.properties_generated,
        skipped = stats.enum_properties_skipped,
        "rendered property header"
    );
    out
}

// ── Shared helpers ─────────────────────────────────────────────────────

/// Header guard, namespace opening and optional banner.
fn write_prologue(out: &mut String, guard: &str, banner: Option<&str>) {
    writeln!(out, "#ifndef {guard}").unwrap();
    writeln!(out, "#define {guard}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "namespace {NAMESPACE} {{").unwrap();
    writeln!(out).unwrap();
    if let Some(banner) = banner {
        writeln!(out, "{banner}").unwrap();
        writeln!(out).unwrap();
    }
}

/// Namespace closing and header guard end. Leaves one trailing newline.
fn write_epilogue(out: &mut String, guard: &str) {
    writeln!(out, "}} // namespace {NAMESPACE}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "#endif // {guard}").unwrap();
}

/// Write content to a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote header");
    Ok(())
}
