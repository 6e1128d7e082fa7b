//! Generate C++ component headers from an IFC dictionary JSON export.
//!
//! `ifc-header-gen` reads the buildingSMART IFC dictionary export (a JSON
//! document with `Classes` and `Properties` arrays) and writes three headers
//! into an output folder, all inside `namespace IFC`:
//!
//! - `IfcEnums.h`: string constants for every property with allowed values
//! - `IfcClassComponents.h`: an empty tag struct per entity class
//! - `IfcPropertyComponents.h`: a `{ T value; }` struct per remaining property
//!
//! Output is deterministic: byte-identical across runs for the same input.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let dictionary = ifc_header_gen::schema::load_dictionary(Path::new("IFC.json"))?;
//! let report = ifc_header_gen::codegen::generate(&dictionary, Path::new("include/"))?;
//! for path in report.paths() {
//!     eprintln!("{}", path.display());
//! }
//! # Ok::<(), ifc_header_gen::error::Error>(())
//! ```

pub mod codegen;
pub mod enums;
pub mod error;
pub mod schema;
pub mod type_map;
