//! TypeScript interface generation from Go structs.
//!
//! `gotots-typegen` scans a directory of Go sources, extracts every struct
//! declaration into a small IR, and renders the collection as TypeScript
//! interfaces.
//!
//! # Architecture
//!
//! ```text
//! Directory walk       Reader             IR                    Backend
//! ──────────────    ────────────    ──────────────────    ─────────────────────
//! *.go files ─────> tree-sitter ──> AggregatedCollection ──> TypeScript interfaces
//! (collect.rs)      (input/go.rs)   (ir.rs)                 (output/typescript.rs)
//! ```
//!
//! # Example
//!
//! ```
//! use gotots_typegen::{input, output};
//!
//! let source = r#"
//! package models
//!
//! type User struct {
//!     ID   int    `json:"id"`
//!     Bio  *string
//! }
//! "#;
//!
//! let collection = input::parse_go_types(source).unwrap();
//! let ts = output::generate_typescript(&collection);
//! assert!(ts.contains("export interface User {"));
//! assert!(ts.contains("    id: number;"));
//! assert!(ts.contains("    Bio?: string | null;"));
//! ```

pub mod collect;
pub mod config;
pub mod error;
pub mod input;
pub mod ir;
pub mod output;
pub mod tag;

pub use collect::collect_dir;
pub use config::GenerateConfig;
pub use error::Error;
pub use input::{ParseError, parse_go_types};
pub use ir::{
    AggregatedCollection, EnumDeclaration, EnumValue, FieldDeclaration, RecordDeclaration,
    TypeExpression,
};
pub use output::generate_typescript;

/// Scan the configured input directory and render it as TypeScript.
///
/// Nothing is written; the caller owns the output file.
pub fn generate_from_dir(config: &GenerateConfig) -> Result<String, Error> {
    let collection = collect_dir(config.input_dir())?;
    tracing::debug!(
        records = collection.records.len(),
        input = %config.input_dir().display(),
        "collected structs"
    );
    Ok(generate_typescript(&collection))
}
