//! Output backends for code generation.
//!
//! Each backend takes an IR [`AggregatedCollection`](crate::ir::AggregatedCollection)
//! and produces source text.

pub mod typescript;

pub use typescript::{
    BANNER, TypeRenderer, TypeScriptEmitter, basic_type_to_ts, generate_typescript,
};
