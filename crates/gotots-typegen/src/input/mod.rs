//! Source readers.
//!
//! Each reader parses one source file and produces an IR
//! [`AggregatedCollection`](crate::ir::AggregatedCollection).

pub mod go;

pub use go::{ParseError, parse_go_types};
