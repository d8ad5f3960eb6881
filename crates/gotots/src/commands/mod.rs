//! CLI command implementations - one module per command.

pub mod generate;
