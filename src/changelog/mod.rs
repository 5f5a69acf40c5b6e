//! Changelog parsing.

pub mod parser;

pub use parser::parse_changelog;
