//! Release version parsing and ordering
//!
//! This crate parses the constrained `<major>.<minor>[.<patch>][-suffix]`
//! grammar used by pybrew and orders the resulting versions numerically.

mod comparator;
mod version;
mod version_parser;
pub mod versions;

pub use comparator::compare;
pub use version::Version;
pub use version_parser::ParseError;
