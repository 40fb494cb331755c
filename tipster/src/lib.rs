//! General-purpose plumbing for back-testing prediction strategies: CSV output, JSON input,
//! insertion-ordered lookups, timing and random selection.

pub mod csv;
pub mod file;
pub mod lookup;
pub mod random;
pub mod timed;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
