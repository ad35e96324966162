//! Core error types and constants for the commons toolkit.
//!
//! Every other crate in the workspace builds on this one. It provides the
//! shared `Error` enum and `Result` alias so that callers deal with a single
//! failure type across string, file, codec, and markup helpers, plus the
//! small set of constants (environment variable names, defaults) the
//! toolkit reads.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
};
