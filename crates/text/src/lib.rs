//! String manipulation, label mapping, and lenient number handling.
//!
//! All functions here are pure and side-effect free. Blank-or-missing
//! handling uses `Option` rather than sentinel empty strings.

pub mod labels;
pub mod numbers;
pub mod strings;

pub use labels::{uniquify, LabelMap, Labeled};
