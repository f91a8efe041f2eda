//! Scoring and winner rules.
//!
//! A pick scores when its value is in the session's prime set. When the
//! session ends, the strictly higher score wins; equal scores tie.

pub mod outcome;

pub use outcome::{FinalReport, Outcome};
