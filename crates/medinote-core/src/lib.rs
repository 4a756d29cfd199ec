//! medinote-core
//!
//! Pure domain types for clinical-note analysis results.
//! No rule tables and no I/O: this is the shared vocabulary between the
//! analysis engine and the record workflows that consume it.

pub mod error;
pub mod models;
