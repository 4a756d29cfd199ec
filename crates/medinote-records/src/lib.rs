//! medinote-records
//!
//! The record workflows that consume note analysis: pre-filling a new
//! record from the operator's symptom text, and refreshing the analysis
//! live while a record's note is edited. Only fields the operator commits
//! leave this crate; the analysis itself is never persisted.

pub mod action;
pub mod config;
pub mod draft;
pub mod editor;
pub mod error;
pub mod events;
