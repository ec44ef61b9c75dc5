//! neurobridge-core
//!
//! Pure domain types, the knowledge-base Tantivy schema, and core errors.
//! No capture or index I/O here — this is the shared vocabulary of the
//! NeuroBridge screening system.

pub mod error;
pub mod models;
pub mod schema;
