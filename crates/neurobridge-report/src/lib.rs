//! neurobridge-report
//!
//! Screening report assembly and rendering: the structured JSON report
//! plus the plain-text summary generated from a Tera template.

pub mod builder;
pub mod error;
pub mod render;
