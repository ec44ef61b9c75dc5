//! neurobridge-instruments
//!
//! Screening instrument definitions and scoring. Pure data and arithmetic —
//! no capture I/O. Defines the symptom checklist, the tap-timing feature
//! extractor, and the composite risk score they feed.

pub mod checklist;
pub mod error;
pub mod scoring;
pub mod tapping;
