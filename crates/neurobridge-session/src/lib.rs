//! neurobridge-session
//!
//! The screening session: workflow gating, assessment state, and the glue
//! between instruments, reports, and the care-plan assistant. Shells
//! (CLI, desktop, web) drive a [`session::ScreeningSession`] and render
//! what it returns.

pub mod capture;
pub mod config;
pub mod error;
pub mod session;
pub mod workflow;
