//! Smoke run of the full screening flow.
//!
//! Answers part of the symptom checklist, runs a shortened simulated
//! tapping trial, analyzes, prints the report, and asks the assistant a
//! couple of questions.
//!
//! Usage:
//!   cargo run -p neurobridge-session --example screening_smoke

use std::time::Duration;

use neurobridge_core::models::responses::Answer;
use neurobridge_session::capture::{CancelToken, SimulatedTapper, TapSource};
use neurobridge_session::config::ScreeningConfig;
use neurobridge_session::error::SessionError;
use neurobridge_session::session::ScreeningSession;

fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = ScreeningConfig::default();
    let mut session = ScreeningSession::new(&config);

    println!("╔══════════════════════════════════════════════════╗");
    println!("║       NeuroBridge Screening — Smoke Run          ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    // Symptom checklist
    session.record_answer("tremor", Answer::Yes)?;
    session.record_answer("rigidity", Answer::No)?;
    session.record_answer("gait", Answer::Yes)?;
    session.record_answer("sleep", Answer::Yes)?;
    println!("Recorded {} checklist answers.", session.responses().len());

    // Shortened tapping trial so the smoke run finishes quickly
    let mut tapper =
        SimulatedTapper::with_window(Duration::from_millis(600), Duration::from_millis(50));
    let taps = tapper.collect(&CancelToken::new())?;
    println!("Captured {} taps.", taps.len());
    session.record_taps(taps);

    let score = session.analyze()?;
    println!();
    println!("Risk score: {score}% ({:?})", score.level());
    println!("{}", score.level().advisory());
    println!();

    session.generate_report()?;
    println!("{}", session.report_text()?);

    for question in [
        "What are the early symptoms?",
        "What exercises can help with coordination?",
    ] {
        println!("> {question}");
        println!("{}", session.ask(question)?);
        println!();
    }

    Ok(())
}
