use std::thread;
use std::time::{Duration, Instant};

use neurobridge_session::capture::{CancelToken, SimulatedTapper, TapSource};

#[test]
fn simulated_trial_produces_ordered_taps() {
    let mut tapper =
        SimulatedTapper::with_window(Duration::from_millis(100), Duration::from_millis(10));
    let taps = tapper.collect(&CancelToken::new()).unwrap();

    assert!(taps.len() >= 2, "expected several taps, got {}", taps.len());
    let timestamps = taps.timestamps();
    assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn a_cancelled_token_stops_the_trial_immediately() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut tapper =
        SimulatedTapper::with_window(Duration::from_secs(10), Duration::from_millis(10));
    let started = Instant::now();
    let taps = tapper.collect(&cancel).unwrap();

    assert!(taps.is_empty());
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn cancelling_mid_trial_returns_the_partial_sequence() {
    let cancel = CancelToken::new();
    let handle = {
        let cancel = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            cancel.cancel();
        })
    };

    let mut tapper =
        SimulatedTapper::with_window(Duration::from_secs(10), Duration::from_millis(5));
    let started = Instant::now();
    let taps = tapper.collect(&cancel).unwrap();
    handle.join().unwrap();

    assert!(!taps.is_empty());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn cloned_tokens_share_the_flag() {
    let cancel = CancelToken::new();
    let observer = cancel.clone();
    assert!(!observer.is_cancelled());
    cancel.cancel();
    assert!(observer.is_cancelled());
}
