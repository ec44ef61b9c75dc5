pub mod chat;
pub mod report;
pub mod responses;
pub mod score;
pub mod taps;
