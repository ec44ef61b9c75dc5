use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("tap timestamp at index {index} is earlier than its predecessor")]
    NonMonotonicTaps { index: usize },

    #[error("tap timestamp at index {index} is not a finite number")]
    NonFiniteTap { index: usize },
}
