use crate::error::CoreError;

/// An ordered sequence of tap timestamps from one finger-tapping trial.
///
/// Timestamps are seconds from an arbitrary origin (trial start, Unix
/// epoch — it does not matter, only the spacing between taps is used).
/// Construction rejects out-of-order or non-finite values, so every
/// value of this type holds a non-decreasing sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TapSequence(Vec<f64>);

impl TapSequence {
    pub fn new(timestamps: Vec<f64>) -> Result<Self, CoreError> {
        for (index, &t) in timestamps.iter().enumerate() {
            if !t.is_finite() {
                return Err(CoreError::NonFiniteTap { index });
            }
            if index > 0 && t < timestamps[index - 1] {
                return Err(CoreError::NonMonotonicTaps { index });
            }
        }
        Ok(Self(timestamps))
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive inter-tap intervals, in seconds. Empty for fewer
    /// than two taps.
    pub fn intervals(&self) -> Vec<f64> {
        self.0.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}
