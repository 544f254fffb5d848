//! Core domain types

use serde::{Deserialize, Serialize};

use super::error::{DspError, DspResult};

/// Real sample type used by the streaming filters
pub type Sample = f64;

/// One biquad stage of a second-order-section cascade
///
/// `b` holds the feed-forward taps applied to `x[n]`, `x[n-1]`, `x[n-2]`.
/// `a` holds the feedback taps applied to `y[n-1]`, `y[n-2]` and is *added*
/// to the output, so a conventional denominator `1 + a1·z⁻¹ + a2·z⁻²` is
/// stored here as `[-a1, -a2]`. `gain` scales the section output before it
/// is handed to the next section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SosSection {
    pub b: [f64; 3],
    pub a: [f64; 2],
    #[serde(default = "default_gain")]
    pub gain: f64,
}

fn default_gain() -> f64 {
    1.0
}

impl SosSection {
    pub fn new(b: [f64; 3], a: [f64; 2], gain: f64) -> Self {
        Self { b, a, gain }
    }

    /// Section that passes its input through unchanged
    pub fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0], [0.0, 0.0], 1.0)
    }

    /// Build a section from a `[b0, b1, b2, a0, a1, a2]` row.
    ///
    /// The row is normalised by `a0` and its feedback terms are negated to
    /// match the additive feedback convention of [`SosSection::a`].
    pub fn from_row(row: [f64; 6], gain: f64) -> DspResult<Self> {
        let [b0, b1, b2, a0, a1, a2] = row;
        if a0 == 0.0 {
            return Err(DspError::DimensionMismatch(
                "SOS row has a0 = 0 and cannot be normalised".to_string(),
            ));
        }
        Ok(Self::new(
            [b0 / a0, b1 / a0, b2 / a0],
            [-a1 / a0, -a2 / a0],
            gain,
        ))
    }
}

impl Default for SosSection {
    fn default() -> Self {
        Self::identity()
    }
}
