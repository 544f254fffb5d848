//! Direct-form IIR filter
//!
//! `y[n] = Σ b[i]·x[n-i] + Σ a[i]·y[n-1-i]`
//!
//! The feedback taps are added, so a textbook denominator
//! `1 + a1·z⁻¹ + ...` is passed in as `[-a1, ...]`.

use super::filter::{check_taps, weighted_history, Filter};
use super::ring_buffer::RingBuffer;
use crate::domain::{DspError, DspResult, Sample};

/// Push `sample` into `input_history`, compute the output from the
/// feed-forward taps `b` and the feedback taps `a`, then push that output
/// into `output_history`.
///
/// The feedback sum only sees previous outputs. Both histories are left
/// untouched when validation fails.
pub fn iir_apply(
    sample: Sample,
    input_history: &mut RingBuffer,
    output_history: &mut RingBuffer,
    b: &[f64],
    a: &[f64],
) -> DspResult<Sample> {
    check_taps("IIR feed-forward", b.len(), input_history)?;
    check_feedback(a.len(), output_history)?;

    input_history.write(sample);
    let y = weighted_history(input_history, b) + weighted_history(output_history, a);
    output_history.write(y);
    Ok(y)
}

fn check_feedback(taps: usize, output_history: &RingBuffer) -> DspResult<()> {
    if taps > output_history.capacity() {
        log::warn!(
            "IIR feedback: {taps} taps do not fit a history of {}",
            output_history.capacity()
        );
        return Err(DspError::DimensionMismatch(format!(
            "IIR has {taps} feedback taps but its output history holds {} samples",
            output_history.capacity()
        )));
    }
    Ok(())
}

/// IIR filter owning its input and output histories
#[derive(Debug)]
pub struct IirFilter {
    b: Vec<f64>,
    a: Vec<f64>,
    input_history: RingBuffer,
    output_history: RingBuffer,
}

impl IirFilter {
    /// `b` needs at least one tap; `a` may be empty (pure feed-forward)
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> DspResult<Self> {
        if b.is_empty() {
            return Err(DspError::DimensionMismatch(
                "IIR needs at least one feed-forward coefficient".to_string(),
            ));
        }
        let input_history = RingBuffer::new(b.len())?;
        let output_history = RingBuffer::new(a.len().max(1))?;
        log::debug!("iir: {} feed-forward, {} feedback taps", b.len(), a.len());
        Ok(Self {
            b,
            a,
            input_history,
            output_history,
        })
    }

    pub fn feedforward(&self) -> &[f64] {
        &self.b
    }

    pub fn feedback(&self) -> &[f64] {
        &self.a
    }
}

impl Filter for IirFilter {
    fn process(&mut self, sample: Sample) -> Sample {
        self.input_history.write(sample);
        let y = weighted_history(&self.input_history, &self.b)
            + weighted_history(&self.output_history, &self.a);
        self.output_history.write(y);
        y
    }

    fn reset(&mut self) {
        self.input_history.reset();
        self.output_history.reset();
    }

    fn order(&self) -> usize {
        (self.b.len() - 1).max(self.a.len())
    }
}
