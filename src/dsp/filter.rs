//! Streaming filter interface and FIR filter implementation

use super::ring_buffer::RingBuffer;
use crate::domain::{DspError, DspResult, Sample};

/// A stateful sample-by-sample filter
pub trait Filter {
    /// Process a single sample through the filter
    fn process(&mut self, sample: Sample) -> Sample;

    /// Reset the filter state to rest
    fn reset(&mut self);

    /// Filter order (number of delay elements the transfer function needs)
    fn order(&self) -> usize;

    fn process_block(&mut self, input: &[Sample]) -> Vec<Sample> {
        input.iter().map(|&sample| self.process(sample)).collect()
    }
}

/// Push `sample` into `buffer` and return `Σ h[i]·x[n-i]`.
///
/// `buffer` must hold at least `h.len()` samples. The buffer is left
/// untouched when validation fails.
pub fn fir_apply(sample: Sample, buffer: &mut RingBuffer, h: &[f64]) -> DspResult<Sample> {
    check_taps("FIR", h.len(), buffer)?;
    buffer.write(sample);
    Ok(weighted_history(buffer, h))
}

/// `Σ coefficients[i]·buffer.peek(i)`, newest sample first
pub(crate) fn weighted_history(buffer: &RingBuffer, coefficients: &[f64]) -> Sample {
    coefficients
        .iter()
        .enumerate()
        .map(|(age, &c)| c * buffer.peek(age).unwrap_or(0.0))
        .sum()
}

pub(crate) fn check_taps(kind: &str, taps: usize, buffer: &RingBuffer) -> DspResult<()> {
    if taps == 0 {
        log::warn!("{kind}: rejected empty coefficient set");
        return Err(DspError::DimensionMismatch(format!(
            "{kind} needs at least one coefficient"
        )));
    }
    if taps > buffer.capacity() {
        log::warn!(
            "{kind}: {taps} taps do not fit a history of {}",
            buffer.capacity()
        );
        return Err(DspError::DimensionMismatch(format!(
            "{kind} has {taps} taps but its history holds {} samples",
            buffer.capacity()
        )));
    }
    Ok(())
}

/// FIR filter owning its delay line
#[derive(Debug)]
pub struct FirFilter {
    coefficients: Vec<f64>,
    delay_line: RingBuffer,
}

impl FirFilter {
    /// Create a new FIR filter with the given coefficients
    pub fn new(coefficients: Vec<f64>) -> DspResult<Self> {
        if coefficients.is_empty() {
            return Err(DspError::DimensionMismatch(
                "FIR needs at least one coefficient".to_string(),
            ));
        }
        let delay_line = RingBuffer::new(coefficients.len())?;
        log::debug!("fir: {} taps", coefficients.len());
        Ok(Self {
            coefficients,
            delay_line,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Filter for FirFilter {
    fn process(&mut self, sample: Sample) -> Sample {
        self.delay_line.write(sample);
        weighted_history(&self.delay_line, &self.coefficients)
    }

    fn reset(&mut self) {
        self.delay_line.reset();
    }

    fn order(&self) -> usize {
        self.coefficients.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_impulse_taps_pass_latest_sample() {
        let mut buffer = RingBuffer::new(4).unwrap();
        let h = [1.0, 0.0, 0.0, 0.0];

        for sample in [0.25, -1.5, 3.0, 7.0, -2.0] {
            let y = fir_apply(sample, &mut buffer, &h).unwrap();
            assert_eq!(y, sample);
        }
    }

    #[test]
    fn test_moving_sum() {
        let mut buffer = RingBuffer::new(3).unwrap();
        let h = [1.0, 1.0, 1.0];

        let outputs: Vec<f64> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&x| fir_apply(x, &mut buffer, &h).unwrap())
            .collect();

        // History before the first sample is zero
        assert_eq!(outputs, vec![1.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_taps_weight_newest_sample_first() {
        let mut buffer = RingBuffer::new(2).unwrap();
        let h = [10.0, 1.0];
        fir_apply(1.0, &mut buffer, &h).unwrap();
        let y = fir_apply(2.0, &mut buffer, &h).unwrap();
        assert_eq!(y, 10.0 * 2.0 + 1.0 * 1.0);
    }

    #[test]
    fn test_rejects_more_taps_than_history() {
        let mut buffer = RingBuffer::new(2).unwrap();
        let result = fir_apply(1.0, &mut buffer, &[1.0, 1.0, 1.0]);
        assert!(matches!(result, Err(DspError::DimensionMismatch(_))));
        assert!(buffer.is_empty(), "failed call must not touch the history");
    }

    #[test]
    fn test_rejects_empty_coefficients() {
        let mut buffer = RingBuffer::new(2).unwrap();
        assert!(fir_apply(1.0, &mut buffer, &[]).is_err());
        assert!(FirFilter::new(Vec::new()).is_err());
    }

    #[test]
    fn test_averaging_filter_passes_dc() {
        let mut filter = FirFilter::new(vec![0.25; 4]).unwrap();

        let mut output = 0.0;
        for _ in 0..10 {
            output = filter.process(1.0);
        }

        assert!(
            (output - 1.0).abs() < 1e-12,
            "DC signal should pass through averaging filter unchanged, got {}",
            output
        );
        assert_eq!(filter.order(), 3);
    }

    #[test]
    fn test_process_block_matches_per_sample() {
        let input = [1.0, -1.0, 0.5, 2.0, 0.0];
        let mut a = FirFilter::new(vec![0.5, 0.3, 0.2]).unwrap();
        let mut b = FirFilter::new(vec![0.5, 0.3, 0.2]).unwrap();

        let block = a.process_block(&input);
        let single: Vec<f64> = input.iter().map(|&x| b.process(x)).collect();
        assert_eq!(block, single);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut filter = FirFilter::new(vec![0.5, 0.5]).unwrap();

        for _ in 0..100 {
            filter.process(1.0);
        }

        filter.reset();

        // After reset, processing 0.0 should give 0.0
        let out = filter.process(0.0);
        assert_eq!(out, 0.0);
    }
}
