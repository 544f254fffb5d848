//! Radix-2 FFT
//!
//! Recursive decimation-in-time transform. Every level splits its input by
//! index parity, transforms both halves and recombines them with twiddle
//! factors; each level owns its temporaries and drops them on return.

use std::f64::consts::PI;

use super::complex::{divide_by_int, phasor, Complex};
use crate::domain::{DspError, DspResult};

/// Twiddle factor `exp(±j·2πk/n)`; positive exponent for the inverse transform
pub fn twiddle(n: usize, k: usize, inverse: bool) -> Complex {
    let sign = if inverse { 1.0 } else { -1.0 };
    phasor(sign * 2.0 * PI * k as f64 / n as f64)
}

/// `true` for 1, 2, 4, 8, ... (zero is not a power of two)
pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

/// Transform `input` into a newly allocated sequence.
///
/// The length must be a power of two. The inverse transform is scaled by
/// `1/N` exactly once, after the whole recursion has finished, so
/// `transform(&transform(x, false)?, true)?` reproduces `x`.
pub fn transform(input: &[Complex], inverse: bool) -> DspResult<Vec<Complex>> {
    let n = input.len();
    if !is_power_of_two(n) {
        log::warn!("fft: rejected sequence of length {n}");
        return Err(DspError::InvalidLength(n));
    }

    let mut output = transform_recursive(input, inverse);
    if inverse {
        for value in output.iter_mut() {
            *value = divide_by_int(*value, n);
        }
    }
    Ok(output)
}

/// Forward transform
pub fn fft(input: &[Complex]) -> DspResult<Vec<Complex>> {
    transform(input, false)
}

/// Inverse transform, scaled by `1/N`
pub fn ifft(input: &[Complex]) -> DspResult<Vec<Complex>> {
    transform(input, true)
}

fn transform_recursive(input: &[Complex], inverse: bool) -> Vec<Complex> {
    let n = input.len();
    if n == 1 {
        return vec![input[0]];
    }

    let half = n / 2;
    let even: Vec<Complex> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex> = input.iter().skip(1).step_by(2).copied().collect();

    let even = transform_recursive(&even, inverse);
    let odd = transform_recursive(&odd, inverse);

    let mut output = vec![Complex::new(0.0, 0.0); n];
    for k in 0..half {
        let rotated = twiddle(n, k, inverse) * odd[k];
        output[k] = even[k] + rotated;
        output[k + half] = even[k] - rotated;
    }
    output
}

/// FFT processor bound to one transform size
///
/// Validates the size once so the per-call paths only have to check that
/// the caller handed over the right number of samples.
pub struct FftProcessor {
    fft_size: usize,
}

impl FftProcessor {
    /// Create a new FFT processor with the given size
    pub fn new(fft_size: usize) -> DspResult<Self> {
        if !is_power_of_two(fft_size) {
            log::warn!("fft: cannot build processor of size {fft_size}");
            return Err(DspError::InvalidLength(fft_size));
        }
        log::debug!("fft: processor of size {fft_size}");
        Ok(Self { fft_size })
    }

    pub fn forward(&self, input: &[Complex]) -> DspResult<Vec<Complex>> {
        self.check_len(input.len())?;
        transform(input, false)
    }

    pub fn inverse(&self, input: &[Complex]) -> DspResult<Vec<Complex>> {
        self.check_len(input.len())?;
        transform(input, true)
    }

    /// Compute FFT of real samples and return magnitude in dB
    ///
    /// Input longer than `fft_size` is truncated, shorter input is
    /// zero-padded. Only the first `fft_size / 2` bins are returned.
    pub fn magnitude_db(&self, samples: &[f64]) -> DspResult<Vec<f64>> {
        let mut buffer: Vec<Complex> = samples
            .iter()
            .take(self.fft_size)
            .map(|&s| Complex::new(s, 0.0))
            .collect();
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        let spectrum = transform(&buffer, false)?;

        let half_size = (self.fft_size / 2).max(1);
        Ok(spectrum[..half_size]
            .iter()
            // Floor avoids -infinity for empty bins
            .map(|c| 10.0 * c.norm_sqr().max(1e-20).log10())
            .collect())
    }

    /// Get the FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    fn check_len(&self, len: usize) -> DspResult<()> {
        if len != self.fft_size {
            return Err(DspError::DimensionMismatch(format!(
                "expected {} samples, got {len}",
                self.fft_size
            )));
        }
        Ok(())
    }
}
