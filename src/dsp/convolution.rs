//! FFT-based convolution

use super::complex::Complex;
use super::fft::{is_power_of_two, transform};
use crate::domain::{DspError, DspResult};

/// Circular convolution of `x` and `y` via their spectra.
///
/// Both inputs are zero-extended to `L = max(x.len(), y.len())`, which must
/// be a power of two; the returned sequence has length `L`. The result is
/// only the true linear convolution when `L >= x.len() + y.len() - 1`; use
/// [`linear_convolve`] when that is what you need.
pub fn convolve(x: &[Complex], y: &[Complex]) -> DspResult<Vec<Complex>> {
    let len = x.len().max(y.len());
    if !is_power_of_two(len) {
        log::warn!(
            "convolve: common length {len} of {} and {} samples is not a power of two",
            x.len(),
            y.len()
        );
        return Err(DspError::InvalidLength(len));
    }

    let x_spectrum = transform(&zero_extend(x, len), false)?;
    let y_spectrum = transform(&zero_extend(y, len), false)?;

    let product: Vec<Complex> = x_spectrum
        .iter()
        .zip(&y_spectrum)
        .map(|(a, b)| a * b)
        .collect();

    transform(&product, true)
}

/// Linear convolution, padding internally to the next power of two that
/// holds all `x.len() + y.len() - 1` output samples.
pub fn linear_convolve(x: &[Complex], y: &[Complex]) -> DspResult<Vec<Complex>> {
    if x.is_empty() || y.is_empty() {
        return Ok(Vec::new());
    }

    let len = x.len() + y.len() - 1;
    let padded = len.next_power_of_two();

    let mut output = convolve(&zero_extend(x, padded), &zero_extend(y, padded))?;
    output.truncate(len);
    Ok(output)
}

fn zero_extend(input: &[Complex], len: usize) -> Vec<Complex> {
    let mut extended = input.to_vec();
    extended.resize(len, Complex::new(0.0, 0.0));
    extended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::complex::complex;

    fn real(values: &[f64]) -> Vec<Complex> {
        values.iter().map(|&v| complex(v, 0.0)).collect()
    }

    fn assert_real_close(actual: &[Complex], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (i, (a, &e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                (a.re - e).abs() < 1e-9 && a.im.abs() < 1e-9,
                "sample {i}: got {a}, expected {e}"
            );
        }
    }

    #[test]
    fn test_delta_shifts_circularly() {
        let x = real(&[1.0, 2.0, 3.0, 4.0]);
        let y = real(&[0.0, 1.0, 0.0, 0.0]);
        let z = convolve(&x, &y).unwrap();
        assert_real_close(&z, &[4.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_shorter_input_is_zero_extended() {
        let x = real(&[1.0, 2.0, 3.0, 4.0]);
        let y = real(&[2.0]);
        let z = convolve(&x, &y).unwrap();
        assert_real_close(&z, &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_result_length_is_max_of_inputs() {
        let z = convolve(&real(&[1.0; 8]), &real(&[1.0, 1.0])).unwrap();
        assert_eq!(z.len(), 8);
    }

    #[test]
    fn test_rejects_non_power_of_two_common_length() {
        let result = convolve(&real(&[1.0; 3]), &real(&[1.0; 2]));
        assert_eq!(result, Err(DspError::InvalidLength(3)));
    }

    #[test]
    fn test_rejects_two_empty_inputs() {
        assert_eq!(convolve(&[], &[]), Err(DspError::InvalidLength(0)));
    }

    #[test]
    fn test_linear_convolution_matches_direct_sum() {
        let z = linear_convolve(&real(&[1.0, 2.0, 3.0]), &real(&[1.0, 1.0])).unwrap();
        assert_real_close(&z, &[1.0, 3.0, 5.0, 3.0]);
    }

    #[test]
    fn test_linear_convolution_of_empty_input_is_empty() {
        assert!(linear_convolve(&[], &real(&[1.0])).unwrap().is_empty());
    }
}
