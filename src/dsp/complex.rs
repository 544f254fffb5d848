//! Complex arithmetic
//!
//! `Complex` is `num_complex::Complex<f64>`; addition, subtraction and the
//! complex product come from its `Add`, `Sub` and `Mul` impls. This module
//! adds the few helpers the transform needs on top.

pub use num_complex::Complex64 as Complex;

/// Build a complex value from its parts
pub fn complex(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

/// Unit phasor `(cos angle, sin angle)`
pub fn phasor(angle: f64) -> Complex {
    Complex::new(angle.cos(), angle.sin())
}

/// Divide both components by an integer count.
///
/// Dividing by zero yields infinities/NaN; callers must not pass `0`.
pub fn divide_by_int(value: Complex, divisor: usize) -> Complex {
    value / divisor as f64
}
