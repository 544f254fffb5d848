//! Small DSP toolkit
//!
//! Complex arithmetic, a power-of-two FFT, FFT-based convolution and
//! streaming FIR / IIR / second-order-section filters built on
//! fixed-capacity ring buffers.
//!
//! ## Layout
//!
//! - `domain/` - Errors, coefficient types and serializable filter definitions
//! - `dsp/` - Signal processing (pure functions and owned filter state, no I/O)

pub mod domain;
pub mod dsp;

pub use domain::{DspError, DspResult, FilterConfig, Sample, SosSection};
pub use dsp::{
    convolve, fft, fir_apply, ifft, iir_apply, linear_convolve, sos_apply, transform, Complex,
    Filter, FirFilter, IirFilter, RingBuffer, SectionState, SosFilter,
};
