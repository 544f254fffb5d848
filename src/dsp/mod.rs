//! Digital Signal Processing
//!
//! Pure functions and self-contained filter state. No I/O dependencies.

pub mod complex;
pub mod convolution;
pub mod fft;
pub mod filter;
pub mod iir;
pub mod ring_buffer;
pub mod sos;

// Re-export commonly used items
pub use complex::{complex, divide_by_int, phasor, Complex};
pub use convolution::{convolve, linear_convolve};
pub use fft::{fft, ifft, transform, twiddle, FftProcessor};
pub use filter::{fir_apply, Filter, FirFilter};
pub use iir::{iir_apply, IirFilter};
pub use ring_buffer::RingBuffer;
pub use sos::{sos_apply, SectionState, SosFilter};
