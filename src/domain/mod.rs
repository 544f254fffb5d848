//! Core domain types
//!
//! Pure types with no signal-processing logic: errors, coefficient
//! containers and serializable filter definitions.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
