//! Filter definitions
//!
//! A `FilterConfig` is a serializable description of a streaming filter
//! (coefficients only, no state). Storing and loading the JSON is left to
//! the caller.

use serde::{Deserialize, Serialize};

use super::error::{DspError, DspResult};
use super::types::SosSection;
use crate::dsp::{Filter, FirFilter, IirFilter, SosFilter};

/// A saved filter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterConfig {
    /// Feed-forward taps `h[0..L)`, newest sample first
    Fir { taps: Vec<f64> },
    /// Feed-forward `b[0..L)` and additive feedback `a[0..M)`
    Iir { b: Vec<f64>, a: Vec<f64> },
    /// Biquads applied in list order
    Sos { sections: Vec<SosSection> },
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::Fir { taps: vec![1.0] }
    }
}

impl FilterConfig {
    pub fn from_json(json: &str) -> DspResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DspError::Config(format!("Failed to parse filter definition: {e}")))
    }

    pub fn to_json(&self) -> DspResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DspError::Config(format!("Serialization error: {e}")))
    }

    /// Instantiate the described filter with fresh (zeroed) state
    pub fn build(&self) -> DspResult<Box<dyn Filter>> {
        let filter: Box<dyn Filter> = match self {
            FilterConfig::Fir { taps } => Box::new(FirFilter::new(taps.clone())?),
            FilterConfig::Iir { b, a } => Box::new(IirFilter::new(b.clone(), a.clone())?),
            FilterConfig::Sos { sections } => Box::new(SosFilter::new(sections.clone())?),
        };
        log::debug!("config: built {} filter of order {}", self.kind(), filter.order());
        Ok(filter)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FilterConfig::Fir { .. } => "fir",
            FilterConfig::Iir { .. } => "iir",
            FilterConfig::Sos { .. } => "sos",
        }
    }
}
