//! Cascaded second-order sections
//!
//! Each biquad runs the direct-form IIR update on its own pair of ring
//! buffers, so the feedback of one section never sees another section's
//! outputs. The gain-scaled output of a section is the input of the next.

use super::filter::{weighted_history, Filter};
use super::iir::iir_apply;
use super::ring_buffer::RingBuffer;
use crate::domain::{DspError, DspResult, Sample, SosSection};

/// Input/output history of a single biquad
#[derive(Debug)]
pub struct SectionState {
    input_history: RingBuffer,
    output_history: RingBuffer,
}

impl SectionState {
    pub fn new() -> Self {
        Self {
            input_history: RingBuffer::zeroed(3),
            output_history: RingBuffer::zeroed(2),
        }
    }

    /// One fresh state per section
    pub fn for_sections(sections: &[SosSection]) -> Vec<Self> {
        sections.iter().map(|_| Self::new()).collect()
    }

    pub fn reset(&mut self) {
        self.input_history.reset();
        self.output_history.reset();
    }
}

impl Default for SectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `sample` through every section in order and return the cascade output.
///
/// `states` must hold exactly one [`SectionState`] per section.
pub fn sos_apply(
    sample: Sample,
    sections: &[SosSection],
    states: &mut [SectionState],
) -> DspResult<Sample> {
    check_cascade(sections.len(), states.len())?;

    let mut x = sample;
    for (section, state) in sections.iter().zip(states.iter_mut()) {
        let y = iir_apply(
            x,
            &mut state.input_history,
            &mut state.output_history,
            &section.b,
            &section.a,
        )?;
        x = y * section.gain;
    }
    Ok(x)
}

fn check_cascade(sections: usize, states: usize) -> DspResult<()> {
    if sections == 0 {
        log::warn!("sos: rejected empty cascade");
        return Err(DspError::DimensionMismatch(
            "SOS cascade needs at least one section".to_string(),
        ));
    }
    if sections != states {
        log::warn!("sos: {sections} sections but {states} section states");
        return Err(DspError::DimensionMismatch(format!(
            "SOS cascade has {sections} sections but {states} section states"
        )));
    }
    Ok(())
}

/// SOS cascade owning one history pair per section
#[derive(Debug)]
pub struct SosFilter {
    sections: Vec<SosSection>,
    states: Vec<SectionState>,
}

impl SosFilter {
    pub fn new(sections: Vec<SosSection>) -> DspResult<Self> {
        if sections.is_empty() {
            return Err(DspError::DimensionMismatch(
                "SOS cascade needs at least one section".to_string(),
            ));
        }
        let states = SectionState::for_sections(&sections);
        log::debug!("sos: {} sections", sections.len());
        Ok(Self { sections, states })
    }

    /// Build from `[b0, b1, b2, a0, a1, a2]` rows and one gain per row
    pub fn from_rows(rows: &[[f64; 6]], gains: &[f64]) -> DspResult<Self> {
        if rows.len() != gains.len() {
            return Err(DspError::DimensionMismatch(format!(
                "{} SOS rows but {} gains",
                rows.len(),
                gains.len()
            )));
        }
        let sections = rows
            .iter()
            .zip(gains)
            .map(|(&row, &gain)| SosSection::from_row(row, gain))
            .collect::<DspResult<Vec<_>>>()?;
        Self::new(sections)
    }

    pub fn sections(&self) -> &[SosSection] {
        &self.sections
    }
}

impl Filter for SosFilter {
    fn process(&mut self, sample: Sample) -> Sample {
        let mut x = sample;
        for (section, state) in self.sections.iter().zip(self.states.iter_mut()) {
            state.input_history.write(x);
            let y = weighted_history(&state.input_history, &section.b)
                + weighted_history(&state.output_history, &section.a);
            state.output_history.write(y);
            x = y * section.gain;
        }
        x
    }

    fn reset(&mut self) {
        for state in &mut self.states {
            state.reset();
        }
    }

    fn order(&self) -> usize {
        2 * self.sections.len()
    }
}
