//! Biquad cascades
//!
//! Higher-order filters as a series of independent second-order sections.
//! Capacity is fixed at compile time so no allocation happens on target.

use heapless::Vec;

use super::biquad::{Biquad, BiquadCoeffs};
use super::SampleFilter;
use crate::types::{FilterError, FilterResult};

/// Up to `N` biquad sections in series
#[derive(Clone, Debug, Default)]
pub struct Cascade<const N: usize> {
    sections: Vec<Biquad, N>,
}

impl<const N: usize> Cascade<N> {
    /// Create an empty cascade (passthrough)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Build a cascade from a list of section coefficients
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::CascadeFull`] if more than `N` sections are given.
    pub fn from_coeffs(coeffs: &[BiquadCoeffs]) -> FilterResult<Self> {
        let mut cascade = Self::new();
        for &c in coeffs {
            cascade.push(Biquad::new(c))?;
        }
        Ok(cascade)
    }

    /// Append a section at the output end
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::CascadeFull`] when all `N` slots are taken.
    pub fn push(&mut self, section: Biquad) -> FilterResult<()> {
        self.sections
            .push(section)
            .map_err(|_| FilterError::CascadeFull)
    }

    /// Process a single sample through every section
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.sections
            .iter_mut()
            .fold(input, |x, section| section.process(x))
    }

    /// Reset every section
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }

    /// Sections in processing order
    #[must_use]
    pub fn sections(&self) -> &[Biquad] {
        &self.sections
    }

    /// Number of sections in use
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Combined magnitude response of all sections
    #[must_use]
    pub fn magnitude_at(&self, freq: f32, fs: f32) -> f32 {
        self.sections
            .iter()
            .map(|s| s.coeffs().magnitude_at(freq, fs))
            .product()
    }
}

impl<const N: usize> SampleFilter for Cascade<N> {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        Cascade::process(self, input)
    }

    fn reset(&mut self) {
        Cascade::reset(self);
    }

    fn is_silent(&self) -> bool {
        self.sections.iter().all(SampleFilter::is_silent)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for Cascade<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Cascade({}/{})", self.sections.len(), N);
    }
}
