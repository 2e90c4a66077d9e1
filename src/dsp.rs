//! Digital Signal Processing
//!
//! Provides the filter primitives and the glue for chaining them:
//! - Biquad (second-order IIR) sections
//! - First- and second-order allpass sections
//! - DC blocking filter
//! - Fixed-capacity biquad cascades
//!
//! Every filter follows the same per-sample pattern: one input sample in,
//! one output sample out, delay line updated in place.

pub mod allpass;
pub mod biquad;
pub mod cascade;
pub mod dc_block;

#[cfg(not(feature = "std"))]
use micromath::F32Ext;

use crate::config::SILENT_THRESHOLD;

/// A single-sample stream transformer
///
/// Implemented by every filter in this crate so they can be composed
/// into pipelines without knowing each other's coefficient layout.
pub trait SampleFilter {
    /// Process one input sample and return one output sample
    fn process(&mut self, input: f32) -> f32;

    /// Clear the delay line back to its freshly constructed state
    fn reset(&mut self);

    /// True when all retained state is at or below [`SILENT_THRESHOLD`]
    fn is_silent(&self) -> bool;

    /// Feed this filter's output into `next`
    #[must_use]
    fn then<B: SampleFilter>(self, next: B) -> Chain<Self, B>
    where
        Self: Sized,
    {
        Chain::new(self, next)
    }
}

/// Two filters in series
#[derive(Clone, Copy, Debug, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    /// Connect `first` ahead of `second`
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The upstream filter
    #[must_use]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// The downstream filter
    #[must_use]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Split the chain back into its two stages
    #[must_use]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: SampleFilter, B: SampleFilter> SampleFilter for Chain<A, B> {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.second.process(self.first.process(input))
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    fn is_silent(&self) -> bool {
        self.first.is_silent() && self.second.is_silent()
    }
}

/// Silence check shared by the delay-line based filters
pub(crate) fn delay_line_is_silent(state: &[f32]) -> bool {
    state.iter().all(|v| v.abs() <= SILENT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::allpass::FirstOrderAllpass;
    use super::biquad::{Biquad, BiquadCoeffs};
    use super::dc_block::DcBlocker;
    use super::*;

    #[test]
    fn chain_matches_manual_composition() {
        let coeffs = BiquadCoeffs::new([-0.5, 0.25], [0.3, 0.2, 0.1]);
        let mut chain = DcBlocker::new(0.99).then(Biquad::new(coeffs));

        let mut dc = DcBlocker::new(0.99);
        let mut bq = Biquad::new(coeffs);

        for i in 0..32 {
            let x = if i % 3 == 0 { 1.0 } else { -0.25 };
            let expected = bq.process(dc.process(x));
            assert_eq!(chain.process(x), expected);
        }
    }

    #[test]
    fn chain_reset_clears_both_stages() {
        let mut chain = FirstOrderAllpass::new(0.5).then(DcBlocker::new(0.995));
        chain.process(1.0);
        assert!(!chain.is_silent());

        chain.reset();
        assert!(chain.is_silent());
        assert!(chain.first().is_silent());
        assert!(chain.second().is_silent());
    }

    #[test]
    fn silence_threshold() {
        assert!(delay_line_is_silent(&[0.0, 1.0e-9]));
        assert!(!delay_line_is_silent(&[0.0, 1.0e-3]));
    }
}
