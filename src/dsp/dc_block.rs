//! DC blocking filter
//!
//! First-order highpass with a zero at DC and a pole just inside it:
//! ```text
//!            1 - z^-1
//! H(z) = --------------
//!          1 - b*z^-1
//! ```
//! A pole nearer 1 lowers the cutoff and lengthens settling.

use super::biquad::BiquadCoeffs;
use super::{delay_line_is_silent, SampleFilter};
use crate::config::DEFAULT_DC_BLOCK_POLE;
use crate::types::{FilterError, FilterResult};

/// Process one sample through a DC blocker with a caller-owned delay line
///
/// `dl[0]` is the previous input, `dl[1]` the previous output.
#[inline]
pub fn dc_block_step(b: f32, dl: &mut [f32; 2], x: f32) -> f32 {
    let y = x - dl[0] + b * dl[1];
    dl[0] = x;
    dl[1] = y;
    y
}

/// DC blocking filter
#[derive(Clone, Copy, Debug)]
pub struct DcBlocker {
    /// Pole position (0.995 typical)
    b: f32,
    /// Previous input, previous output
    z: [f32; 2],
}

impl DcBlocker {
    /// Create a new DC blocker
    #[must_use]
    pub const fn new(b: f32) -> Self {
        Self { b, z: [0.0; 2] }
    }

    /// Create a DC blocker, rejecting poles on or outside the unit circle
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Unstable`] if `|b| >= 1` or `b` is NaN.
    pub fn try_new(b: f32) -> FilterResult<Self> {
        let blocker = Self::new(b);
        if blocker.to_biquad().is_stable() {
            Ok(blocker)
        } else {
            Err(FilterError::Unstable)
        }
    }

    /// Process a single sample
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        dc_block_step(self.b, &mut self.z, input)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.z = [0.0; 2];
    }

    /// Pole position
    #[must_use]
    pub const fn pole(&self) -> f32 {
        self.b
    }

    /// Current delay line contents
    #[must_use]
    pub const fn state(&self) -> [f32; 2] {
        self.z
    }

    /// Equivalent biquad transfer function
    #[must_use]
    pub const fn to_biquad(&self) -> BiquadCoeffs {
        BiquadCoeffs::new([-self.b, 0.0], [1.0, -1.0, 0.0])
    }
}

impl Default for DcBlocker {
    fn default() -> Self {
        Self::new(DEFAULT_DC_BLOCK_POLE)
    }
}

impl SampleFilter for DcBlocker {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        DcBlocker::process(self, input)
    }

    fn reset(&mut self) {
        DcBlocker::reset(self);
    }

    fn is_silent(&self) -> bool {
        delay_line_is_silent(&self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DcBlocker {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DcBlocker(b={}, z={})", self.b, self.z);
    }
}
