//! Allpass sections
//!
//! Unity-gain filters that only shift phase. Used for phase correction
//! in crossovers and as building blocks of lattice networks.
//!
//! First order, one multiply per sample:
//! ```text
//!          b + z^-1
//! H(z) = ------------
//!         1 + b*z^-1
//! ```
//!
//! Second order:
//! ```text
//!          c3 + c2*z^-1 + z^-2
//! H(z) = -----------------------
//!          1 + c2*z^-1 + c3*z^-2
//! ```

use super::biquad::BiquadCoeffs;
use super::{delay_line_is_silent, SampleFilter};
use crate::types::{FilterError, FilterResult};

#[cfg(not(feature = "std"))]
use micromath::F32Ext;

/// Process one sample through a first-order allpass with a caller-owned delay line
#[inline]
pub fn allpass1_step(b: f32, dl: &mut [f32; 1], x: f32) -> f32 {
    let t = dl[0];
    let y = (x - t) * b;
    dl[0] = x + y;
    y + t
}

/// Process one sample through a second-order allpass with a caller-owned delay line
///
/// `dl[0]` holds the most recent intermediate value, `dl[1]` the one before.
#[inline]
pub fn allpass2_step(c3: f32, c2: f32, dl: &mut [f32; 2], x: f32) -> f32 {
    let t = c3 * (x + dl[1]) + c2 * dl[0];
    let y = t + dl[1];
    // dl[1] takes the old dl[0] before dl[0] is overwritten
    dl[1] = dl[0];
    dl[0] = x - t;
    y
}

/// First-order allpass filter
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOrderAllpass {
    /// Allpass coefficient
    b: f32,
    z: [f32; 1],
}

impl FirstOrderAllpass {
    /// Create a new first-order allpass
    #[must_use]
    pub const fn new(b: f32) -> Self {
        Self { b, z: [0.0] }
    }

    /// Create an allpass, rejecting `|b| >= 1`
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Unstable`] if the pole is not inside the unit circle.
    pub fn try_new(b: f32) -> FilterResult<Self> {
        if b.abs() < 1.0 {
            Ok(Self::new(b))
        } else {
            Err(FilterError::Unstable)
        }
    }

    /// Process a single sample
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        allpass1_step(self.b, &mut self.z, input)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.z = [0.0];
    }

    /// Allpass coefficient
    #[must_use]
    pub const fn coeff(&self) -> f32 {
        self.b
    }

    /// Current delay line contents
    #[must_use]
    pub const fn state(&self) -> [f32; 1] {
        self.z
    }

    /// Equivalent biquad transfer function
    #[must_use]
    pub const fn to_biquad(&self) -> BiquadCoeffs {
        BiquadCoeffs::new([self.b, 0.0], [self.b, 1.0, 0.0])
    }
}

impl SampleFilter for FirstOrderAllpass {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        FirstOrderAllpass::process(self, input)
    }

    fn reset(&mut self) {
        FirstOrderAllpass::reset(self);
    }

    fn is_silent(&self) -> bool {
        delay_line_is_silent(&self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FirstOrderAllpass {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Allpass1(b={}, z={})", self.b, self.z);
    }
}

/// Second-order (biquad) allpass filter
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondOrderAllpass {
    /// Coefficient of z^0 in the numerator and z^-2 in the denominator
    c3: f32,
    /// Coefficient of z^-1 in both numerator and denominator
    c2: f32,
    z: [f32; 2],
}

impl SecondOrderAllpass {
    /// Create a new second-order allpass
    #[must_use]
    pub const fn new(c3: f32, c2: f32) -> Self {
        Self {
            c3,
            c2,
            z: [0.0; 2],
        }
    }

    /// Create an allpass, rejecting poles on or outside the unit circle
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Unstable`] if the denominator is not stable.
    pub fn try_new(c3: f32, c2: f32) -> FilterResult<Self> {
        let allpass = Self::new(c3, c2);
        if allpass.to_biquad().is_stable() {
            Ok(allpass)
        } else {
            Err(FilterError::Unstable)
        }
    }

    /// Process a single sample
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        allpass2_step(self.c3, self.c2, &mut self.z, input)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.z = [0.0; 2];
    }

    /// Coefficients as `(c3, c2)`
    #[must_use]
    pub const fn coeffs(&self) -> (f32, f32) {
        (self.c3, self.c2)
    }

    /// Current delay line contents (most recent first)
    #[must_use]
    pub const fn state(&self) -> [f32; 2] {
        self.z
    }

    /// Equivalent biquad transfer function
    #[must_use]
    pub const fn to_biquad(&self) -> BiquadCoeffs {
        BiquadCoeffs::new([self.c2, self.c3], [self.c3, self.c2, 1.0])
    }
}

impl SampleFilter for SecondOrderAllpass {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        SecondOrderAllpass::process(self, input)
    }

    fn reset(&mut self) {
        SecondOrderAllpass::reset(self);
    }

    fn is_silent(&self) -> bool {
        delay_line_is_silent(&self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SecondOrderAllpass {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Allpass2(c3={}, c2={}, z={})", self.c3, self.c2, self.z);
    }
}
