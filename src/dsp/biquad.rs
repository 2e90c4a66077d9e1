//! Second-order IIR (biquad) section
//!
//! Direct Form II Transposed: two state registers for a full second-order
//! section, and fewer transient registers than Direct Form I.
//!
//! Transfer function:
//! ```text
//!          b[0] + b[1]*z^-1 + b[2]*z^-2
//! H(z) = --------------------------------
//!           1  + a[0]*z^-1 + a[1]*z^-2
//! ```

use core::f32::consts::PI;

#[cfg(not(feature = "std"))]
use micromath::F32Ext;

use super::{delay_line_is_silent, SampleFilter};
use crate::types::{FilterError, FilterResult};

/// Biquad filter coefficients
///
/// The leading denominator coefficient is normalized to 1 and not stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiquadCoeffs {
    /// Feedback coefficients (z^-1, z^-2)
    pub a: [f32; 2],
    /// Feedforward coefficients (z^0, z^-1, z^-2)
    pub b: [f32; 3],
}

impl BiquadCoeffs {
    /// Pass-through coefficients
    pub const IDENTITY: Self = Self {
        a: [0.0, 0.0],
        b: [1.0, 0.0, 0.0],
    };

    /// Create coefficients from feedback and feedforward arrays
    #[must_use]
    pub const fn new(a: [f32; 2], b: [f32; 3]) -> Self {
        Self { a, b }
    }

    /// True when both poles lie strictly inside the unit circle
    ///
    /// Uses the stability triangle of `z^2 + a[0]*z + a[1]`.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        let [a1, a2] = self.a;
        a2.abs() < 1.0 && a1.abs() < 1.0 + a2
    }

    /// Complex response `H(e^jw)` as (real, imaginary)
    fn response(&self, omega: f32) -> (f32, f32) {
        let (sin_w, cos_w) = (omega.sin(), omega.cos());
        let (sin_2w, cos_2w) = ((2.0 * omega).sin(), (2.0 * omega).cos());

        let num_re = self.b[0] + self.b[1] * cos_w + self.b[2] * cos_2w;
        let num_im = -(self.b[1] * sin_w + self.b[2] * sin_2w);
        let den_re = 1.0 + self.a[0] * cos_w + self.a[1] * cos_2w;
        let den_im = -(self.a[0] * sin_w + self.a[1] * sin_2w);

        let den_mag_sq = den_re * den_re + den_im * den_im;
        if den_mag_sq <= 0.0 {
            return (0.0, 0.0);
        }

        (
            (num_re * den_re + num_im * den_im) / den_mag_sq,
            (num_im * den_re - num_re * den_im) / den_mag_sq,
        )
    }

    /// Calculate magnitude response at a given frequency
    #[must_use]
    pub fn magnitude_at(&self, freq: f32, fs: f32) -> f32 {
        let (re, im) = self.response(2.0 * PI * freq / fs);
        (re * re + im * im).sqrt()
    }

    /// Calculate magnitude response in dB at a given frequency
    #[must_use]
    pub fn magnitude_db_at(&self, freq: f32, fs: f32) -> f32 {
        let mag = self.magnitude_at(freq, fs);
        if mag > 0.0 {
            20.0 * mag.log10()
        } else {
            -120.0
        }
    }

    /// Calculate phase response in radians at a given frequency
    #[must_use]
    pub fn phase_at(&self, freq: f32, fs: f32) -> f32 {
        let (re, im) = self.response(2.0 * PI * freq / fs);
        im.atan2(re)
    }
}

impl Default for BiquadCoeffs {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BiquadCoeffs {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BiquadCoeffs(a={}, b={})", self.a, self.b);
    }
}

/// Process one sample through a biquad with a caller-owned delay line
#[inline]
pub fn biquad_step(f: &BiquadCoeffs, dl: &mut [f32; 2], x: f32) -> f32 {
    let y = f.b[0] * x + dl[0];
    dl[0] = f.b[1] * x - f.a[0] * y + dl[1];
    dl[1] = f.b[2] * x - f.a[1] * y;
    y
}

/// Biquad filter with its own delay line
#[derive(Clone, Copy, Debug, Default)]
pub struct Biquad {
    coeffs: BiquadCoeffs,
    /// State variables (Direct Form II Transposed)
    z: [f32; 2],
}

impl Biquad {
    /// Create a new biquad filter with given coefficients
    #[must_use]
    pub const fn new(coeffs: BiquadCoeffs) -> Self {
        Self { coeffs, z: [0.0; 2] }
    }

    /// Create a biquad, rejecting coefficients with poles outside the unit circle
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Unstable`] if `coeffs` is not stable.
    pub fn try_new(coeffs: BiquadCoeffs) -> FilterResult<Self> {
        if coeffs.is_stable() {
            Ok(Self::new(coeffs))
        } else {
            Err(FilterError::Unstable)
        }
    }

    /// Process a single sample through the filter
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        biquad_step(&self.coeffs, &mut self.z, input)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.z = [0.0; 2];
    }

    /// Update coefficients (preserves state)
    pub fn set_coeffs(&mut self, coeffs: BiquadCoeffs) {
        self.coeffs = coeffs;
    }

    /// Get current coefficients
    #[must_use]
    pub const fn coeffs(&self) -> BiquadCoeffs {
        self.coeffs
    }

    /// Current delay line contents
    #[must_use]
    pub const fn state(&self) -> [f32; 2] {
        self.z
    }
}

impl SampleFilter for Biquad {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        Biquad::process(self, input)
    }

    fn reset(&mut self) {
        Biquad::reset(self);
    }

    fn is_silent(&self) -> bool {
        delay_line_is_silent(&self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Biquad {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Biquad({}, z={})", self.coeffs, self.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48000.0;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn identity_is_exact_passthrough() {
        let mut filter = Biquad::new(BiquadCoeffs::IDENTITY);
        for &x in &[1.0, -0.5, 0.25, 3.0, 0.0] {
            assert_eq!(filter.process(x), x);
            assert_eq!(filter.state(), [0.0, 0.0]);
        }
    }

    #[test]
    fn step_matches_difference_equation() {
        let f = BiquadCoeffs::new([-0.5, 0.25], [0.5, 0.25, 0.125]);
        let mut dl = [0.0f32; 2];

        // y0 = 0.5
        assert!(approx_eq(biquad_step(&f, &mut dl, 1.0), 0.5, 1e-7));
        // dl0 = 0.25 + 0.25 = 0.5, dl1 = 0.125 - 0.125 = 0
        assert!(approx_eq(dl[0], 0.5, 1e-7));
        assert!(approx_eq(dl[1], 0.0, 1e-7));

        // y1 = 0.5, dl0 = 0.25 + 0 = 0.25, dl1 = -0.125
        assert!(approx_eq(biquad_step(&f, &mut dl, 0.0), 0.5, 1e-7));
        assert!(approx_eq(dl[0], 0.25, 1e-7));
        assert!(approx_eq(dl[1], -0.125, 1e-7));
    }

    #[test]
    fn stability_triangle() {
        assert!(BiquadCoeffs::IDENTITY.is_stable());
        assert!(BiquadCoeffs::new([-1.8, 0.81], [1.0, 0.0, 0.0]).is_stable());
        // double pole at z = 1
        assert!(!BiquadCoeffs::new([-2.0, 1.0], [1.0, 0.0, 0.0]).is_stable());
        // |a2| > 1
        assert!(!BiquadCoeffs::new([0.0, 1.5], [1.0, 0.0, 0.0]).is_stable());
        // real pole at z = -1.25
        assert!(!BiquadCoeffs::new([1.5, 0.3125], [1.0, 0.0, 0.0]).is_stable());
    }

    #[test]
    fn try_new_rejects_unstable() {
        let unstable = BiquadCoeffs::new([-2.0, 1.0], [1.0, 0.0, 0.0]);
        assert_eq!(Biquad::try_new(unstable).unwrap_err(), FilterError::Unstable);
        assert!(Biquad::try_new(BiquadCoeffs::IDENTITY).is_ok());
    }

    #[test]
    fn identity_response_is_flat() {
        let coeffs = BiquadCoeffs::IDENTITY;
        for freq in [10.0, 1000.0, 12000.0, 23000.0] {
            assert!(approx_eq(coeffs.magnitude_at(freq, SAMPLE_RATE), 1.0, 1e-6));
            assert!(approx_eq(coeffs.phase_at(freq, SAMPLE_RATE), 0.0, 1e-6));
            assert!(approx_eq(coeffs.magnitude_db_at(freq, SAMPLE_RATE), 0.0, 1e-4));
        }
    }

    #[test]
    fn pure_delay_phase() {
        // H(z) = z^-1 -> phase = -w
        let coeffs = BiquadCoeffs::new([0.0, 0.0], [0.0, 1.0, 0.0]);
        let freq = 6000.0;
        let omega = 2.0 * PI * freq / SAMPLE_RATE;
        assert!(approx_eq(coeffs.phase_at(freq, SAMPLE_RATE), -omega, 1e-5));
        assert!(approx_eq(coeffs.magnitude_at(freq, SAMPLE_RATE), 1.0, 1e-6));
    }

    #[test]
    fn zero_at_nyquist_is_deep_null() {
        // H(z) = 1 + z^-1
        let coeffs = BiquadCoeffs::new([0.0, 0.0], [1.0, 1.0, 0.0]);
        assert!(coeffs.magnitude_db_at(24000.0, SAMPLE_RATE) < -100.0);
        assert!(approx_eq(coeffs.magnitude_db_at(0.0, SAMPLE_RATE), 6.0206, 1e-3));
    }

    #[test]
    fn set_coeffs_keeps_state() {
        let mut filter = Biquad::new(BiquadCoeffs::new([-0.5, 0.0], [1.0, 0.5, 0.0]));
        filter.process(1.0);
        let before = filter.state();
        filter.set_coeffs(BiquadCoeffs::IDENTITY);
        assert_eq!(filter.state(), before);
        assert_eq!(filter.coeffs(), BiquadCoeffs::IDENTITY);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Biquad::default().coeffs(), BiquadCoeffs::IDENTITY);
        assert_eq!(BiquadCoeffs::default(), BiquadCoeffs::IDENTITY);
    }
}
