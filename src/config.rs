//! Filter defaults and demo constants
//!
//! Compile-time parameters shared by the library and the embedded demo.

use crate::dsp::biquad::BiquadCoeffs;

/// Default DC blocker pole (cutoff of roughly 38 Hz at 48 kHz)
pub const DEFAULT_DC_BLOCK_POLE: f32 = 0.995;

/// Delay-line magnitudes at or below this are treated as silence
pub const SILENT_THRESHOLD: f32 = 2.0e-8;

/// Sample rate the demo binary reports its chain at
pub const DEMO_SAMPLE_RATE: u32 = 48_000;

/// Number of samples of impulse response the demo logs
pub const DEMO_IMPULSE_LEN: usize = 16;

/// Demo lowpass section (1 kHz Butterworth at 48 kHz)
pub const DEMO_LOWPASS: BiquadCoeffs = BiquadCoeffs {
    a: [-1.815_341_1, 0.831_005_6],
    b: [0.003_916_127, 0.007_832_253, 0.003_916_127],
};

/// Demo first-order allpass coefficient
pub const DEMO_ALLPASS_COEFF: f32 = 0.5;

/// Maximum number of sections in the demo cascade
pub const DEMO_CASCADE_SECTIONS: usize = 4;
