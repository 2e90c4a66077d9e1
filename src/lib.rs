//! IIR Filter Primitives
//!
//! Discrete-time filter building blocks for real-time signal chains on
//! embedded targets: a second-order (biquad) IIR section, first- and
//! second-order allpass sections, and a DC blocker. Higher-order filters,
//! phase-correction networks and crossover/EQ chains are composed from
//! these one sample at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     COMPOSITION LAYER                        │
//! │        SampleFilter trait  │  Chain  │  Cascade<N>           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      FILTER TYPES                            │
//! │  Biquad  │  FirstOrderAllpass  │  SecondOrderAllpass  │ DC   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      STEP KERNELS                            │
//! │  biquad_step │ allpass1_step │ allpass2_step │ dc_block_step │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Owned state**: each filter value carries its own delay line, sized
//!   for its kind at compile time
//! - **Caller-supplied coefficients**: no coefficient design, only analysis
//! - **Total processing**: per-sample calls never fail and never allocate
//! - **Explicit error handling**: checked constructors return `Result`

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Digital Signal Processing
///
/// Filter kernels, owned filter types and composition helpers.
pub mod dsp;

/// Shared types used across modules
pub mod types;

/// Compile-time defaults and thresholds
pub mod config;

pub use dsp::allpass::{allpass1_step, allpass2_step, FirstOrderAllpass, SecondOrderAllpass};
pub use dsp::biquad::{biquad_step, Biquad, BiquadCoeffs};
pub use dsp::cascade::Cascade;
pub use dsp::dc_block::{dc_block_step, DcBlocker};
pub use dsp::{Chain, SampleFilter};
pub use types::{FilterError, FilterResult};

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::dsp::allpass::{FirstOrderAllpass, SecondOrderAllpass};
    pub use crate::dsp::biquad::{Biquad, BiquadCoeffs};
    pub use crate::dsp::cascade::Cascade;
    pub use crate::dsp::dc_block::DcBlocker;
    pub use crate::dsp::{Chain, SampleFilter};
    pub use crate::types::{FilterError, FilterResult};
}
