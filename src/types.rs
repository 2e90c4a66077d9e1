//! Shared types used across the filter library
//!
//! Processing itself is total; these errors only come from checked
//! constructors and fixed-capacity containers.

use core::fmt;

/// Result type for fallible filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors reported when building filters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// Coefficients place a pole on or outside the unit circle
    Unstable,
    /// A fixed-capacity cascade has no free section slot
    CascadeFull,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable => write!(f, "filter coefficients are not stable"),
            Self::CascadeFull => write!(f, "cascade has no free section slot"),
        }
    }
}

impl core::error::Error for FilterError {}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Unstable => defmt::write!(f, "Unstable"),
            Self::CascadeFull => defmt::write!(f, "CascadeFull"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            FilterError::Unstable.to_string(),
            "filter coefficients are not stable"
        );
        assert_eq!(
            FilterError::CascadeFull.to_string(),
            "cascade has no free section slot"
        );
    }
}
