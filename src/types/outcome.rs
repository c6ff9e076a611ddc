//! Definition for the [`Outcome`] type, implemented by an enum.

use serde::Serialize;

use crate::types::poi::MarkerColor;

/// Result of a single launch, stored as the `class` column (0 or 1) in
/// the source data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class as found in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Human readable label shown in outcome breakdowns.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failed",
            Outcome::Success => "Satisfactory",
        }
    }

    /// Marker color used on the map.
    pub fn marker_color(self) -> MarkerColor {
        match self {
            Outcome::Failure => MarkerColor::Red,
            Outcome::Success => MarkerColor::Green,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl TryFrom<f64> for Outcome {
    type Error = f64;

    /// Accepts `0` and `1` (also written as `0.0` / `1.0`).
    fn try_from(class: f64) -> Result<Self, Self::Error> {
        if class == 0.0 {
            Ok(Outcome::Failure)
        } else if class == 1.0 {
            Ok(Outcome::Success)
        } else {
            Err(class)
        }
    }
}

#[cfg(test)]
mod outcome_tests {
    use super::*;

    #[test]
    fn test_from_class() {
        assert_eq!(Outcome::try_from(0.0), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1.0), Ok(Outcome::Success));
        assert_eq!(Outcome::try_from(2.0), Err(2.0));
        assert_eq!(Outcome::try_from(0.5), Err(0.5));
    }

    #[test]
    fn test_presentation() {
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.label(), "Failed");
        assert_eq!(Outcome::Success.label(), "Satisfactory");
        assert_eq!(Outcome::Failure.marker_color(), MarkerColor::Red);
        assert!(Outcome::Success.is_success());
    }
}
