//! Typed search errors.
//!
//! An unreachable goal is not an error: it is reported as
//! [`crate::Outcome::Exhausted`]. `SearchError` covers callers that break the
//! numeric contract of [`crate::InformedSpace`] or [`crate::WeightedSpace`].

use std::fmt;

/// Failure raised while running A*.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The heuristic returned a negative, infinite or NaN estimate.
    InvalidHeuristic { value: f64 },
    /// An edge cost was negative, infinite or NaN.
    InvalidEdgeCost { value: f64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeuristic { value } => {
                write!(f, "heuristic must be finite and non-negative, got {value}")
            }
            Self::InvalidEdgeCost { value } => {
                write!(f, "edge cost must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

pub(crate) fn check_heuristic(value: f64) -> Result<f64, SearchError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SearchError::InvalidHeuristic { value })
    }
}

pub(crate) fn check_edge_cost(value: f64) -> Result<f64, SearchError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SearchError::InvalidEdgeCost { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert_eq!(check_heuristic(0.0), Ok(0.0));
        assert_eq!(check_heuristic(3.5), Ok(3.5));
        assert_eq!(
            check_heuristic(-1.0),
            Err(SearchError::InvalidHeuristic { value: -1.0 })
        );
        assert!(check_heuristic(f64::INFINITY).is_err());
        assert!(check_heuristic(f64::NAN).is_err());
        assert!(check_edge_cost(-0.5).is_err());
        assert_eq!(check_edge_cost(1.0), Ok(1.0));
    }

    #[test]
    fn display_names_the_offending_value() {
        let msg = SearchError::InvalidEdgeCost { value: -2.0 }.to_string();
        assert_eq!(msg, "edge cost must be finite and non-negative, got -2");
    }
}
