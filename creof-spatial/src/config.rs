//! Configuration for bounding-rectangle predicates.

use std::sync::Arc;

/// How two rectangle bounds are compared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RectangleComparison {
    /// Plain floating-point equality.
    #[default]
    Exact,
    /// Bounds are equal when they differ by at most the given amount.
    Tolerance(f64),
}

impl RectangleComparison {
    pub(crate) fn bounds_equal(&self, left: f64, right: f64) -> bool {
        match *self {
            RectangleComparison::Exact => left == right,
            RectangleComparison::Tolerance(epsilon) => (left - right).abs() <= epsilon,
        }
    }

    /// Margin by which a search rectangle has to be widened so that every
    /// candidate this comparison accepts is still found.
    pub(crate) fn search_margin(&self) -> f64 {
        match *self {
            RectangleComparison::Exact => 0.0,
            RectangleComparison::Tolerance(epsilon) => epsilon,
        }
    }
}

/// Settings shared by spatial predicates and the [`MbrIndex`](crate::MbrIndex).
///
/// # Examples
///
/// ```rust
/// use creof_spatial::{RectangleComparison, SpatialConfig};
///
/// let config = SpatialConfig::new().with_comparison(RectangleComparison::Tolerance(1e-9));
/// assert_eq!(config.comparison(), RectangleComparison::Tolerance(1e-9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpatialConfig {
    inner: Arc<SpatialConfigInner>,
}

#[derive(Debug, Clone, Default)]
struct SpatialConfigInner {
    comparison: RectangleComparison,
}

impl SpatialConfig {
    /// Creates a configuration with exact rectangle comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rectangle comparison mode.
    ///
    /// A negative or non-finite tolerance is treated as exact comparison.
    pub fn with_comparison(self, comparison: RectangleComparison) -> Self {
        let comparison = match comparison {
            RectangleComparison::Tolerance(epsilon) if !(epsilon.is_finite() && epsilon >= 0.0) => {
                log::warn!(
                    "Ignoring invalid rectangle tolerance {}, falling back to exact comparison",
                    epsilon
                );
                RectangleComparison::Exact
            }
            other => other,
        };
        let mut inner = (*self.inner).clone();
        inner.comparison = comparison;
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The rectangle comparison mode.
    pub fn comparison(&self) -> RectangleComparison {
        self.inner.comparison
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(SpatialConfig::new().comparison(), RectangleComparison::Exact);
        assert_eq!(RectangleComparison::default(), RectangleComparison::Exact);
    }

    #[test]
    fn test_with_comparison() {
        let config = SpatialConfig::new().with_comparison(RectangleComparison::Tolerance(0.5));
        assert_eq!(config.comparison(), RectangleComparison::Tolerance(0.5));
        assert_eq!(config.comparison().search_margin(), 0.5);
    }

    #[test]
    fn test_invalid_tolerance_falls_back_to_exact() {
        let config = SpatialConfig::new().with_comparison(RectangleComparison::Tolerance(-1.0));
        assert_eq!(config.comparison(), RectangleComparison::Exact);

        let config =
            SpatialConfig::new().with_comparison(RectangleComparison::Tolerance(f64::NAN));
        assert_eq!(config.comparison(), RectangleComparison::Exact);
    }

    #[test]
    fn test_bounds_equal() {
        assert!(RectangleComparison::Exact.bounds_equal(1.0, 1.0));
        assert!(!RectangleComparison::Exact.bounds_equal(1.0, 1.0 + f64::EPSILON));
        assert!(RectangleComparison::Tolerance(0.1).bounds_equal(1.0, 1.05));
    }

    #[test]
    fn test_config_clone_is_independent() {
        let base = SpatialConfig::new();
        let tolerant = base.clone().with_comparison(RectangleComparison::Tolerance(1.0));
        assert_eq!(base.comparison(), RectangleComparison::Exact);
        assert_eq!(tolerant.comparison(), RectangleComparison::Tolerance(1.0));
    }
}
