use thiserror::Error;

/// Errors raised while building, parsing or inspecting geometries.
///
/// Every failure is reported at construction or parse time; no partially
/// built geometry is ever handed back alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    /// Malformed text or array input, an unclosed polygon ring, mixed
    /// coordinate dimensions or a non-finite coordinate.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// An index fell outside a sequence, after negative indices were
    /// resolved against its length.
    #[error("Index {index} is out of range for a sequence of length {len}")]
    Range { index: isize, len: usize },

    /// A WKT keyword or GeoJSON type naming a geometry kind this crate does
    /// not model.
    #[error("Unsupported geometry kind: {0}")]
    UnsupportedKind(String),
}

impl SpatialError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SpatialError::InvalidValue(message.into())
    }

    /// Returns true for [`SpatialError::InvalidValue`].
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, SpatialError::InvalidValue(_))
    }

    /// Returns true for [`SpatialError::Range`].
    pub fn is_range_error(&self) -> bool {
        matches!(self, SpatialError::Range { .. })
    }

    /// Returns true for [`SpatialError::UnsupportedKind`].
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, SpatialError::UnsupportedKind(_))
    }
}

impl From<serde_json::Error> for SpatialError {
    fn from(err: serde_json::Error) -> Self {
        SpatialError::InvalidValue(format!("Malformed JSON geometry: {}", err))
    }
}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;
