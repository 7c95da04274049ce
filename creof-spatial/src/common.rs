//! Helpers shared by every geometry sequence.

use serde::{Serialize, Serializer};
use std::fmt::{self, Display};
use std::ops::Deref;

use crate::errors::{SpatialError, SpatialResult};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Resolves a possibly negative index against a sequence length.
///
/// Non-negative indices count from the front, negative ones from the back
/// (`-1` is the last element). The resolved index is bounds checked.
///
/// # Errors
///
/// Returns [`SpatialError::Range`] when the index does not address an element,
/// which is always the case for an empty sequence.
pub fn normalize_index(index: isize, len: usize) -> SpatialResult<usize> {
    let resolved = if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        len.checked_sub(index.unsigned_abs())
    };

    match resolved {
        Some(position) if position < len => Ok(position),
        _ => Err(SpatialError::Range { index, len }),
    }
}

/// A coordinate component as it appears in GeoJSON and WKT text.
///
/// Serialization writes whole values below 2^53 as integers, since GeoJSON
/// consumers expect `[0,0]` rather than `[0.0,0.0]`. `-0.0` keeps its sign and
/// is written as a float. `Display` gives the shortest text that parses back to
/// the same value, switching to exponent form for very large or very small
/// magnitudes (`1e300`, `1e-7`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ordinate(pub f64);

impl Serialize for Ordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        let negative_zero = value == 0.0 && value.is_sign_negative();
        if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER && !negative_zero {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:?}", self.0);
        f.write_str(text.strip_suffix(".0").unwrap_or(&text))
    }
}

/// Nested arrays of coordinate components, serialized the way GeoJSON
/// coordinates are written.
pub trait OrdinateArray {
    fn serialize_ordinates<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;
}

impl OrdinateArray for f64 {
    fn serialize_ordinates<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Ordinate(*self).serialize(serializer)
    }
}

impl<T: OrdinateArray> OrdinateArray for Vec<T> {
    fn serialize_ordinates<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(CoordinateArray::of))
    }
}

/// The nested coordinate array returned by every `to_array` method.
///
/// It dereferences to the plain nested `Vec` and converts into it with
/// [`CoordinateArray::into_inner`] or `Into`. Serialized, it is exactly the
/// `coordinates` member written by [`geojson::to_json`](crate::geojson::to_json).
///
/// # Examples
///
/// ```rust
/// use creof_spatial::LineString;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let line = LineString::new(vec![[0.0, 0.0], [1.5, 2.0]])?;
/// let array = line.to_array();
/// assert_eq!(array[1], vec![1.5, 2.0]);
/// assert_eq!(serde_json::to_string(&array)?, "[[0,0],[1.5,2]]");
/// assert_eq!(LineString::from_array(array)?, line);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateArray<T>(T);

impl<T> CoordinateArray<T> {
    pub fn new(values: T) -> Self {
        Self(values)
    }

    /// Unwraps the plain nested `Vec`.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'a, T> CoordinateArray<&'a T> {
    fn of(values: &'a T) -> Self {
        Self(values)
    }
}

impl<T> Deref for CoordinateArray<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<CoordinateArray<Vec<T>>> for Vec<T> {
    fn from(array: CoordinateArray<Vec<T>>) -> Self {
        array.0
    }
}

impl<T: OrdinateArray> Serialize for CoordinateArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize_ordinates(serializer)
    }
}

impl<T: OrdinateArray> OrdinateArray for &T {
    fn serialize_ordinates<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (**self).serialize_ordinates(serializer)
    }
}
