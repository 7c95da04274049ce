//! Point geometry.
//!
//! A point always carries finite `x` and `y` components and optionally a `z`
//! elevation and an `m` measure. A measure is only ever present together with
//! an elevation, matching the `(x, y)`, `(x, y, z)` and `(x, y, z, m)`
//! constructors.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::common::{CoordinateArray, Ordinate};
use crate::errors::{SpatialError, SpatialResult};

/// The number of components carried by each coordinate of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Planar `x y` coordinates.
    Xy,
    /// `x y z` coordinates.
    Xyz,
    /// `x y z m` coordinates.
    Xyzm,
}

impl Dimension {
    /// Number of numeric components per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::Xy => 2,
            Dimension::Xyz => 3,
            Dimension::Xyzm => 4,
        }
    }
}

/// A single position, the leaf of every geometry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    m: Option<f64>,
}

impl Point {
    /// Creates a planar point.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] if either component is not finite.
    pub fn new(x: f64, y: f64) -> SpatialResult<Self> {
        Self::build(x, y, None, None)
    }

    /// Creates a point with an elevation.
    pub fn new_3d(x: f64, y: f64, z: f64) -> SpatialResult<Self> {
        Self::build(x, y, Some(z), None)
    }

    /// Creates a point with an elevation and a measure.
    pub fn new_4d(x: f64, y: f64, z: f64, m: f64) -> SpatialResult<Self> {
        Self::build(x, y, Some(z), Some(m))
    }

    /// Creates a point from a flat array of 2 to 4 components.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] for any other arity or a
    /// non-finite component.
    pub fn from_array(components: &[f64]) -> SpatialResult<Self> {
        match *components {
            [x, y] => Self::new(x, y),
            [x, y, z] => Self::new_3d(x, y, z),
            [x, y, z, m] => Self::new_4d(x, y, z, m),
            _ => Err(SpatialError::invalid(format!(
                "a point requires 2 to 4 coordinates, got {}",
                components.len()
            ))),
        }
    }

    fn build(x: f64, y: f64, z: Option<f64>, m: Option<f64>) -> SpatialResult<Self> {
        validate_component("x", x)?;
        validate_component("y", y)?;
        if let Some(z) = z {
            validate_component("z", z)?;
        }
        if let Some(m) = m {
            validate_component("m", m)?;
        }
        Ok(Self { x, y, z, m })
    }

    /// The x component (longitude for geographic data).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y component (latitude for geographic data).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The elevation, if any.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// The measure, if any. Always `None` when there is no elevation.
    pub fn m(&self) -> Option<f64> {
        self.m
    }

    /// Replaces the x component. The point is left untouched on error.
    pub fn set_x(&mut self, x: f64) -> SpatialResult<&mut Self> {
        validate_component("x", x)?;
        self.x = x;
        Ok(self)
    }

    /// Replaces the y component. The point is left untouched on error.
    pub fn set_y(&mut self, y: f64) -> SpatialResult<&mut Self> {
        validate_component("y", y)?;
        self.y = y;
        Ok(self)
    }

    /// How many components this point carries.
    pub fn dimension(&self) -> Dimension {
        match (self.z, self.m) {
            (None, _) => Dimension::Xy,
            (Some(_), None) => Dimension::Xyz,
            (Some(_), Some(_)) => Dimension::Xyzm,
        }
    }

    /// Returns the components as a flat array, `[x, y]` up to `[x, y, z, m]`.
    pub fn to_array(&self) -> CoordinateArray<Vec<f64>> {
        CoordinateArray::new(self.components())
    }

    pub(crate) fn components(&self) -> Vec<f64> {
        let mut components = Vec::with_capacity(self.dimension().size());
        components.push(self.x);
        components.push(self.y);
        components.extend(self.z);
        components.extend(self.m);
        components
    }

    /// WKT coordinate text without the `POINT` keyword, e.g. `1 2`.
    pub fn wkt_body(&self) -> String {
        self.to_string()
    }
}

fn validate_component(name: &str, value: f64) -> SpatialResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpatialError::invalid(format!(
            "point {} coordinate must be a finite number, got {}",
            name, value
        )))
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = SpatialError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Point::from_array(&components)
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", Ordinate(component))?;
        }
        Ok(())
    }
}
