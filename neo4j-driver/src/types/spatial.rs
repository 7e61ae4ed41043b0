// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Spatial point values

use crate::error::ValueError;
use crate::integer::Integer;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SRID of WGS-84 geographic points in two dimensions
pub const WGS84_2D_SRID: i32 = 4326;
/// SRID of WGS-84 geographic points in three dimensions
pub const WGS84_3D_SRID: i32 = 4979;
/// SRID of Cartesian points in two dimensions
pub const CARTESIAN_2D_SRID: i32 = 7203;
/// SRID of Cartesian points in three dimensions
pub const CARTESIAN_3D_SRID: i32 = 9157;

/// A point in a coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Coordinate reference system identifier
    pub srid: Integer,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    /// Create a point, inferring its dimension from the coordinates (2 or 3)
    pub fn new(srid: impl Into<Integer>, coordinates: &[f64]) -> Result<Self, ValueError> {
        Self::with_dimension(srid, coordinates.len(), coordinates)
    }

    /// Create a point with an explicit dimension that must match the coordinates
    pub fn with_dimension(
        srid: impl Into<Integer>,
        dimension: usize,
        coordinates: &[f64],
    ) -> Result<Self, ValueError> {
        if dimension != coordinates.len() || !(2..=3).contains(&dimension) {
            return Err(ValueError::DimensionMismatch {
                dimension,
                coordinates: coordinates.len(),
            });
        }
        Ok(Self {
            srid: srid.into(),
            x: coordinates[0],
            y: coordinates[1],
            z: coordinates.get(2).copied(),
        })
    }

    pub fn new_2d(srid: impl Into<Integer>, x: f64, y: f64) -> Self {
        Self {
            srid: srid.into(),
            x,
            y,
            z: None,
        }
    }

    pub fn new_3d(srid: impl Into<Integer>, x: f64, y: f64, z: f64) -> Self {
        Self {
            srid: srid.into(),
            x,
            y,
            z: Some(z),
        }
    }

    pub fn dimension(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    pub fn coordinates(&self) -> Vec<f64> {
        let mut coordinates = vec![self.x, self.y];
        coordinates.extend(self.z);
        coordinates
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(
                f,
                "Point{{srid={}, x={:?}, y={:?}, z={:?}}}",
                self.srid, self.x, self.y, z
            ),
            None => write!(f, "Point{{srid={}, x={:?}, y={:?}}}", self.srid, self.x, self.y),
        }
    }
}

/// Whether the value is a [`Point`]
pub fn is_point(value: &Value) -> bool {
    matches!(value, Value::Point(_))
}
