// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-Lite Geometry
//!
//! Geometric primitives for the scene-lite model pipeline: epsilon-tolerant
//! comparison, per-triangle metrics, composable affine transformations, and
//! axis-aligned bounding boxes. All math is double precision and built on
//! nalgebra.

pub mod bounds;
pub mod coord;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3, UnitQuaternion, Vector3};

pub use bounds::BoundingBox;
pub use coord::{
    coords_equal, distance, is_equal, is_equal_eps, is_zero, signed_tetrahedron_volume,
    triangle_area, triangle_normal, vectors_equal, EPSILON,
};
pub use transform::Transformation;
