// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Epsilon-tolerant comparison and per-triangle metrics.
//!
//! Coordinates are nalgebra `Point3<f64>` / `Vector3<f64>` values; arithmetic
//! (add, sub, scale, dot, cross, norm) comes from nalgebra. This module adds
//! the tolerance-based equality used throughout the pipeline plus the
//! numerically guarded triangle measures. Every function is total over finite
//! doubles and free of side effects.

use nalgebra::{Point3, Vector3};

/// Default tolerance for comparison in model space.
pub const EPSILON: f64 = 1e-8;

/// Compares two scalars with the default tolerance.
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    is_equal_eps(a, b, EPSILON)
}

/// Compares two scalars with an explicit tolerance.
#[inline]
pub fn is_equal_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Tests a scalar against zero with the default tolerance.
#[inline]
pub fn is_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Component-wise point comparison with the default tolerance.
#[inline]
pub fn coords_equal(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y) && is_equal(a.z, b.z)
}

/// Component-wise vector comparison with the default tolerance.
#[inline]
pub fn vectors_equal(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y) && is_equal(a.z, b.z)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Triangle area via Heron's formula.
///
/// The squared intermediate can drift slightly negative for needle triangles;
/// it is clamped to zero so degenerate input yields area 0 instead of NaN.
pub fn triangle_area(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> f64 {
    let a = distance(v0, v1);
    let b = distance(v1, v2);
    let c = distance(v0, v2);
    let s = (a + b + c) / 2.0;
    let area_square = s * (s - a) * (s - b) * (s - c);
    if area_square < 0.0 {
        return 0.0;
    }
    area_square.sqrt()
}

/// Signed volume of the tetrahedron spanned by a triangle and the origin.
///
/// Summed over every triangle of a closed, consistently wound surface this
/// yields the enclosed volume, negative if the winding is inverted.
#[inline]
pub fn signed_tetrahedron_volume(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> f64 {
    v0.coords.dot(&v1.coords.cross(&v2.coords)) / 6.0
}

/// Unit normal of a triangle, or `None` when the triangle is degenerate.
pub fn triangle_normal(
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
) -> Option<Vector3<f64>> {
    let normal = (v1 - v0).cross(&(v2 - v0));
    let len = normal.norm();
    if len < 1e-15 {
        return None; // degenerate triangle
    }
    Some(normal / len)
}
