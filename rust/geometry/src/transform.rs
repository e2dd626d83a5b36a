// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Affine transformations as composable value types.
//!
//! A [`Transformation`] wraps a 4x4 affine matrix. Composition via
//! [`Transformation::append`] follows apply-self-then-other order, which is
//! the contract the scene graph's world-transform accumulation builds on.

use nalgebra::{Matrix4, Point3, Rotation3, Unit, UnitQuaternion, Vector3};

/// An affine transformation (translation, rotation, scale) over model space.
///
/// Value semantics: cloning copies the matrix and never shares state.
/// Malformed (non-invertible) matrices are accepted as-is; composition stays
/// defined for every affine matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    matrix: Matrix4<f64>,
}

impl Transformation {
    /// The identity transformation.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wraps an arbitrary 4x4 affine matrix. No validation is performed.
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// A pure translation.
    pub fn from_translation(offset: &Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(offset),
        }
    }

    /// A rotation of `angle` radians around `axis`.
    ///
    /// A degenerate (near-zero) axis yields the identity.
    pub fn from_rotation(axis: &Vector3<f64>, angle: f64) -> Self {
        match Unit::try_new(*axis, 1e-15) {
            Some(unit_axis) => Self {
                matrix: Rotation3::from_axis_angle(&unit_axis, angle).to_homogeneous(),
            },
            None => Self::identity(),
        }
    }

    /// A non-uniform scale around the origin.
    pub fn from_scale(factors: &Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(factors),
        }
    }

    /// The usual TRS composition: scale, then rotate, then translate.
    pub fn from_translation_rotation_scale(
        translation: &Vector3<f64>,
        rotation: &UnitQuaternion<f64>,
        scale: &Vector3<f64>,
    ) -> Self {
        Self {
            matrix: Matrix4::new_translation(translation)
                * rotation.to_homogeneous()
                * Matrix4::new_nonuniform_scaling(scale),
        }
    }

    /// The underlying 4x4 matrix.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// True for the exact identity matrix.
    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix4::identity()
    }

    /// Returns the composition that applies `self` first, then `other`.
    ///
    /// World-transform accumulation walks parent-ward from a node with
    /// `acc = parent.local.append(&acc)`, so a root's world transform equals
    /// its local transform.
    pub fn append(&self, other: &Transformation) -> Transformation {
        Transformation {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Applies the transformation to a point.
    #[inline]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Applies the linear part to a direction (no translation).
    #[inline]
    pub fn transform_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transform_vector(direction)
    }

    /// Applies the transformation to a surface normal.
    ///
    /// Normals transform by the inverse-transpose so they stay perpendicular
    /// under non-uniform scale. A singular matrix falls back to direct
    /// application. The result is re-normalized when it has nonzero length.
    pub fn transform_normal(&self, normal: &Vector3<f64>) -> Vector3<f64> {
        let transformed = match self.matrix.try_inverse() {
            Some(inverse) => inverse.transpose().transform_vector(normal),
            None => self.matrix.transform_vector(normal),
        };
        let len = transformed.norm();
        if len > 0.0 {
            transformed / len
        } else {
            transformed
        }
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}
