// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes in double precision.

use nalgebra::{Point3, Vector3};

/// An axis-aligned bounding box.
///
/// A box starts in the empty state (`min = f64::MAX`, `max = f64::MIN`) so
/// that the first added point initializes it; [`BoundingBox::is_valid`]
/// distinguishes the empty sentinel from a real box. Empty input therefore
/// produces a well-defined sentinel, never undefined numerics.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Creates the empty sentinel box.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// Creates a box from explicit corners.
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// True once at least one point has been added.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Expands the box to include a point.
    #[inline]
    pub fn add_point(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Expands the box to include another box. Empty boxes contribute nothing.
    pub fn union(&mut self, other: &BoundingBox) {
        if other.is_valid() {
            self.add_point(&other.min);
            self.add_point(&other.max);
        }
    }

    /// Center of the box, or `None` for the empty sentinel.
    pub fn center(&self) -> Option<Point3<f64>> {
        if !self.is_valid() {
            return None;
        }
        Some(Point3::from((self.min.coords + self.max.coords) / 2.0))
    }

    /// Extent of the box along each axis, or `None` for the empty sentinel.
    pub fn size(&self) -> Option<Vector3<f64>> {
        if !self.is_valid() {
            return None;
        }
        Some(self.max - self.min)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_box_is_invalid() {
        let bounds = BoundingBox::empty();
        assert!(!bounds.is_valid());
        assert!(bounds.center().is_none());
        assert!(bounds.size().is_none());
    }

    #[test]
    fn add_points_grows_box() {
        let mut bounds = BoundingBox::empty();
        bounds.add_point(&Point3::new(1.0, 2.0, 3.0));
        assert!(bounds.is_valid());
        assert_eq!(bounds.min, bounds.max);

        bounds.add_point(&Point3::new(-1.0, 5.0, 0.0));
        assert_eq!(bounds.min, Point3::new(-1.0, 2.0, 0.0));
        assert_eq!(bounds.max, Point3::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn union_ignores_empty_boxes() {
        let mut bounds = BoundingBox::empty();
        bounds.add_point(&Point3::new(0.0, 0.0, 0.0));
        bounds.add_point(&Point3::new(1.0, 1.0, 1.0));

        let before = bounds.clone();
        bounds.union(&BoundingBox::empty());
        assert_eq!(bounds, before);

        let mut other = BoundingBox::empty();
        other.add_point(&Point3::new(2.0, 0.5, -1.0));
        bounds.union(&other);
        assert_eq!(bounds.max.x, 2.0);
        assert_eq!(bounds.min.z, -1.0);
    }

    #[test]
    fn center_and_size() {
        let bounds = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0));
        let center = bounds.center().unwrap();
        let size = bounds.size().unwrap();
        assert_relative_eq!(center.x, 1.0);
        assert_relative_eq!(center.y, 2.0);
        assert_relative_eq!(center.z, 3.0);
        assert_relative_eq!(size.x, 2.0);
        assert_relative_eq!(size.y, 4.0);
        assert_relative_eq!(size.z, 6.0);
    }
}
