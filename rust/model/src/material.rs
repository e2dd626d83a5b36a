// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material records referenced from triangles by index.

/// An opaque named material.
///
/// Rendering properties beyond the base color are the renderer's concern;
/// this core only stores the record and serves it by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Linear RGBA base color.
    pub base_color: [f64; 4],
}

impl Material {
    /// Creates a white material with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Sets the base color.
    pub fn with_base_color(mut self, base_color: [f64; 4]) -> Self {
        self.base_color = base_color;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("")
    }
}
