// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures: vertex/normal/UV arrays indexed by triangles.
//!
//! A [`Mesh`] owns append-only arrays; `add_*` methods return the new
//! element's 0-based index and previously returned indices stay valid
//! forever. Index-based accessors are checked and fail fast on invalid
//! indices. The mesh never computes normals on its own; resolving missing
//! normals is part of model finalization.

use nalgebra::{Point2, Point3, Vector3};
use scene_lite_geometry::Transformation;

use crate::error::{Error, Result};

/// A triangle: three vertex indices plus normal/UV/material references.
///
/// Normal, UV and material slots start unset. Finalization resolves normals
/// and materials; UVs stay optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [u32; 3],
    pub normals: Option<[u32; 3]>,
    pub uvs: Option<[u32; 3]>,
    pub material: Option<u32>,
}

impl Triangle {
    /// Creates a triangle from three vertex indices; all other slots unset.
    pub fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self {
            vertices: [v0, v1, v2],
            normals: None,
            uvs: None,
            material: None,
        }
    }

    /// Sets the three normal indices.
    pub fn with_normals(mut self, n0: u32, n1: u32, n2: u32) -> Self {
        self.normals = Some([n0, n1, n2]);
        self
    }

    /// Sets the three UV indices.
    pub fn with_uvs(mut self, u0: u32, u1: u32, u2: u32) -> Self {
        self.uvs = Some([u0, u1, u2]);
        self
    }

    /// Sets the material index.
    pub fn with_material(mut self, material: u32) -> Self {
        self.material = Some(material);
        self
    }
}

/// Raw triangle geometry, independent of placement in the scene.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    name: String,
    vertices: Vec<Point3<f64>>,
    normals: Vec<Vector3<f64>>,
    uvs: Vec<Point2<f64>>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Point3<f64>) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Appends a normal and returns its index.
    pub fn add_normal(&mut self, normal: Vector3<f64>) -> u32 {
        self.normals.push(normal);
        (self.normals.len() - 1) as u32
    }

    /// Appends a UV coordinate and returns its index.
    pub fn add_uv(&mut self, uv: Point2<f64>) -> u32 {
        self.uvs.push(uv);
        (self.uvs.len() - 1) as u32
    }

    /// Appends a triangle and returns its index.
    pub fn add_triangle(&mut self, triangle: Triangle) -> u32 {
        self.triangles.push(triangle);
        (self.triangles.len() - 1) as u32
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn uv_count(&self) -> usize {
        self.uvs.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the vertex at `index`.
    pub fn vertex(&self, index: u32) -> Result<&Point3<f64>> {
        self.vertices
            .get(index as usize)
            .ok_or(Error::IndexOutOfRange {
                what: "vertex",
                index: index as usize,
                len: self.vertices.len(),
            })
    }

    /// Returns the normal at `index`.
    pub fn normal(&self, index: u32) -> Result<&Vector3<f64>> {
        self.normals
            .get(index as usize)
            .ok_or(Error::IndexOutOfRange {
                what: "normal",
                index: index as usize,
                len: self.normals.len(),
            })
    }

    /// Returns the UV coordinate at `index`.
    pub fn uv(&self, index: u32) -> Result<&Point2<f64>> {
        self.uvs.get(index as usize).ok_or(Error::IndexOutOfRange {
            what: "uv",
            index: index as usize,
            len: self.uvs.len(),
        })
    }

    /// Returns the triangle at `index`.
    pub fn triangle(&self, index: u32) -> Result<&Triangle> {
        self.triangles
            .get(index as usize)
            .ok_or(Error::IndexOutOfRange {
                what: "triangle",
                index: index as usize,
                len: self.triangles.len(),
            })
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Point2<f64>] {
        &self.uvs
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub(crate) fn triangles_mut(&mut self) -> &mut [Triangle] {
        &mut self.triangles
    }

    /// True when the mesh stores no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bakes a transformation into vertex positions and normals.
    pub fn transform(&mut self, transformation: &Transformation) {
        for vertex in &mut self.vertices {
            *vertex = transformation.transform_point(vertex);
        }
        for normal in &mut self.normals {
            *normal = transformation.transform_normal(normal);
        }
    }

    /// Computes flat normals for triangles whose normal slots are unset.
    ///
    /// Appends one normal per resolved triangle and points all three slots at
    /// it; degenerate triangles get the zero vector. Triangles that already
    /// carry normals are left untouched. Returns the number of triangles
    /// resolved.
    pub fn resolve_flat_normals(&mut self) -> Result<usize> {
        let mut resolved = 0;
        for i in 0..self.triangles.len() {
            if self.triangles[i].normals.is_some() {
                continue;
            }
            let [v0, v1, v2] = self.triangles[i].vertices;
            let p0 = *self.vertex(v0)?;
            let p1 = *self.vertex(v1)?;
            let p2 = *self.vertex(v2)?;
            let normal = scene_lite_geometry::triangle_normal(&p0, &p1, &p2)
                .unwrap_or_else(Vector3::zeros);
            let index = self.add_normal(normal);
            self.triangles[i].normals = Some([index, index, index]);
            resolved += 1;
        }
        Ok(resolved)
    }
}
