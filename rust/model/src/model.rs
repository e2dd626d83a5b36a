// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The model aggregate: meshes, materials, and the scene tree.
//!
//! Meshes and materials live in flat, append-only lists and are referenced
//! by index: nodes hold mesh indices, triangles hold material indices.
//! [`Model::finalize`] is the one-time post-construction pass that resolves
//! every remaining gap so downstream consumers can rely on fully indexed
//! triangles.

use crate::error::{Error, Result};
use crate::material::Material;
use crate::mesh::Mesh;
use crate::node::NodeTree;

/// A complete model: flat mesh and material lists plus the node hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Model {
    name: String,
    meshes: Vec<Mesh>,
    materials: Vec<Material>,
    tree: NodeTree,
}

impl Model {
    /// Creates an empty model with a single root node.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a mesh and returns its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> u32 {
        self.meshes.push(mesh);
        (self.meshes.len() - 1) as u32
    }

    /// Returns the mesh at `index`.
    pub fn mesh(&self, index: u32) -> Result<&Mesh> {
        self.meshes
            .get(index as usize)
            .ok_or(Error::IndexOutOfRange {
                what: "mesh",
                index: index as usize,
                len: self.meshes.len(),
            })
    }

    /// Returns the mesh at `index` mutably.
    pub fn mesh_mut(&mut self, index: u32) -> Result<&mut Mesh> {
        let len = self.meshes.len();
        self.meshes
            .get_mut(index as usize)
            .ok_or(Error::IndexOutOfRange {
                what: "mesh",
                index: index as usize,
                len,
            })
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Appends a material and returns its index.
    pub fn add_material(&mut self, material: Material) -> u32 {
        self.materials.push(material);
        (self.materials.len() - 1) as u32
    }

    /// Returns the material at `index`.
    pub fn material(&self, index: u32) -> Result<&Material> {
        self.materials
            .get(index as usize)
            .ok_or(Error::IndexOutOfRange {
                what: "material",
                index: index as usize,
                len: self.materials.len(),
            })
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// The scene node hierarchy.
    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut NodeTree {
        &mut self.tree
    }

    /// True when every triangle carries resolved normal and material indices.
    pub fn is_finalized(&self) -> bool {
        self.meshes.iter().all(|mesh| {
            mesh.triangles()
                .iter()
                .all(|t| t.normals.is_some() && t.material.is_some())
        })
    }

    /// One-time post-construction pass resolving triangle gaps.
    ///
    /// Unset normals are filled with computed flat normals. If any triangle
    /// lacks a material, `default_material` is invoked exactly once, its
    /// result appended to the material list, and every unset triangle pointed
    /// at that single shared entry. Re-running is idempotent: with nothing
    /// left unset the factory is never called and nothing is appended.
    pub fn finalize(&mut self, default_material: impl FnOnce() -> Material) -> Result<()> {
        let mut resolved_normals = 0;
        for mesh in &mut self.meshes {
            resolved_normals += mesh.resolve_flat_normals()?;
        }

        let needs_default = self
            .meshes
            .iter()
            .any(|mesh| mesh.triangles().iter().any(|t| t.material.is_none()));
        if needs_default {
            let default_index = self.add_material(default_material());
            for mesh in &mut self.meshes {
                for triangle in mesh.triangles_mut() {
                    if triangle.material.is_none() {
                        triangle.material = Some(default_index);
                    }
                }
            }
            tracing::debug!(
                material = default_index,
                "assigned shared default material to unset triangles"
            );
        }
        tracing::debug!(
            meshes = self.meshes.len(),
            resolved_normals,
            "model finalized"
        );
        Ok(())
    }
}
