// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model-level utilities: bounding boxes, world-space flattening, merging by
//! material, and volume/surface metrics.
//!
//! All utilities are deterministic: they follow mesh order, triangle order
//! and the node tree's documented traversal order, so repeated runs over an
//! identical model produce bit-identical output.

use rustc_hash::{FxHashMap, FxHashSet};
use scene_lite_geometry::{signed_tetrahedron_volume, triangle_area, BoundingBox};

use crate::error::{Error, Result};
use crate::mesh::{Mesh, Triangle};
use crate::model::Model;
use crate::node::NodeId;

/// Axis-aligned bounds over the vertices referenced by at least one triangle.
///
/// Stored but unreferenced vertices do not contribute. A mesh referencing no
/// vertices yields the empty sentinel box ([`BoundingBox::is_valid`] is
/// false).
pub fn mesh_bounding_box(mesh: &Mesh) -> Result<BoundingBox> {
    let mut bounds = BoundingBox::empty();
    let mut referenced: FxHashSet<u32> = FxHashSet::default();
    for triangle in mesh.triangles() {
        for &vertex_index in &triangle.vertices {
            if referenced.insert(vertex_index) {
                bounds.add_point(mesh.vertex(vertex_index)?);
            }
        }
    }
    Ok(bounds)
}

/// Bounds of the whole model in world space.
///
/// Walks the node tree and accumulates each node's referenced mesh vertices
/// transformed by the node's world transform. A model whose tree references
/// no meshes falls back to the union of all mesh bounds in model order with
/// identity transform.
pub fn model_bounding_box(model: &Model) -> Result<BoundingBox> {
    let tree = model.tree();
    let mut order = Vec::new();
    tree.enumerate(tree.root(), |id| order.push(id))?;

    let mut bounds = BoundingBox::empty();
    let mut saw_reference = false;
    for id in order {
        let mesh_indices = tree.mesh_indices(id)?;
        if mesh_indices.is_empty() {
            continue;
        }
        saw_reference = true;
        let world = tree.world_transformation(id)?;
        for &mesh_index in mesh_indices {
            let mesh = model.mesh(mesh_index)?;
            let mut referenced: FxHashSet<u32> = FxHashSet::default();
            for triangle in mesh.triangles() {
                for &vertex_index in &triangle.vertices {
                    if referenced.insert(vertex_index) {
                        bounds.add_point(&world.transform_point(mesh.vertex(vertex_index)?));
                    }
                }
            }
        }
    }

    if !saw_reference {
        for mesh in model.meshes() {
            bounds.union(&mesh_bounding_box(mesh)?);
        }
    }
    Ok(bounds)
}

/// Produces a copy of the model with every node's world transform baked into
/// its referenced meshes, in one shared world coordinate space.
///
/// Each (node, mesh index) reference becomes its own mesh copy, so instanced
/// meshes become independent world-space meshes. The node hierarchy is
/// reduced to a root referencing every produced mesh in traversal order. A
/// model whose tree references no meshes is returned as a plain copy; its
/// meshes are taken to be in world space already.
pub fn flatten_to_world_space(model: &Model) -> Result<Model> {
    let tree = model.tree();
    let mut order = Vec::new();
    tree.enumerate(tree.root(), |id| order.push(id))?;

    let mut references: Vec<(NodeId, u32)> = Vec::new();
    for &id in &order {
        for &mesh_index in tree.mesh_indices(id)? {
            references.push((id, mesh_index));
        }
    }
    if references.is_empty() {
        return Ok(model.clone());
    }

    let mut flattened = Model::new();
    flattened.set_name(model.name());
    for material in model.materials() {
        flattened.add_material(material.clone());
    }
    let root = flattened.tree().root();
    for (node_id, mesh_index) in references {
        let world = tree.world_transformation(node_id)?;
        let mut mesh = model.mesh(mesh_index)?.clone();
        if !world.is_identity() {
            mesh.transform(&world);
        }
        let new_index = flattened.add_mesh(mesh);
        flattened.tree_mut().add_mesh_index(root, new_index)?;
    }
    tracing::debug!(
        meshes_out = flattened.mesh_count(),
        "flattened model to world space"
    );
    Ok(flattened)
}

/// Merges all triangles sharing a material into one mesh per material.
///
/// Materials are visited in order of first appearance while scanning meshes
/// in model order and triangles in order. Vertex, normal and UV indices are
/// remapped into each merged mesh's own local arrays; shared vertices are
/// duplicated across merged meshes rather than deduplicated. The node
/// hierarchy is discarded; the result's root references every merged mesh.
///
/// Contract: meshes are merged as stored, node transforms are NOT applied.
/// Run [`flatten_to_world_space`] first when the hierarchy carries
/// non-identity transforms. Requires a finalized model; an unset material or
/// normal surfaces as [`Error::UnfinalizedModel`].
pub fn create_merged_model(model: &Model) -> Result<Model> {
    let mut material_order: Vec<u32> = Vec::new();
    let mut seen: FxHashSet<u32> = FxHashSet::default();
    for (mesh_index, mesh) in model.meshes().iter().enumerate() {
        for (triangle_index, triangle) in mesh.triangles().iter().enumerate() {
            let material = triangle.material.ok_or(Error::UnfinalizedModel {
                mesh: mesh_index,
                triangle: triangle_index,
                what: "material",
            })?;
            if seen.insert(material) {
                material_order.push(material);
            }
        }
    }

    let mut merged = Model::new();
    merged.set_name(model.name());
    for material in model.materials() {
        merged.add_material(material.clone());
    }

    let root = merged.tree().root();
    for &material in &material_order {
        let mut target = Mesh::new();
        for (mesh_index, mesh) in model.meshes().iter().enumerate() {
            let mut vertex_map: FxHashMap<u32, u32> = FxHashMap::default();
            let mut normal_map: FxHashMap<u32, u32> = FxHashMap::default();
            let mut uv_map: FxHashMap<u32, u32> = FxHashMap::default();
            for (triangle_index, triangle) in mesh.triangles().iter().enumerate() {
                if triangle.material != Some(material) {
                    continue;
                }
                let normals = triangle.normals.ok_or(Error::UnfinalizedModel {
                    mesh: mesh_index,
                    triangle: triangle_index,
                    what: "normals",
                })?;

                let mut new_vertices = [0u32; 3];
                for (slot, &old) in triangle.vertices.iter().enumerate() {
                    new_vertices[slot] = match vertex_map.get(&old) {
                        Some(&new) => new,
                        None => {
                            let new = target.add_vertex(*mesh.vertex(old)?);
                            vertex_map.insert(old, new);
                            new
                        }
                    };
                }

                let mut new_normals = [0u32; 3];
                for (slot, &old) in normals.iter().enumerate() {
                    new_normals[slot] = match normal_map.get(&old) {
                        Some(&new) => new,
                        None => {
                            let new = target.add_normal(*mesh.normal(old)?);
                            normal_map.insert(old, new);
                            new
                        }
                    };
                }

                let mut new_triangle = Triangle::new(new_vertices[0], new_vertices[1], new_vertices[2])
                    .with_normals(new_normals[0], new_normals[1], new_normals[2])
                    .with_material(material);

                if let Some(uvs) = triangle.uvs {
                    let mut new_uvs = [0u32; 3];
                    for (slot, &old) in uvs.iter().enumerate() {
                        new_uvs[slot] = match uv_map.get(&old) {
                            Some(&new) => new,
                            None => {
                                let new = target.add_uv(*mesh.uv(old)?);
                                uv_map.insert(old, new);
                                new
                            }
                        };
                    }
                    new_triangle = new_triangle.with_uvs(new_uvs[0], new_uvs[1], new_uvs[2]);
                }

                target.add_triangle(new_triangle);
            }
        }
        let new_index = merged.add_mesh(target);
        merged.tree_mut().add_mesh_index(root, new_index)?;
    }
    tracing::debug!(
        meshes_in = model.mesh_count(),
        meshes_out = merged.mesh_count(),
        "merged model by material"
    );
    Ok(merged)
}

/// Signed enclosed volume over every triangle of one mesh.
///
/// Meaningful on its own only for a closed, consistently wound mesh; meshes
/// sharing a boundary must be summed at the model level instead.
pub fn mesh_volume(mesh: &Mesh) -> Result<f64> {
    let mut volume = 0.0;
    for triangle in mesh.triangles() {
        let [v0, v1, v2] = triangle.vertices;
        volume +=
            signed_tetrahedron_volume(mesh.vertex(v0)?, mesh.vertex(v1)?, mesh.vertex(v2)?);
    }
    Ok(volume)
}

/// Signed enclosed volume of the whole model: the sum over all triangles of
/// all meshes, negative when the winding is inverted.
pub fn model_volume(model: &Model) -> Result<f64> {
    let mut volume = 0.0;
    for mesh in model.meshes() {
        volume += mesh_volume(mesh)?;
    }
    Ok(volume)
}

/// Surface area of one mesh: Heron's formula per triangle, with degenerate
/// triangles contributing zero.
pub fn mesh_surface_area(mesh: &Mesh) -> Result<f64> {
    let mut area = 0.0;
    for triangle in mesh.triangles() {
        let [v0, v1, v2] = triangle.vertices;
        area += triangle_area(mesh.vertex(v0)?, mesh.vertex(v1)?, mesh.vertex(v2)?);
    }
    Ok(area)
}

/// Surface area of the whole model.
pub fn model_surface_area(model: &Model) -> Result<f64> {
    let mut area = 0.0;
    for mesh in model.meshes() {
        area += mesh_surface_area(mesh)?;
    }
    Ok(area)
}
