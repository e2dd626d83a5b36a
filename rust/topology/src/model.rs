// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model-level topology: every mesh in one model-global index space.

use rayon::prelude::*;
use scene_lite_model::Model;

use crate::types::Topology;

/// Builds the adjacency snapshot of every mesh in the model, concatenated in
/// mesh order into one model-global index space.
///
/// Vertex references are offset by the preceding meshes' vertex counts, so
/// [`crate::TopologyVertex::vertex`] indexes a virtual concatenation of the
/// meshes' vertex arrays. No cross-mesh welding happens: meshes only connect
/// through their own index buffers.
///
/// Meshes are independent, so the per-mesh builds run in parallel; the
/// ordered concatenation keeps the result identical to a sequential build.
pub fn build_model_topology(model: &Model) -> Topology {
    let per_mesh: Vec<Topology> = model
        .meshes()
        .par_iter()
        .map(Topology::from_mesh)
        .collect();

    let mut combined = Topology::default();
    let mut mesh_vertex_offset = 0u32;
    for (mesh, topology) in model.meshes().iter().zip(per_mesh) {
        let vertex_offset = combined.vertices.len() as u32;
        let edge_offset = combined.edges.len() as u32;
        let triangle_offset = combined.triangles.len() as u32;

        for mut vertex in topology.vertices {
            vertex.vertex += mesh_vertex_offset;
            for edge in &mut vertex.edges {
                *edge += edge_offset;
            }
            for triangle in &mut vertex.triangles {
                *triangle += triangle_offset;
            }
            combined.vertices.push(vertex);
        }
        for mut edge in topology.edges {
            edge.vertex1 += vertex_offset;
            edge.vertex2 += vertex_offset;
            for triangle in &mut edge.triangles {
                *triangle += triangle_offset;
            }
            combined.edges.push(edge);
        }
        for mut record in topology.triangle_edges {
            record.triangle += triangle_offset;
            record.edge += edge_offset;
            combined.triangle_edges.push(record);
        }
        for mut triangle in topology.triangles {
            for vertex in &mut triangle.vertices {
                *vertex += vertex_offset;
            }
            for edge in &mut triangle.edges {
                *edge += edge_offset;
            }
            combined.triangles.push(triangle);
        }

        mesh_vertex_offset += mesh.vertex_count() as u32;
    }

    tracing::debug!(
        meshes = model.mesh_count(),
        vertices = combined.vertices.len(),
        edges = combined.edges.len(),
        "model topology built"
    );
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use scene_lite_model::{Mesh, Triangle};

    fn triangle_mesh(z: f64) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, z));
        mesh.add_vertex(Point3::new(1.0, 0.0, z));
        mesh.add_vertex(Point3::new(1.0, 1.0, z));
        mesh.add_triangle(Triangle::new(0, 1, 2));
        mesh
    }

    #[test]
    fn two_meshes_concatenate_with_offsets() {
        let mut model = Model::new();
        model.add_mesh(triangle_mesh(0.0));
        model.add_mesh(triangle_mesh(1.0));

        let topology = build_model_topology(&model);
        assert_eq!(topology.vertices.len(), 6);
        assert_eq!(topology.edges.len(), 6);
        assert_eq!(topology.triangle_edges.len(), 6);
        assert_eq!(topology.triangles.len(), 2);

        // second mesh's records are shifted past the first mesh's index space
        let mesh_vertices: Vec<u32> = topology.vertices.iter().map(|v| v.vertex).collect();
        assert_eq!(mesh_vertices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(topology.triangles[1].vertices, [3, 4, 5]);
        assert_eq!(topology.triangles[1].edges, [3, 4, 5]);
        assert_eq!(topology.edges[3].triangles.as_slice(), &[1]);
        assert_eq!(topology.vertices[3].edges.as_slice(), &[3, 5]);
        assert_eq!(topology.vertices[3].triangles.as_slice(), &[1]);
    }

    #[test]
    fn single_mesh_model_matches_per_mesh_build() {
        let mut model = Model::new();
        model.add_mesh(triangle_mesh(0.0));

        let from_model = build_model_topology(&model);
        let from_mesh = Topology::from_mesh(model.mesh(0).unwrap());

        assert_eq!(from_model.vertices.len(), from_mesh.vertices.len());
        assert_eq!(from_model.edges.len(), from_mesh.edges.len());
        assert_eq!(from_model.triangle_edges.len(), from_mesh.triangle_edges.len());
        for (a, b) in from_model.vertices.iter().zip(from_mesh.vertices.iter()) {
            assert_eq!(a.vertex, b.vertex);
            assert_eq!(a.edges, b.edges);
            assert_eq!(a.triangles, b.triangles);
        }
    }

    #[test]
    fn empty_model_yields_empty_topology() {
        let topology = build_model_topology(&Model::new());
        assert!(topology.vertices.is_empty());
        assert!(topology.edges.is_empty());
        assert!(!topology.is_closed_manifold());
    }
}
