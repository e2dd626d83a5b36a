// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adjacency construction from raw index buffers.
//!
//! One pass over the triangles with hashed edge lookup, keyed by the
//! canonical (sorted) mesh-vertex pair so that (a, b) and (b, a) resolve to
//! the same edge. Elements are created in first-encounter order: triangles
//! in mesh order, corners v0/v1/v2, sides v0–v1, v1–v2, v2–v0. Degenerate
//! triangles (repeated corners, zero area), duplicate triangles and
//! non-manifold fans never fail; they surface as edges with an incident
//! count other than two.

use rustc_hash::FxHashMap;
use scene_lite_model::Mesh;
use smallvec::SmallVec;

use crate::types::{Topology, TopologyEdge, TopologyTriangle, TopologyTriangleEdge, TopologyVertex};

impl Topology {
    /// Derives the adjacency snapshot of a single mesh.
    pub fn from_mesh(mesh: &Mesh) -> Topology {
        const SIDES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

        let mut topology = Topology::default();
        let mut vertex_map: FxHashMap<u32, u32> = FxHashMap::default();
        let mut edge_map: FxHashMap<(u32, u32), u32> = FxHashMap::default();

        for (triangle_index, triangle) in mesh.triangles().iter().enumerate() {
            let triangle_index = triangle_index as u32;
            let corners = triangle.vertices;

            // Topology vertices, created at first encounter.
            let mut corner_vertices = [0u32; 3];
            for (slot, &mesh_vertex) in corners.iter().enumerate() {
                corner_vertices[slot] = *vertex_map.entry(mesh_vertex).or_insert_with(|| {
                    topology.vertices.push(TopologyVertex {
                        vertex: mesh_vertex,
                        edges: SmallVec::new(),
                        triangles: SmallVec::new(),
                    });
                    (topology.vertices.len() - 1) as u32
                });
            }

            // A vertex is incident to the triangle iff it is one of its
            // corners; repeated corners count once.
            for &vertex_index in &corner_vertices {
                let vertex = &mut topology.vertices[vertex_index as usize];
                if !vertex.triangles.contains(&triangle_index) {
                    vertex.triangles.push(triangle_index);
                }
            }

            let mut side_edges = [0u32; 3];
            for (side, &(a, b)) in SIDES.iter().enumerate() {
                let (va, vb) = (corners[a], corners[b]);
                let key = if va <= vb { (va, vb) } else { (vb, va) };
                let edge_index = *edge_map.entry(key).or_insert_with(|| {
                    let (vertex1, vertex2) = if va <= vb {
                        (corner_vertices[a], corner_vertices[b])
                    } else {
                        (corner_vertices[b], corner_vertices[a])
                    };
                    topology.edges.push(TopologyEdge {
                        vertex1,
                        vertex2,
                        triangles: SmallVec::new(),
                    });
                    (topology.edges.len() - 1) as u32
                });
                side_edges[side] = edge_index;

                topology.edges[edge_index as usize]
                    .triangles
                    .push(triangle_index);
                topology.triangle_edges.push(TopologyTriangleEdge {
                    triangle: triangle_index,
                    edge: edge_index,
                });

                for &endpoint in &[corner_vertices[a], corner_vertices[b]] {
                    let vertex = &mut topology.vertices[endpoint as usize];
                    if !vertex.edges.contains(&edge_index) {
                        vertex.edges.push(edge_index);
                    }
                }
            }

            topology.triangles.push(TopologyTriangle {
                vertices: corner_vertices,
                edges: side_edges,
            });
        }

        topology
    }
}
