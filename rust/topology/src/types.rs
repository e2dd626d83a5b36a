// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology record types: vertex/edge/triangle adjacency snapshots.
//!
//! All indices are 0-based positions into the owning [`Topology`]'s arrays,
//! except [`TopologyVertex::vertex`], which points back at the source mesh's
//! vertex array. Element order is first-encounter order over triangles in
//! mesh order, making snapshots reproducible across runs.

use smallvec::SmallVec;

/// Adjacency record for one referenced mesh vertex.
#[derive(Debug, Clone)]
pub struct TopologyVertex {
    /// Index of the originating mesh vertex.
    pub vertex: u32,
    /// Incident edges, first-encounter order, each listed once.
    pub edges: SmallVec<[u32; 8]>,
    /// Incident triangles, first-encounter order, each listed once.
    pub triangles: SmallVec<[u32; 8]>,
}

/// An undirected edge between two topology vertices.
///
/// (a, b) and (b, a) resolve to the same edge; the stored pair is canonical
/// (ordered by originating mesh-vertex index).
#[derive(Debug, Clone)]
pub struct TopologyEdge {
    /// Topology-vertex index of the smaller endpoint.
    pub vertex1: u32,
    /// Topology-vertex index of the larger endpoint.
    pub vertex2: u32,
    /// Incident triangles, appended once per resolving triangle side.
    ///
    /// Exactly 2 entries on a closed manifold; 1 marks a boundary edge and
    /// 3+ a non-manifold edge. Both are tolerated, never an error.
    pub triangles: SmallVec<[u32; 4]>,
}

impl TopologyEdge {
    /// True when exactly two triangles share this edge.
    #[inline]
    pub fn is_manifold(&self) -> bool {
        self.triangles.len() == 2
    }
}

/// Links one side of a triangle to its resolved edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyTriangleEdge {
    pub triangle: u32,
    pub edge: u32,
}

/// Mirror of a mesh triangle in topology index space.
#[derive(Debug, Clone)]
pub struct TopologyTriangle {
    /// Topology-vertex indices of the three corners.
    pub vertices: [u32; 3],
    /// Edge indices of the three sides, in side order v0–v1, v1–v2, v2–v0.
    pub edges: [u32; 3],
}

/// Immutable adjacency snapshot derived from a mesh's index buffers.
///
/// Computed on demand via [`Topology::from_mesh`]; callers wanting reuse
/// cache it themselves, since the snapshot does not track later mesh
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    pub vertices: Vec<TopologyVertex>,
    pub edges: Vec<TopologyEdge>,
    /// One record per (triangle, side) pair: always `3 × triangles.len()`.
    pub triangle_edges: Vec<TopologyTriangleEdge>,
    pub triangles: Vec<TopologyTriangle>,
}

impl Topology {
    /// True when every edge is shared by exactly two triangles.
    ///
    /// An empty topology is not considered closed.
    pub fn is_closed_manifold(&self) -> bool {
        !self.edges.is_empty() && self.edges.iter().all(TopologyEdge::is_manifold)
    }
}
