// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-Lite Topology
//!
//! Derived adjacency for scene-lite meshes: vertex/edge/triangle incidence
//! computed on demand from a mesh's raw index buffers. Edges are undirected
//! and deduplicated, so connectivity queries (boundary detection, manifold
//! checks, neighborhood walks) run over a compact, deterministic snapshot.
//!
//! A [`Topology`] is never kept in sync with later mesh mutation; recompute
//! after editing. Construction is linear-to-near-linear in triangle count
//! and tolerates degenerate and non-manifold input without failing.

pub mod builder;
pub mod model;
pub mod types;

pub use model::build_model_topology;
pub use types::{Topology, TopologyEdge, TopologyTriangle, TopologyTriangleEdge, TopologyVertex};
