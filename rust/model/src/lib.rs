// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-Lite Model
//!
//! The data model of the scene-lite pipeline: meshes (vertex/normal/UV and
//! triangle soup), materials, the scene node hierarchy, and the [`Model`]
//! aggregate with its finalization pass. Model-level utilities cover
//! bounding boxes, world-space flattening, per-material merging, and
//! volume/surface metrics.
//!
//! Importers produce raw arrays and attach them here; renderers and
//! exporters consume the read APIs. Ordering of vertices, triangles,
//! nodes-in-traversal and derived data is stable and deterministic, so
//! downstream consumers can rely on index correspondence.

pub mod error;
pub mod material;
pub mod mesh;
pub mod model;
pub mod node;
pub mod utils;

pub use error::{Error, Result};
pub use material::Material;
pub use mesh::{Mesh, Triangle};
pub use model::Model;
pub use node::{NodeId, NodeTree};
pub use utils::{
    create_merged_model, flatten_to_world_space, mesh_bounding_box, mesh_surface_area,
    mesh_volume, model_bounding_box, model_surface_area, model_volume,
};
