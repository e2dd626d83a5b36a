// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adjacency counts on closed reference meshes.

use nalgebra::Point3;
use scene_lite_model::{Mesh, Model, Triangle};
use scene_lite_topology::{build_model_topology, Topology};

/// Regular tetrahedron on alternating cube corners.
fn tetrahedron_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 0.0, 1.0));
    mesh.add_vertex(Point3::new(0.0, 1.0, 1.0));
    mesh.add_triangle(Triangle::new(0, 1, 3));
    mesh.add_triangle(Triangle::new(0, 2, 1));
    mesh.add_triangle(Triangle::new(0, 3, 2));
    mesh.add_triangle(Triangle::new(1, 2, 3));
    mesh
}

/// Unit cube spanning (0,0,0)–(1,1,1), two triangles per face.
fn cube_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
    mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
    mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
    mesh.add_vertex(Point3::new(1.0, 0.0, 1.0));
    mesh.add_vertex(Point3::new(1.0, 1.0, 1.0));
    mesh.add_vertex(Point3::new(0.0, 1.0, 1.0));
    mesh.add_triangle(Triangle::new(0, 1, 5));
    mesh.add_triangle(Triangle::new(0, 5, 4));
    mesh.add_triangle(Triangle::new(1, 2, 6));
    mesh.add_triangle(Triangle::new(1, 6, 5));
    mesh.add_triangle(Triangle::new(2, 3, 7));
    mesh.add_triangle(Triangle::new(2, 7, 6));
    mesh.add_triangle(Triangle::new(3, 0, 4));
    mesh.add_triangle(Triangle::new(3, 4, 7));
    mesh.add_triangle(Triangle::new(0, 3, 2));
    mesh.add_triangle(Triangle::new(0, 2, 1));
    mesh.add_triangle(Triangle::new(4, 5, 6));
    mesh.add_triangle(Triangle::new(4, 6, 7));
    mesh
}

#[test]
fn tetrahedron_topology() {
    let topology = Topology::from_mesh(&tetrahedron_mesh());

    assert_eq!(topology.vertices.len(), 4);
    assert_eq!(topology.edges.len(), 6);
    assert_eq!(topology.triangle_edges.len(), 4 * 3);
    assert_eq!(topology.triangles.len(), 4);

    for vertex in &topology.vertices {
        assert_eq!(vertex.edges.len(), 3);
        assert_eq!(vertex.triangles.len(), 3);
    }
    for edge in &topology.edges {
        assert_eq!(edge.triangles.len(), 2);
    }
    assert!(topology.is_closed_manifold());
}

#[test]
fn cube_topology() {
    let topology = Topology::from_mesh(&cube_mesh());

    assert_eq!(topology.vertices.len(), 8);
    // 12 surface edges plus 6 face diagonals
    assert_eq!(topology.edges.len(), 12 + 6);
    assert_eq!(topology.triangle_edges.len(), 6 * 2 * 3);
    assert_eq!(topology.triangles.len(), 6 * 2);

    let mut vertices_with_4_triangles = 0;
    let mut vertices_with_5_triangles = 0;
    let mut vertices_with_4_edges = 0;
    let mut vertices_with_5_edges = 0;
    for vertex in &topology.vertices {
        match vertex.triangles.len() {
            4 => vertices_with_4_triangles += 1,
            5 => vertices_with_5_triangles += 1,
            other => panic!("unexpected triangle valence {other}"),
        }
        match vertex.edges.len() {
            4 => vertices_with_4_edges += 1,
            5 => vertices_with_5_edges += 1,
            other => panic!("unexpected edge valence {other}"),
        }
    }
    assert_eq!(vertices_with_4_triangles, 4);
    assert_eq!(vertices_with_5_triangles, 4);
    assert_eq!(vertices_with_4_edges, 4);
    assert_eq!(vertices_with_5_edges, 4);

    for edge in &topology.edges {
        assert_eq!(edge.triangles.len(), 2);
    }
    assert!(topology.is_closed_manifold());
}

#[test]
fn triangle_edge_records_follow_mesh_order() {
    let topology = Topology::from_mesh(&tetrahedron_mesh());
    for (i, record) in topology.triangle_edges.iter().enumerate() {
        assert_eq!(record.triangle as usize, i / 3);
    }
    // every triangle's side edges match its records
    for (triangle_index, triangle) in topology.triangles.iter().enumerate() {
        for (side, &edge) in triangle.edges.iter().enumerate() {
            assert_eq!(topology.triangle_edges[triangle_index * 3 + side].edge, edge);
        }
    }
}

#[test]
fn model_topology_of_a_single_cube_matches_mesh_topology() {
    let mut model = Model::new();
    model.add_mesh(cube_mesh());
    let topology = build_model_topology(&model);

    assert_eq!(topology.vertices.len(), 8);
    assert_eq!(topology.edges.len(), 18);
    assert!(topology.is_closed_manifold());
}
