// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end model pipeline scenarios: build, finalize, merge, measure.

use approx::assert_relative_eq;
use scene_lite_geometry::{coords_equal, Point3};
use scene_lite_model::{
    create_merged_model, mesh_bounding_box, model_bounding_box, model_surface_area, model_volume,
    Material, Mesh, Model, Triangle,
};

/// Unit cube spanning (0,0,0)–(1,1,1), consistently wound outward.
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

fn single_triangle_mesh(z: f64) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(Point3::new(0.0, 0.0, z));
    mesh.add_vertex(Point3::new(1.0, 0.0, z));
    mesh.add_vertex(Point3::new(1.0, 1.0, z));
    mesh.add_triangle(Triangle::new(0, 1, 2));
    mesh
}

#[test]
fn merged_model_round_trips_triangle_data() {
    let mut model = Model::new();
    model.add_mesh(single_triangle_mesh(0.0));
    model.add_mesh(single_triangle_mesh(1.0));

    model.finalize(Material::default).unwrap();
    assert_eq!(model.material_count(), 1);

    let merged = create_merged_model(&model).unwrap();
    assert_eq!(merged.mesh_count(), 1);
    assert_eq!(merged.material_count(), 1);

    let mesh = merged.mesh(0).unwrap();
    assert_eq!(mesh.triangle_count(), 2);

    // re-extract each triangle's geometry and compare with its source
    for (triangle_index, z) in [(0u32, 0.0), (1u32, 1.0)] {
        let triangle = mesh.triangle(triangle_index).unwrap();
        assert_eq!(triangle.material, Some(0));

        let expected = [
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
        ];
        for (slot, expected_vertex) in expected.iter().enumerate() {
            let vertex = mesh.vertex(triangle.vertices[slot]).unwrap();
            assert!(coords_equal(vertex, expected_vertex));
        }

        let normals = triangle.normals.unwrap();
        for &normal_index in &normals {
            let normal = mesh.normal(normal_index).unwrap();
            assert_relative_eq!(normal.z, 1.0, epsilon = 1e-10);
        }
        assert!(triangle.uvs.is_none());
    }
}

#[test]
fn cube_mesh_bounding_box() {
    let bounds = mesh_bounding_box(&cube_mesh()).unwrap();
    assert!(coords_equal(&bounds.min, &Point3::new(0.0, 0.0, 0.0)));
    assert!(coords_equal(&bounds.max, &Point3::new(1.0, 1.0, 1.0)));
}

#[test]
fn per_mesh_bounding_boxes_stay_separate() {
    let mut model = Model::new();
    model.add_mesh(single_triangle_mesh(0.0));
    model.add_mesh(single_triangle_mesh(1.0));
    model.finalize(Material::default).unwrap();

    let bounds1 = mesh_bounding_box(model.mesh(0).unwrap()).unwrap();
    assert!(coords_equal(&bounds1.min, &Point3::new(0.0, 0.0, 0.0)));
    assert!(coords_equal(&bounds1.max, &Point3::new(1.0, 1.0, 0.0)));

    let bounds2 = mesh_bounding_box(model.mesh(1).unwrap()).unwrap();
    assert!(coords_equal(&bounds2.min, &Point3::new(0.0, 0.0, 1.0)));
    assert!(coords_equal(&bounds2.max, &Point3::new(1.0, 1.0, 1.0)));

    let model_bounds = model_bounding_box(&model).unwrap();
    assert!(coords_equal(&model_bounds.max, &Point3::new(1.0, 1.0, 1.0)));
}

#[test]
fn cube_volume_and_surface() {
    let mut model = Model::new();
    model.add_mesh(cube_mesh());
    model.finalize(Material::default).unwrap();

    assert_relative_eq!(model_volume(&model).unwrap(), 1.0, epsilon = 1e-8);
    assert_relative_eq!(model_surface_area(&model).unwrap(), 6.0, epsilon = 1e-8);
}

#[test]
fn inverted_cube_volume_is_negative() {
    let cube = cube_mesh();
    let mut inverted = Mesh::new();
    for vertex in cube.vertices() {
        inverted.add_vertex(*vertex);
    }
    for triangle in cube.triangles() {
        let [v0, v1, v2] = triangle.vertices;
        inverted.add_triangle(Triangle::new(v0, v2, v1));
    }

    let mut model = Model::new();
    model.add_mesh(inverted);
    model.finalize(Material::default).unwrap();
    assert_relative_eq!(model_volume(&model).unwrap(), -1.0, epsilon = 1e-8);
}
