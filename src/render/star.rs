//! Star mesh drawing
//!
//! Flat-shaded: every triangle gets its own three vertices colored by a
//! fixed key light, so the facets of the paper read clearly without a
//! lighting shader.

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

use crate::geometry::{face_normals, vertex_normals, StarTopology, VERTEX_COUNT};

/// Direction towards the key light
const LIGHT_DIR: Vec3 = Vec3::new(0.35, 0.8, 0.5);
const AMBIENT: f32 = 0.45;

/// Lambert shade of a paper color for a world-space normal
pub fn shade(rgb: [u8; 3], normal: Vec3) -> Color {
    let diffuse = normal.dot(LIGHT_DIR.normalize()).max(0.0);
    let k = (AMBIENT + (1.0 - AMBIENT) * diffuse).min(1.0);
    Color::new(
        rgb[0] as f32 / 255.0 * k,
        rgb[1] as f32 / 255.0 * k,
        rgb[2] as f32 / 255.0 * k,
        1.0,
    )
}

/// Build a flat-shaded star mesh in world space.
///
/// `positions` are star-local; `transform` places them.
pub fn star_mesh(
    positions: &[Vec3; VERTEX_COUNT],
    topology: &StarTopology,
    transform: Mat4,
    rgb: [u8; 3],
) -> Mesh {
    let world: Vec<Vec3> = positions.iter().map(|&p| transform.transform_point3(p)).collect();
    let normals = face_normals(&world, topology);

    let mut vertices = Vec::with_capacity(topology.triangle_count() * 3);
    for ([a, b, c], normal) in topology.triangles().zip(normals) {
        let color = shade(rgb, normal);
        for i in [a, b, c] {
            vertices.push(Vertex::new2(world[i], Vec2::ZERO, color));
        }
    }
    let indices = (0..vertices.len() as u16).collect();

    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

pub fn draw_star(
    positions: &[Vec3; VERTEX_COUNT],
    topology: &StarTopology,
    transform: Mat4,
    rgb: [u8; 3],
) {
    draw_mesh(&star_mesh(positions, topology, transform, rgb));
}

/// Smooth-shaded star on the shared vertices, for the big star in the fold
/// area while it puffs
pub fn smooth_star_mesh(
    positions: &[Vec3; VERTEX_COUNT],
    topology: &StarTopology,
    transform: Mat4,
    rgb: [u8; 3],
) -> Mesh {
    let world: Vec<Vec3> = positions.iter().map(|&p| transform.transform_point3(p)).collect();
    let vertices = world
        .iter()
        .zip(vertex_normals(&world, topology))
        .map(|(&p, normal)| Vertex::new2(p, Vec2::ZERO, shade(rgb, normal)))
        .collect();

    Mesh {
        vertices,
        indices: topology.indices().to_vec(),
        texture: None,
    }
}

pub fn draw_smooth_star(
    positions: &[Vec3; VERTEX_COUNT],
    topology: &StarTopology,
    transform: Mat4,
    rgb: [u8; 3],
) {
    draw_mesh(&smooth_star_mesh(positions, topology, transform, rgb));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::star_mesh::TRIANGLE_COUNT;
    use crate::geometry::{rebuild, PUFFED};

    #[test]
    fn test_shade_range() {
        let lit = shade([200, 100, 50], LIGHT_DIR.normalize());
        let dark = shade([200, 100, 50], -LIGHT_DIR.normalize());
        assert!((lit.r - 200.0 / 255.0).abs() < 1e-5);
        assert!((dark.r - 200.0 / 255.0 * AMBIENT).abs() < 1e-5);
        assert_eq!(lit.a, 1.0);
    }

    #[test]
    fn test_mesh_is_unindexed_triangles() {
        let topology = StarTopology::build();
        let positions = rebuild(PUFFED);
        let mesh = star_mesh(&positions, &topology, Mat4::IDENTITY, [255, 82, 82]);
        assert_eq!(mesh.vertices.len(), TRIANGLE_COUNT * 3);
        assert_eq!(mesh.indices.len(), TRIANGLE_COUNT * 3);
        assert_eq!(mesh.vertices[0].position, positions[0]);
    }

    #[test]
    fn test_smooth_mesh_shares_vertices() {
        let topology = StarTopology::build();
        let mesh = smooth_star_mesh(&rebuild(PUFFED), &topology, Mat4::IDENTITY, [33, 150, 243]);
        assert_eq!(mesh.vertices.len(), VERTEX_COUNT);
        assert_eq!(mesh.indices, topology.indices());
    }

    #[test]
    fn test_transform_applied() {
        let topology = StarTopology::build();
        let positions = rebuild(PUFFED);
        let offset = Vec3::new(0.0, 5.0, 0.0);
        let mesh = star_mesh(&positions, &topology, Mat4::from_translation(offset), [0, 0, 0]);
        assert_eq!(mesh.vertices[0].position, positions[0] + offset);
    }
}
