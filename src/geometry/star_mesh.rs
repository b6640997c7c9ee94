//! Five-pointed star mesh
//!
//! The index buffer never changes; only the depth of the front and back
//! faces does. `StarTopology::build` is done once, `rebuild` runs every
//! frame the star is animating.
//!
//! Vertex layout (22 total):
//! - `0`: front center, `+center_depth`
//! - `1..=5`: front tips at `i·72°`, radius `R_OUTER`, depth `rim_depth`
//! - `6..=10`: front valleys at `i·72° + 36°`, radius `R_INNER`, depth `rim_depth·0.8`
//! - `11..=21`: the same eleven points mirrored through z = 0
//!
//! Angles are measured from +y towards +x, so tip 0 points straight up.

use macroquad::math::Vec3;

pub const R_OUTER: f32 = 1.0;
pub const R_INNER: f32 = 0.65;

pub const VERTEX_COUNT: usize = 22;
pub const TRIANGLE_COUNT: usize = 40;

/// Offset from a front vertex to its mirrored back vertex
const BACK: u16 = 11;

/// Depth of the star's center and rim, measured from z = 0 on each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thickness {
    pub center: f32,
    pub rim: f32,
}

impl Thickness {
    pub fn lerp(self, other: Thickness, t: f32) -> Thickness {
        Thickness {
            center: self.center + (other.center - self.center) * t,
            rim: self.rim + (other.rim - self.rim) * t,
        }
    }
}

/// A fully inflated lucky star
pub const PUFFED: Thickness = Thickness { center: 0.6, rim: 0.15 };
/// A strip of paper before inflation
pub const FLAT: Thickness = Thickness { center: 0.01, rim: 0.01 };

/// Invariant index buffer, shared by every star
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarTopology {
    indices: Vec<u16>,
}

impl StarTopology {
    pub fn build() -> Self {
        let mut indices = Vec::with_capacity(TRIANGLE_COUNT * 3);

        let tip = |i: u16| 1 + i % 5;
        let valley = |i: u16| 6 + i % 5;

        for i in 0..5u16 {
            let prev_valley = valley(i + 4);
            // Front fan, facing +z
            indices.extend_from_slice(&[0, valley(i), tip(i)]);
            indices.extend_from_slice(&[0, tip(i), prev_valley]);
            // Back fan, same triangles with reversed winding
            indices.extend_from_slice(&[BACK, BACK + tip(i), BACK + valley(i)]);
            indices.extend_from_slice(&[BACK, BACK + prev_valley, BACK + tip(i)]);
        }

        // Side walls: two quads per point, tip→valley and valley→next tip
        for i in 0..5u16 {
            let (f_tip, f_valley, f_next) = (tip(i), valley(i), tip(i + 1));
            let (b_tip, b_valley, b_next) = (f_tip + BACK, f_valley + BACK, f_next + BACK);
            indices.extend_from_slice(&[f_tip, f_valley, b_tip]);
            indices.extend_from_slice(&[b_tip, f_valley, b_valley]);
            indices.extend_from_slice(&[f_valley, f_next, b_valley]);
            indices.extend_from_slice(&[b_valley, f_next, b_next]);
        }

        Self { indices }
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for StarTopology {
    fn default() -> Self {
        Self::build()
    }
}

/// Vertex positions for a given thickness. Pure; same topology for any input.
pub fn rebuild(thickness: Thickness) -> [Vec3; VERTEX_COUNT] {
    let mut positions = [Vec3::ZERO; VERTEX_COUNT];

    positions[0] = Vec3::new(0.0, 0.0, thickness.center);
    for i in 0..5 {
        let tip_angle = (i as f32 * 72.0).to_radians();
        positions[1 + i] = Vec3::new(
            tip_angle.sin() * R_OUTER,
            tip_angle.cos() * R_OUTER,
            thickness.rim,
        );

        let valley_angle = (i as f32 * 72.0 + 36.0).to_radians();
        positions[6 + i] = Vec3::new(
            valley_angle.sin() * R_INNER,
            valley_angle.cos() * R_INNER,
            thickness.rim * 0.8,
        );
    }

    let back = BACK as usize;
    for i in 0..back {
        let front = positions[i];
        positions[back + i] = Vec3::new(front.x, front.y, -front.z);
    }

    positions
}

/// Unit normal of every triangle, in index-buffer order
pub fn face_normals(positions: &[Vec3], topology: &StarTopology) -> Vec<Vec3> {
    topology
        .triangles()
        .map(|[a, b, c]| {
            let (pa, pb, pc) = (positions[a], positions[b], positions[c]);
            (pb - pa).cross(pc - pa).normalize_or_zero()
        })
        .collect()
}

/// Area-weighted smooth normals, one per vertex
pub fn vertex_normals(positions: &[Vec3], topology: &StarTopology) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for [a, b, c] in topology.triangles() {
        let (pa, pb, pc) = (positions[a], positions[b], positions[c]);
        // Unnormalized cross product weights by triangle area
        let n = (pb - pa).cross(pc - pa);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }
    normals.iter().map(|n| n.normalize_or_zero()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn signed_volume(positions: &[Vec3], topology: &StarTopology) -> f32 {
        topology
            .triangles()
            .map(|[a, b, c]| positions[a].dot(positions[b].cross(positions[c])) / 6.0)
            .sum()
    }

    #[test]
    fn test_counts() {
        let topology = StarTopology::build();
        assert_eq!(topology.triangle_count(), TRIANGLE_COUNT);
        assert!(topology.indices().iter().all(|&i| (i as usize) < VERTEX_COUNT));
        assert_eq!(rebuild(PUFFED).len(), VERTEX_COUNT);
    }

    #[test]
    fn test_closed_and_consistently_wound() {
        let topology = StarTopology::build();
        let mut directed: HashMap<(usize, usize), u32> = HashMap::new();
        for [a, b, c] in topology.triangles() {
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }
        // Each directed edge once, and its reverse once: every edge has exactly two faces
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "edge {}->{} used {} times", a, b, count);
            assert_eq!(directed.get(&(b, a)), Some(&1), "edge {}->{} has no twin", a, b);
        }
    }

    #[test]
    fn test_outward_facing_at_any_thickness() {
        let topology = StarTopology::build();
        assert!(signed_volume(&rebuild(PUFFED), &topology) > 0.0);
        assert!(signed_volume(&rebuild(FLAT), &topology) > 0.0);
    }

    #[test]
    fn test_topology_is_thickness_independent() {
        let a = StarTopology::build();
        let b = StarTopology::build();
        assert_eq!(a, b);
        // Different thickness moves vertices but never changes indices
        assert_ne!(rebuild(FLAT), rebuild(PUFFED));
    }

    #[test]
    fn test_vertex_layout() {
        let positions = rebuild(PUFFED);
        assert_eq!(positions[0], Vec3::new(0.0, 0.0, 0.6));
        assert_eq!(positions[11], Vec3::new(0.0, 0.0, -0.6));

        // Tip 0 points up
        assert!((positions[1].y - R_OUTER).abs() < 1e-6);
        assert!(positions[1].x.abs() < 1e-6);
        assert_eq!(positions[1].z, 0.15);

        // Valleys sit on the inner radius, a little shallower
        let valley = positions[6];
        assert!((valley.truncate().length() - R_INNER).abs() < 1e-5);
        assert!((valley.z - 0.12).abs() < 1e-6);

        for i in 0..11 {
            assert_eq!(positions[i + 11].z, -positions[i].z);
        }
    }

    #[test]
    fn test_normals() {
        let topology = StarTopology::build();
        let positions = rebuild(PUFFED);

        let faces = face_normals(&positions, &topology);
        assert_eq!(faces.len(), TRIANGLE_COUNT);
        // First triangle is on the front fan
        assert!(faces[0].z > 0.0);

        let smooth = vertex_normals(&positions, &topology);
        assert!((smooth[0] - Vec3::Z).length() < 1e-5);
        assert!((smooth[11] + Vec3::Z).length() < 1e-5);
        assert!(smooth.iter().all(|n| (n.length() - 1.0).abs() < 1e-4));
    }

    #[test]
    fn test_thickness_lerp() {
        assert_eq!(FLAT.lerp(PUFFED, 0.0), FLAT);
        let full = FLAT.lerp(PUFFED, 1.0);
        assert!((full.center - PUFFED.center).abs() < 1e-6);
        assert!((full.rim - PUFFED.rim).abs() < 1e-6);
    }
}
