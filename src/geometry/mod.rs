//! Procedural star geometry
//!
//! - `star_mesh`: the fixed 22-vertex / 40-triangle star and its thickness rebuild
//! - `puff`: the eased flat-to-puffed animation that drives the rebuild

pub mod puff;
pub mod star_mesh;

pub use puff::PuffAnimation;
pub use star_mesh::{
    face_normals, rebuild, vertex_normals, StarTopology, Thickness, PUFFED, VERTEX_COUNT,
};
