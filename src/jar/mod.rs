//! The glass jar stars settle into
//!
//! - `shape`: jar geometry as a list of boxes (shared by physics and drawing)
//! - `world`: rapier simulation with one body per star

pub mod shape;
pub mod world;

pub use shape::JAR_ORIGIN;
pub use world::{JarWorld, StarPose};
