//! Picking stars out of the jar
//!
//! - `ray`: pixel → world ray through the scene camera
//! - `resolver`: collider ownership and nearest-star selection

pub mod ray;
pub mod resolver;

pub use ray::{screen_to_ray, PickCamera, Ray};
pub use resolver::{nearest_star, Hit, PickTable};
