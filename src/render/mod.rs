//! Drawing: the jar scene, star meshes and the fold overlay

mod fold;
mod scene;
mod star;

pub use fold::{draw_fold, fold_area};
pub use scene::{draw_jar, draw_jar_stars, jar_camera};
