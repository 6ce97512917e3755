//! Tessera draw crate.
//!
//! Decodes the two flat `f64` encodings produced by a simulation and renders
//! them onto a [`Surface`](tessera_engine::surface::Surface):
//!
//! - a shape record sequence (rectangles, circles, polygons), see [`shapes`]
//! - a pre-order quadtree traversal, see [`quad_tree`]
//!
//! Both renderers decode with an explicit cursor and fail fast with
//! [`MalformedInput`] before issuing any drawing call.

mod config;
mod error;

pub mod palette;
pub mod quad_tree;
pub mod shapes;

pub use config::RenderConfig;
pub use error::MalformedInput;
pub use quad_tree::{render_quad_tree, render_quad_tree_corners, QuadMarker, QuadTree};
pub use shapes::{
    decode_shapes, encode_shapes, render_shapes, ShapeDecoder, ShapeKind, ShapeRecord,
};
