//! Quadtree subdivision.
//!
//! A tree is flattened into a pre-order traversal with one marker per node:
//! `< 0.1` is a leaf, anything else is an internal node followed by its four
//! children (top-left, top-right, bottom-left, bottom-right).
//!
//! - [`QuadTree`] builds a tree from object bounding boxes and exports that
//!   traversal
//! - [`render_quad_tree`] strokes the split lines of every internal node

mod marker;
mod render;
mod tree;

pub use marker::QuadMarker;
pub use render::{render_quad_tree, render_quad_tree_corners, traversal_len, visit};
pub use tree::{QuadTree, MAX_DEPTH, MAX_IN_NODE};
