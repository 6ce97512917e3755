//! Shape record sequence.
//!
//! Layout of one record (all values `f64`, packed back-to-back):
//!
//! ```text
//! tag < 1.1         rectangle  [tag, x, y, w, h]
//! 1.1 <= tag < 2.1  circle     [tag, cx, cy, r]
//! tag >= 2.1        polygon    [tag, n, x0, y0, .., x(n-1), y(n-1)]
//! ```
//!
//! Responsibilities:
//! - classify tags in one place ([`ShapeKind::from_tag`])
//! - decode one record at an explicit cursor ([`ShapeRecord::decode_at`])
//! - walk a whole sequence ([`ShapeDecoder`]) and draw it ([`render_shapes`])

mod decoder;
mod kind;
mod record;
mod render;

pub use decoder::{decode_shapes, encode_shapes, ShapeDecoder};
pub use kind::ShapeKind;
pub use record::ShapeRecord;
pub use render::{draw_shape, render_shapes};
