//! Immediate-mode drawing surface.
//!
//! Responsibilities:
//! - define the canvas-style capability renderers draw against ([`Surface`])
//! - provide a path model shared by surfaces ([`Path`], [`PathCmd`])
//! - provide a recording implementation used by tests and tooling
//!   ([`RecordingSurface`]), which keeps both the raw call log and the
//!   resolved draw operations
//!
//! Adding a new capability:
//! - add a method to [`Surface`]
//! - add a matching [`SurfaceCall`] variant
//! - teach [`RecordingSurface`] how the call affects state or which
//!   [`DrawOp`] it produces

mod call;
mod op;
mod path;
mod recording;

pub use call::SurfaceCall;
pub use op::DrawOp;
pub use path::{Path, PathCmd};
pub use recording::RecordingSurface;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Canvas-style 2D drawing context.
///
/// Path model: `begin_path` discards the current path, `move_to` starts a
/// subpath, `line_to`/`arc` extend it, `close_path` closes the current subpath.
/// `fill` and `stroke` paint the current path without clearing it.
///
/// `save`/`restore` bracket fill color, stroke color and the current path.
pub trait Surface {
    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Fills `rect` with the current fill color. Does not touch the current path.
    fn fill_rect(&mut self, rect: Rect);

    /// Strokes the outline of `rect` with the current stroke color.
    fn stroke_rect(&mut self, rect: Rect);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    /// Circular arc from `start_angle` to `end_angle` (radians, clockwise in
    /// +Y-down space).
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);

    fn close_path(&mut self);

    fn fill(&mut self);

    fn stroke(&mut self);

    fn save(&mut self);

    fn restore(&mut self);
}
