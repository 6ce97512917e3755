use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::{DrawOp, Path, PathCmd, Surface, SurfaceCall};

/// Style and path state affected by `save`/`restore`.
#[derive(Debug, Clone, PartialEq)]
struct State {
    fill: Color,
    stroke: Color,
    path: Path,
}

impl Default for State {
    fn default() -> Self {
        // Canvas defaults: black fill and stroke, empty path.
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            path: Path::new(),
        }
    }
}

/// Surface that records everything drawn on it.
///
/// Two views are kept side by side:
/// - [`calls`](Self::calls): every method invocation in order
/// - [`ops`](Self::ops): the paint operations those calls resolve to, each
///   carrying the style that was current at the time
///
/// `clear()` resets both and the state stack, keeping allocated capacity.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    ops: Vec<DrawOp>,

    state: State,
    /// States pushed by `save`, innermost last.
    saved: Vec<State>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets recorded calls, ops and style state. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.ops.clear();
        self.state = State::default();
        self.saved.clear();
    }

    /// Raw call log in invocation order.
    #[inline]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Resolved paint operations in invocation order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        self.state.fill
    }

    #[inline]
    pub fn stroke_color(&self) -> Color {
        self.state.stroke
    }

    /// The path under construction.
    #[inline]
    pub fn current_path(&self) -> &Path {
        &self.state.path
    }

    #[inline]
    fn record(&mut self, call: SurfaceCall) {
        log::trace!("surface call: {call:?}");
        self.calls.push(call);
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.record(SurfaceCall::SetFillColor(color));
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(SurfaceCall::SetStrokeColor(color));
        self.state.stroke = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.record(SurfaceCall::FillRect(rect));
        self.ops.push(DrawOp::FillRect { rect, color: self.state.fill });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.record(SurfaceCall::StrokeRect(rect));
        self.ops.push(DrawOp::StrokeRect { rect, color: self.state.stroke });
    }

    fn begin_path(&mut self) {
        self.record(SurfaceCall::BeginPath);
        self.state.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.record(SurfaceCall::MoveTo(p));
        self.state.path.push(PathCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.record(SurfaceCall::LineTo(p));
        self.state.path.push(PathCmd::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        self.record(SurfaceCall::Arc { center, radius, start_angle, end_angle });
        self.state.path.push(PathCmd::Arc { center, radius, start_angle, end_angle });
    }

    fn close_path(&mut self) {
        self.record(SurfaceCall::ClosePath);
        self.state.path.push(PathCmd::Close);
    }

    fn fill(&mut self) {
        self.record(SurfaceCall::Fill);
        self.ops.push(DrawOp::FillPath {
            path: self.state.path.clone(),
            color: self.state.fill,
        });
    }

    fn stroke(&mut self) {
        self.record(SurfaceCall::Stroke);
        self.ops.push(DrawOp::StrokePath {
            path: self.state.path.clone(),
            color: self.state.stroke,
        });
    }

    fn save(&mut self) {
        self.record(SurfaceCall::Save);
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        self.record(SurfaceCall::Restore);
        match self.saved.pop() {
            Some(state) => self.state = state,
            // Canvas semantics: an unmatched restore is a no-op.
            None => log::warn!("restore called without matching save"),
        }
    }
}
