use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// One [`Surface`](super::Surface) method invocation, as recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetFillColor(Color),
    SetStrokeColor(Color),
    FillRect(Rect),
    StrokeRect(Rect),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    ClosePath,
    Fill,
    Stroke,
    Save,
    Restore,
}
