use crate::coords::Rect;
use crate::paint::Color;

use super::Path;

/// A resolved paint operation: what actually reached the pixels, with the
/// style that was current when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    FillPath { path: Path, color: Color },
    StrokePath { path: Path, color: Color },
}

impl DrawOp {
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            DrawOp::FillRect { color, .. }
            | DrawOp::StrokeRect { color, .. }
            | DrawOp::FillPath { color, .. }
            | DrawOp::StrokePath { color, .. } => *color,
        }
    }

    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, DrawOp::FillRect { .. } | DrawOp::FillPath { .. })
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        !self.is_fill()
    }
}
