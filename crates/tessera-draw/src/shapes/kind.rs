/// Shape type selected by a record's leading tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
}

impl ShapeKind {
    /// Tags below this are rectangles.
    pub const CIRCLE_THRESHOLD: f64 = 1.1;
    /// Tags at or above this are polygons.
    pub const POLYGON_THRESHOLD: f64 = 2.1;

    /// Classifies a raw tag value.
    ///
    /// Thresholds sit 0.1 above the integers they separate so tags that are
    /// meant to be integral but carry float error still land in the right
    /// range. Returns `None` for NaN and infinities.
    #[inline]
    pub fn from_tag(tag: f64) -> Option<Self> {
        if !tag.is_finite() {
            None
        } else if tag < Self::CIRCLE_THRESHOLD {
            Some(ShapeKind::Rectangle)
        } else if tag < Self::POLYGON_THRESHOLD {
            Some(ShapeKind::Circle)
        } else {
            Some(ShapeKind::Polygon)
        }
    }

    /// Tag written by the encoder.
    #[inline]
    pub const fn tag(self) -> f64 {
        match self {
            ShapeKind::Rectangle => 1.0,
            ShapeKind::Circle => 2.0,
            ShapeKind::Polygon => 3.0,
        }
    }

    /// Record length including the tag, when it does not depend on the payload.
    #[inline]
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            ShapeKind::Rectangle => Some(5),
            ShapeKind::Circle => Some(4),
            ShapeKind::Polygon => None,
        }
    }
}
