use crate::MalformedInput;

/// Node marker in a flattened quadtree traversal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum QuadMarker {
    Leaf,
    Internal,
}

impl QuadMarker {
    /// Values below this are leaves.
    pub const INTERNAL_THRESHOLD: f64 = 0.1;

    /// Classifies a raw marker value. `None` for NaN and infinities.
    #[inline]
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() {
            None
        } else if value < Self::INTERNAL_THRESHOLD {
            Some(QuadMarker::Leaf)
        } else {
            Some(QuadMarker::Internal)
        }
    }

    /// Reads and classifies the marker at `cursor`.
    pub(crate) fn read(traversal: &[f64], cursor: usize) -> Result<Self, MalformedInput> {
        MalformedInput::check_len(cursor, 1, traversal.len())?;
        let value = traversal[cursor];
        Self::from_value(value).ok_or(MalformedInput::InvalidMarker { offset: cursor, value })
    }

    /// Value written by the exporter.
    #[inline]
    pub const fn value(self) -> f64 {
        match self {
            QuadMarker::Leaf => 0.0,
            QuadMarker::Internal => 1.0,
        }
    }
}
