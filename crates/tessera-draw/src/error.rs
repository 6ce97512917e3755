use std::fmt;

/// Error returned when a flat shape or quadtree sequence cannot be decoded.
///
/// Every variant carries the index into the input where decoding stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedInput {
    /// A record or marker needs values past the end of the input.
    Truncated {
        /// Start of the record (or marker) being decoded.
        offset: usize,
        /// Slots the record needs, counted from `offset`.
        needed: usize,
        /// Slots actually left from `offset`.
        available: usize,
    },
    /// A quadtree traversal has slots left over after the root subtree.
    TrailingData { consumed: usize, len: usize },
    /// A shape tag that is not a finite number.
    InvalidTag { offset: usize, value: f64 },
    /// A polygon point count that is negative, fractional or not finite.
    InvalidPointCount { offset: usize, value: f64 },
    /// A quadtree marker that is not a finite number.
    InvalidMarker { offset: usize, value: f64 },
    /// A finite shape coordinate too large to represent as `f32`.
    InvalidCoordinate { offset: usize, value: f64 },
}

impl MalformedInput {
    /// Index into the input at which decoding failed.
    pub fn offset(&self) -> usize {
        match *self {
            MalformedInput::Truncated { offset, .. }
            | MalformedInput::InvalidTag { offset, .. }
            | MalformedInput::InvalidPointCount { offset, .. }
            | MalformedInput::InvalidMarker { offset, .. }
            | MalformedInput::InvalidCoordinate { offset, .. } => offset,
            MalformedInput::TrailingData { consumed, .. } => consumed,
        }
    }

    /// Checks that `needed` slots starting at `offset` exist in a sequence of
    /// length `len`.
    pub(crate) fn check_len(offset: usize, needed: usize, len: usize) -> Result<(), Self> {
        let available = len.saturating_sub(offset);
        if available < needed {
            Err(MalformedInput::Truncated { offset, needed, available })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::Truncated { offset, needed, available } => write!(
                f,
                "malformed input at {offset}: record needs {needed} values, only {available} left"
            ),
            MalformedInput::TrailingData { consumed, len } => write!(
                f,
                "malformed input: traversal ends at {consumed} but sequence has {len} values"
            ),
            MalformedInput::InvalidTag { offset, value } => {
                write!(f, "malformed input at {offset}: invalid shape tag {value}")
            }
            MalformedInput::InvalidPointCount { offset, value } => {
                write!(f, "malformed input at {offset}: invalid polygon point count {value}")
            }
            MalformedInput::InvalidMarker { offset, value } => {
                write!(f, "malformed input at {offset}: invalid quadtree marker {value}")
            }
            MalformedInput::InvalidCoordinate { offset, value } => {
                write!(f, "malformed input at {offset}: coordinate {value} out of f32 range")
            }
        }
    }
}

impl std::error::Error for MalformedInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_len_reports_shortfall() {
        assert_eq!(MalformedInput::check_len(3, 5, 8), Ok(()));
        assert_eq!(
            MalformedInput::check_len(5, 5, 7),
            Err(MalformedInput::Truncated { offset: 5, needed: 5, available: 2 })
        );
    }

    #[test]
    fn check_len_past_end_has_nothing_available() {
        let err = MalformedInput::check_len(9, 1, 4).unwrap_err();
        assert_eq!(err, MalformedInput::Truncated { offset: 9, needed: 1, available: 0 });
        assert_eq!(err.offset(), 9);
    }

    #[test]
    fn display_mentions_offset() {
        let err = MalformedInput::InvalidPointCount { offset: 4, value: -1.0 };
        assert_eq!(err.to_string(), "malformed input at 4: invalid polygon point count -1");
    }
}
