use tessera_engine::coords::{Rect, Vec2};

use crate::MalformedInput;

use super::ShapeKind;

/// One decoded shape record.
///
/// Coordinates are read from `f64` slots and rounded to the nearest `f32`.
/// Finite values beyond the `f32` range are rejected rather than turned into
/// infinities.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRecord {
    /// Axis-aligned rectangle: origin `(x, y)`, size `(w, h)`.
    Rectangle(Rect),
    Circle { center: Vec2, radius: f32 },
    /// Closed polygon through `points` in order.
    Polygon { points: Vec<Vec2> },
}

impl ShapeRecord {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRecord::Rectangle(_) => ShapeKind::Rectangle,
            ShapeRecord::Circle { .. } => ShapeKind::Circle,
            ShapeRecord::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Number of sequence slots this record occupies, tag included.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        match self {
            ShapeRecord::Polygon { points } => 2 + points.len() * 2,
            other => other.kind().fixed_len().unwrap_or_default(),
        }
    }

    /// Decodes the record starting at `cursor`.
    ///
    /// Returns the record and the cursor of the next record
    /// (`cursor + encoded_len`).
    pub fn decode_at(records: &[f64], cursor: usize) -> Result<(Self, usize), MalformedInput> {
        MalformedInput::check_len(cursor, 1, records.len())?;

        let tag = records[cursor];
        let kind = ShapeKind::from_tag(tag)
            .ok_or(MalformedInput::InvalidTag { offset: cursor, value: tag })?;

        let field = |i: usize| coordinate(records, cursor + i);

        match kind {
            ShapeKind::Rectangle => {
                MalformedInput::check_len(cursor, 5, records.len())?;
                let rect = Rect::new(field(1)?, field(2)?, field(3)?, field(4)?);
                Ok((ShapeRecord::Rectangle(rect), cursor + 5))
            }
            ShapeKind::Circle => {
                MalformedInput::check_len(cursor, 4, records.len())?;
                let center = Vec2::new(field(1)?, field(2)?);
                Ok((ShapeRecord::Circle { center, radius: field(3)? }, cursor + 4))
            }
            ShapeKind::Polygon => {
                MalformedInput::check_len(cursor, 2, records.len())?;
                let count = point_count(records[cursor + 1], cursor + 1)?;

                // A count too large for usize cannot fit in memory either.
                let len = count
                    .checked_mul(2)
                    .and_then(|n| n.checked_add(2))
                    .unwrap_or(usize::MAX);
                MalformedInput::check_len(cursor, len, records.len())?;

                let points = (cursor + 2..cursor + len)
                    .step_by(2)
                    .map(|i| Ok(Vec2::new(coordinate(records, i)?, coordinate(records, i + 1)?)))
                    .collect::<Result<_, MalformedInput>>()?;
                Ok((ShapeRecord::Polygon { points }, cursor + len))
            }
        }
    }

    /// Appends this record's encoding to `out`.
    pub fn encode(&self, out: &mut Vec<f64>) {
        out.reserve(self.encoded_len());
        out.push(self.kind().tag());
        match self {
            ShapeRecord::Rectangle(rect) => {
                out.extend([rect.origin.x, rect.origin.y, rect.size.x, rect.size.y].map(f64::from));
            }
            ShapeRecord::Circle { center, radius } => {
                out.extend([center.x, center.y, *radius].map(f64::from));
            }
            ShapeRecord::Polygon { points } => {
                out.push(points.len() as f64);
                for p in points {
                    out.push(f64::from(p.x));
                    out.push(f64::from(p.y));
                }
            }
        }
    }

    /// Tight axis-aligned bounding box.
    ///
    /// An empty polygon has a zero-size box at the origin.
    pub fn bounds(&self) -> Rect {
        match self {
            ShapeRecord::Rectangle(rect) => rect.normalized(),
            ShapeRecord::Circle { center, radius } => {
                let r = radius.abs();
                Rect::new(center.x - r, center.y - r, r * 2.0, r * 2.0)
            }
            ShapeRecord::Polygon { points } => Rect::bounding(points).unwrap_or_default(),
        }
    }
}

/// Validates a polygon point count read at `offset`.
/// Reads slot `offset` as an `f32` coordinate. NaN and infinities pass through.
fn coordinate(records: &[f64], offset: usize) -> Result<f32, MalformedInput> {
    let value = records[offset];
    let narrowed = value as f32;
    if value.is_finite() && !narrowed.is_finite() {
        return Err(MalformedInput::InvalidCoordinate { offset, value });
    }
    Ok(narrowed)
}

fn point_count(value: f64, offset: usize) -> Result<usize, MalformedInput> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(MalformedInput::InvalidPointCount { offset, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── single records ────────────────────────────────────────────────────

    #[test]
    fn rectangle_advances_by_five() {
        let seq = [0.0, 10.0, 20.0, 30.0, 40.0];
        let (rec, next) = ShapeRecord::decode_at(&seq, 0).unwrap();
        assert_eq!(rec, ShapeRecord::Rectangle(Rect::new(10.0, 20.0, 30.0, 40.0)));
        assert_eq!(next, 5);
    }

    #[test]
    fn circle_advances_by_four() {
        let seq = [2.0, 5.0, 5.0, 3.0];
        let (rec, next) = ShapeRecord::decode_at(&seq, 0).unwrap();
        assert_eq!(rec, ShapeRecord::Circle { center: Vec2::new(5.0, 5.0), radius: 3.0 });
        assert_eq!(next, 4);
    }

    #[test]
    fn tag_one_is_a_rectangle() {
        // 1.0 sits below the 1.1 threshold; four values are one short of a rectangle.
        let err = ShapeRecord::decode_at(&[1.0, 5.0, 5.0, 3.0], 0).unwrap_err();
        assert_eq!(err, MalformedInput::Truncated { offset: 0, needed: 5, available: 4 });
    }

    #[test]
    fn polygon_advances_by_two_plus_pairs() {
        let seq = [3.0, 3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let (rec, next) = ShapeRecord::decode_at(&seq, 0).unwrap();
        assert_eq!(
            rec,
            ShapeRecord::Polygon {
                points: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            }
        );
        assert_eq!(next, 8);
        assert_eq!(rec.encoded_len(), 8);
    }

    #[test]
    fn empty_polygon_is_two_slots() {
        let (rec, next) = ShapeRecord::decode_at(&[3.0, 0.0], 0).unwrap();
        assert_eq!(rec, ShapeRecord::Polygon { points: vec![] });
        assert_eq!(next, 2);
    }

    #[test]
    fn decodes_at_non_zero_cursor() {
        let seq = [2.0, 1.0, 1.0, 1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        let (rec, next) = ShapeRecord::decode_at(&seq, 4).unwrap();
        assert_eq!(rec, ShapeRecord::Rectangle(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(next, 9);
    }

    // ── malformed ─────────────────────────────────────────────────────────

    #[test]
    fn truncated_rectangle() {
        let err = ShapeRecord::decode_at(&[0.0, 10.0, 20.0], 0).unwrap_err();
        assert_eq!(err, MalformedInput::Truncated { offset: 0, needed: 5, available: 3 });
    }

    #[test]
    fn truncated_polygon_points() {
        let err = ShapeRecord::decode_at(&[3.0, 3.0, 0.0, 0.0, 1.0], 0).unwrap_err();
        assert_eq!(err, MalformedInput::Truncated { offset: 0, needed: 8, available: 5 });
    }

    #[test]
    fn polygon_without_count() {
        let err = ShapeRecord::decode_at(&[3.0], 0).unwrap_err();
        assert_eq!(err, MalformedInput::Truncated { offset: 0, needed: 2, available: 1 });
    }

    #[test]
    fn cursor_at_end() {
        let err = ShapeRecord::decode_at(&[0.0], 1).unwrap_err();
        assert_eq!(err, MalformedInput::Truncated { offset: 1, needed: 1, available: 0 });
    }

    #[test]
    fn bad_point_counts() {
        for bad in [-1.0, 2.5, f64::NAN, f64::INFINITY] {
            let err = ShapeRecord::decode_at(&[3.0, bad, 0.0, 0.0], 0).unwrap_err();
            assert!(
                matches!(err, MalformedInput::InvalidPointCount { offset: 1, .. }),
                "count {bad} gave {err:?}"
            );
        }
    }

    #[test]
    fn huge_point_count_is_truncated_not_overflow() {
        let err = ShapeRecord::decode_at(&[3.0, 1e30, 0.0, 0.0], 0).unwrap_err();
        assert!(matches!(err, MalformedInput::Truncated { offset: 0, .. }));
    }

    #[test]
    fn nan_tag() {
        let err = ShapeRecord::decode_at(&[f64::NAN, 0.0, 0.0, 0.0, 0.0], 0).unwrap_err();
        assert!(matches!(err, MalformedInput::InvalidTag { offset: 0, .. }));
    }

    #[test]
    fn coordinate_beyond_f32_range() {
        let err = ShapeRecord::decode_at(&[2.0, 5.0, 1e40, 3.0], 0).unwrap_err();
        assert_eq!(err, MalformedInput::InvalidCoordinate { offset: 2, value: 1e40 });

        let err = ShapeRecord::decode_at(&[3.0, 2.0, 0.0, 0.0, -1e39, 1.0], 0).unwrap_err();
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn coordinates_round_to_nearest_f32() {
        let (rec, _) = ShapeRecord::decode_at(&[0.0, 16_777_217.0, 0.1, 1.0, 1.0], 0).unwrap();
        let ShapeRecord::Rectangle(rect) = rec else { panic!("expected rectangle") };
        assert_eq!(rect.origin.x, 16_777_216.0);
        assert_eq!(rect.origin.y, 0.1_f32);
    }

    // ── encode / bounds ───────────────────────────────────────────────────

    #[test]
    fn encode_uses_canonical_tags() {
        let mut out = Vec::new();
        ShapeRecord::Circle { center: Vec2::new(5.0, 6.0), radius: 2.0 }.encode(&mut out);
        ShapeRecord::Polygon { points: vec![Vec2::new(1.0, 2.0)] }.encode(&mut out);
        assert_eq!(out, vec![2.0, 5.0, 6.0, 2.0, 3.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn bounds_per_kind() {
        let circle = ShapeRecord::Circle { center: Vec2::new(5.0, 5.0), radius: 3.0 };
        assert_eq!(circle.bounds(), Rect::new(2.0, 2.0, 6.0, 6.0));

        let poly = ShapeRecord::Polygon {
            points: vec![Vec2::new(4.0, 1.0), Vec2::new(-2.0, 3.0), Vec2::new(0.0, 7.0)],
        };
        assert_eq!(poly.bounds(), Rect::new(-2.0, 1.0, 6.0, 6.0));

        let rect = ShapeRecord::Rectangle(Rect::new(10.0, 10.0, -4.0, 2.0));
        assert_eq!(rect.bounds(), Rect::new(6.0, 10.0, 4.0, 2.0));

        assert_eq!(ShapeRecord::Polygon { points: vec![] }.bounds(), Rect::default());
    }
}
