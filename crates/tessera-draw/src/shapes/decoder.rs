use crate::MalformedInput;

use super::ShapeRecord;

/// Iterator over the records of a shape sequence.
///
/// The cursor is explicit: each step decodes the record at
/// [`position`](Self::position) and moves it to the start of the next one.
/// After the first error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct ShapeDecoder<'a> {
    records: &'a [f64],
    pos: usize,
    failed: bool,
}

impl<'a> ShapeDecoder<'a> {
    #[inline]
    pub fn new(records: &'a [f64]) -> Self {
        Self { records, pos: 0, failed: false }
    }

    /// Index of the next record to decode.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once every value has been consumed by whole records.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.pos >= self.records.len()
    }
}

impl Iterator for ShapeDecoder<'_> {
    type Item = Result<ShapeRecord, MalformedInput>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_finished() {
            return None;
        }

        match ShapeRecord::decode_at(self.records, self.pos) {
            Ok((record, next)) => {
                self.pos = next;
                Some(Ok(record))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl core::iter::FusedIterator for ShapeDecoder<'_> {}

/// Decodes a whole shape sequence.
///
/// Fails on the first malformed record; a sequence that ends mid-record is
/// an error, never a shorter result.
pub fn decode_shapes(records: &[f64]) -> Result<Vec<ShapeRecord>, MalformedInput> {
    ShapeDecoder::new(records).collect()
}

/// Encodes shapes back-to-back into a fresh sequence.
pub fn encode_shapes(shapes: &[ShapeRecord]) -> Vec<f64> {
    let mut out = Vec::with_capacity(shapes.iter().map(ShapeRecord::encoded_len).sum());
    for shape in shapes {
        shape.encode(&mut out);
    }
    out
}
