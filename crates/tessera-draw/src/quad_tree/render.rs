use tessera_engine::coords::{Rect, Vec2};
use tessera_engine::surface::Surface;

use crate::palette;
use crate::MalformedInput;

use super::QuadMarker;

/// Strokes the split lines of the quadtree encoded in `traversal`, with
/// `bounds` as the root region.
///
/// The traversal is validated before drawing: it must describe exactly one
/// complete tree and nothing after it.
pub fn render_quad_tree<S: Surface + ?Sized>(
    surface: &mut S,
    traversal: &[f64],
    bounds: Rect,
) -> Result<(), MalformedInput> {
    let (min, max) = (bounds.min(), bounds.max());
    render_quad_tree_corners(surface, traversal, min.x, min.y, max.x, max.y)
}

/// Same as [`render_quad_tree`] with the root region given as corners
/// `(x0, y0)`-`(x1, y1)`.
pub fn render_quad_tree_corners<S: Surface + ?Sized>(
    surface: &mut S,
    traversal: &[f64],
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) -> Result<(), MalformedInput> {
    let consumed = traversal_len(traversal, 0)
        .and_then(|consumed| {
            if consumed == traversal.len() {
                Ok(consumed)
            } else {
                Err(MalformedInput::TrailingData { consumed, len: traversal.len() })
            }
        })
        .inspect_err(|e| log::warn!("quadtree traversal rejected: {e}"))?;

    log::trace!("rendering quadtree with {consumed} nodes");

    let end = visit(surface, traversal, x0, y0, x1, y1, 0)?;
    debug_assert_eq!(end, consumed);
    Ok(())
}

/// Number of slots taken by the subtree whose marker is at `cursor`.
pub fn traversal_len(traversal: &[f64], cursor: usize) -> Result<usize, MalformedInput> {
    // Subtrees still to be read; each internal marker trades one for four.
    let mut pending = 1usize;
    let mut pos = cursor;

    while pending > 0 {
        match QuadMarker::read(traversal, pos)? {
            QuadMarker::Leaf => pending -= 1,
            QuadMarker::Internal => pending += 3,
        }
        pos += 1;
    }

    Ok(pos - cursor)
}

/// Draws the subtree at `cursor` inside `(x0, y0)`-`(x1, y1)`.
///
/// Returns the cursor just past the subtree. Regions waiting to be visited
/// live on a heap-allocated work stack, so tree depth is bounded by memory
/// rather than by the thread's stack.
pub fn visit<S: Surface + ?Sized>(
    surface: &mut S,
    traversal: &[f64],
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    cursor: usize,
) -> Result<usize, MalformedInput> {
    let mut cursor = cursor;
    let mut regions = vec![(x0, y0, x1, y1)];

    while let Some((x0, y0, x1, y1)) = regions.pop() {
        let marker = QuadMarker::read(traversal, cursor)?;
        cursor += 1;
        if marker == QuadMarker::Leaf {
            continue;
        }

        let xc = x0 + (x1 - x0) / 2.0;
        let yc = y0 + (y1 - y0) / 2.0;
        stroke_cross(surface, x0, y0, x1, y1, xc, yc);

        // Pushed in reverse so they pop top-left, top-right, bottom-left, bottom-right.
        regions.push((xc, yc, x1, y1));
        regions.push((x0, yc, xc, y1));
        regions.push((xc, y0, x1, yc));
        regions.push((x0, y0, xc, yc));
    }

    Ok(cursor)
}

/// Strokes the vertical and horizontal split lines through `(xc, yc)` as one path.
fn stroke_cross<S: Surface + ?Sized>(
    surface: &mut S,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    xc: f32,
    yc: f32,
) {
    surface.save();
    surface.set_stroke_color(palette::GRID_STROKE);
    surface.begin_path();
    surface.move_to(Vec2::new(xc, y0));
    surface.line_to(Vec2::new(xc, y1));
    surface.move_to(Vec2::new(x0, yc));
    surface.line_to(Vec2::new(x1, yc));
    surface.stroke();
    surface.restore();
}
