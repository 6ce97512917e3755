use std::f32::consts::TAU;

use tessera_engine::coords::Rect;
use tessera_engine::surface::Surface;

use crate::palette;
use crate::{MalformedInput, RenderConfig};

use super::{decode_shapes, ShapeRecord};

/// Decodes `records` and draws every shape onto `surface`, in record order.
///
/// The whole sequence is decoded first: on malformed input nothing is drawn.
pub fn render_shapes<S: Surface + ?Sized>(
    surface: &mut S,
    records: &[f64],
    config: &RenderConfig,
) -> Result<(), MalformedInput> {
    let shapes = decode_shapes(records).inspect_err(|e| {
        log::warn!("shape sequence rejected ({} values): {e}", records.len());
    })?;

    log::trace!("rendering {} shapes (debug overlay: {})", shapes.len(), config.debug);

    for shape in &shapes {
        draw_shape(surface, shape, config);
    }
    Ok(())
}

/// Issues the drawing calls for a single decoded shape.
pub fn draw_shape<S: Surface + ?Sized>(
    surface: &mut S,
    shape: &ShapeRecord,
    config: &RenderConfig,
) {
    match shape {
        ShapeRecord::Rectangle(rect) => {
            surface.set_fill_color(palette::RECT_FILL);
            surface.fill_rect(*rect);
        }
        ShapeRecord::Circle { center, radius } => {
            surface.set_fill_color(palette::CIRCLE_FILL);
            surface.begin_path();
            surface.arc(*center, *radius, 0.0, TAU);
            surface.close_path();
            surface.fill();

            if config.debug {
                stroke_debug_box(surface, shape.bounds());
            }
        }
        ShapeRecord::Polygon { points } => {
            // Multi-step path construction stays inside save/restore so no
            // open subpath or style leaks into later shapes.
            surface.save();
            surface.set_fill_color(palette::POLYGON_FILL);
            surface.begin_path();
            if let Some((first, rest)) = points.split_first() {
                surface.move_to(*first);
                for p in rest {
                    surface.line_to(*p);
                }
            }
            surface.close_path();
            surface.fill();
            surface.restore();
        }
    }
}

fn stroke_debug_box<S: Surface + ?Sized>(surface: &mut S, rect: Rect) {
    surface.save();
    surface.set_stroke_color(palette::DEBUG_STROKE);
    surface.stroke_rect(rect);
    surface.restore();
}

#[cfg(test)]
mod tests {
    use tessera_engine::coords::Vec2;
    use tessera_engine::paint::Color;
    use tessera_engine::surface::{DrawOp, PathCmd, RecordingSurface, SurfaceCall};

    use super::*;

    fn render(records: &[f64], config: RenderConfig) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_shapes(&mut surface, records, &config).unwrap();
        surface
    }

    #[test]
    fn rectangle_is_one_red_fill_rect() {
        let s = render(&[0.0, 10.0, 20.0, 30.0, 40.0], RenderConfig::default());
        assert_eq!(
            s.ops(),
            &[DrawOp::FillRect { rect: Rect::new(10.0, 20.0, 30.0, 40.0), color: Color::RED }]
        );
        assert_eq!(
            s.calls(),
            &[
                SurfaceCall::SetFillColor(Color::RED),
                SurfaceCall::FillRect(Rect::new(10.0, 20.0, 30.0, 40.0)),
            ]
        );
    }

    #[test]
    fn circle_is_one_green_full_arc() {
        let s = render(&[2.0, 5.0, 5.0, 3.0], RenderConfig::default());
        let [DrawOp::FillPath { path, color }] = s.ops() else {
            panic!("expected a single path fill, got {:?}", s.ops());
        };
        assert_eq!(*color, Color::GREEN);
        assert_eq!(
            path.commands(),
            &[
                PathCmd::Arc {
                    center: Vec2::new(5.0, 5.0),
                    radius: 3.0,
                    start_angle: 0.0,
                    end_angle: TAU,
                },
                PathCmd::Close,
            ]
        );
    }

    #[test]
    fn polygon_is_one_blue_closed_path() {
        let s = render(&[3.0, 3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0], RenderConfig::default());
        let [DrawOp::FillPath { path, color }] = s.ops() else {
            panic!("expected a single path fill, got {:?}", s.ops());
        };
        assert_eq!(*color, Color::BLUE);
        assert_eq!(
            path.commands(),
            &[
                PathCmd::MoveTo(Vec2::new(0.0, 0.0)),
                PathCmd::LineTo(Vec2::new(1.0, 0.0)),
                PathCmd::LineTo(Vec2::new(0.0, 1.0)),
                PathCmd::Close,
            ]
        );
        assert_eq!(s.calls().first(), Some(&SurfaceCall::Save));
        assert_eq!(s.calls().last(), Some(&SurfaceCall::Restore));
    }

    #[test]
    fn polygon_does_not_leak_style_or_path() {
        let mut s = RecordingSurface::new();
        s.set_fill_color(Color::RED);
        render_shapes(&mut s, &[3.0, 2.0, 0.0, 0.0, 4.0, 4.0], &RenderConfig::default()).unwrap();

        assert_eq!(s.fill_color(), Color::RED);
        assert!(s.current_path().is_empty());
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn empty_polygon_fills_an_empty_closed_path() {
        let s = render(&[3.0, 0.0], RenderConfig::default());
        let [DrawOp::FillPath { path, .. }] = s.ops() else {
            panic!("expected a single path fill");
        };
        assert_eq!(path.commands(), &[PathCmd::Close]);
    }

    #[test]
    fn one_fill_per_record_in_order() {
        let seq = [
            2.0, 50.0, 50.0, 10.0, //
            1.0, 0.0, 0.0, 5.0, 5.0, //
            3.0, 4.0, 0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0, //
            2.0, 1.0, 1.0, 1.0,
        ];
        let s = render(&seq, RenderConfig::default());
        let colors: Vec<_> = s.ops().iter().map(DrawOp::color).collect();
        assert_eq!(colors, vec![Color::GREEN, Color::RED, Color::BLUE, Color::GREEN]);
        assert!(s.ops().iter().all(DrawOp::is_fill));
    }

    #[test]
    fn debug_overlay_boxes_circles_only() {
        let seq = [
            2.0, 5.0, 5.0, 3.0, //
            3.0, 3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0, 1.0, 1.0,
        ];
        let plain = render(&seq, RenderConfig::default());
        let debug = render(&seq, RenderConfig::new().with_debug(true));

        let strokes: Vec<_> = debug.ops().iter().filter(|op| op.is_stroke()).collect();
        assert_eq!(
            strokes,
            vec![&DrawOp::StrokeRect { rect: Rect::new(2.0, 2.0, 6.0, 6.0), color: Color::BLACK }]
        );

        // Fills are identical with and without the overlay.
        let fills: Vec<_> = debug.ops().iter().filter(|op| op.is_fill()).cloned().collect();
        assert_eq!(fills, plain.ops());
    }

    #[test]
    fn malformed_input_draws_nothing() {
        let mut s = RecordingSurface::new();
        let seq = [0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 10.0, 20.0];
        let err = render_shapes(&mut s, &seq, &RenderConfig::default()).unwrap_err();

        assert_eq!(err, MalformedInput::Truncated { offset: 5, needed: 5, available: 3 });
        assert!(s.calls().is_empty());
    }

    #[test]
    fn rendering_is_repeatable() {
        let seq = [3.0, 3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 5.0, 5.0, 3.0];
        let first = render(&seq, RenderConfig::new().with_debug(true));
        let second = render(&seq, RenderConfig::new().with_debug(true));
        assert_eq!(first.calls(), second.calls());
    }
}
