//! Fixed colors used by the renderers.

use tessera_engine::paint::Color;

/// Rectangle fill (`#f00`).
pub const RECT_FILL: Color = Color::RED;
/// Circle fill (`#0f0`).
pub const CIRCLE_FILL: Color = Color::GREEN;
/// Polygon fill (`#00f`).
pub const POLYGON_FILL: Color = Color::BLUE;
/// Quadtree split lines.
pub const GRID_STROKE: Color = Color::BLACK;
/// Debug bounding boxes.
pub const DEBUG_STROKE: Color = Color::BLACK;
