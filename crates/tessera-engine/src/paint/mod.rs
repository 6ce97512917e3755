//! Paint model shared between decoders and surfaces.
//!
//! Scope is deliberately tiny: fills and strokes are solid colors only.

pub mod color;

pub use color::Color;
