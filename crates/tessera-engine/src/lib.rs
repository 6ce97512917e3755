//! Tessera engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the decoders in
//! `tessera-draw`: geometry, colors, logging setup and the drawing surface
//! capability that renderers issue their calls against.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod surface;
