/// Options for [`render_shapes`](crate::render_shapes).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Stroke the bounding box of every circle after filling it.
    pub debug: bool,
}

impl RenderConfig {
    #[inline]
    pub const fn new() -> Self {
        Self { debug: false }
    }

    #[inline]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
