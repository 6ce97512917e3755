//! Path representation.

use crate::coords::Vec2;

/// A path command.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCmd {
    /// Move to a point (starts a new subpath).
    MoveTo(Vec2),
    /// Line to a point.
    LineTo(Vec2),
    /// Circular arc.
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    /// Close the current subpath.
    Close,
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: PathCmd) {
        self.cmds.push(cmd);
    }

    /// True when the last command closes its subpath.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.cmds.last(), Some(PathCmd::Close))
    }
}
