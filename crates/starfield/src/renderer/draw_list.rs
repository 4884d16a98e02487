use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::traits::Surface;

/// Primitive kinds understood by every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DrawKind {
    /// Clear the rectangle (0, 0)-(x2, y2).
    Clear = 0,
    /// Filled square at (x, y) with side `size` (ambient star).
    Dot = 1,
    /// Stroked circle at (x, y) with radius `size` (ripple).
    Ring = 2,
    /// Straight line (x, y)-(x2, y2) (collision link).
    Link = 3,
    /// Line from head (x, y) to tail (x2, y2) fading to transparent (shooting star).
    Streak = 4,
}

impl DrawKind {
    pub const ALL: [Self; 5] = [Self::Clear, Self::Dot, Self::Ring, Self::Link, Self::Streak];

    /// Exact match only: fractional, negative or NaN codes are rejected.
    pub fn from_code(code: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| *kind as u8 as f32 == code)
    }
}

/// One draw primitive. 8 floats = 32 bytes stride, so a host can read the
/// list straight out of linear memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    /// `DrawKind` code.
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    /// Square side or ring radius.
    pub size: f32,
    pub line_width: f32,
    /// Unclamped opacity; surfaces clamp to [0, 1].
    pub alpha: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn kind(&self) -> Option<DrawKind> {
        DrawKind::from_code(self.kind)
    }

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x2, self.y2)
    }
}

/// Ordered draw primitives for one frame. Later commands draw on top.
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear_surface(&mut self, width: f32, height: f32) {
        self.push(DrawCommand {
            kind: DrawKind::Clear as u8 as f32,
            x2: width,
            y2: height,
            ..DrawCommand::default()
        });
    }

    pub fn dot(&mut self, pos: Vec2, size: f32, alpha: f32) {
        self.push(DrawCommand {
            kind: DrawKind::Dot as u8 as f32,
            x: pos.x,
            y: pos.y,
            size,
            alpha,
            ..DrawCommand::default()
        });
    }

    pub fn ring(&mut self, center: Vec2, radius: f32, line_width: f32, alpha: f32) {
        self.push(DrawCommand {
            kind: DrawKind::Ring as u8 as f32,
            x: center.x,
            y: center.y,
            size: radius,
            line_width,
            alpha,
            ..DrawCommand::default()
        });
    }

    pub fn link(&mut self, from: Vec2, to: Vec2, line_width: f32, alpha: f32) {
        self.push(DrawCommand {
            kind: DrawKind::Link as u8 as f32,
            x: from.x,
            y: from.y,
            x2: to.x,
            y2: to.y,
            line_width,
            alpha,
            ..DrawCommand::default()
        });
    }

    pub fn streak(&mut self, head: Vec2, tail: Vec2, line_width: f32, alpha: f32) {
        self.push(DrawCommand {
            kind: DrawKind::Streak as u8 as f32,
            x: head.x,
            y: head.y,
            x2: tail.x,
            y2: tail.y,
            line_width,
            alpha,
            ..DrawCommand::default()
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Count commands of one kind.
    pub fn count(&self, kind: DrawKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == Some(kind)).count()
    }

    /// Flat f32 view (8 floats per command).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }

    /// Play every command onto a surface, in order.
    pub fn replay<S: Surface>(&self, surface: &mut S) {
        for cmd in &self.commands {
            let alpha = cmd.alpha.clamp(0.0, 1.0);
            match cmd.kind() {
                Some(DrawKind::Clear) => surface.clear(cmd.x2, cmd.y2),
                Some(DrawKind::Dot) => surface.fill_square(cmd.start(), cmd.size, alpha),
                Some(DrawKind::Ring) => {
                    surface.stroke_ring(cmd.start(), cmd.size, cmd.line_width, alpha)
                }
                Some(DrawKind::Link) => {
                    surface.stroke_line(cmd.start(), cmd.end(), cmd.line_width, alpha)
                }
                Some(DrawKind::Streak) => {
                    surface.stroke_streak(cmd.start(), cmd.end(), cmd.line_width, alpha)
                }
                None => log::warn!("skipping unknown draw command {}", cmd.kind),
            }
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::RecordingSurface;

    #[test]
    fn draw_command_is_eight_floats() {
        assert_eq!(std::mem::size_of::<DrawCommand>(), DrawCommand::STRIDE_BYTES);
    }

    #[test]
    fn as_floats_matches_layout() {
        let mut list = DrawList::new();
        list.dot(Vec2::new(3.0, 4.0), 2.0, 0.5);
        list.ring(Vec2::new(1.0, 1.0), 6.0, 1.0, 0.8);
        let floats = list.as_floats();
        assert_eq!(floats.len(), 2 * DrawCommand::FLOATS);
        assert_eq!(floats[0], DrawKind::Dot as u8 as f32);
        assert_eq!(floats[1], 3.0);
        assert_eq!(floats[2], 4.0);
        assert_eq!(floats[8], DrawKind::Ring as u8 as f32);
        assert_eq!(floats[13], 6.0);
    }

    #[test]
    fn replay_preserves_order_and_clamps_alpha() {
        let mut list = DrawList::new();
        list.clear_surface(800.0, 600.0);
        list.streak(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0), 1.5, 1.2);
        list.dot(Vec2::new(5.0, 5.0), 1.0, -0.1);
        list.link(Vec2::ZERO, Vec2::ONE, 0.5, 0.02);

        let mut surface = RecordingSurface::default();
        list.replay(&mut surface);

        let kinds: Vec<DrawKind> = surface.calls.iter().map(|c| c.0).collect();
        assert_eq!(kinds, vec![DrawKind::Clear, DrawKind::Streak, DrawKind::Dot, DrawKind::Link]);
        assert_eq!(surface.calls[1].1, 1.0);
        assert_eq!(surface.calls[2].1, 0.0);
    }

    #[test]
    fn unknown_kind_is_skipped() {
        let mut list = DrawList::new();
        list.push(DrawCommand { kind: 42.0, ..DrawCommand::default() });
        let mut surface = RecordingSurface::default();
        list.replay(&mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn kind_codes_match_exactly() {
        for kind in DrawKind::ALL {
            assert_eq!(DrawKind::from_code(kind as u8 as f32), Some(kind));
        }
        for code in [1.9, 0.5, 257.0, 256.0, -1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(DrawKind::from_code(code), None, "code {} should be rejected", code);
        }
    }

    #[test]
    fn count_by_kind() {
        let mut list = DrawList::new();
        list.dot(Vec2::ZERO, 1.0, 1.0);
        list.dot(Vec2::ONE, 1.0, 1.0);
        list.ring(Vec2::ZERO, 1.0, 1.0, 1.0);
        assert_eq!(list.count(DrawKind::Dot), 2);
        assert_eq!(list.count(DrawKind::Ring), 1);
        assert_eq!(list.count(DrawKind::Link), 0);
    }
}
