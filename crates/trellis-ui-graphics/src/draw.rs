//! Drawing context handed down the element tree.

use crate::{Brush, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        brush: Brush,
    },
    /// Outline of `rect`, drawn inside its bounds.
    Border {
        rect: Rect,
        brush: Brush,
        width: f32,
    },
}

impl DrawPrimitive {
    pub fn rect(&self) -> Rect {
        match self {
            DrawPrimitive::Rect { rect, .. } | DrawPrimitive::Border { rect, .. } => *rect,
        }
    }
}

/// Sink for paint operations. All rectangles are in absolute coordinates.
pub trait DrawScope {
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush);
    fn draw_border_at(&mut self, rect: Rect, brush: Brush, width: f32);
    /// Restricts subsequent drawing to `rect` until the matching [`DrawScope::pop_clip`].
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    /// Current clip, if any.
    fn clip(&self) -> Option<Rect>;
}

/// A draw scope that records primitives after applying the active clip.
///
/// Primitives falling completely outside the clip are dropped; partially
/// visible ones are trimmed to the clip bounds.
#[derive(Debug, Default)]
pub struct RecordingDrawScope {
    clips: Vec<Rect>,
    primitives: Vec<DrawPrimitive>,
}

impl RecordingDrawScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Hands out everything recorded so far, keeping the clip stack.
    pub fn take_primitives(&mut self) -> Vec<DrawPrimitive> {
        std::mem::take(&mut self.primitives)
    }

    fn clipped(&self, rect: Rect) -> Option<Rect> {
        match self.clips.last() {
            Some(clip) => clip.intersect(&rect),
            None => Some(rect),
        }
    }
}

impl DrawScope for RecordingDrawScope {
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush) {
        if let Some(rect) = self.clipped(rect) {
            self.primitives.push(DrawPrimitive::Rect { rect, brush });
        }
    }

    fn draw_border_at(&mut self, rect: Rect, brush: Brush, width: f32) {
        if let Some(rect) = self.clipped(rect) {
            self.primitives
                .push(DrawPrimitive::Border { rect, brush, width });
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        // Nested clips can only shrink the visible area.
        let clip = match self.clips.last() {
            Some(current) => current
                .intersect(&rect)
                .unwrap_or(Rect::new(rect.x, rect.y, 0.0, 0.0)),
            None => rect,
        };
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }
}
