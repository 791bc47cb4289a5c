//! Plain rigid leaf element.

use crate::element::Element;
use std::any::Any;
use trellis_core::{allocate_node_id, NodeId};
use trellis_ui_graphics::{Brush, DrawScope, Rect};
use trellis_ui_layout::SizeConfig;

/// A leaf with explicit size configs and an optional fill.
#[derive(Debug)]
pub struct Block {
    node_id: NodeId,
    w_config: SizeConfig,
    h_config: SizeConfig,
    fill: Option<Brush>,
    rect: Rect,
}

impl Block {
    pub fn new(w_config: SizeConfig, h_config: SizeConfig) -> Self {
        Self {
            node_id: allocate_node_id(),
            w_config,
            h_config,
            fill: None,
            rect: Rect::default(),
        }
    }

    /// A block that can only take `width` x `height`.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(SizeConfig::fixed(width), SizeConfig::fixed(height))
    }

    pub fn with_fill(mut self, brush: Brush) -> Self {
        self.fill = Some(brush);
        self
    }

    pub fn set_w_config(&mut self, config: SizeConfig) {
        self.w_config = config;
    }

    pub fn set_h_config(&mut self, config: SizeConfig) {
        self.h_config = config;
    }
}

impl Element for Block {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn w_config(&self) -> SizeConfig {
        self.w_config
    }

    fn h_config(&self) -> SizeConfig {
        self.h_config
    }

    fn geometry(&self) -> Rect {
        self.rect
    }

    fn apply_layout(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn paint_behind(&self, bounds: Rect, scope: &mut dyn DrawScope) {
        if let Some(fill) = &self.fill {
            scope.draw_rect_at(bounds, fill.clone());
        }
    }

    fn debug_name(&self) -> &str {
        "Block"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
