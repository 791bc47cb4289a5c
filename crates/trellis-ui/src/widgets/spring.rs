//! Invisible fillers: elastic springs and fixed struts.

use crate::element::Element;
use std::any::Any;
use trellis_core::{allocate_node_id, NodeId};
use trellis_ui_graphics::Rect;
use trellis_ui_layout::{ChildKind, SizeConfig};

/// Zero natural size filler that soaks up surplus space along a group's main axis.
#[derive(Debug)]
pub struct Spring {
    node_id: NodeId,
    config: SizeConfig,
    rect: Rect,
}

impl Spring {
    pub fn new() -> Self {
        Self::with_max(f32::INFINITY)
    }

    pub fn with_max(max: f32) -> Self {
        Self {
            node_id: allocate_node_id(),
            config: SizeConfig::stretchy(max),
            rect: Rect::default(),
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Spring {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn kind(&self) -> ChildKind {
        ChildKind::Spring
    }

    fn w_config(&self) -> SizeConfig {
        self.config
    }

    fn h_config(&self) -> SizeConfig {
        self.config
    }

    fn geometry(&self) -> Rect {
        self.rect
    }

    fn apply_layout(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn debug_name(&self) -> &str {
        "Spring"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Fixed-size gap. Takes part in layout as an ordinary rigid child.
#[derive(Debug)]
pub struct Strut {
    node_id: NodeId,
    w_config: SizeConfig,
    h_config: SizeConfig,
    rect: Rect,
}

impl Strut {
    fn new(w_config: SizeConfig, h_config: SizeConfig) -> Self {
        Self {
            node_id: allocate_node_id(),
            w_config,
            h_config,
            rect: Rect::default(),
        }
    }

    /// A gap of `width` inside a row.
    pub fn horizontal(width: f32) -> Self {
        Self::new(SizeConfig::fixed(width), SizeConfig::ZERO)
    }

    /// A gap of `height` inside a column.
    pub fn vertical(height: f32) -> Self {
        Self::new(SizeConfig::ZERO, SizeConfig::fixed(height))
    }
}

impl Element for Strut {
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

    fn debug_name(&self) -> &str {
        "Strut"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
