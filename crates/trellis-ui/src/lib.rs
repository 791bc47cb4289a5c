//! Element tree, springs and struts for Trellis

mod debug;
mod element;
mod owner;
mod renderer;
mod widgets;

pub use debug::*;
pub use element::*;
pub use owner::*;
pub use renderer::*;
pub use widgets::*;

pub use trellis_core::{
    allocate_node_id, clear_damage, has_pending_damage, is_damaged, schedule_damage, take_damage,
    NodeError, NodeId,
};
pub use trellis_ui_graphics::{Brush, Color, DrawPrimitive, DrawScope, Point, Rect, Size};
pub use trellis_ui_layout::{
    Axis, ChildKind, CrossAxisJustification, Distribution, HorizontalJustification, SizeConfig,
    VerticalJustification,
};
