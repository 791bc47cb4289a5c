//! The contract every node of the layout tree fulfils.

use std::any::Any;
use trellis_core::NodeId;
use trellis_ui_graphics::{DrawScope, Rect};
use trellis_ui_layout::{Axis, ChildKind, SizeConfig};

/// A node in the layout tree.
///
/// Layout runs in two passes driven by [`crate::LayoutOwner`]: a bottom-up
/// sizing pass calling [`Element::do_local_sizing`] once every child is sized,
/// then a top-down pass where each parent writes its children's geometry
/// through [`Element::apply_layout`] before they lay out their own subtrees.
/// A node's geometry is only ever written by its direct parent.
pub trait Element: Any {
    fn node_id(&self) -> NodeId;

    fn kind(&self) -> ChildKind {
        ChildKind::Rigid
    }

    fn w_config(&self) -> SizeConfig;

    fn h_config(&self) -> SizeConfig;

    /// Size config along `axis`.
    fn config(&self, axis: Axis) -> SizeConfig {
        match axis {
            Axis::Horizontal => self.w_config(),
            Axis::Vertical => self.h_config(),
        }
    }

    /// Position relative to the parent, and current size.
    fn geometry(&self) -> Rect;

    /// Receives the geometry computed by the parent for this pass.
    fn apply_layout(&mut self, rect: Rect);

    /// Recomputes this node's size configs from its children's.
    fn do_local_sizing(&mut self) {}

    /// Lays out direct children once this node's own geometry is final.
    fn complete_local_layout(&mut self) {}

    fn children(&self) -> &[Box<dyn Element>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
        &mut []
    }

    /// Paints underneath the children. `bounds` is in absolute coordinates.
    fn paint_behind(&self, _bounds: Rect, _scope: &mut dyn DrawScope) {}

    /// Paints on top of the children.
    fn paint_overlay(&self, _bounds: Rect, _scope: &mut dyn DrawScope) {}

    /// Whether children are clipped to this node's bounds when drawn.
    fn clips_children(&self) -> bool {
        false
    }

    fn debug_name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
