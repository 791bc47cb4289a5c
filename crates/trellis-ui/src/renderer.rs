use crate::element::Element;
use trellis_core::NodeId;
use trellis_ui_graphics::{DrawPrimitive, DrawScope, Point, RecordingDrawScope, Rect};

/// Layer that a paint operation targets within the rendering pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintLayer {
    Behind,
    Overlay,
}

/// A rendered operation emitted by the headless renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Primitive {
        node_id: NodeId,
        layer: PaintLayer,
        primitive: DrawPrimitive,
    },
    PushClip {
        node_id: NodeId,
        rect: Rect,
    },
    PopClip {
        node_id: NodeId,
    },
}

/// A collection of render operations for a laid out tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>) -> Self {
        Self { operations }
    }

    /// Returns a slice of recorded render operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    /// Returns an iterator over primitives that target the provided paint layer.
    pub fn primitives_for(&self, layer: PaintLayer) -> impl Iterator<Item = &DrawPrimitive> {
        self.operations.iter().filter_map(move |op| match op {
            RenderOp::Primitive {
                layer: op_layer,
                primitive,
                ..
            } if *op_layer == layer => Some(primitive),
            _ => None,
        })
    }

    /// Primitives painted by a single node, in submission order.
    pub fn primitives_of(&self, node: NodeId) -> impl Iterator<Item = &DrawPrimitive> {
        self.operations.iter().filter_map(move |op| match op {
            RenderOp::Primitive {
                node_id, primitive, ..
            } if *node_id == node => Some(primitive),
            _ => None,
        })
    }
}

/// A lightweight renderer that walks the element tree and materialises paint commands.
///
/// Each element paints behind its children, then the children are drawn
/// (inside a clip when the element asks for one), then the element paints
/// its overlay.
#[derive(Default)]
pub struct HeadlessRenderer;

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, root: &dyn Element) -> RecordedRenderScene {
        let mut scope = RecordingDrawScope::new();
        let mut operations = Vec::new();
        self.render_element(root, Point::ZERO, &mut scope, &mut operations);
        RecordedRenderScene::new(operations)
    }

    fn render_element(
        &self,
        element: &dyn Element,
        parent_origin: Point,
        scope: &mut RecordingDrawScope,
        operations: &mut Vec<RenderOp>,
    ) {
        let node_id = element.node_id();
        let bounds = element
            .geometry()
            .translate(parent_origin.x, parent_origin.y);

        element.paint_behind(bounds, scope);
        record(node_id, PaintLayer::Behind, scope, operations);

        let clips = element.clips_children() && !element.children().is_empty();
        if clips {
            scope.push_clip(bounds);
            operations.push(RenderOp::PushClip {
                node_id,
                rect: bounds,
            });
        }
        for child in element.children() {
            self.render_element(child.as_ref(), bounds.origin(), scope, operations);
        }
        if clips {
            scope.pop_clip();
            operations.push(RenderOp::PopClip { node_id });
        }

        element.paint_overlay(bounds, scope);
        record(node_id, PaintLayer::Overlay, scope, operations);
    }
}

fn record(
    node_id: NodeId,
    layer: PaintLayer,
    scope: &mut RecordingDrawScope,
    operations: &mut Vec<RenderOp>,
) {
    for primitive in scope.take_primitives() {
        operations.push(RenderOp::Primitive {
            node_id,
            layer,
            primitive,
        });
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
