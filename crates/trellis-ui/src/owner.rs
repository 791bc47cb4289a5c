//! Drives the sizing and layout passes over an element tree.

use crate::element::Element;
use trellis_core::{NodeError, NodeId};
use trellis_ui_graphics::{Point, Rect, Size};
use web_time::Instant;

/// Owns the root of an element tree and runs layout for a viewport.
///
/// The sizing pass runs bottom-up so that every group sees current configs
/// from its children. The layout pass then gives the root the viewport rect
/// and walks top-down, each group positioning its direct children before
/// they lay out their own subtrees.
pub struct LayoutOwner {
    root: Box<dyn Element>,
    viewport: Size,
}

impl LayoutOwner {
    pub fn new(root: impl Element, viewport: Size) -> Self {
        Self {
            root: Box::new(root),
            viewport,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Changes the viewport. Takes effect on the next layout pass.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn root(&self) -> &dyn Element {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> &mut dyn Element {
        self.root.as_mut()
    }

    /// Runs both passes.
    pub fn layout(&mut self) {
        self.run_sizing();
        self.run_layout();
    }

    pub fn run_sizing(&mut self) {
        let started = Instant::now();
        size_subtree(self.root.as_mut());
        log::trace!("sizing pass took {:?}", started.elapsed());
    }

    pub fn run_layout(&mut self) {
        let started = Instant::now();
        self.root.apply_layout(Rect::from_size(self.viewport));
        layout_subtree(self.root.as_mut());
        log::trace!(
            "layout pass for {}x{} took {:?}",
            self.viewport.width,
            self.viewport.height,
            started.elapsed()
        );
    }

    pub fn find(&self, id: NodeId) -> Result<&dyn Element, NodeError> {
        find_in(self.root.as_ref(), id).ok_or(NodeError::Missing { id })
    }

    /// Geometry of the node in root coordinates.
    pub fn geometry_of(&self, id: NodeId) -> Result<Rect, NodeError> {
        locate(self.root.as_ref(), id, Point::ZERO).ok_or(NodeError::Missing { id })
    }

    /// Runs `f` against the node if it exists and is a `T`.
    pub fn with_element_mut<T, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError>
    where
        T: Element,
    {
        let element = find_in_mut(&mut self.root, id).ok_or(NodeError::Missing { id })?;
        let typed = element
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<T>(),
            })?;
        Ok(f(typed))
    }
}

fn size_subtree(element: &mut dyn Element) {
    for child in element.children_mut() {
        size_subtree(child.as_mut());
    }
    element.do_local_sizing();
}

fn layout_subtree(element: &mut dyn Element) {
    element.complete_local_layout();
    for child in element.children_mut() {
        layout_subtree(child.as_mut());
    }
}

fn find_in(element: &dyn Element, id: NodeId) -> Option<&dyn Element> {
    if element.node_id() == id {
        return Some(element);
    }
    element
        .children()
        .iter()
        .find_map(|child| find_in(child.as_ref(), id))
}

fn find_in_mut(element: &mut Box<dyn Element>, id: NodeId) -> Option<&mut Box<dyn Element>> {
    if element.node_id() == id {
        return Some(element);
    }
    element
        .children_mut()
        .iter_mut()
        .find_map(|child| find_in_mut(child, id))
}

fn locate(element: &dyn Element, id: NodeId, parent_origin: Point) -> Option<Rect> {
    let rect = element
        .geometry()
        .translate(parent_origin.x, parent_origin.y);
    if element.node_id() == id {
        return Some(rect);
    }
    element
        .children()
        .iter()
        .find_map(|child| locate(child.as_ref(), id, rect.origin()))
}
