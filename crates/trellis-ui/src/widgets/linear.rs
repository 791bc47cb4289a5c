//! Row and column groups laid out with springs and struts.

use crate::element::Element;
use smallvec::SmallVec;
use std::any::Any;
use trellis_core::{allocate_node_id, schedule_damage, NodeId};
use trellis_ui_graphics::{Brush, Color, DrawScope, Rect};
use trellis_ui_layout::{
    distribute, place_sequentially, Axis, CrossAxisJustification, Distribution, LinearChild,
    SizeConfig,
};

/// Outline and background painted by the debug variant of a group.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugStyle {
    pub background: Brush,
    pub border: Brush,
    pub border_width: f32,
}

impl DebugStyle {
    pub fn new(background: Brush, border: Brush) -> Self {
        Self {
            background,
            border,
            border_width: 1.0,
        }
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }
}

impl Default for DebugStyle {
    fn default() -> Self {
        Self::new(
            Brush::solid(Color::rgba(1.0, 0.0, 1.0, 0.15)),
            Brush::solid(Color::rgb(1.0, 0.0, 1.0)),
        )
    }
}

/// A group stacking its children along one axis.
///
/// A row stacks left to right and justifies children vertically; a column is
/// the same with the axes swapped. The main-axis extent is dictated by the
/// parent (or set directly); the group advertises it as a fixed config. The
/// cross-axis extent shrink-wraps the tallest (or widest) child after layout.
pub struct LinearGroup {
    node_id: NodeId,
    axis: Axis,
    justification: CrossAxisJustification,
    rect: Rect,
    main_config: SizeConfig,
    content_main_config: SizeConfig,
    cross_config: SizeConfig,
    children: Vec<Box<dyn Element>>,
    debug_style: Option<DebugStyle>,
    last_distribution: Option<Distribution>,
}

impl LinearGroup {
    pub fn new(axis: Axis) -> Self {
        Self {
            node_id: allocate_node_id(),
            axis,
            justification: CrossAxisJustification::Start,
            rect: Rect::default(),
            main_config: SizeConfig::ZERO,
            content_main_config: SizeConfig::ZERO,
            cross_config: SizeConfig::ZERO,
            children: Vec::new(),
            debug_style: None,
            last_distribution: None,
        }
    }

    /// Horizontal group, children justified to the top.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Vertical group, children justified to the left.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_child(mut self, child: impl Element) -> Self {
        self.push(child);
        self
    }

    pub fn with_justification(mut self, justification: impl Into<CrossAxisJustification>) -> Self {
        self.justification = justification.into();
        self
    }

    pub fn with_main_size(mut self, size: f32) -> Self {
        self.set_main_size(size);
        self
    }

    /// Enables the debug variant: background under and border over the children.
    pub fn with_debug_style(mut self, style: DebugStyle) -> Self {
        self.debug_style = Some(style);
        self
    }

    pub fn push(&mut self, child: impl Element) {
        self.children.push(Box::new(child));
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn justification(&self) -> CrossAxisJustification {
        self.justification
    }

    /// Changes how children sit along the cross axis. Only the rendering is
    /// invalidated; size configs are untouched.
    pub fn set_justification(&mut self, justification: impl Into<CrossAxisJustification>) {
        self.justification = justification.into();
        schedule_damage(self.node_id);
    }

    /// Fixes the main-axis extent (width of a row, height of a column).
    pub fn set_main_size(&mut self, size: f32) {
        let cross = self.axis.cross(self.rect.width, self.rect.height);
        let (width, height) = self.axis.pack(size, cross);
        self.rect.width = width;
        self.rect.height = height;
        self.main_config = SizeConfig::fixed(size);
        schedule_damage(self.node_id);
    }

    pub fn main_size(&self) -> f32 {
        self.axis.main(self.rect.width, self.rect.height)
    }

    /// Sum of the children's main-axis configs from the last sizing pass.
    pub fn content_main_config(&self) -> SizeConfig {
        self.content_main_config
    }

    /// Cross-axis config advertised to the parent.
    pub fn cross_config(&self) -> SizeConfig {
        self.cross_config
    }

    /// Result of the last main-axis distribution, if a layout pass has run.
    pub fn last_distribution(&self) -> Option<&Distribution> {
        self.last_distribution.as_ref()
    }

    pub fn debug_style(&self) -> Option<&DebugStyle> {
        self.debug_style.as_ref()
    }
}

impl Element for LinearGroup {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn w_config(&self) -> SizeConfig {
        self.axis.pack(self.main_config, self.cross_config).0
    }

    fn h_config(&self) -> SizeConfig {
        self.axis.pack(self.main_config, self.cross_config).1
    }

    fn geometry(&self) -> Rect {
        self.rect
    }

    fn apply_layout(&mut self, rect: Rect) {
        let main = self.axis.main(rect.width, rect.height);
        // The cross extent is recomputed by the shrink-wrap in
        // `complete_local_layout`, so only origin and main size count here.
        if main != self.main_size() {
            self.set_main_size(main);
        } else if rect.origin() != self.rect.origin() {
            schedule_damage(self.node_id);
        }
        self.rect = rect;
    }

    fn do_local_sizing(&mut self) {
        let main_axis = self.axis;
        let cross_axis = main_axis.cross_axis();
        for child in &self.children {
            let (w, h) = (child.w_config(), child.h_config());
            if !w.is_valid() || !h.is_valid() {
                log::warn!(
                    "{} #{} has malformed size configs w={:?} h={:?}",
                    child.debug_name(),
                    child.node_id(),
                    w,
                    h
                );
            }
        }

        self.content_main_config = self
            .children
            .iter()
            .map(|child| child.config(main_axis))
            .sum();
        self.cross_config = self
            .children
            .iter()
            .map(|child| child.config(cross_axis))
            .fold(SizeConfig::ZERO, SizeConfig::maximum);
    }

    fn complete_local_layout(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let axis = self.axis;
        let linear: SmallVec<[LinearChild; 8]> = self
            .children
            .iter()
            .map(|child| LinearChild::new(child.kind(), child.config(axis)))
            .collect();
        let distribution = distribute(self.main_size(), &linear);

        let cross_sizes: SmallVec<[f32; 8]> = self
            .children
            .iter()
            .map(|child| child.config(axis.cross_axis()).nat)
            .collect();
        let cross_extent = cross_sizes.iter().copied().fold(0.0, f32::max);

        // Shrink-wrap the cross axis to the largest natural child.
        let (width, height) = axis.pack(self.main_size(), cross_extent);
        self.rect.width = width;
        self.rect.height = height;
        self.cross_config = self.cross_config.with_nat(cross_extent);

        let mut positions: SmallVec<[f32; 8]> = SmallVec::from_elem(0.0, self.children.len());
        place_sequentially(&distribution.sizes, &mut positions);

        for (index, child) in self.children.iter_mut().enumerate() {
            let cross_offset = self.justification.offset(cross_extent, cross_sizes[index]);
            let (x, y) = axis.pack(positions[index], cross_offset);
            let (w, h) = axis.pack(distribution.sizes[index], cross_sizes[index]);
            child.apply_layout(Rect::new(x, y, w, h));
        }

        log::trace!(
            "{} #{} laid out {} children: excess {}, uncovered {}",
            self.debug_name(),
            self.node_id,
            self.children.len(),
            distribution.excess,
            distribution.uncovered
        );
        self.last_distribution = Some(distribution);
    }

    fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
        &mut self.children
    }

    fn paint_behind(&self, bounds: Rect, scope: &mut dyn DrawScope) {
        if let Some(style) = &self.debug_style {
            scope.draw_rect_at(bounds, style.background.clone());
        }
    }

    fn paint_overlay(&self, bounds: Rect, scope: &mut dyn DrawScope) {
        if let Some(style) = &self.debug_style {
            scope.draw_border_at(bounds, style.border.clone(), style.border_width);
        }
    }

    fn clips_children(&self) -> bool {
        true
    }

    fn debug_name(&self) -> &str {
        match self.axis {
            Axis::Horizontal => "Row",
            Axis::Vertical => "Column",
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "tests/linear_tests.rs"]
mod tests;
