//! Debug utilities for inspecting a laid out tree
//!
//! ```rust,ignore
//! use trellis_ui::{format_layout_tree, LayoutOwner};
//!
//! owner.layout();
//! println!("{}", format_layout_tree(owner.root()));
//! ```

use crate::element::Element;
use std::fmt::Write;

/// Returns a formatted string representation of the layout tree
pub fn format_layout_tree(root: &dyn Element) -> String {
    let mut output = String::new();
    writeln!(output, "=== LAYOUT TREE ===").ok();
    format_element(&mut output, root, 0);
    writeln!(output, "=== END LAYOUT TREE ===").ok();
    output
}

/// Emits the layout tree through the `log` facade at debug level.
pub fn log_layout_tree(root: &dyn Element) {
    for line in format_layout_tree(root).lines() {
        log::debug!("{line}");
    }
}

fn format_element(output: &mut String, element: &dyn Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let rect = element.geometry();

    writeln!(
        output,
        "{}[{} #{}] pos: ({:.1}, {:.1}), size: ({:.1}x{:.1})",
        indent,
        element.debug_name(),
        element.node_id(),
        rect.x,
        rect.y,
        rect.width,
        rect.height
    )
    .ok();

    for child in element.children() {
        format_element(output, child.as_ref(), depth + 1);
    }
}
