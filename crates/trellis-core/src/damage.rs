//! Damage registry for Trellis.
//!
//! Property setters on elements (justification, main-axis size) mark their node
//! as damaged here instead of re-running layout. The host's redraw scheduler
//! drains the registry once per frame.

use crate::NodeId;
use rustc_hash::FxHashSet;
use std::cell::RefCell;

thread_local! {
    static DAMAGE_REGISTRY: RefCell<DamageRegistry> = RefCell::new(DamageRegistry::new());
}

/// Tracks which nodes need to be redrawn.
///
/// Scheduling is idempotent: a node damaged several times between two drains
/// is reported once.
struct DamageRegistry {
    dirty_nodes: FxHashSet<NodeId>,
}

impl DamageRegistry {
    fn new() -> Self {
        Self {
            dirty_nodes: FxHashSet::default(),
        }
    }

    fn schedule(&mut self, node_id: NodeId) {
        if self.dirty_nodes.insert(node_id) {
            log::trace!("node #{node_id} damaged");
        }
    }

    fn has_pending(&self) -> bool {
        !self.dirty_nodes.is_empty()
    }

    fn contains(&self, node_id: NodeId) -> bool {
        self.dirty_nodes.contains(&node_id)
    }

    fn drain(&mut self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.dirty_nodes.drain().collect();
        nodes.sort_unstable();
        nodes
    }

    fn clear(&mut self) {
        self.dirty_nodes.clear();
    }
}

/// Marks the node's previous rendering as invalid.
pub fn schedule_damage(node_id: NodeId) {
    DAMAGE_REGISTRY.with(|registry| registry.borrow_mut().schedule(node_id));
}

/// Returns true if any node is waiting to be redrawn.
pub fn has_pending_damage() -> bool {
    DAMAGE_REGISTRY.with(|registry| registry.borrow().has_pending())
}

/// Returns true if the given node is waiting to be redrawn.
pub fn is_damaged(node_id: NodeId) -> bool {
    DAMAGE_REGISTRY.with(|registry| registry.borrow().contains(node_id))
}

/// Drains the registry, returning the damaged nodes in ascending id order.
pub fn take_damage() -> Vec<NodeId> {
    DAMAGE_REGISTRY.with(|registry| registry.borrow_mut().drain())
}

/// Drops all pending damage without reporting it.
pub fn clear_damage() {
    DAMAGE_REGISTRY.with(|registry| registry.borrow_mut().clear());
}

#[cfg(test)]
#[path = "tests/damage_tests.rs"]
mod tests;
