use super::*;
use crate::allocate_node_id;

#[test]
fn damage_is_coalesced_per_node() {
    clear_damage();
    let node = allocate_node_id();

    schedule_damage(node);
    schedule_damage(node);

    assert!(has_pending_damage());
    assert!(is_damaged(node));
    assert_eq!(take_damage(), vec![node]);
    assert!(!has_pending_damage());
}

#[test]
fn take_damage_reports_nodes_in_id_order() {
    clear_damage();
    let first = allocate_node_id();
    let second = allocate_node_id();
    let third = allocate_node_id();

    schedule_damage(third);
    schedule_damage(first);
    schedule_damage(second);

    assert_eq!(take_damage(), vec![first, second, third]);
}

#[test]
fn clear_damage_drops_pending_nodes() {
    let node = allocate_node_id();
    schedule_damage(node);

    clear_damage();

    assert!(!is_damaged(node));
    assert!(take_damage().is_empty());
}

#[test]
fn allocated_ids_are_unique() {
    let a = allocate_node_id();
    let b = allocate_node_id();
    assert_ne!(a, b);
}
