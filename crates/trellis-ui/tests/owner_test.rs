use trellis_ui::*;

fn owner_with_row() -> (LayoutOwner, NodeId, NodeId) {
    let short = Block::fixed(10.0, 4.0);
    let short_id = short.node_id();
    let row = LinearGroup::row()
        .with_child(short)
        .with_child(Block::fixed(10.0, 12.0));
    let row_id = row.node_id();
    (LayoutOwner::new(row, Size::new(50.0, 50.0)), row_id, short_id)
}

#[test]
fn justification_change_through_owner_takes_effect_on_next_layout() {
    let (mut owner, row_id, short_id) = owner_with_row();
    owner.layout();
    assert_eq!(owner.geometry_of(short_id).map(|rect| rect.y), Ok(0.0));
    clear_damage();

    owner
        .with_element_mut::<LinearGroup, _>(row_id, |row| {
            row.set_justification(VerticalJustification::Bottom)
        })
        .expect("row is a LinearGroup");

    assert!(is_damaged(row_id));
    assert_eq!(owner.geometry_of(short_id).map(|rect| rect.y), Ok(0.0));

    owner.layout();
    assert_eq!(owner.geometry_of(short_id).map(|rect| rect.y), Ok(8.0));
}

#[test]
fn lookups_report_missing_and_mismatched_nodes() {
    let (mut owner, row_id, _) = owner_with_row();

    assert_eq!(
        owner.find(0).map(|element| element.node_id()),
        Err(NodeError::Missing { id: 0 })
    );
    let mismatch = owner.with_element_mut::<Block, _>(row_id, |_| ());
    assert!(matches!(mismatch, Err(NodeError::TypeMismatch { id, .. }) if id == row_id));
}

#[test]
fn viewport_width_becomes_row_width() {
    let (mut owner, row_id, _) = owner_with_row();
    clear_damage();
    owner.layout();

    assert_eq!(owner.root().w_config(), SizeConfig::fixed(50.0));
    assert!(is_damaged(row_id));

    take_damage();
    owner.layout();
    assert!(!has_pending_damage());
}

#[test]
fn layout_tree_dump_lists_every_node() {
    let (mut owner, row_id, short_id) = owner_with_row();
    owner.layout();

    let dump = format_layout_tree(owner.root());
    assert!(dump.contains(&format!("[Row #{row_id}] pos: (0.0, 0.0), size: (50.0x12.0)")));
    assert!(dump.contains(&format!("  [Block #{short_id}] pos: (0.0, 0.0), size: (10.0x4.0)")));
}

#[test]
fn child_config_change_updates_row_aggregate_after_sizing() {
    let (mut owner, _, short_id) = owner_with_row();
    owner.run_sizing();

    let row = |owner: &LayoutOwner| {
        owner
            .root()
            .as_any()
            .downcast_ref::<LinearGroup>()
            .map(|row| (row.content_main_config(), row.cross_config()))
    };
    assert_eq!(
        row(&owner),
        Some((SizeConfig::fixed(20.0), SizeConfig::fixed(12.0)))
    );

    owner
        .with_element_mut::<Block, _>(short_id, |block| {
            block.set_w_config(SizeConfig::elastic(5.0, 30.0, 40.0));
            block.set_h_config(SizeConfig::fixed(20.0));
        })
        .expect("short child is a Block");

    // Aggregates are only refreshed by the next sizing pass.
    assert_eq!(
        row(&owner),
        Some((SizeConfig::fixed(20.0), SizeConfig::fixed(12.0)))
    );

    owner.run_sizing();
    assert_eq!(
        row(&owner),
        Some((
            SizeConfig::elastic(15.0, 40.0, 50.0),
            SizeConfig::fixed(20.0)
        ))
    );
}
