use super::*;
use crate::{Block, Spring, Strut};
use trellis_core::{clear_damage, is_damaged, take_damage};
use trellis_ui_layout::VerticalJustification;

/// Runs both passes on a group whose children are leaves.
fn lay_out(group: &mut LinearGroup) {
    for child in group.children_mut() {
        child.do_local_sizing();
    }
    group.do_local_sizing();
    group.complete_local_layout();
}

fn toolbar(width: f32) -> LinearGroup {
    LinearGroup::row()
        .with_main_size(width)
        .with_child(Block::new(
            SizeConfig::elastic(10.0, 20.0, 20.0),
            SizeConfig::fixed(10.0),
        ))
        .with_child(Spring::new())
        .with_child(Block::new(
            SizeConfig::fixed(30.0),
            SizeConfig::elastic(5.0, 20.0, 40.0),
        ))
}

fn child_rects(group: &LinearGroup) -> Vec<Rect> {
    group.children().iter().map(|child| child.geometry()).collect()
}

#[test]
fn sizing_sums_widths_and_maxes_heights() {
    let mut row = toolbar(100.0);
    row.do_local_sizing();

    let content = row.content_main_config();
    assert_eq!(content.min, 40.0);
    assert_eq!(content.nat, 50.0);
    assert!(content.max.is_infinite());

    let cross = row.cross_config();
    assert_eq!(cross.min, 10.0);
    assert_eq!(cross.nat, 20.0);
    assert!(cross.max.is_infinite());
}

#[test]
fn sizing_without_children_is_zero() {
    let mut row = LinearGroup::row();
    row.do_local_sizing();
    assert_eq!(row.content_main_config(), SizeConfig::ZERO);
    assert_eq!(row.cross_config(), SizeConfig::ZERO);
    assert_eq!(row.h_config(), SizeConfig::ZERO);
}

#[test]
fn row_advertises_its_fixed_width() {
    let mut row = toolbar(100.0);
    row.do_local_sizing();
    assert_eq!(row.w_config(), SizeConfig::fixed(100.0));
}

#[test]
fn spring_absorbs_surplus_width() {
    let mut row = toolbar(100.0);
    lay_out(&mut row);

    let rects = child_rects(&row);
    let widths: Vec<f32> = rects.iter().map(|rect| rect.width).collect();
    let xs: Vec<f32> = rects.iter().map(|rect| rect.x).collect();
    assert_eq!(widths, vec![20.0, 50.0, 30.0]);
    assert_eq!(xs, vec![0.0, 20.0, 70.0]);
}

#[test]
fn shortfall_compresses_and_overflows() {
    let mut row = toolbar(30.0);
    lay_out(&mut row);

    let widths: Vec<f32> = child_rects(&row).iter().map(|rect| rect.width).collect();
    assert_eq!(widths, vec![10.0, 0.0, 30.0]);

    let distribution = row.last_distribution().expect("layout ran");
    assert_eq!(distribution.uncovered, 10.0);
    assert_eq!(distribution.total(), 40.0);
}

#[test]
fn height_shrink_wraps_tallest_natural_child() {
    let mut row = toolbar(100.0);
    lay_out(&mut row);

    assert_eq!(row.geometry().height, 20.0);
    assert_eq!(row.h_config().nat, 20.0);
    let heights: Vec<f32> = child_rects(&row).iter().map(|rect| rect.height).collect();
    assert_eq!(heights, vec![10.0, 0.0, 20.0]);
}

#[test]
fn justification_positions_children_vertically() {
    let cases = [
        (VerticalJustification::Top, vec![0.0, 0.0, 0.0]),
        (VerticalJustification::Center, vec![5.0, 10.0, 0.0]),
        (VerticalJustification::Bottom, vec![10.0, 20.0, 0.0]),
    ];
    for (justification, expected) in cases {
        let mut row = toolbar(100.0).with_justification(justification);
        lay_out(&mut row);
        let ys: Vec<f32> = child_rects(&row).iter().map(|rect| rect.y).collect();
        assert_eq!(ys, expected, "{justification:?}");
    }
}

#[test]
fn empty_group_keeps_its_geometry() {
    let mut row = LinearGroup::row().with_main_size(50.0);
    row.apply_layout(Rect::new(3.0, 4.0, 50.0, 12.0));
    lay_out(&mut row);
    assert_eq!(row.geometry(), Rect::new(3.0, 4.0, 50.0, 12.0));
    assert!(row.last_distribution().is_none());
}

#[test]
fn struts_are_rigid_gaps() {
    let mut row = LinearGroup::row()
        .with_main_size(50.0)
        .with_child(Block::fixed(10.0, 10.0))
        .with_child(Strut::horizontal(5.0))
        .with_child(Block::fixed(10.0, 10.0));
    lay_out(&mut row);

    let xs: Vec<f32> = child_rects(&row).iter().map(|rect| rect.x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 15.0]);
    assert_eq!(row.last_distribution().map(|d| d.unconsumed()), Some(25.0));
}

#[test]
fn set_justification_damages_without_resizing() {
    let mut row = toolbar(100.0);
    lay_out(&mut row);
    clear_damage();
    let (w_before, h_before) = (row.w_config(), row.h_config());

    row.set_justification(VerticalJustification::Bottom);
    row.set_justification(VerticalJustification::Center);

    assert_eq!(take_damage(), vec![row.node_id()]);
    assert_eq!(row.w_config(), w_before);
    assert_eq!(row.h_config(), h_before);
    assert_eq!(row.justification(), CrossAxisJustification::Center);
}

#[test]
fn set_main_size_refixes_width_and_damages() {
    let mut row = toolbar(100.0);
    clear_damage();

    row.set_main_size(120.0);

    assert!(is_damaged(row.node_id()));
    assert_eq!(row.w_config(), SizeConfig::fixed(120.0));
    assert_eq!(row.geometry().width, 120.0);
}

#[test]
fn relayout_is_idempotent() {
    let mut row = toolbar(100.0).with_justification(VerticalJustification::Center);
    lay_out(&mut row);
    let first = child_rects(&row);
    let first_height = row.geometry().height;

    lay_out(&mut row);

    assert_eq!(child_rects(&row), first);
    assert_eq!(row.geometry().height, first_height);
}
