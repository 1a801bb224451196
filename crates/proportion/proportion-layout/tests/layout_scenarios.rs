//! End-to-end layout scenarios through the public API.
//!
//! Each test builds a group, runs a full recomputation and checks the
//! resulting spans on both axes.

use proportion_layout::prelude::*;

fn group(config: LayoutConfig, width: f32, height: f32, weights: &[f32]) -> ProportionLayoutGroup<usize> {
    let mut group = ProportionLayoutGroup::new(config);
    group.set_container_size(ContainerSize::new(width, height));
    for (child, weight) in weights.iter().enumerate() {
        group.add_child(child, Some(*weight)).unwrap();
    }
    group
}

fn primary(result: &LayoutResult<usize>) -> Vec<(usize, f32, f32)> {
    result
        .placements
        .iter()
        .map(|p| {
            let span = p.primary.unwrap();
            (p.child, span.offset, span.size)
        })
        .collect()
}

#[test]
fn two_children_one_to_three() {
    let result = group(LayoutConfig::new(), 300.0, 40.0, &[1.0, 3.0]).compute();
    assert_eq!(primary(&result), [(0, 0.0, 75.0), (1, 75.0, 225.0)]);
}

#[test]
fn spacing_is_taken_before_partition() {
    let result = group(LayoutConfig::new().spacing(10.0), 300.0, 40.0, &[1.0, 1.0]).compute();
    assert_eq!(primary(&result), [(0, 0.0, 145.0), (1, 155.0, 145.0)]);
}

#[test]
fn zero_weight_child_takes_no_room() {
    let result = group(LayoutConfig::new(), 400.0, 40.0, &[1.0, 0.0, 3.0]).compute();
    assert_eq!(
        primary(&result),
        [(0, 0.0, 100.0), (1, 100.0, 0.0), (2, 100.0, 300.0)]
    );
}

#[test]
fn reverse_order_flips_placement_not_weights() {
    let config = LayoutConfig::new().reverse_order(true);
    let result = group(config, 200.0, 40.0, &[1.0, 3.0]).compute();
    assert_eq!(primary(&result), [(1, 0.0, 150.0), (0, 150.0, 50.0)]);
}

#[test]
fn vertical_direction_partitions_height() {
    let config = LayoutConfig::new().direction(LayoutDirection::Vertical);
    let result = group(config, 40.0, 300.0, &[1.0, 3.0]).compute();
    assert_eq!(primary(&result), [(0, 0.0, 75.0), (1, 75.0, 225.0)]);

    let bounds: Vec<_> = result
        .placements
        .iter()
        .map(|p| p.bounds(result.direction).unwrap())
        .collect();
    assert_eq!(bounds[1].top_left.y, 75);
    assert_eq!(bounds[1].size.width, 40);
    assert_eq!(bounds[1].size.height, 225);
}

#[test]
fn padding_shrinks_both_axes() {
    let config = LayoutConfig::new()
        .padding(Edges::new(5, 10, 5, 10))
        .spacing(4.0);
    let result = group(config, 124.0, 50.0, &[1.0, 1.0]).compute();

    // 124 - 20 padding - 4 spacing = 100
    assert_eq!(primary(&result), [(0, 10.0, 50.0), (1, 64.0, 50.0)]);
    for placement in &result.placements {
        assert_eq!(placement.secondary, AxisSpan::new(5.0, 40.0));
    }
}

#[test]
fn oversized_spacing_floors_available_at_zero() {
    let result = group(LayoutConfig::new().spacing(200.0), 100.0, 40.0, &[1.0, 1.0]).compute();
    assert_eq!(primary(&result), [(0, 0.0, 0.0), (1, 200.0, 0.0)]);
}

#[test]
fn weights_near_f32_max_still_partition() {
    let result = group(LayoutConfig::new(), 300.0, 40.0, &[f32::MAX, f32::MAX, f32::MAX]).compute();
    assert_eq!(
        primary(&result),
        [(0, 0.0, 100.0), (1, 100.0, 100.0), (2, 200.0, 100.0)]
    );
}

#[test]
fn all_zero_weights_leave_primary_unset() {
    let result = group(LayoutConfig::new(), 300.0, 40.0, &[0.0, 0.0]).compute();
    assert_eq!(result.len(), 2);
    assert!(result.placements.iter().all(|p| p.primary.is_none()));
    assert!(result
        .placements
        .iter()
        .all(|p| p.secondary == AxisSpan::new(0.0, 40.0)));
}

#[test]
fn no_children_yields_empty_result() {
    let result = group(LayoutConfig::new(), 300.0, 40.0, &[]).compute();
    assert!(result.is_empty());
}

#[test]
fn excluded_children_never_appear() {
    let mut group = group(LayoutConfig::new(), 300.0, 40.0, &[1.0, 1.0]);
    group.add_child(7, None).unwrap();
    group.set_child_active(1, false).unwrap();

    let result = group.compute();
    assert_eq!(result.children().collect::<Vec<_>>(), [0]);
    assert_eq!(primary(&result), [(0, 0.0, 300.0)]);
}

#[test]
fn resize_recomputes() {
    let mut group = group(LayoutConfig::new(), 300.0, 40.0, &[1.0, 3.0]);
    group.compute();
    group.set_container_size(ContainerSize::new(400.0, 40.0));
    assert!(group.is_dirty());
    assert_eq!(
        primary(&group.compute()),
        [(0, 0.0, 100.0), (1, 100.0, 300.0)]
    );
}

#[test]
fn toggling_direction_swaps_axes() {
    let mut group = group(LayoutConfig::new(), 300.0, 100.0, &[1.0, 1.0]);
    let horizontal = group.compute();
    assert_eq!(horizontal.placements[0].secondary, AxisSpan::new(0.0, 100.0));

    group.set_direction(LayoutDirection::Vertical);
    let vertical = group.compute();
    assert_eq!(primary(&vertical), [(0, 0.0, 50.0), (1, 50.0, 50.0)]);
    assert_eq!(vertical.placements[0].secondary, AxisSpan::new(0.0, 300.0));
}

#[test]
fn host_receives_both_axes() {
    #[derive(Default)]
    struct Rects(Vec<(usize, Axis, AxisSpan)>);

    impl LayoutHost<usize> for Rects {
        fn set_child_along_axis(&mut self, child: usize, axis: Axis, span: AxisSpan) {
            self.0.push((child, axis, span));
        }
    }

    let mut group = group(LayoutConfig::new(), 200.0, 30.0, &[1.0, 1.0]);
    let mut host = Rects::default();
    group.layout(&mut host);

    assert_eq!(
        host.0,
        [
            (0, Axis::Horizontal, AxisSpan::new(0.0, 100.0)),
            (1, Axis::Horizontal, AxisSpan::new(100.0, 100.0)),
            (0, Axis::Vertical, AxisSpan::new(0.0, 30.0)),
            (1, Axis::Vertical, AxisSpan::new(0.0, 30.0)),
        ]
    );
}
