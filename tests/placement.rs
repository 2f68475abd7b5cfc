//! Placement-engine semantics over directly-built grids.

use bmpscene::{IndexGrid, PlacementMapping, Vec2, place, placements};

#[test]
fn empty_slots_and_out_of_range_indices_are_skipped() {
    // Row-major: top row [0, 1], bottom row [99, 2]. Index 1 has no
    // assignment and 99 is outside the 16-slot table.
    let grid = IndexGrid::from_raw(2, 2, vec![0, 1, 99, 2]);
    let mapping = PlacementMapping::new(Vec2::ZERO, Vec2::new(10.0, 10.0))
        .assign(0, "obj_a")
        .assign(2, "obj_b");

    let records = place(&grid, &mapping);
    let got: Vec<_> = records
        .iter()
        .map(|r| (r.object_type, r.position))
        .collect();
    assert_eq!(
        got,
        vec![
            ("obj_a", Vec2::new(0.0, 0.0)),
            ("obj_b", Vec2::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn traversal_is_row_major_with_x_fastest() {
    let grid = IndexGrid::from_raw(2, 2, vec![0, 0, 0, 0]);
    let mapping = PlacementMapping::new(Vec2::ZERO, Vec2::new(10.0, 10.0)).assign(0, "tile");

    let positions: Vec<_> = place(&grid, &mapping).into_iter().map(|r| r.position).collect();
    assert_eq!(
        positions,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
        ]
    );
}

#[test]
fn offset_shifts_every_position() {
    let grid = IndexGrid::from_raw(1, 2, vec![3, 3]);
    let mapping = PlacementMapping::new(Vec2::new(-8.0, 4.0), Vec2::new(2.0, 3.0)).assign(3, "p");

    let positions: Vec<_> = place(&grid, &mapping).into_iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![Vec2::new(-8.0, 4.0), Vec2::new(-8.0, 7.0)]);
}

#[test]
fn placement_is_idempotent() {
    let grid = IndexGrid::from_raw(3, 1, vec![0, 5, 1]);
    let mapping = PlacementMapping::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 4.0))
        .assign(0, "a")
        .assign(1, "b")
        .assign(5, "c");

    let first = place(&grid, &mapping);
    let second = place(&grid, &mapping);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn unmapped_grid_produces_no_records() {
    let grid = IndexGrid::from_raw(2, 2, vec![4, 4, 4, 4]);
    let mapping: PlacementMapping<&str> = PlacementMapping::new(Vec2::ZERO, Vec2::ONE);
    assert!(place(&grid, &mapping).is_empty());
}

#[test]
fn placements_iterator_is_lazy_and_matches_collected_output() {
    let grid = IndexGrid::from_raw(2, 1, vec![1, 1]);
    let mapping = PlacementMapping::new(Vec2::ZERO, Vec2::new(5.0, 5.0)).assign(1, "e");

    let mut iter = placements(&grid, &mapping);
    let first = iter.next().unwrap();
    assert_eq!(first.position, Vec2::ZERO);

    let rest: Vec<_> = iter.collect();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].position, Vec2::new(5.0, 0.0));
}

#[test]
fn wide_slot_tables_reach_eight_bit_indices() {
    let grid = IndexGrid::from_raw(1, 1, vec![200]);
    let mapping =
        PlacementMapping::with_slot_count(Vec2::ZERO, Vec2::ONE, 256).assign(200, "rare");
    assert_eq!(place(&grid, &mapping).len(), 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn assigning_past_the_table_panics() {
    let _ = PlacementMapping::new(Vec2::ZERO, Vec2::ONE).assign(16, "nope");
}

#[cfg(feature = "serde")]
mod config {
    use super::*;

    #[test]
    fn mapping_survives_serialization() {
        let mapping = PlacementMapping::new(Vec2::new(1.0, 2.0), Vec2::new(16.0, 16.0))
            .assign(0, "wall".to_string())
            .assign(3, "lava".to_string());

        let json = serde_json::to_string(&mapping).unwrap();
        let back: PlacementMapping<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
