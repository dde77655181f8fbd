use hexshade_core::{
    geometry::{normalize_angle, AngleInterval, ShadowCast},
    hex::{field_of_view::cell_arc, range::range_len, HexCoordinate, Region},
    HexError,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn coordinate() -> impl Strategy<Value = HexCoordinate> {
    (-50isize..50, -50isize..50).prop_map(|(q, r)| HexCoordinate::from_axial(q, r))
}

fn arc() -> impl Strategy<Value = AngleInterval> {
    (0.0f64..360.0, 0.5f64..359.5)
        .prop_map(|(from, width)| AngleInterval::new(from, from + width).unwrap())
}

/// Arcs on a coarse grid, so that many of them share an end.
fn grid_arc() -> impl Strategy<Value = AngleInterval> {
    (0u32..24, 1u32..24).prop_map(|(from, width)| {
        AngleInterval::new(from as f64 * 15.0, (from + width) as f64 * 15.0).unwrap()
    })
}

fn check_merge(a: &AngleInterval, b: &AngleInterval) -> Result<(), TestCaseError> {
    if let Some(merged) = a.try_merge(b) {
        for angle in [a.from(), a.to(), b.from(), b.to()].iter() {
            prop_assert!(merged.inside(*angle), "{} + {} = {}", a, b, merged);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn cube_and_axial_agree(q in -1000isize..1000, r in -1000isize..1000) {
        let axial = HexCoordinate::from_axial(q, r);
        prop_assert_eq!(HexCoordinate::from_cube(q, -q - r, r), Ok(axial));
        prop_assert_eq!(axial.x() + axial.y() + axial.z(), 0);
    }

    #[test]
    fn invalid_cube_is_rejected(x in -100isize..100, y in -100isize..100, z in -100isize..100) {
        prop_assume!(x + y + z != 0);
        prop_assert_eq!(
            HexCoordinate::from_cube(x, y, z),
            Err(HexError::InvalidCube { x, y, z })
        );
    }

    #[test]
    fn distance_is_a_metric(a in coordinate(), b in coordinate(), c in coordinate()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert_eq!(a.distance(a), 0);
        prop_assert!(a.distance(c) <= a.distance(b) + b.distance(c));
    }

    #[test]
    fn range_holds_every_close_cell(center in coordinate(), radius in 0usize..8) {
        let cells = center.range(radius).collect::<HashSet<_>>();
        prop_assert_eq!(cells.len(), range_len(radius));
        prop_assert!(cells.iter().all(|cell| cell.distance(center) <= radius));
    }

    #[test]
    fn ring_has_six_cells_per_step(center in coordinate(), radius in 1usize..10) {
        let cells = center.ring(radius).collect::<Vec<_>>();
        prop_assert_eq!(cells.len(), 6 * radius);
        prop_assert_eq!(cells.iter().collect::<HashSet<_>>().len(), 6 * radius);
        prop_assert!(cells.iter().all(|cell| cell.distance(center) == radius));
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].distance(pair[1]), 1);
        }
    }

    #[test]
    fn spiral_concatenates_rings(center in coordinate(), radius in 0usize..6) {
        let rings = (0..=radius).flat_map(|r| center.ring(r)).collect::<Vec<_>>();
        prop_assert_eq!(center.spiral(radius).collect::<Vec<_>>(), rings);
    }

    #[test]
    fn ring_coordinates_round_trip(center in coordinate(), radius in 0usize..12, index in 0usize..200) {
        let target = center.from_ring(radius, index);
        let ring = center.to_ring(target);
        prop_assert_eq!(ring.radius(), radius);
        if radius > 0 {
            prop_assert_eq!(ring.index(), index % (6 * radius));
        }
        prop_assert_eq!(ring.to_hex(), target);
    }

    #[test]
    fn to_ring_then_from_ring(center in coordinate(), target in coordinate()) {
        let ring = center.to_ring(target);
        prop_assert_eq!(center.from_ring(ring.radius(), ring.index()), target);
    }

    #[test]
    fn rotations(center in coordinate(), target in coordinate(), times in -20isize..20) {
        prop_assert_eq!(center.rotate(target, 6), target);
        prop_assert_eq!(center.rotate(target, 3), center - (target - center));
        let rotated = center.rotate(target, times);
        prop_assert_eq!(rotated.distance(center), target.distance(center));
        prop_assert_eq!(center.rotate(rotated, -times), target);
    }

    #[test]
    fn line_joins_both_ends(a in coordinate(), b in coordinate()) {
        let cells = a.line(b).collect::<Vec<_>>();
        prop_assert_eq!(cells.len(), a.distance(b) + 1);
        prop_assert_eq!(cells[0], a);
        prop_assert_eq!(cells[cells.len() - 1], b);
    }

    #[test]
    fn open_field_of_view_sees_everything(center in coordinate(), radius in 0usize..8) {
        prop_assert_eq!(center.field_of_view(radius, |_| false).count(), range_len(radius));
    }

    #[test]
    fn open_reachable_is_the_range(center in coordinate(), steps in 1usize..6) {
        prop_assert_eq!(
            center.reachable(steps, |_| false).count(),
            3 * steps * steps + 3 * steps
        );
    }

    #[test]
    fn region_intersection_matches_filter(
        a in coordinate(),
        b in coordinate(),
        ra in 0usize..6,
        rb in 0usize..6
    ) {
        let first = Region::new(a, ra);
        let second = Region::new(b, rb);
        let expected = first
            .all()
            .filter(|position| second.contains(*position))
            .collect::<HashSet<_>>();
        prop_assert_eq!(first.intersection(&[second]).collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn normalized_angles(angle in -10_000.0f64..10_000.0) {
        let normalized = normalize_angle(angle);
        prop_assert!((0.0..360.0).contains(&normalized));
    }

    #[test]
    fn interval_contains_its_middle(from in 0.0f64..360.0, width in 0.5f64..180.0) {
        let interval = AngleInterval::new(from, from + width).unwrap();
        prop_assert!(interval.inside(from + width / 2.0));
        prop_assert!(!interval.inside(from + width + 90.0));
    }

    #[test]
    fn merged_arcs_cover_both_arcs(a in arc(), b in arc()) {
        check_merge(&a, &b)?;
        check_merge(&b, &a)?;
    }

    #[test]
    fn merged_grid_arcs_cover_both_arcs(a in grid_arc(), b in grid_arc()) {
        check_merge(&a, &b)?;
        check_merge(&b, &a)?;
    }

    #[test]
    fn shadows_hide_the_cells_that_cast_them(
        cells in prop::collection::vec((1usize..40, 0usize..240), 1..40)
    ) {
        let mut shadows = ShadowCast::new();
        for (ring, index) in cells.iter() {
            let (min_angle, max_angle) = cell_arc(*ring, index % (6 * ring));
            shadows.add_shadow(min_angle, max_angle).unwrap();
        }
        for (ring, index) in cells.iter() {
            let (min_angle, max_angle) = cell_arc(*ring, index % (6 * ring));
            prop_assert!(shadows.hide((min_angle + max_angle) / 2.0));
        }
    }

    #[test]
    fn field_of_view_among_random_walls(
        walls in prop::collection::hash_set((-15isize..=15, -15isize..=15), 0..200),
        radius in 0usize..16
    ) {
        let center = HexCoordinate::default();
        let walls = walls
            .into_iter()
            .map(HexCoordinate::from)
            .filter(|wall| *wall != center)
            .collect::<HashSet<_>>();
        let cells = center
            .field_of_view(radius, |position| walls.contains(&position))
            .collect::<Vec<_>>();
        prop_assert_eq!(cells[0], center);
        prop_assert!(cells.iter().all(|cell| cell.distance(center) <= radius));
        prop_assert_eq!(cells.iter().collect::<HashSet<_>>().len(), cells.len());
    }
}
