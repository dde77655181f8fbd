use crate::{
    geometry::{AngleInterval, ShadowCast},
    hex::coordinates::{HexCoordinate, NUM_DIRECTIONS},
};
use log::{debug, trace};
use std::iter::FusedIterator;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Sweep {
    Center,
    Rings,
    Done,
}

/// Cells visible from `center` within `radius`, computed ring by ring.
///
/// Each cell of ring `n` covers `360 / 6n` degrees, clockwise from the top of the
/// center, the cells of even rings being shifted by half a cell so that index 0 sits
/// on top. A cell is visible when the middle of its arc is not in the shadow of a
/// closer opaque cell. Visible opaque cells are yielded and then cast their own
/// shadow. Nothing is visible from an opaque center.
pub struct FieldOfView<F> {
    center: HexCoordinate,
    radius: usize,
    is_opaque: F,
    shadows: ShadowCast,
    sweep: Sweep,
    ring: usize,
    index: usize,
}

/// Arc `[min, max]` covered by the cell at `index` of the ring of `ring` radius.
pub fn cell_arc(ring: usize, index: usize) -> (f64, f64) {
    let slide = 360.0 / (NUM_DIRECTIONS * ring) as f64;
    let mut min_angle = index as f64 * slide;
    if ring % 2 == 0 {
        min_angle -= slide / 2.0;
    }
    (min_angle, min_angle + slide)
}

impl<F> FieldOfView<F>
where
    F: FnMut(HexCoordinate) -> bool,
{
    pub fn new(center: HexCoordinate, radius: usize, is_opaque: F) -> Self {
        Self {
            center,
            radius,
            is_opaque,
            shadows: ShadowCast::new(),
            sweep: Sweep::Center,
            ring: 1,
            index: 0,
        }
    }

    pub fn shadows(&self) -> &ShadowCast {
        &self.shadows
    }

    fn next_ring_cell(&mut self) -> Option<HexCoordinate> {
        loop {
            if self.ring > self.radius {
                return None;
            }
            if self.index >= NUM_DIRECTIONS * self.ring {
                self.ring += 1;
                self.index = 0;
                continue;
            }
            if self.shadows.is_full() {
                debug!(
                    "Field of view from {} fully blocked at ring {}",
                    self.center, self.ring
                );
                return None;
            }
            let index = self.index;
            self.index += 1;
            let (min_angle, max_angle) = cell_arc(self.ring, index);
            if self.shadows.hide((min_angle + max_angle) / 2.0) {
                continue;
            }
            let position = self.center.from_ring(self.ring, index);
            if (self.is_opaque)(position) {
                trace!(
                    "{} casts a shadow over [{}, {}]",
                    position,
                    min_angle,
                    max_angle
                );
                self.shadows
                    .insert(AngleInterval::normalized(min_angle, max_angle));
            }
            return Some(position);
        }
    }
}

impl<F> Iterator for FieldOfView<F>
where
    F: FnMut(HexCoordinate) -> bool,
{
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        match self.sweep {
            Sweep::Center => {
                if (self.is_opaque)(self.center) {
                    self.sweep = Sweep::Done;
                    return None;
                }
                self.sweep = Sweep::Rings;
                Some(self.center)
            }
            Sweep::Rings => {
                let next = self.next_ring_cell();
                if next.is_none() {
                    self.sweep = Sweep::Done;
                }
                next
            }
            Sweep::Done => None,
        }
    }
}

impl<F> FusedIterator for FieldOfView<F> where F: FnMut(HexCoordinate) -> bool {}

impl HexCoordinate {
    pub fn field_of_view<F>(self, radius: usize, is_opaque: F) -> FieldOfView<F>
    where
        F: FnMut(HexCoordinate) -> bool,
    {
        FieldOfView::new(self, radius, is_opaque)
    }
}

#[cfg(test)]
use crate::hex::{coordinates::HexDirection, range::range_len};
#[cfg(test)]
use maplit::hashset;
#[cfg(test)]
use std::collections::HashSet;

#[test]
fn test_cell_arc() {
    assert_eq!(cell_arc(1, 0), (0.0, 60.0));
    assert_eq!(cell_arc(1, 5), (300.0, 360.0));
    assert_eq!(cell_arc(2, 0), (-15.0, 15.0));
    assert_eq!(cell_arc(2, 3), (75.0, 105.0));
    assert_eq!(cell_arc(3, 4), (80.0, 100.0));
}

#[test]
fn test_field_of_view_open_grid() {
    let center = HexCoordinate::from_axial(2, -7);
    let cells = center.field_of_view(5, |_| false).collect::<Vec<_>>();
    assert_eq!(cells.len(), range_len(5));
    assert_eq!(cells[0], center);
    assert_eq!(
        cells.into_iter().collect::<HashSet<_>>(),
        center.range(5).collect::<HashSet<_>>()
    );
}

#[test]
fn test_field_of_view_radius0() {
    let center = HexCoordinate::default();
    assert_eq!(
        center.field_of_view(0, |_| false).collect::<Vec<_>>(),
        vec![center]
    );
}

#[test]
fn test_field_of_view_opaque_center() {
    let center = HexCoordinate::default();
    assert_eq!(center.field_of_view(3, |_| true).count(), 0);
}

#[test]
fn test_field_of_view_enclosed() {
    let center = HexCoordinate::default();
    let walls = center.ring(1).collect::<HashSet<_>>();
    let cells = center
        .field_of_view(4, |position| walls.contains(&position))
        .collect::<HashSet<_>>();
    let mut expected = walls.clone();
    expected.insert(center);
    assert_eq!(cells, expected);
}

#[test]
fn test_field_of_view_walls() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let walls = hashset![
        HexCoordinate::from_cube(0, 0, 0).unwrap(),
        HexCoordinate::from_cube(1, 0, -1).unwrap(),
        HexCoordinate::from_cube(2, 0, -2).unwrap(),
        HexCoordinate::from_cube(0, 2, -2).unwrap(),
    ];
    let cells = center
        .field_of_view(5, |position| walls.contains(&position))
        .collect::<HashSet<_>>();
    assert!(!cells.contains(&HexCoordinate::from_cube(0, 0, 0).unwrap()));
    assert!(!cells.contains(&HexCoordinate::from_cube(-1, -2, 3).unwrap()));
    assert!(!cells.contains(&HexCoordinate::from_cube(2, -1, -1).unwrap()));
    assert!(!cells.contains(&HexCoordinate::from_cube(3, 0, -3).unwrap()));
    assert!(cells.contains(&HexCoordinate::from_cube(1, 2, -3).unwrap()));
    assert!(cells.contains(&HexCoordinate::from_cube(4, 0, -4).unwrap()));
    // Walls next to the center are seen.
    assert!(cells.contains(&HexCoordinate::from_cube(1, 0, -1).unwrap()));
    assert!(cells.contains(&HexCoordinate::from_cube(2, 0, -2).unwrap()));
}

#[test]
fn test_field_of_view_single_wall_matches_line_of_sight() {
    let center = HexCoordinate::default();
    let wall = center.neighbor(HexDirection::A, 1);
    let is_opaque = |position: HexCoordinate| position == wall;
    let cells = center.field_of_view(5, is_opaque).collect::<HashSet<_>>();
    assert!(cells.contains(&wall));
    for distance in 2..=5 {
        let behind = center.neighbor(HexDirection::A, distance);
        assert!(!cells.contains(&behind));
        assert!(!center.visible(behind, is_opaque));
    }
    for direction in [HexDirection::C, HexDirection::D, HexDirection::E].iter() {
        for distance in 1..=5 {
            let open = center.neighbor(*direction, distance);
            assert!(cells.contains(&open));
            assert!(center.visible(open, is_opaque));
        }
    }
}

#[test]
fn test_field_of_view_is_lazy() {
    let center = HexCoordinate::default();
    let mut queried = 0;
    let first = center
        .field_of_view(10, |_| {
            queried += 1;
            false
        })
        .take(3)
        .collect::<Vec<_>>();
    assert_eq!(first.len(), 3);
    assert_eq!(queried, 3);
}

#[test]
fn test_field_of_view_registers_shadows() {
    let center = HexCoordinate::default();
    let wall = center.from_ring(1, 1);
    let mut fov = center.field_of_view(1, |position| position == wall);
    assert_eq!(fov.by_ref().count(), 7);
    assert_eq!(
        fov.shadows().iter().cloned().collect::<Vec<_>>(),
        vec![AngleInterval::new(60.0, 120.0).unwrap()]
    );
}

#[test]
fn test_field_of_view_wide_shadows() {
    let center = HexCoordinate::default();
    let walls = hashset![
        center.from_ring(1, 0),
        center.from_ring(1, 1),
        center.from_ring(1, 2),
        center.from_ring(2, 9),
        center.from_ring(3, 17),
    ];
    let mut fov = center.field_of_view(6, |position| walls.contains(&position));
    let cells = fov.by_ref().collect::<HashSet<_>>();
    assert!(walls.iter().all(|wall| cells.contains(wall)));
    assert!(!cells.contains(&center.from_ring(2, 2)));
    assert!(!cells.contains(&center.from_ring(4, 23)));
    assert!(cells.contains(&center.from_ring(4, 14)));
    assert_eq!(
        fov.shadows().iter().cloned().collect::<Vec<_>>(),
        vec![
            AngleInterval::new(255.0, 285.0).unwrap(),
            AngleInterval::new(340.0, 180.0).unwrap(),
        ]
    );
}
