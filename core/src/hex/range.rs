use crate::hex::coordinates::{ring::RingIter, HexCoordinate, NUM_DIRECTIONS};
use std::{cmp, iter::FusedIterator};

/// Number of cells within `radius` steps of a center, center included.
pub fn range_len(radius: usize) -> usize {
    3 * radius * radius + 3 * radius + 1
}

/// Every cell within `radius` steps of a center, by increasing cube x then y.
#[derive(Clone, Debug)]
pub struct RangeIter {
    center: HexCoordinate,
    radius: isize,
    dx: isize,
    dy: isize,
    remaining: usize,
}

impl RangeIter {
    pub fn new(center: HexCoordinate, radius: usize) -> Self {
        let radius_isize = radius as isize;
        Self {
            center,
            radius: radius_isize,
            dx: -radius_isize,
            dy: 0,
            remaining: range_len(radius),
        }
    }
}

impl Iterator for RangeIter {
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let radius = self.radius;
        let (dx, dy) = (self.dx, self.dy);
        self.dy += 1;
        if self.dy > cmp::min(radius, -dx + radius) {
            self.dx += 1;
            self.dy = cmp::max(-radius, -self.dx - radius);
        }
        self.remaining -= 1;
        Some(self.center + HexCoordinate::from_axial(dx, -dx - dy))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}

/// The center followed by its rings of radius 1 to `radius`.
#[derive(Clone, Debug)]
pub struct SpiralIter {
    center: HexCoordinate,
    radius: usize,
    ring_radius: usize,
    ring: RingIter,
}

impl SpiralIter {
    pub fn new(center: HexCoordinate, radius: usize) -> Self {
        Self {
            center,
            radius,
            ring_radius: 0,
            ring: center.ring(0),
        }
    }
}

impl Iterator for SpiralIter {
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(position) = self.ring.next() {
                return Some(position);
            }
            if self.ring_radius >= self.radius {
                return None;
            }
            self.ring_radius += 1;
            self.ring = self.center.ring(self.ring_radius);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let outer_rings = (self.ring_radius + 1..=self.radius)
            .map(|radius| NUM_DIRECTIONS * radius)
            .sum::<usize>();
        let remaining = self.ring.len() + outer_rings;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpiralIter {}

impl FusedIterator for SpiralIter {}

impl HexCoordinate {
    pub fn range(self, radius: usize) -> RangeIter {
        RangeIter::new(self, radius)
    }

    pub fn spiral(self, radius: usize) -> SpiralIter {
        SpiralIter::new(self, radius)
    }
}

#[cfg(test)]
use maplit::hashset;
#[cfg(test)]
use std::collections::HashSet;

#[test]
fn test_range_len() {
    assert_eq!(range_len(0), 1);
    assert_eq!(range_len(1), 7);
    assert_eq!(range_len(5), 91);
}

#[test]
fn test_range0() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(center.range(0).collect::<Vec<_>>(), vec![center]);
}

#[test]
fn test_range1() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let mut expected = center.all_neighbors().collect::<HashSet<_>>();
    expected.insert(center);
    assert_eq!(center.range(1).collect::<HashSet<_>>(), expected);
}

#[test]
fn test_range_order() {
    let cells = HexCoordinate::default().range(1).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            HexCoordinate::from_cube(-1, 0, 1).unwrap(),
            HexCoordinate::from_cube(-1, 1, 0).unwrap(),
            HexCoordinate::from_cube(0, -1, 1).unwrap(),
            HexCoordinate::from_cube(0, 0, 0).unwrap(),
            HexCoordinate::from_cube(0, 1, -1).unwrap(),
            HexCoordinate::from_cube(1, -1, 0).unwrap(),
            HexCoordinate::from_cube(1, 0, -1).unwrap(),
        ]
    );
}

#[test]
fn test_range_size_and_bounds() {
    let center = HexCoordinate::from_axial(-3, 7);
    for radius in 0..6 {
        let iter = center.range(radius);
        assert_eq!(iter.len(), range_len(radius));
        let cells = iter.collect::<Vec<_>>();
        assert_eq!(cells.len(), range_len(radius));
        assert_eq!(cells.iter().collect::<HashSet<_>>().len(), range_len(radius));
        assert!(cells.iter().all(|cell| cell.distance(center) <= radius));
    }
}

#[test]
fn test_rings_cover_range() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let size = 3;
    let mut cells = Vec::new();
    for radius in 0..=size {
        cells.extend(center.ring(radius));
    }
    assert_eq!(cells.len(), range_len(size));
    assert_eq!(
        cells.into_iter().collect::<HashSet<_>>(),
        center.range(size).collect::<HashSet<_>>()
    );
}

#[test]
fn test_spiral() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let size = 3;
    let mut expected = Vec::new();
    for radius in 0..=size {
        expected.extend(center.ring(radius));
    }
    let spiral = center.spiral(size);
    assert_eq!(spiral.len(), expected.len());
    assert_eq!(spiral.collect::<Vec<_>>(), expected);
}

#[test]
fn test_spiral0() {
    let center = HexCoordinate::from_axial(2, 2);
    assert_eq!(center.spiral(0).collect::<HashSet<_>>(), hashset![center]);
}

#[test]
fn test_spiral_size_hint() {
    let mut spiral = HexCoordinate::default().spiral(2);
    assert_eq!(spiral.len(), 19);
    spiral.next();
    assert_eq!(spiral.len(), 18);
    for _ in 0..6 {
        spiral.next();
    }
    assert_eq!(spiral.len(), 12);
}
