use crate::hex::coordinates::{
    axial::HexCoordinate,
    direction::{HexDirection, NUM_DIRECTIONS},
};
use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

/// Direction of the corner starting side `side` of a ring: sides are numbered from
/// the E corner, clockwise.
fn side_direction(side: usize) -> HexDirection {
    HexDirection::E.shifted(side as isize)
}

/// Walks the cells at exactly `radius` steps from a center.
///
/// The walk starts at the E corner and follows the directions A to F, `radius`
/// steps each. A zero radius yields the center alone.
#[derive(Clone, Debug)]
pub struct RingIter {
    edge_length: usize,
    direction: usize,
    next: HexCoordinate,
    edge_index: usize,
}

impl RingIter {
    pub fn new(center: HexCoordinate, radius: usize) -> Self {
        Self {
            edge_length: radius,
            direction: 0,
            next: center + HexDirection::E.offset(radius),
            edge_index: 0,
        }
    }

    pub fn peek(&self) -> Option<&HexCoordinate> {
        if self.direction < NUM_DIRECTIONS {
            Some(&self.next)
        } else {
            None
        }
    }

    fn remaining(&self) -> usize {
        if self.direction >= NUM_DIRECTIONS {
            0
        } else if self.edge_length == 0 {
            1
        } else {
            (NUM_DIRECTIONS - self.direction) * self.edge_length - self.edge_index
        }
    }
}

impl Iterator for RingIter {
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.direction >= NUM_DIRECTIONS {
            return None;
        }
        let next = self.next;
        if self.edge_length == 0 {
            self.direction = NUM_DIRECTIONS;
            return Some(next);
        }
        self.next = next.neighbor(HexDirection::from_index(self.direction), 1);
        self.edge_index += 1;
        if self.edge_index == self.edge_length {
            self.edge_index = 0;
            self.direction += 1;
        }
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingIter {}

impl FusedIterator for RingIter {}

/// A cell designated by its ring around a center and its index on that ring.
///
/// Index 0 is the top cell, or the right one of the two top cells on odd rings, and
/// indices grow clockwise. Two ring coordinates are equal when they designate the
/// same cell.
#[derive(Clone, Copy, Debug)]
pub struct RingCoordinate {
    center: HexCoordinate,
    radius: usize,
    index: usize,
}

impl RingCoordinate {
    pub fn new(center: HexCoordinate, radius: usize, index: usize) -> Self {
        Self {
            center,
            radius,
            index,
        }
    }

    pub fn center(&self) -> HexCoordinate {
        self.center
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn to_hex(&self) -> HexCoordinate {
        self.center.from_ring(self.radius, self.index)
    }
}

impl PartialEq for RingCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.to_hex() == other.to_hex()
    }
}

impl Eq for RingCoordinate {}

impl PartialEq<HexCoordinate> for RingCoordinate {
    fn eq(&self, other: &HexCoordinate) -> bool {
        self.to_hex() == *other
    }
}

impl Hash for RingCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state)
    }
}

impl From<RingCoordinate> for HexCoordinate {
    fn from(ring: RingCoordinate) -> Self {
        ring.to_hex()
    }
}

impl fmt::Display for RingCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center {}, radius {}, index {}",
            self.center, self.radius, self.index
        )
    }
}

impl HexCoordinate {
    pub fn ring(self, radius: usize) -> RingIter {
        RingIter::new(self, radius)
    }

    pub fn ring_coordinate(self, radius: usize, index: usize) -> RingCoordinate {
        RingCoordinate::new(self, radius, index)
    }

    /// Cell at `index` on the ring of `radius` around `self`. Indices wrap around.
    pub fn from_ring(self, radius: usize, index: usize) -> Self {
        if radius == 0 {
            return self;
        }
        let ring_size = NUM_DIRECTIONS * radius;
        // Shift so that index 0 is the top cell rather than the E corner.
        let index = (index % ring_size + (radius + 1) / 2) % ring_size;
        let side = index / radius;
        let excess = index - side * radius;
        self + side_direction(side).offset(radius) + side_direction(side + 2).offset(excess)
    }

    /// Inverse of `from_ring`: ring position of `target` around `self`.
    pub fn to_ring(self, target: Self) -> RingCoordinate {
        let (dx, dy, dz) = (target - self).cube();
        let (x, y, z) = (dx.abs(), dy.abs(), dz.abs());
        let radius = ((x + y + z) / 2) as usize;
        if radius == 0 {
            return RingCoordinate::new(self, 0, 0);
        }
        // Corners belong to the side they start, which decides the tie breaks.
        let side = if y >= x {
            if z >= y {
                if dz > 0 {
                    3
                } else {
                    0
                }
            } else if dy > 0 {
                5
            } else {
                2
            }
        } else if x >= z {
            if dx > 0 {
                1
            } else {
                4
            }
        } else if dz > 0 {
            3
        } else {
            0
        };
        let corner = self + side_direction(side).offset(radius);
        let excess = corner.distance(target);
        let ring_size = NUM_DIRECTIONS * radius;
        let index = (radius * side + excess + ring_size - (radius + 1) / 2) % ring_size;
        RingCoordinate::new(self, radius, index)
    }
}

#[cfg(test)]
fn do_test_ring_iter(radius: usize, expected: &[HexCoordinate]) {
    let center = HexCoordinate::default();
    let mut iter = center.ring(radius);
    assert_eq!(iter.size_hint(), (expected.len(), Some(expected.len())));
    let mut peeked = iter.peek().cloned();
    assert!(peeked.is_some());
    let mut i = 0;
    loop {
        let next = iter.next();
        assert_eq!(next, peeked);
        peeked = iter.peek().cloned();
        if i < expected.len() {
            assert_eq!(next, Some(expected[i]));
            assert_eq!(expected[i].distance(center), radius);
            assert_eq!(iter.len(), expected.len() - i - 1);
        } else {
            assert_eq!(next, None);
            break;
        }
        i += 1;
    }
    assert_eq!(peeked, None);
    assert_eq!(iter.next(), None);
}

#[cfg(test)]
fn axial_list(cells: &[(isize, isize)]) -> Vec<HexCoordinate> {
    cells.iter().map(|cell| HexCoordinate::from(*cell)).collect()
}

#[test]
fn test_ring_iter0() {
    do_test_ring_iter(0, &[HexCoordinate::default()]);
}

#[test]
fn test_ring_iter1() {
    do_test_ring_iter(
        1,
        &axial_list(&[(0, -1), (1, -1), (1, 0), (0, 1), (-1, 1), (-1, 0)]),
    );
}

#[test]
fn test_ring_iter2() {
    do_test_ring_iter(
        2,
        &axial_list(&[
            (0, -2),
            (1, -2),
            (2, -2),
            (2, -1),
            (2, 0),
            (1, 1),
            (0, 2),
            (-1, 2),
            (-2, 2),
            (-2, 1),
            (-2, 0),
            (-1, -1),
        ]),
    );
}

#[test]
fn test_ring_matches_neighbors() {
    use std::collections::HashSet;

    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.ring(1).collect::<HashSet<_>>(),
        center.all_neighbors().collect::<HashSet<_>>()
    );
}

#[test]
fn test_from_ring() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.from_ring(2, 5),
        HexCoordinate::from_cube(1, -1, 0).unwrap()
    );
    assert_eq!(
        center.from_ring(3, 4),
        HexCoordinate::from_cube(4, -2, -2).unwrap()
    );
    assert_eq!(center.from_ring(0, 17), center);
    assert_eq!(center.from_ring(2, 5 + 12), center.from_ring(2, 5));
}

#[test]
fn test_from_ring_index_zero_is_on_top() {
    let center = HexCoordinate::default();
    assert_eq!(center.from_ring(1, 0), HexCoordinate::from_axial(1, -1));
    assert_eq!(center.from_ring(2, 0), HexCoordinate::from_axial(1, -2));
    assert_eq!(center.from_ring(3, 0), HexCoordinate::from_axial(2, -3));
    assert_eq!(center.from_ring(4, 0), HexCoordinate::from_axial(2, -4));
}

#[test]
fn test_from_ring_follows_ring_iter() {
    let center = HexCoordinate::from_axial(3, -1);
    for radius in 1..6 {
        let ring_size = 6 * radius;
        for (i, position) in center.ring(radius).enumerate() {
            let index = (i + ring_size - (radius + 1) / 2) % ring_size;
            assert_eq!(center.from_ring(radius, index), position);
        }
    }
}

#[test]
fn test_to_ring() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let ring = center.to_ring(HexCoordinate::from_cube(-1, 0, 1).unwrap());
    assert_eq!(ring, RingCoordinate::new(center, 3, 9));
    assert_eq!((ring.radius(), ring.index()), (3, 9));
    assert_eq!(
        center.to_ring(center.from_ring(2, 3)),
        center.ring_coordinate(2, 3)
    );
    assert_eq!(center.to_ring(center), RingCoordinate::new(center, 0, 0));
}

#[test]
fn test_to_ring_inverts_from_ring() {
    let center = HexCoordinate::from_axial(-4, 2);
    for radius in 1..8 {
        for index in 0..6 * radius {
            let ring = center.to_ring(center.from_ring(radius, index));
            assert_eq!(ring.center(), center);
            assert_eq!(ring.radius(), radius);
            assert_eq!(ring.index(), index);
        }
    }
}

#[test]
fn test_ring_coordinate_equality() {
    let center = HexCoordinate::default();
    let ring = RingCoordinate::new(center, 2, 3);
    assert_eq!(ring, RingCoordinate::new(center, 2, 15));
    assert_eq!(ring, center.from_ring(2, 3));
    assert_eq!(
        RingCoordinate::new(center, 1, 0),
        RingCoordinate::new(HexCoordinate::from_axial(1, 0), 1, 5)
    );
    assert_ne!(ring, RingCoordinate::new(center, 2, 4));
    assert_eq!(HexCoordinate::from(ring), center.from_ring(2, 3));
}
