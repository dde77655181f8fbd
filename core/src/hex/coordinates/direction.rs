use crate::hex::coordinates::axial::HexCoordinate;
use std::fmt;

pub const NUM_DIRECTIONS: usize = 6;

/// The six directions of a pointy-top hex grid, clockwise from positive Q.
///
/// ```text
///   E F
///  D X A
///   C B
/// ```
///
/// Grid content is authored against this order: do not reorder.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum HexDirection {
    A,
    B,
    C,
    D,
    E,
    F,
}

// Axial (q, r) offsets, indexed by direction.
const NEIGHBOR_OFFSETS: [(isize, isize); NUM_DIRECTIONS] =
    [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];
const DIAGONAL_OFFSETS: [(isize, isize); NUM_DIRECTIONS] =
    [(1, 1), (-1, 2), (-2, 1), (-1, -1), (1, -2), (2, -1)];

impl HexDirection {
    pub const ALL: [HexDirection; NUM_DIRECTIONS] = [
        HexDirection::A,
        HexDirection::B,
        HexDirection::C,
        HexDirection::D,
        HexDirection::E,
        HexDirection::F,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % NUM_DIRECTIONS]
    }

    /// Direction `offset` steps away, clockwise for positive offsets.
    pub fn shifted(self, offset: isize) -> Self {
        let index = (self.index() as isize + offset).rem_euclid(NUM_DIRECTIONS as isize);
        Self::ALL[index as usize]
    }

    pub fn clockwise(self) -> Self {
        self.shifted(1)
    }

    pub fn counter_clockwise(self) -> Self {
        self.shifted(-1)
    }

    pub fn opposite(self) -> Self {
        self.shifted(NUM_DIRECTIONS as isize / 2)
    }

    pub fn neighbor_offset(self) -> HexCoordinate {
        let (q, r) = NEIGHBOR_OFFSETS[self.index()];
        HexCoordinate::from_axial(q, r)
    }

    pub fn diagonal_offset(self) -> HexCoordinate {
        let (q, r) = DIAGONAL_OFFSETS[self.index()];
        HexCoordinate::from_axial(q, r)
    }

    /// Translation of `distance` steps in this direction.
    pub fn offset(self, distance: usize) -> HexCoordinate {
        self.neighbor_offset() * distance as isize
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HexDirection::A => "A",
            HexDirection::B => "B",
            HexDirection::C => "C",
            HexDirection::D => "D",
            HexDirection::E => "E",
            HexDirection::F => "F",
        };
        f.write_str(label)
    }
}

#[test]
fn test_direction_index_roundtrip() {
    for (index, direction) in HexDirection::ALL.iter().enumerate() {
        assert_eq!(direction.index(), index);
        assert_eq!(HexDirection::from_index(index), *direction);
    }
    assert_eq!(HexDirection::from_index(7), HexDirection::B);
}

#[test]
fn test_direction_shifted() {
    assert_eq!(HexDirection::A.shifted(-2), HexDirection::E);
    assert_eq!(HexDirection::E.shifted(3), HexDirection::B);
    assert_eq!(HexDirection::C.shifted(12), HexDirection::C);
    assert_eq!(HexDirection::F.clockwise(), HexDirection::A);
    assert_eq!(HexDirection::A.counter_clockwise(), HexDirection::F);
    assert_eq!(HexDirection::B.opposite(), HexDirection::E);
}

#[test]
fn test_direction_offsets_are_unique() {
    for dir1 in 0..NUM_DIRECTIONS - 1 {
        for dir2 in dir1 + 1..NUM_DIRECTIONS {
            let first = HexDirection::from_index(dir1);
            let second = HexDirection::from_index(dir2);
            assert_ne!(first.neighbor_offset(), second.neighbor_offset());
            assert_ne!(first.diagonal_offset(), second.diagonal_offset());
        }
    }
}

#[test]
fn test_direction_offsets_have_opposite() {
    for direction in HexDirection::ALL.iter() {
        assert_eq!(
            direction.neighbor_offset() + direction.opposite().neighbor_offset(),
            HexCoordinate::default()
        );
        assert_eq!(
            direction.diagonal_offset() + direction.opposite().diagonal_offset(),
            HexCoordinate::default()
        );
    }
}

#[test]
fn test_diagonal_is_sum_of_adjacent_neighbors() {
    for direction in HexDirection::ALL.iter() {
        assert_eq!(
            direction.diagonal_offset(),
            direction.neighbor_offset() + direction.clockwise().neighbor_offset()
        );
    }
}

#[test]
fn test_direction_offset_distance() {
    assert_eq!(HexDirection::C.offset(3), HexCoordinate::from_axial(-3, 3));
    assert_eq!(HexDirection::E.offset(0), HexCoordinate::default());
}
