use crate::hex::coordinates::direction::HexDirection;
use std::ops::{Mul, MulAssign};

/// A cell of the hex grid, stored in axial coordinates.
///
/// Cube coordinates are derived: `x = q`, `z = r` and `y = -q - r`.
#[derive(
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Neg,
    Debug,
    Display,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct HexCoordinate {
    q: isize,
    r: isize,
}

impl HexCoordinate {
    pub const fn from_axial(q: isize, r: isize) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> isize {
        self.q
    }

    pub fn r(&self) -> isize {
        self.r
    }

    pub fn neighbor(self, direction: HexDirection, distance: usize) -> Self {
        self + direction.offset(distance)
    }

    pub fn diagonal(self, direction: HexDirection, distance: usize) -> Self {
        self + direction.diagonal_offset() * distance as isize
    }

    pub fn all_neighbors(self) -> impl Iterator<Item = Self> {
        HexDirection::ALL
            .iter()
            .map(move |direction| self.neighbor(*direction, 1))
    }

    pub fn all_diagonals(self) -> impl Iterator<Item = Self> {
        HexDirection::ALL
            .iter()
            .map(move |direction| self.diagonal(*direction, 1))
    }
}

impl Mul<isize> for HexCoordinate {
    type Output = Self;

    fn mul(self, rhs: isize) -> Self::Output {
        Self {
            q: self.q * rhs,
            r: self.r * rhs,
        }
    }
}

impl MulAssign<isize> for HexCoordinate {
    fn mul_assign(&mut self, rhs: isize) {
        self.q *= rhs;
        self.r *= rhs;
    }
}

impl Mul<HexCoordinate> for isize {
    type Output = HexCoordinate;

    fn mul(self, rhs: HexCoordinate) -> Self::Output {
        rhs * self
    }
}

impl From<(isize, isize)> for HexCoordinate {
    fn from((q, r): (isize, isize)) -> Self {
        Self::from_axial(q, r)
    }
}

impl From<HexCoordinate> for (isize, isize) {
    fn from(position: HexCoordinate) -> Self {
        (position.q, position.r)
    }
}

#[cfg(test)]
use maplit::hashset;
#[cfg(test)]
use std::collections::HashSet;

#[test]
fn test_from_axial() {
    let position = HexCoordinate::from_axial(1, -3);
    assert_eq!(position.q(), 1);
    assert_eq!(position.r(), -3);
}

#[test]
fn test_hex_coordinate_addition() {
    assert_eq!(
        HexCoordinate::from_axial(1, -3) + HexCoordinate::from_axial(-10, 30),
        HexCoordinate::from_axial(-9, 27)
    );
}

#[test]
fn test_hex_coordinate_subtraction() {
    assert_eq!(
        HexCoordinate::from_axial(1, -3) - HexCoordinate::from_axial(-10, 30),
        HexCoordinate::from_axial(11, -33)
    );
}

#[test]
fn test_hex_coordinate_scaling() {
    let mut position = HexCoordinate::from_axial(2, -1);
    assert_eq!(position * 3, HexCoordinate::from_axial(6, -3));
    assert_eq!(-2 * position, HexCoordinate::from_axial(-4, 2));
    position *= -1;
    assert_eq!(position, -HexCoordinate::from_axial(2, -1));
}

#[test]
fn test_hex_coordinate_display() {
    assert_eq!(HexCoordinate::from_axial(4, -2).to_string(), "(4, -2)");
}

#[test]
fn test_hex_coordinate_tuple_conversion() {
    let position: HexCoordinate = (3, -7).into();
    assert_eq!(position, HexCoordinate::from_axial(3, -7));
    assert_eq!(<(isize, isize)>::from(position), (3, -7));
}

#[test]
fn test_neighbor() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.neighbor(HexDirection::A, 1),
        HexCoordinate::from_cube(2, 0, -2).unwrap()
    );
    assert_eq!(center.neighbor(HexDirection::D, 0), center);
    assert_eq!(
        center.neighbor(HexDirection::E, 3),
        HexCoordinate::from_axial(1, -5)
    );
}

#[test]
fn test_all_neighbors() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.all_neighbors().collect::<HashSet<_>>(),
        hashset![
            HexCoordinate::from_cube(2, 0, -2).unwrap(),
            HexCoordinate::from_cube(1, 0, -1).unwrap(),
            HexCoordinate::from_cube(0, 1, -1).unwrap(),
            HexCoordinate::from_cube(0, 2, -2).unwrap(),
            HexCoordinate::from_cube(1, 2, -3).unwrap(),
            HexCoordinate::from_cube(2, 1, -3).unwrap(),
        ]
    );
}

#[test]
fn test_all_diagonals() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.all_diagonals().collect::<HashSet<_>>(),
        hashset![
            HexCoordinate::from_cube(3, 0, -3).unwrap(),
            HexCoordinate::from_cube(2, -1, -1).unwrap(),
            HexCoordinate::from_cube(0, 0, 0).unwrap(),
            HexCoordinate::from_cube(-1, 2, -1).unwrap(),
            HexCoordinate::from_cube(0, 3, -3).unwrap(),
            HexCoordinate::from_cube(2, 2, -4).unwrap(),
        ]
    );
}

#[test]
fn test_diagonal_distance() {
    let center = HexCoordinate::default();
    assert_eq!(
        center.diagonal(HexDirection::B, 2),
        HexCoordinate::from_axial(-2, 4)
    );
    assert_eq!(center.diagonal(HexDirection::F, 0), center);
}
