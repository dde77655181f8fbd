use crate::{
    error::{HexError, Result},
    hex::coordinates::axial::HexCoordinate,
};

impl HexCoordinate {
    pub fn from_cube(x: isize, y: isize, z: isize) -> Result<Self> {
        if x + y + z != 0 {
            return Err(HexError::InvalidCube { x, y, z });
        }
        Ok(Self::from_axial(x, z))
    }

    pub fn x(&self) -> isize {
        self.q()
    }

    pub fn y(&self) -> isize {
        -self.q() - self.r()
    }

    pub fn z(&self) -> isize {
        self.r()
    }

    pub fn cube(&self) -> (isize, isize, isize) {
        (self.x(), self.y(), self.z())
    }

    pub fn distance(self, other: Self) -> usize {
        let vector = self - other;
        ((vector.x().abs() + vector.y().abs() + vector.z().abs()) / 2) as usize
    }

    /// Rotates `target` around `self` by `times` sixths of a turn, clockwise.
    ///
    /// Negative values rotate counter-clockwise.
    pub fn rotate(self, target: Self, times: isize) -> Self {
        let times = times.rem_euclid(6);
        if times == 0 {
            return target;
        }
        // One clockwise sixth is (x, y, z) -> (-z, -x, -y): a cyclic permutation
        // followed by a sign flip, so only odd counts flip.
        let mut cube = (target - self).cube();
        for _ in 0..times % 3 {
            let (x, y, z) = cube;
            cube = (z, x, y);
        }
        let (x, _, z) = if times % 2 == 1 {
            (-cube.0, -cube.1, -cube.2)
        } else {
            cube
        };
        self + Self::from_axial(x, z)
    }

    /// Hex containing the fractional cube position.
    ///
    /// The axis with the largest rounding error is recomputed from the other two so
    /// that the result lies on the grid.
    pub fn round(x: f64, y: f64, z: f64) -> Self {
        let mut rx = x.round();
        let mut ry = y.round();
        let mut rz = z.round();
        let x_diff = (rx - x).abs();
        let y_diff = (ry - y).abs();
        let z_diff = (rz - z).abs();
        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }
        debug_assert_eq!(rx + ry + rz, 0.0);
        Self::from_axial(rx as isize, rz as isize)
    }
}

#[test]
fn test_from_cube() {
    let position = HexCoordinate::from_cube(1, 2, -3).unwrap();
    assert_eq!(position.x(), 1);
    assert_eq!(position.y(), 2);
    assert_eq!(position.z(), -3);
    assert_eq!(position.cube(), (1, 2, -3));
}

#[test]
fn test_from_invalid_cube() {
    assert_eq!(
        HexCoordinate::from_cube(1, 2, 42),
        Err(HexError::InvalidCube { x: 1, y: 2, z: 42 })
    );
    assert!(HexCoordinate::from_cube(1, 1, 1).is_err());
}

#[test]
fn test_axial_and_cube_agree() {
    assert_eq!(
        HexCoordinate::from_axial(1, -3),
        HexCoordinate::from_cube(1, 2, -3).unwrap()
    );
}

#[test]
fn test_distance() {
    let a = HexCoordinate::from_cube(1, 2, -3).unwrap();
    let b = HexCoordinate::from_cube(-2, -3, 5).unwrap();
    assert_eq!(a.distance(b), 8);
    assert_eq!(b.distance(a), 8);
    assert_eq!(a.distance(a), 0);

    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.distance(HexCoordinate::from_cube(1, -1, 0).unwrap()),
        2
    );
}

#[test]
fn test_rotate_half_turn() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center.rotate(HexCoordinate::from_cube(4, -2, -2).unwrap(), 3),
        HexCoordinate::from_cube(-2, 4, -2).unwrap()
    );
}

#[test]
fn test_rotate_walks_directions_clockwise() {
    use crate::hex::coordinates::direction::HexDirection;

    let center = HexCoordinate::from_axial(-2, 5);
    for direction in HexDirection::ALL.iter() {
        for times in 0..6 {
            assert_eq!(
                center.rotate(center.neighbor(*direction, 2), times),
                center.neighbor(direction.shifted(times), 2)
            );
        }
    }
}

#[test]
fn test_rotate_counter_clockwise() {
    let center = HexCoordinate::default();
    let target = HexCoordinate::from_axial(3, -1);
    assert_eq!(center.rotate(center.rotate(target, 1), -1), target);
    assert_eq!(center.rotate(target, -2), center.rotate(target, 4));
    assert_eq!(center.rotate(target, 6), target);
}

#[test]
fn test_round() {
    assert_eq!(
        HexCoordinate::round(0.667, 0.333, -1.0),
        HexCoordinate::from_cube(1, 0, -1).unwrap()
    );
    assert_eq!(
        HexCoordinate::round(0.4, 0.4, -0.8),
        HexCoordinate::from_cube(0, 1, -1).unwrap()
    );
    assert_eq!(
        HexCoordinate::round(1.8, -0.9, -0.9),
        HexCoordinate::from_cube(2, -1, -1).unwrap()
    );
}
