use crate::hex::{coordinates::HexCoordinate, range::RangeIter};
use std::cmp;

/// The hexagon of cells within `radius` steps of `center`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Region {
    pub center: HexCoordinate,
    pub radius: usize,
}

/// Inclusive cube coordinate bounds.
#[derive(Clone, Copy, Debug)]
struct CubeBounds {
    min: (isize, isize, isize),
    max: (isize, isize, isize),
}

impl CubeBounds {
    fn of(region: &Region) -> Self {
        let (x, y, z) = region.center.cube();
        let radius = region.radius as isize;
        Self {
            min: (x - radius, y - radius, z - radius),
            max: (x + radius, y + radius, z + radius),
        }
    }

    fn clamp(self, other: Self) -> Self {
        Self {
            min: (
                cmp::max(self.min.0, other.min.0),
                cmp::max(self.min.1, other.min.1),
                cmp::max(self.min.2, other.min.2),
            ),
            max: (
                cmp::min(self.max.0, other.max.0),
                cmp::min(self.max.1, other.max.1),
                cmp::min(self.max.2, other.max.2),
            ),
        }
    }
}

impl Region {
    pub fn new(center: HexCoordinate, radius: usize) -> Self {
        Self { center, radius }
    }

    pub fn all(&self) -> RangeIter {
        self.center.range(self.radius)
    }

    pub fn contains(&self, position: HexCoordinate) -> bool {
        self.center.distance(position) <= self.radius
    }

    /// Cells belonging to `self` and to every region of `others`.
    pub fn intersection<'a>(
        &self,
        others: &'a [Region],
    ) -> impl Iterator<Item = HexCoordinate> + 'a {
        let bounds = others
            .iter()
            .fold(CubeBounds::of(self), |bounds, region| {
                bounds.clamp(CubeBounds::of(region))
            });
        let (min_x, min_y, min_z) = bounds.min;
        let (max_x, max_y, max_z) = bounds.max;
        (min_x..=max_x).flat_map(move |x| {
            let low = cmp::max(min_y, -x - max_z);
            let high = cmp::min(max_y, -x - min_z);
            (low..=high).map(move |y| HexCoordinate::from_axial(x, -x - y))
        })
    }
}

#[cfg(test)]
use std::collections::HashSet;

#[test]
fn test_region_all() {
    let region = Region::new(HexCoordinate::from_axial(2, -1), 2);
    assert_eq!(region.all().count(), 19);
    assert!(region.all().all(|position| region.contains(position)));
}

#[test]
fn test_region_contains() {
    let region = Region::new(HexCoordinate::default(), 1);
    assert!(region.contains(HexCoordinate::from_axial(1, -1)));
    assert!(!region.contains(HexCoordinate::from_axial(2, -1)));
}

#[test]
fn test_region_intersection_without_others() {
    let region = Region::new(HexCoordinate::from_axial(-3, 1), 3);
    assert_eq!(
        region.intersection(&[]).collect::<HashSet<_>>(),
        region.all().collect::<HashSet<_>>()
    );
}

#[test]
fn test_region_intersection() {
    let a = Region::new(HexCoordinate::default(), 2);
    let b = Region::new(HexCoordinate::from_axial(3, 0), 2);
    let c = Region::new(HexCoordinate::from_axial(1, 2), 3);
    let others = [b, c];
    let expected = a
        .all()
        .filter(|position| b.contains(*position) && c.contains(*position))
        .collect::<HashSet<_>>();
    assert!(!expected.is_empty());
    assert_eq!(a.intersection(&others).collect::<HashSet<_>>(), expected);
}

#[test]
fn test_region_intersection_disjoint() {
    let a = Region::new(HexCoordinate::default(), 1);
    let b = Region::new(HexCoordinate::from_axial(5, 0), 1);
    assert_eq!(a.intersection(&[b]).count(), 0);
}
