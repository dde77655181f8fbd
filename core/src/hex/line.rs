use crate::hex::coordinates::HexCoordinate;
use std::iter::FusedIterator;

/// Cells on the straight segment between two cells, both ends included.
#[derive(Clone, Debug)]
pub struct LineIter {
    start: HexCoordinate,
    destination: HexCoordinate,
    distance: usize,
    step: usize,
}

fn lerp(from: isize, to: isize, steps: usize, step: usize) -> f64 {
    from as f64 + (to - from) as f64 / steps as f64 * step as f64
}

impl LineIter {
    pub fn new(start: HexCoordinate, destination: HexCoordinate) -> Self {
        Self {
            start,
            destination,
            distance: start.distance(destination),
            step: 0,
        }
    }
}

impl Iterator for LineIter {
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.step;
        if step > self.distance {
            return None;
        }
        self.step += 1;
        if step == 0 {
            return Some(self.start);
        }
        if step == self.distance {
            return Some(self.destination);
        }
        let (ax, ay, az) = self.start.cube();
        let (bx, by, bz) = self.destination.cube();
        Some(HexCoordinate::round(
            lerp(ax, bx, self.distance, step),
            lerp(ay, by, self.distance, step),
            lerp(az, bz, self.distance, step),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.distance + 1 - self.step.min(self.distance + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineIter {}

impl FusedIterator for LineIter {}

impl HexCoordinate {
    pub fn line(self, destination: Self) -> LineIter {
        LineIter::new(self, destination)
    }

    /// Whether no cell on the line to `target`, both ends included, is opaque.
    pub fn visible<F>(self, target: Self, mut is_opaque: F) -> bool
    where
        F: FnMut(HexCoordinate) -> bool,
    {
        !self.line(target).any(|position| is_opaque(position))
    }
}

#[test]
fn test_line() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    assert_eq!(
        center
            .line(HexCoordinate::from_cube(0, -1, 1).unwrap())
            .collect::<Vec<_>>(),
        vec![
            center,
            HexCoordinate::from_cube(1, 0, -1).unwrap(),
            HexCoordinate::from_cube(0, 0, 0).unwrap(),
            HexCoordinate::from_cube(0, -1, 1).unwrap(),
        ]
    );
}

#[test]
fn test_line_to_self() {
    let center = HexCoordinate::from_axial(5, -2);
    let line = center.line(center);
    assert_eq!(line.len(), 1);
    assert_eq!(line.collect::<Vec<_>>(), vec![center]);
}

#[test]
fn test_line_ends() {
    let start = HexCoordinate::from_axial(-3, 1);
    for target in start.ring(5) {
        let cells = start.line(target).collect::<Vec<_>>();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], start);
        assert_eq!(cells[5], target);
    }
}

#[test]
fn test_visible() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let wall = HexCoordinate::from_cube(0, 0, 0).unwrap();
    let is_opaque = |position: HexCoordinate| position == wall;
    assert!(center.visible(HexCoordinate::from_cube(1, -1, 0).unwrap(), is_opaque));
    assert!(!center.visible(HexCoordinate::from_cube(-1, 0, 1).unwrap(), is_opaque));
    assert!(!center.visible(wall, is_opaque));
}
