use crate::hex::coordinates::{HexCoordinate, HexDirection, NUM_DIRECTIONS};
use std::{collections::HashSet, iter::FusedIterator, mem};

/// Breadth-first flood fill of the cells reachable in at most `steps` moves without
/// entering an opaque cell.
///
/// Each reached cell is yielded once, closest first. The start cell is only yielded
/// for a zero step count. `is_opaque` is called at most once per cell.
pub struct Reachable<F> {
    is_opaque: F,
    steps: usize,
    step: usize,
    visited: HashSet<HexCoordinate>,
    fringe: Vec<HexCoordinate>,
    next_fringe: Vec<HexCoordinate>,
    fringe_index: usize,
    direction: usize,
    start: Option<HexCoordinate>,
}

impl<F> Reachable<F>
where
    F: FnMut(HexCoordinate) -> bool,
{
    pub fn new(start: HexCoordinate, steps: usize, is_opaque: F) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            is_opaque,
            steps,
            step: 1,
            visited,
            fringe: vec![start],
            next_fringe: Vec::new(),
            fringe_index: 0,
            direction: 0,
            start: if steps == 0 { Some(start) } else { None },
        }
    }
}

impl<F> Iterator for Reachable<F>
where
    F: FnMut(HexCoordinate) -> bool,
{
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        loop {
            if self.step > self.steps {
                return None;
            }
            if self.fringe_index >= self.fringe.len() {
                self.step += 1;
                self.fringe = mem::take(&mut self.next_fringe);
                self.fringe_index = 0;
                if self.fringe.is_empty() {
                    self.step = self.steps + 1;
                }
                continue;
            }
            if self.direction >= NUM_DIRECTIONS {
                self.direction = 0;
                self.fringe_index += 1;
                continue;
            }
            let neighbor = self.fringe[self.fringe_index]
                .neighbor(HexDirection::from_index(self.direction), 1);
            self.direction += 1;
            if !self.visited.insert(neighbor) || (self.is_opaque)(neighbor) {
                continue;
            }
            self.next_fringe.push(neighbor);
            return Some(neighbor);
        }
    }
}

impl<F> FusedIterator for Reachable<F> where F: FnMut(HexCoordinate) -> bool {}

impl HexCoordinate {
    pub fn reachable<F>(self, steps: usize, is_opaque: F) -> Reachable<F>
    where
        F: FnMut(HexCoordinate) -> bool,
    {
        Reachable::new(self, steps, is_opaque)
    }
}

#[cfg(test)]
use maplit::hashset;

#[test]
fn test_reachable_around_walls() {
    let center = HexCoordinate::from_cube(1, 1, -2).unwrap();
    let walls = hashset![
        HexCoordinate::from_cube(0, 0, 0).unwrap(),
        HexCoordinate::from_cube(1, 0, -1).unwrap(),
        HexCoordinate::from_cube(2, 0, -2).unwrap(),
    ];
    assert_eq!(
        center
            .reachable(1, |position| walls.contains(&position))
            .collect::<HashSet<_>>(),
        hashset![
            HexCoordinate::from_cube(0, 1, -1).unwrap(),
            HexCoordinate::from_cube(0, 2, -2).unwrap(),
            HexCoordinate::from_cube(1, 2, -3).unwrap(),
            HexCoordinate::from_cube(2, 1, -3).unwrap(),
        ]
    );
}

#[test]
fn test_reachable_zero_steps() {
    let center = HexCoordinate::from_axial(4, 4);
    assert_eq!(
        center.reachable(0, |_| false).collect::<Vec<_>>(),
        vec![center]
    );
}

#[test]
fn test_reachable_open_grid() {
    let center = HexCoordinate::from_axial(-1, 3);
    let cells = center.reachable(3, |_| false).collect::<Vec<_>>();
    let mut expected = center.range(3).collect::<HashSet<_>>();
    expected.remove(&center);
    assert_eq!(cells.len(), expected.len());
    assert_eq!(cells.iter().cloned().collect::<HashSet<_>>(), expected);
    for pair in cells.windows(2) {
        assert!(pair[0].distance(center) <= pair[1].distance(center));
    }
}

#[test]
fn test_reachable_enclosed() {
    let center = HexCoordinate::default();
    let walls = center.ring(2).collect::<HashSet<_>>();
    assert_eq!(
        center
            .reachable(10, |position| walls.contains(&position))
            .collect::<HashSet<_>>(),
        center.ring(1).collect::<HashSet<_>>()
    );
}

#[test]
fn test_reachable_walks_around_obstacles() {
    // A wall on the straight path forces a detour of one extra step.
    let center = HexCoordinate::default();
    let wall = center.neighbor(HexDirection::A, 1);
    let target = center.neighbor(HexDirection::A, 2);
    let is_opaque = |position: HexCoordinate| position == wall;
    assert!(!center.reachable(2, is_opaque).any(|position| position == target));
    assert!(center.reachable(3, is_opaque).any(|position| position == target));
}

#[test]
fn test_reachable_queries_each_cell_once() {
    let center = HexCoordinate::default();
    let mut queried = Vec::new();
    let count = center
        .reachable(2, |position| {
            queried.push(position);
            false
        })
        .count();
    assert_eq!(count, 18);
    assert_eq!(queried.len(), queried.iter().collect::<HashSet<_>>().len());
}
