use crate::{map::World, render::MapRenderer};
use hexshade_core::hex::{HexCoordinate, HexDirection};
use itertools::Itertools;
use log::debug;

fn cell_list(cells: &[HexCoordinate]) -> String {
    cells.iter().join(" ")
}

/// Neighbors labelled `A..F` and diagonals labelled `a..f`.
pub fn directions(world: &World, origin: HexCoordinate) -> String {
    let mut renderer = MapRenderer::new(world, origin);
    let mut lines = Vec::new();
    for direction in HexDirection::ALL.iter() {
        let label = direction.to_string();
        let neighbor = origin.neighbor(*direction, 1);
        let diagonal = origin.diagonal(*direction, 1);
        lines.push(format!(
            "{}: neighbor {}, diagonal {}",
            label, neighbor, diagonal
        ));
        for (position, symbol) in label
            .chars()
            .map(|upper| (neighbor, upper))
            .chain(label.to_lowercase().chars().map(|lower| (diagonal, lower)))
        {
            renderer = renderer.label(position, symbol);
        }
    }
    lines.push(renderer.render());
    lines.join("\n")
}

pub fn ring(world: &World, origin: HexCoordinate, radius: usize) -> String {
    let cells = origin.ring(radius).collect::<Vec<_>>();
    format!(
        "ring {} around {}: {}\n{}",
        radius,
        origin,
        cell_list(&cells),
        MapRenderer::new(world, origin).highlight(cells).render()
    )
}

pub fn spiral(world: &World, origin: HexCoordinate, radius: usize) -> String {
    let cells = origin.spiral(radius).collect::<Vec<_>>();
    let numbered = cells
        .iter()
        .enumerate()
        .map(|(index, position)| format!("{}: {}", index, position))
        .join("\n");
    format!(
        "{}\n{}",
        numbered,
        MapRenderer::new(world, origin).highlight(cells).render()
    )
}

pub fn line(world: &World, origin: HexCoordinate, to: HexCoordinate) -> String {
    let cells = origin.line(to).collect::<Vec<_>>();
    let visible = origin.visible(to, |position| world.is_opaque(position));
    format!(
        "line to {}: {}\nvisible: {}\n{}",
        to,
        cell_list(&cells),
        visible,
        MapRenderer::new(world, origin).highlight(cells).render()
    )
}

pub fn reachable(world: &World, origin: HexCoordinate, steps: usize) -> String {
    let cells = origin
        .reachable(steps, |position| world.is_opaque(position))
        .collect::<Vec<_>>();
    format!(
        "{} cells reachable in {} steps\n{}",
        cells.len(),
        steps,
        MapRenderer::new(world, origin).highlight(cells).render()
    )
}

pub fn field_of_view(world: &World, origin: HexCoordinate, radius: usize) -> String {
    let mut field_of_view = origin.field_of_view(radius, |position| world.is_opaque(position));
    let cells = field_of_view.by_ref().collect::<Vec<_>>();
    debug!(
        "Field of view ended with {} shadows",
        field_of_view.shadows().len()
    );
    format!(
        "{} cells visible within {}\n{}",
        cells.len(),
        radius,
        MapRenderer::new(world, origin).show_only(cells).render()
    )
}

#[cfg(test)]
use crate::map::MapConfig;

#[cfg(test)]
fn corridor() -> World {
    World::from_config(&MapConfig {
        radius: 2,
        walls: vec![(1, 0), (-1, 1), (0, -1)],
    })
    .unwrap()
}

#[test]
fn test_directions_demo() {
    let world = World::from_config(&MapConfig {
        radius: 2,
        walls: vec![],
    })
    .unwrap();
    let output = directions(&world, HexCoordinate::default());
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "A: neighbor (1, 0), diagonal (1, 1)");
    assert_eq!(lines[4], "E: neighbor (0, -1), diagonal (1, -2)");
    assert_eq!(
        &lines[6..],
        &["  . e .", " d E F f", ". D @ A .", " c C B a", "  . b ."]
    );
}

#[test]
fn test_ring_demo() {
    let world = corridor();
    let output = ring(&world, HexCoordinate::default(), 1);
    assert!(output.starts_with("ring 1 around (0, 0): (0, -1) (1, -1) (1, 0)"));
    assert!(output.ends_with("  . . .\n . ? * .\n. * @ ? .\n . ? * .\n  . . ."));
}

#[test]
fn test_spiral_demo() {
    let world = corridor();
    let output = spiral(&world, HexCoordinate::default(), 1);
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "0: (0, 0)");
    assert_eq!(lines[1], "1: (0, -1)");
    assert_eq!(lines[6], "6: (-1, 0)");
}

#[test]
fn test_line_demo() {
    let world = corridor();
    let output = line(&world, HexCoordinate::default(), HexCoordinate::from_axial(2, 0));
    assert!(output.starts_with("line to (2, 0): (0, 0) (1, 0) (2, 0)\nvisible: false\n"));
    let output = line(&world, HexCoordinate::default(), HexCoordinate::from_axial(-2, 0));
    assert!(output.contains("visible: true"));
}

#[test]
fn test_reachable_demo() {
    let world = corridor();
    let output = reachable(&world, HexCoordinate::default(), 1);
    assert!(output.starts_with("3 cells reachable in 1 steps\n"));
}

#[test]
fn test_field_of_view_demo() {
    let world = corridor();
    let output = field_of_view(&world, HexCoordinate::default(), 0);
    assert_eq!(output, "1 cells visible within 0\n\n\n    @\n\n");
}

#[test]
fn test_field_of_view_demo_on_dense_map() {
    let origin = HexCoordinate::default();
    let world = World::random(14, 0.4, 13, origin).unwrap();
    let output = field_of_view(&world, origin, 14);
    assert!(output.contains(" cells visible within 14\n"));
}
