use crate::map::{Tile, World};
use hexshade_core::hex::HexCoordinate;
use itertools::Itertools;
use std::{
    cmp,
    collections::{HashMap, HashSet},
};

pub const ORIGIN: char = '@';
pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const HIGHLIGHTED: char = '*';
pub const HIGHLIGHTED_WALL: char = '?';
pub const HIDDEN: char = ' ';

/// Draws a world as pointy-top ASCII art, one grid row per line.
#[derive(new, Debug)]
pub struct MapRenderer<'a> {
    world: &'a World,
    origin: HexCoordinate,
    #[new(default)]
    highlighted: HashSet<HexCoordinate>,
    #[new(default)]
    labels: HashMap<HexCoordinate, char>,
    #[new(default)]
    shown: Option<HashSet<HexCoordinate>>,
}

impl<'a> MapRenderer<'a> {
    pub fn highlight<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = HexCoordinate>,
    {
        self.highlighted.extend(cells);
        self
    }

    pub fn label(mut self, position: HexCoordinate, label: char) -> Self {
        self.labels.insert(position, label);
        self
    }

    /// Hides every cell not in `cells`.
    pub fn show_only<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = HexCoordinate>,
    {
        self.shown = Some(cells.into_iter().collect());
        self
    }

    fn symbol(&self, position: HexCoordinate) -> char {
        if let Some(label) = self.labels.get(&position) {
            return *label;
        }
        if position == self.origin {
            return ORIGIN;
        }
        if let Some(shown) = &self.shown {
            if !shown.contains(&position) {
                return HIDDEN;
            }
        }
        let highlighted = self.highlighted.contains(&position);
        match (self.world.tile(position), highlighted) {
            (Some(Tile::Wall), false) => WALL,
            (Some(Tile::Wall), true) => HIGHLIGHTED_WALL,
            (_, false) => OPEN,
            (_, true) => HIGHLIGHTED,
        }
    }

    pub fn render(&self) -> String {
        let radius = self.world.radius() as isize;
        let center = self.world.center();
        (-radius..=radius)
            .map(|r| {
                let row = (cmp::max(-radius, -r - radius)..=cmp::min(radius, -r + radius))
                    .map(|q| self.symbol(center + HexCoordinate::from_axial(q, r)))
                    .join(" ");
                format!("{}{}", " ".repeat(r.abs() as usize), row)
                    .trim_end()
                    .to_string()
            })
            .join("\n")
    }
}

#[cfg(test)]
use crate::map::MapConfig;

#[cfg(test)]
fn test_world(radius: usize, walls: Vec<(isize, isize)>) -> World {
    World::from_config(&MapConfig { radius, walls }).unwrap()
}

#[test]
fn test_render_open_map() {
    let world = test_world(1, vec![]);
    assert_eq!(
        MapRenderer::new(&world, HexCoordinate::default()).render(),
        " . .\n. @ .\n . ."
    );
}

#[test]
fn test_render_walls_and_highlights() {
    let world = test_world(1, vec![(1, 0), (0, -1)]);
    let rendered = MapRenderer::new(&world, HexCoordinate::from_axial(-1, 0))
        .highlight(vec![HexCoordinate::from_axial(1, 0), HexCoordinate::default()])
        .render();
    assert_eq!(rendered, " # .\n@ * ?\n . .");
}

#[test]
fn test_render_labels_and_hidden_cells() {
    let world = test_world(1, vec![(1, -1)]);
    let origin = HexCoordinate::default();
    let rendered = MapRenderer::new(&world, origin)
        .label(HexCoordinate::from_axial(1, 0), 'A')
        .show_only(vec![origin, HexCoordinate::from_axial(1, -1)])
        .render();
    assert_eq!(rendered, "   #\n  @ A\n");
}
