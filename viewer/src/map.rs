use anyhow::{bail, Context};
use hexshade_core::hex::{storage::hash::HexHashStorage, HexCoordinate, Region};
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

/// Map file contents.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub radius: usize,
    #[serde(default)]
    pub walls: Vec<(isize, isize)>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Open,
    Wall,
}

/// A hexagonal map centered on the origin of the grid.
#[derive(Debug)]
pub struct World {
    region: Region,
    tiles: HexHashStorage<Tile>,
}

impl World {
    fn open(radius: usize) -> Self {
        let region = Region::new(HexCoordinate::default(), radius);
        let mut tiles = HexHashStorage::new();
        for position in region.all() {
            tiles.insert(position, Tile::Open);
        }
        Self { region, tiles }
    }

    pub fn from_config(config: &MapConfig) -> anyhow::Result<Self> {
        let mut world = Self::open(config.radius);
        for wall in config.walls.iter().map(|&wall| HexCoordinate::from(wall)) {
            match world.tiles.get_mut(wall) {
                Some(tile) => *tile = Tile::Wall,
                None => bail!(
                    "wall {} is outside of the map of radius {}",
                    wall,
                    config.radius
                ),
            }
        }
        Ok(world)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("error opening map file {:?}", path))?;
        let config: MapConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("error reading map file {:?}", path))?;
        let world = Self::from_config(&config)
            .with_context(|| format!("invalid map file {:?}", path))?;
        info!(
            "Loaded map of radius {} with {} walls from {:?}",
            world.radius(),
            world.wall_count(),
            path
        );
        Ok(world)
    }

    /// Map of `radius` where each cell but `origin` is a wall with probability
    /// `wall_density`.
    pub fn random(
        radius: usize,
        wall_density: f64,
        seed: u64,
        origin: HexCoordinate,
    ) -> anyhow::Result<Self> {
        if !(0.0..=1.0).contains(&wall_density) {
            bail!("wall density {} is not within [0, 1]", wall_density);
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = Self::open(radius);
        for position in world.region.all() {
            if position != origin && rng.gen_bool(wall_density) {
                world.tiles.insert(position, Tile::Wall);
            }
        }
        info!(
            "Generated map of radius {} with {} walls (seed {})",
            radius,
            world.wall_count(),
            seed
        );
        Ok(world)
    }

    pub fn check_origin(&self, origin: HexCoordinate) -> anyhow::Result<()> {
        match self.tile(origin) {
            None => bail!(
                "origin {} is outside of the map of radius {}",
                origin,
                self.radius()
            ),
            Some(Tile::Wall) => {
                warn!("Origin {} is a wall", origin);
                Ok(())
            }
            Some(Tile::Open) => Ok(()),
        }
    }

    pub fn center(&self) -> HexCoordinate {
        self.region.center
    }

    pub fn radius(&self) -> usize {
        self.region.radius
    }

    pub fn tile(&self, position: HexCoordinate) -> Option<Tile> {
        self.tiles.get(position).cloned()
    }

    pub fn is_wall(&self, position: HexCoordinate) -> bool {
        self.tile(position) == Some(Tile::Wall)
    }

    /// Walls and everything beyond the map edge block movement and sight.
    pub fn is_opaque(&self, position: HexCoordinate) -> bool {
        self.tile(position) != Some(Tile::Open)
    }

    pub fn wall_count(&self) -> usize {
        self.tiles.hexes().filter(|tile| **tile == Tile::Wall).count()
    }

    /// Pairs of adjacent open cells.
    pub fn passage_count(&self) -> usize {
        self.tiles
            .edges()
            .filter(|(a, b)| !self.is_opaque(*a) && !self.is_opaque(*b))
            .count()
    }
}

#[cfg(test)]
const PILLARS: &str = "
radius: 2
walls:
  - [1, 0]
  - [-1, -1]
";

#[test]
fn test_map_config_parse() {
    let config: MapConfig = serde_yaml::from_str(PILLARS).unwrap();
    assert_eq!(
        config,
        MapConfig {
            radius: 2,
            walls: vec![(1, 0), (-1, -1)],
        }
    );
    let config: MapConfig = serde_yaml::from_str("radius: 3").unwrap();
    assert!(config.walls.is_empty());
}

#[test]
fn test_world_from_config() {
    let config: MapConfig = serde_yaml::from_str(PILLARS).unwrap();
    let world = World::from_config(&config).unwrap();
    assert_eq!(world.radius(), 2);
    assert_eq!(world.wall_count(), 2);
    assert!(world.is_wall(HexCoordinate::from_axial(1, 0)));
    assert!(!world.is_wall(HexCoordinate::default()));
    assert_eq!(world.tile(HexCoordinate::from_axial(3, 0)), None);
    assert!(world.is_opaque(HexCoordinate::from_axial(3, 0)));
    assert!(!world.is_opaque(HexCoordinate::from_axial(0, 1)));
}

#[test]
fn test_world_rejects_outer_walls() {
    let config = MapConfig {
        radius: 1,
        walls: vec![(0, 0), (2, -1)],
    };
    let error = World::from_config(&config).unwrap_err();
    assert_eq!(
        error.to_string(),
        "wall (2, -1) is outside of the map of radius 1"
    );
}

#[test]
fn test_world_random() {
    let origin = HexCoordinate::from_axial(1, 1);
    let world = World::random(5, 1.0, 42, origin).unwrap();
    assert_eq!(world.wall_count(), 90);
    assert!(!world.is_opaque(origin));

    let world = World::random(5, 0.0, 42, origin).unwrap();
    assert_eq!(world.wall_count(), 0);

    assert!(World::random(5, 1.5, 42, origin).is_err());
}

#[test]
fn test_world_random_is_seeded() {
    let origin = HexCoordinate::default();
    let walls = |seed| {
        let world = World::random(6, 0.3, seed, origin).unwrap();
        world
            .region
            .all()
            .filter(|position| world.is_wall(*position))
            .collect::<Vec<_>>()
    };
    assert_eq!(walls(7), walls(7));
}

#[test]
fn test_world_check_origin() {
    let config: MapConfig = serde_yaml::from_str(PILLARS).unwrap();
    let world = World::from_config(&config).unwrap();
    assert!(world.check_origin(HexCoordinate::default()).is_ok());
    assert!(world.check_origin(HexCoordinate::from_axial(1, 0)).is_ok());
    assert!(world.check_origin(HexCoordinate::from_axial(0, 3)).is_err());
}

#[test]
fn test_world_passages() {
    let world = World::from_config(&MapConfig {
        radius: 1,
        walls: vec![],
    })
    .unwrap();
    assert_eq!(world.passage_count(), 12);
    let world = World::from_config(&MapConfig {
        radius: 1,
        walls: vec![(0, 0)],
    })
    .unwrap();
    assert_eq!(world.passage_count(), 6);
}
