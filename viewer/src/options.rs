use anyhow::{anyhow, Context};
use hexshade_core::hex::HexCoordinate;
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;

/// Axial coordinate given as `q,r` on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Axial(pub HexCoordinate);

impl FromStr for Axial {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (q, r) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected `q,r`, got `{}`", s))?;
        let q = q
            .trim()
            .parse()
            .with_context(|| format!("invalid q in `{}`", s))?;
        let r = r
            .trim()
            .parse()
            .with_context(|| format!("invalid r in `{}`", s))?;
        Ok(Self(HexCoordinate::from_axial(q, r)))
    }
}

#[derive(StructOpt, Debug, PartialEq)]
pub enum DemoOption {
    /// Labels the neighbors (A to F) and diagonals (a to f) of the origin
    #[structopt(name = "directions")]
    Directions,
    #[structopt(name = "ring")]
    Ring {
        #[structopt(long, default_value = "2")]
        radius: usize,
    },
    /// Numbers the cells around the origin, ring by ring
    #[structopt(name = "spiral")]
    Spiral {
        #[structopt(long, default_value = "2")]
        radius: usize,
    },
    /// Draws the line from the origin and tells whether its end is visible
    #[structopt(name = "line")]
    Line {
        #[structopt(long, allow_hyphen_values = true)]
        to: Axial,
    },
    #[structopt(name = "reachable")]
    Reachable {
        #[structopt(long, default_value = "3")]
        steps: usize,
    },
    #[structopt(name = "field-of-view")]
    FieldOfView {
        #[structopt(long, default_value = "5")]
        radius: usize,
    },
}

/// Terminal viewer for hex grid algorithms.
#[derive(StructOpt, Debug)]
#[structopt(name = "hexshade")]
pub struct Options {
    /// YAML map file, a random map is generated when absent
    #[structopt(long)]
    pub map: Option<PathBuf>,

    /// Radius of the random map
    #[structopt(long, default_value = "6")]
    pub size: usize,

    /// Probability for a cell of the random map to be a wall
    #[structopt(long, default_value = "0.2")]
    pub wall_density: f64,

    #[structopt(long, default_value = "0")]
    pub seed: u64,

    /// YAML logger configuration, `config/logger.yaml` by default
    #[structopt(long)]
    pub logger_config: Option<PathBuf>,

    #[structopt(long, default_value = "0,0", allow_hyphen_values = true)]
    pub origin: Axial,

    #[structopt(subcommand)]
    pub demo: DemoOption,
}

#[test]
fn test_axial_parse() {
    assert_eq!(
        "3,-2".parse::<Axial>().unwrap(),
        Axial(HexCoordinate::from_axial(3, -2))
    );
    assert_eq!(
        " -1 , 4".parse::<Axial>().unwrap(),
        Axial(HexCoordinate::from_axial(-1, 4))
    );
    assert!("3".parse::<Axial>().is_err());
    assert!("3,x".parse::<Axial>().is_err());
}

#[test]
fn test_options_defaults() {
    let options = Options::from_iter_safe(&["hexshade", "directions"]).unwrap();
    assert_eq!(options.map, None);
    assert_eq!(options.size, 6);
    assert_eq!(options.seed, 0);
    assert_eq!(options.origin, Axial(HexCoordinate::default()));
    assert_eq!(options.demo, DemoOption::Directions);
}

#[test]
fn test_options_parse() {
    let options = Options::from_iter_safe(&[
        "hexshade",
        "--map",
        "maps/pillars.yaml",
        "--origin=-1,2",
        "line",
        "--to=-3,1",
    ])
    .unwrap();
    assert_eq!(options.map, Some(PathBuf::from("maps/pillars.yaml")));
    assert_eq!(options.origin, Axial(HexCoordinate::from_axial(-1, 2)));
    assert_eq!(
        options.demo,
        DemoOption::Line {
            to: Axial(HexCoordinate::from_axial(-3, 1))
        }
    );

    let options =
        Options::from_iter_safe(&["hexshade", "--seed", "12", "field-of-view", "--radius", "4"])
            .unwrap();
    assert_eq!(options.seed, 12);
    assert_eq!(options.demo, DemoOption::FieldOfView { radius: 4 });

    assert!(Options::from_iter_safe(&["hexshade"]).is_err());
    assert!(Options::from_iter_safe(&["hexshade", "ring", "--radius", "-1"]).is_err());
}
