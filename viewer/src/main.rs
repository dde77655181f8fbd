#[macro_use]
extern crate derive_new;

pub mod demo;
pub mod map;
pub mod options;
pub mod render;

use crate::{
    map::World,
    options::{DemoOption, Options},
};
use anyhow::{bail, Context};
use log::{info, LevelFilter};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::PathBuf};
use structopt::StructOpt;

const LOGGER_CONFIG: &str = "config/logger.yaml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
struct LoggerConfig {
    #[serde(default = "default_level")]
    level: LevelFilter,
}

fn default_level() -> LevelFilter {
    LevelFilter::Warn
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn read_logger_config(logger_config_path: Option<PathBuf>) -> anyhow::Result<LoggerConfig> {
    let is_user_specified = logger_config_path.is_some();

    // If the user specified a logger configuration path, use that.
    // Otherwise fallback to a default.
    let logger_config_path = logger_config_path.unwrap_or_else(|| PathBuf::from(LOGGER_CONFIG));

    if logger_config_path.exists() {
        let logger_file = File::open(&logger_config_path).with_context(|| {
            format!(
                "Failed to open logger configuration file: `{}`.",
                logger_config_path.display()
            )
        })?;
        let mut logger_file_reader = BufReader::new(logger_file);
        let logger_config = serde_yaml::from_reader(&mut logger_file_reader).with_context(|| {
            format!(
                "Failed to read logger configuration file: `{}`.",
                logger_config_path.display()
            )
        })?;
        Ok(logger_config)
    } else if is_user_specified {
        bail!(
            "Failed to read logger configuration file: `{}`.",
            logger_config_path.display()
        )
    } else {
        Ok(LoggerConfig::default())
    }
}

fn logger_setup(logger_config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let logger_config = read_logger_config(logger_config_path)?;
    env_logger::Builder::new()
        .filter_level(logger_config.level)
        .parse_env("RUST_LOG")
        .try_init()?;
    Ok(())
}

fn run(options: Options) -> anyhow::Result<String> {
    let origin = options.origin.0;
    let world = match &options.map {
        Some(path) => World::load(path)?,
        None => World::random(options.size, options.wall_density, options.seed, origin)?,
    };
    world.check_origin(origin)?;
    info!(
        "Map has {} open passages between adjacent cells",
        world.passage_count()
    );

    Ok(match options.demo {
        DemoOption::Directions => demo::directions(&world, origin),
        DemoOption::Ring { radius } => demo::ring(&world, origin, radius),
        DemoOption::Spiral { radius } => demo::spiral(&world, origin, radius),
        DemoOption::Line { to } => demo::line(&world, origin, to.0),
        DemoOption::Reachable { steps } => demo::reachable(&world, origin, steps),
        DemoOption::FieldOfView { radius } => demo::field_of_view(&world, origin, radius),
    })
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();

    logger_setup(options.logger_config.clone())?;

    println!("{}", run(options)?);

    Ok(())
}

#[cfg(test)]
use std::{fs, io::Write, path::Path};

/// File in the temp directory, removed on drop.
#[cfg(test)]
struct TempFile(PathBuf);

#[cfg(test)]
impl TempFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("hexshade-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn test_temp_file_is_removed() {
    let file = TempFile::new("removed.yaml", "level: info\n");
    let path = file.path().to_path_buf();
    assert!(path.exists());
    drop(file);
    assert!(!path.exists());
}

#[test]
fn test_logger_config() {
    let file = TempFile::new("logger.yaml", "level: debug\n");
    assert_eq!(
        read_logger_config(Some(file.path().to_path_buf())).unwrap(),
        LoggerConfig {
            level: LevelFilter::Debug
        }
    );
    let file = TempFile::new("empty-logger.yaml", "{}\n");
    assert_eq!(
        read_logger_config(Some(file.path().to_path_buf())).unwrap(),
        LoggerConfig::default()
    );
}

#[test]
fn test_logger_config_missing() {
    let path = std::env::temp_dir().join("hexshade-does-not-exist.yaml");
    assert!(read_logger_config(Some(path)).is_err());
}

#[test]
fn test_run_with_map_file() {
    let file = TempFile::new("map.yaml", "radius: 3\nwalls:\n  - [1, 0]\n");
    let options = Options::from_iter_safe(&[
        "hexshade",
        "--map",
        file.path().to_str().unwrap(),
        "reachable",
        "--steps",
        "1",
    ])
    .unwrap();
    assert!(run(options)
        .unwrap()
        .starts_with("5 cells reachable in 1 steps\n"));
}

#[test]
fn test_run_rejects_outer_origin() {
    let options =
        Options::from_iter_safe(&["hexshade", "--size", "2", "--origin=3,0", "directions"])
            .unwrap();
    assert!(run(options).is_err());
}
