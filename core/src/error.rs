use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Invalid cube coordinates x = {x}, y = {y}, z = {z}: components must sum to zero")]
    InvalidCube { x: isize, y: isize, z: isize },

    #[error("Angle {0} is not a finite number")]
    NonFiniteAngle(f64),
}

pub type Result<T> = std::result::Result<T, HexError>;
