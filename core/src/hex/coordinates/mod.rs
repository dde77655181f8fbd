pub mod axial;
pub mod cubic;
pub mod direction;
pub mod ring;

pub use axial::HexCoordinate;
pub use direction::{HexDirection, NUM_DIRECTIONS};
pub use ring::{RingCoordinate, RingIter};
