pub mod coordinates;
pub mod field_of_view;
pub mod line;
pub mod range;
pub mod reachable;
pub mod region;
pub mod storage;

pub use coordinates::{HexCoordinate, HexDirection, RingCoordinate};
pub use field_of_view::FieldOfView;
pub use region::Region;
