pub mod point;
pub mod trajectory;

pub use point::TrajectoryPoint;
pub use trajectory::{AxisBounds, GeoBounds, GeoCenter, ProcessedTrajectoryData};
