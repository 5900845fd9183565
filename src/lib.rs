//! SkyTrace: trajectory replay engine for the SkyCell balloon project.
//!
//! Loads a ground-station CSV flight log, projects the position fixes into
//! a local Cartesian scene frame, and replays the flight at a configurable
//! time compression with eased interpolation between fixes.

pub mod core;
pub mod input;
pub mod playback;
pub mod scene;
pub mod settings;

pub use self::core::{AxisBounds, GeoBounds, GeoCenter, ProcessedTrajectoryData, TrajectoryPoint};
pub use input::{load_trajectory, parse_trajectory, TrajectorySource};
pub use playback::{PlaybackConfig, PlaybackEngine, PlaybackState, PlaybackUpdate};
pub use scene::{lat_lon_to_3d, project_path, SceneRenderer, Vec3};
