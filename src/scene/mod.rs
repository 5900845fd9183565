pub mod projection;
pub mod renderer;

pub use projection::{lat_lon_to_3d, project_path, project_point, Vec3, METERS_PER_DEGREE_LAT};
pub use renderer::{LogRenderer, SceneRenderer};
