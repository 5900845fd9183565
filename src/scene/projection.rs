use serde::{Deserialize, Serialize};

use crate::core::{GeoCenter, ProcessedTrajectoryData, TrajectoryPoint};

/// Meters per degree of latitude (flat-earth approximation)
pub const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// A point in the renderer's scene frame: Y is up, Z is depth, north maps
/// toward -Z
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation toward `other` by `t` in [0, 1]
    pub fn lerp(self, other: Vec3, t: f64) -> Vec3 {
        Vec3 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Project a geographic position into the local scene frame.
///
/// Equirectangular approximation around the dataset center: longitude
/// degrees shrink by the cosine of the reference latitude, altitude maps
/// straight to Y. Good to well under a percent over the tens of kilometers
/// a balloon flight covers, which is all the visualization needs.
pub fn lat_lon_to_3d(
    lat: f64,
    lon: f64,
    alt: f64,
    center_lat: f64,
    center_lon: f64,
    scale: f64,
) -> Vec3 {
    let d_lat = (lat - center_lat) * METERS_PER_DEGREE_LAT;
    let d_lon = (lon - center_lon) * METERS_PER_DEGREE_LAT * center_lat.to_radians().cos();

    Vec3 {
        x: d_lon * scale,
        y: alt * scale,
        // sign flip: north is -Z in the scene frame
        z: -d_lat * scale,
    }
}

/// Project one sample against the dataset center
pub fn project_point(point: &TrajectoryPoint, center: &GeoCenter, scale: f64) -> Vec3 {
    lat_lon_to_3d(
        point.latitude,
        point.longitude,
        point.altitude,
        center.lat,
        center.lon,
        scale,
    )
}

/// Project the whole trajectory into a scene-frame path
pub fn project_path(data: &ProcessedTrajectoryData, scale: f64) -> Vec<Vec3> {
    data.points
        .iter()
        .map(|p| project_point(p, &data.center, scale))
        .collect()
}
