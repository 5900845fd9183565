use serde::{Deserialize, Serialize};

use crate::core::TrajectoryPoint;

/// Min/max extent along a single axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Midpoint of the axis extent
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn expand(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// Geographic bounding box of a trajectory
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat: AxisBounds,
    pub lon: AxisBounds,
    pub alt: AxisBounds,
}

/// Midpoint of the lat/lon bounding box, used as the projection origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCenter {
    pub lat: f64,
    pub lon: f64,
}

/// A parsed flight log: the ordered point sequence plus its geographic
/// bounds and center. Built once per load and never mutated; a reload
/// produces a fresh instance that replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTrajectoryData {
    /// Samples in input row order (assumed chronological)
    pub points: Vec<TrajectoryPoint>,
    /// Componentwise min/max over all points; all-zero when empty
    pub bounds: GeoBounds,
    /// Projection origin
    pub center: GeoCenter,
}

impl ProcessedTrajectoryData {
    /// Build a dataset from an already-filtered point sequence, computing
    /// bounds and center. An empty sequence yields all-zero bounds rather
    /// than +/-infinity.
    pub fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        let mut bounds = GeoBounds::default();

        if let Some(first) = points.first() {
            bounds.lat = AxisBounds { min: first.latitude, max: first.latitude };
            bounds.lon = AxisBounds { min: first.longitude, max: first.longitude };
            bounds.alt = AxisBounds { min: first.altitude, max: first.altitude };

            for p in &points[1..] {
                bounds.lat.expand(p.latitude);
                bounds.lon.expand(p.longitude);
                bounds.alt.expand(p.altitude);
            }
        }

        let center = GeoCenter {
            lat: bounds.lat.mid(),
            lon: bounds.lon.mid(),
        };

        Self { points, bounds, center }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64, alt: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            datetime: "2025-06-21T18:11:10.000000Z".to_string(),
            latitude: lat,
            longitude: lon,
            altitude: alt,
            ascent_rate: 0.0,
            speed: 0.0,
            temperature: 0.0,
            battery: 0.0,
        }
    }

    #[test]
    fn test_bounds_are_tight() {
        let data = ProcessedTrajectoryData::from_points(vec![
            point(42.1, -71.5, 120.0),
            point(42.4, -71.2, 18000.0),
            point(42.3, -71.9, 9000.0),
        ]);

        assert_eq!(data.bounds.lat.min, 42.1);
        assert_eq!(data.bounds.lat.max, 42.4);
        assert_eq!(data.bounds.lon.min, -71.9);
        assert_eq!(data.bounds.lon.max, -71.2);
        assert_eq!(data.bounds.alt.min, 120.0);
        assert_eq!(data.bounds.alt.max, 18000.0);

        for p in &data.points {
            assert!(data.bounds.lat.min <= p.latitude && p.latitude <= data.bounds.lat.max);
            assert!(data.bounds.lon.min <= p.longitude && p.longitude <= data.bounds.lon.max);
        }
    }

    #[test]
    fn test_center_is_bounds_midpoint() {
        let data = ProcessedTrajectoryData::from_points(vec![
            point(42.0, -72.0, 0.0),
            point(43.0, -71.0, 100.0),
        ]);

        assert_eq!(data.center.lat, (data.bounds.lat.min + data.bounds.lat.max) / 2.0);
        assert_eq!(data.center.lon, (data.bounds.lon.min + data.bounds.lon.max) / 2.0);
        assert_eq!(data.center.lat, 42.5);
        assert_eq!(data.center.lon, -71.5);
    }

    #[test]
    fn test_empty_dataset_has_zero_bounds() {
        let data = ProcessedTrajectoryData::from_points(Vec::new());
        assert!(data.is_empty());
        assert_eq!(data.bounds, GeoBounds::default());
        assert_eq!(data.center, GeoCenter::default());
    }

    #[test]
    fn test_single_point_bounds_collapse_to_it() {
        let data = ProcessedTrajectoryData::from_points(vec![point(42.3, -71.1, 500.0)]);
        assert_eq!(data.bounds.lat.min, 42.3);
        assert_eq!(data.bounds.lat.max, 42.3);
        assert_eq!(data.center.lat, 42.3);
        assert_eq!(data.center.lon, -71.1);
    }
}
