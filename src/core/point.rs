use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// One observed sample of the flight, as reported by the ground station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Sample timestamp as reported in the log (ISO-8601-like, e.g.
    /// "2025-06-21T18:11:10.000000Z"). Kept verbatim; see [`timestamp`].
    ///
    /// [`timestamp`]: TrajectoryPoint::timestamp
    pub datetime: String,

    /// Latitude in signed degrees
    pub latitude: f64,

    /// Longitude in signed degrees
    pub longitude: f64,

    /// Altitude in meters above reference
    pub altitude: f64,

    /// Instantaneous vertical speed in m/s
    pub ascent_rate: f64,

    /// Ground speed
    pub speed: f64,

    /// Internal payload temperature
    pub temperature: f64,

    /// Battery voltage
    pub battery: f64,
}

impl TrajectoryPoint {
    /// Parse the sample datetime. Returns None when the field does not
    /// parse as RFC 3339; callers fall back to their own timing floor.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.datetime.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether this sample carries a usable position fix. A zero coordinate
    /// means the field was missing or failed to parse upstream, so a point
    /// is only considered valid when both coordinates are non-zero.
    pub fn has_fix(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_at(lat: f64, lon: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            datetime: "2025-06-21T18:11:10.000000Z".to_string(),
            latitude: lat,
            longitude: lon,
            altitude: 0.0,
            ascent_rate: 0.0,
            speed: 0.0,
            temperature: 0.0,
            battery: 0.0,
        }
    }

    #[test]
    fn test_timestamp_parses_ground_station_format() {
        let p = point_at(42.3, -71.1);
        let ts = p.timestamp().unwrap();
        assert_eq!(ts.timestamp(), 1750529470);
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        let mut p = point_at(42.3, -71.1);
        p.datetime = "not-a-date".to_string();
        assert!(p.timestamp().is_none());
    }

    #[test]
    fn test_has_fix_requires_both_coordinates() {
        assert!(point_at(42.3, -71.1).has_fix());
        assert!(!point_at(0.0, -71.1).has_fix());
        assert!(!point_at(42.3, 0.0).has_fix());
        assert!(!point_at(0.0, 0.0).has_fix());
    }
}
