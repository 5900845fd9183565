pub mod csv;
pub mod source;

pub use csv::parse_trajectory;
pub use source::{source_for, FileSource, HttpSource, SourceError, TrajectorySource};

use tracing::{debug, warn};

use crate::core::ProcessedTrajectoryData;

/// Fetch and parse the flight log from a source.
///
/// Fetch failures degrade to an empty dataset rather than propagating: the
/// caller always gets something displayable, and a polling caller simply
/// tries again next interval. The failure is logged as a side effect.
pub async fn load_trajectory(source: &dyn TrajectorySource) -> ProcessedTrajectoryData {
    match source.fetch_raw().await {
        Ok(text) => {
            let data = parse_trajectory(&text);
            debug!(
                source = %source.describe(),
                points = data.len(),
                "parsed flight log"
            );
            data
        }
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "failed to fetch flight log");
            ProcessedTrajectoryData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticSource(&'static str);

    #[async_trait]
    impl TrajectorySource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch_raw(&self) -> Result<String, SourceError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TrajectorySource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch_raw(&self) -> Result<String, SourceError> {
            Err(SourceError::Io {
                path: "failing".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "unreachable"),
            })
        }
    }

    #[tokio::test]
    async fn test_load_trajectory_parses_fetched_text() {
        let source = StaticSource(
            "datetime,payload_callsign,lat,lon,alt,ascent_rate,batt\n\
             2025-06-21T18:11:10.000000Z,APEX-2-R,42.3,-71.1,100,5.1,3.9",
        );

        let data = load_trajectory(&source).await;
        assert_eq!(data.len(), 1);
        assert_eq!(data.points[0].latitude, 42.3);
    }

    #[tokio::test]
    async fn test_load_trajectory_degrades_fetch_failure_to_empty() {
        let data = load_trajectory(&FailingSource).await;
        assert!(data.is_empty());
        assert_eq!(data.bounds.lat.max, 0.0);
        assert_eq!(data.center.lon, 0.0);
    }
}
