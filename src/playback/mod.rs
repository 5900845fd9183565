pub mod engine;

pub use engine::PlaybackEngine;

use std::time::Duration;

use crate::core::TrajectoryPoint;
use crate::scene::Vec3;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Playback configuration
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Real flight time compression: 100.0 replays an hour of flight in 36
    /// seconds
    pub speed_multiplier: f64,
    /// Floor on the scheduled step so duplicate or near-duplicate sample
    /// timestamps cannot cause rapid-fire advancement
    pub min_step: Duration,
    /// Scene scale passed through to the projection
    pub scale: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 100.0,
            min_step: Duration::from_millis(20),
            scale: 1.0,
        }
    }
}

/// Snapshot delivered to observers on every index or position change
#[derive(Debug, Clone)]
pub struct PlaybackUpdate {
    /// Index of the current sample
    pub index: usize,
    /// Total samples in the active dataset
    pub total: usize,
    /// The current sample; None when the dataset is empty
    pub point: Option<TrajectoryPoint>,
    /// On-screen position, possibly interpolated between samples
    pub position: Option<Vec3>,
    pub is_playing: bool,
}
