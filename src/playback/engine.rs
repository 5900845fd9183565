use std::time::{Duration, Instant};

use crate::core::ProcessedTrajectoryData;
use crate::playback::{PlaybackConfig, PlaybackState, PlaybackUpdate};
use crate::scene::{project_point, Vec3};

type Observer = Box<dyn FnMut(&PlaybackUpdate) + Send>;

/// Replay engine for a parsed flight log.
///
/// Poll-driven: the host calls [`tick`] once per rendered frame. A
/// "scheduled advance" is nothing but an armed deadline held in the engine
/// (`step_started` + `step_duration`), so cancelling it is clearing a
/// field; `pause`, `reset` and `set_data` do that before touching any
/// other state, which is what keeps a stale step from firing after a
/// transport change.
///
/// [`tick`]: PlaybackEngine::tick
pub struct PlaybackEngine {
    data: ProcessedTrajectoryData,
    config: PlaybackConfig,
    state: PlaybackState,
    current_index: usize,
    /// Start of the step currently in flight; None when no step is armed
    step_started: Option<Instant>,
    step_duration: Duration,
    /// Last computed on-screen position
    position: Option<Vec3>,
    observers: Vec<Observer>,
}

impl PlaybackEngine {
    pub fn new(data: ProcessedTrajectoryData, config: PlaybackConfig) -> Self {
        let position = data
            .points
            .first()
            .map(|p| project_point(p, &data.center, config.scale));

        Self {
            data,
            config,
            state: PlaybackState::Stopped,
            current_index: 0,
            step_started: None,
            step_duration: Duration::ZERO,
            position,
            observers: Vec::new(),
        }
    }

    /// Get current playback position (index into the sample sequence)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get total number of samples in the active dataset
    pub fn total_points(&self) -> usize {
        self.data.points.len()
    }

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Last computed on-screen position; None when there is no data
    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    /// The active dataset
    pub fn data(&self) -> &ProcessedTrajectoryData {
        &self.data
    }

    /// Replay progress as a percentage of the sample sequence
    pub fn progress_percent(&self) -> f64 {
        let total = self.data.points.len();
        if total <= 1 {
            0.0
        } else {
            self.current_index as f64 / (total - 1) as f64 * 100.0
        }
    }

    /// Set the time-compression multiplier
    pub fn set_speed(&mut self, speed: f64) {
        self.config.speed_multiplier = speed.clamp(0.1, 10_000.0);
        self.step_started = None; // Reset timing when speed changes
    }

    /// Get the time-compression multiplier
    pub fn speed(&self) -> f64 {
        self.config.speed_multiplier
    }

    /// Register an observer for current-point changes. The observer is
    /// immediately handed the present snapshot, so consumers of an empty
    /// or single-sample log get their readout without playback ever
    /// starting.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&PlaybackUpdate) + Send + 'static,
    {
        let mut observer: Observer = Box::new(observer);
        observer(&self.snapshot());
        self.observers.push(observer);
    }

    /// Start or resume playback. A no-op when the log is empty or the
    /// cursor is already on the last sample (no resuming past the end).
    pub fn play(&mut self) {
        let len = self.data.points.len();
        if len == 0 || self.current_index >= len - 1 {
            return;
        }

        self.state = PlaybackState::Playing;
        // the step timer arms on the next tick
        self.step_started = None;
    }

    /// Freeze at the current index. The position keeps its last
    /// interpolated value rather than snapping back to the sample.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.step_started = None;
        self.state = PlaybackState::Paused;
    }

    /// Stop and rewind to the first sample, recomputing the position for
    /// it directly (no interpolation)
    pub fn reset(&mut self) {
        self.step_started = None;
        self.state = PlaybackState::Stopped;
        self.current_index = 0;
        self.position = self.project_index(0);
        self.notify();
    }

    /// Atomically replace the dataset, e.g. after a poll reload. The
    /// cursor clamps into the new sequence and playback continues when
    /// there is still something to advance toward; timing re-derives from
    /// the new samples on the next tick.
    pub fn set_data(&mut self, data: ProcessedTrajectoryData) {
        self.step_started = None;
        self.data = data;

        let len = self.data.points.len();
        if len == 0 {
            self.current_index = 0;
            self.state = PlaybackState::Stopped;
            self.position = None;
        } else {
            self.current_index = self.current_index.min(len - 1);
            self.position = self.project_index(self.current_index);
            if self.current_index >= len - 1 && self.state == PlaybackState::Playing {
                self.state = PlaybackState::Stopped;
            }
        }
        self.notify();
    }

    /// Per-frame update (call on every display refresh while animating).
    /// Advances the index when the armed step has elapsed, otherwise
    /// recomputes the eased interpolated position between the current and
    /// next samples.
    pub fn tick(&mut self, now: Instant) {
        if self.state != PlaybackState::Playing {
            return;
        }

        let len = self.data.points.len();
        if self.current_index + 1 >= len {
            self.step_started = None;
            self.state = PlaybackState::Stopped;
            return;
        }

        let started = match self.step_started {
            Some(s) => s,
            None => {
                self.step_duration = self.step_between(self.current_index);
                self.step_started = Some(now);
                now
            }
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.step_duration {
            self.advance(now);
            return;
        }

        let progress = if self.step_duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.step_duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        // ease-out cubic: the marker decelerates into each fix
        let eased = 1.0 - (1.0 - progress).powi(3);

        let from = self.project_index(self.current_index);
        let to = self.project_index(self.current_index + 1);
        self.position = match (from, to) {
            (Some(a), Some(b)) => Some(a.lerp(b, eased)),
            _ => from,
        };
        self.notify();
    }

    /// Advance exactly one sample, auto-stopping on the last one
    fn advance(&mut self, now: Instant) {
        self.current_index += 1;
        self.position = self.project_index(self.current_index);

        if self.current_index + 1 >= self.data.points.len() {
            self.step_started = None;
            self.state = PlaybackState::Stopped;
        } else {
            self.step_duration = self.step_between(self.current_index);
            self.step_started = Some(now);
        }
        self.notify();
    }

    /// Scheduled duration for the step out of `index`: the real
    /// inter-sample time compressed by the speed multiplier, floored at
    /// `min_step`. Unparseable or non-increasing datetimes fall back to
    /// the floor.
    fn step_between(&self, index: usize) -> Duration {
        let points = &self.data.points;
        let real_delta = match (points[index].timestamp(), points[index + 1].timestamp()) {
            (Some(a), Some(b)) if b > a => (b - a).to_std().unwrap_or(Duration::ZERO),
            _ => Duration::ZERO,
        };

        let scaled = real_delta.div_f64(self.config.speed_multiplier);
        scaled.max(self.config.min_step)
    }

    fn project_index(&self, index: usize) -> Option<Vec3> {
        self.data
            .points
            .get(index)
            .map(|p| project_point(p, &self.data.center, self.config.scale))
    }

    fn snapshot(&self) -> PlaybackUpdate {
        PlaybackUpdate {
            index: self.current_index,
            total: self.data.points.len(),
            point: self.data.points.get(self.current_index).cloned(),
            position: self.position,
            is_playing: self.state == PlaybackState::Playing,
        }
    }

    fn notify(&mut self) {
        let update = self.snapshot();
        for observer in &mut self.observers {
            observer(&update);
        }
    }
}
