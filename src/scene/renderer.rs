use tracing::debug;

use crate::scene::Vec3;

/// Sink for the drawable scene state: the full projected flight path plus
/// the marker for the current (possibly interpolated) position. Rendering
/// backends implement this; the engine and CLI only ever talk to the trait.
pub trait SceneRenderer {
    /// Replace the drawn flight path
    fn set_path(&mut self, path: &[Vec3]);

    /// Move the current-position marker; None clears it (no data yet)
    fn set_current_position(&mut self, position: Option<Vec3>);
}

/// Headless renderer that traces scene updates, used by the CLI replay
#[derive(Debug, Default)]
pub struct LogRenderer {
    path_len: usize,
    position: Option<Vec3>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<Vec3> {
        self.position
    }
}

impl SceneRenderer for LogRenderer {
    fn set_path(&mut self, path: &[Vec3]) {
        self.path_len = path.len();
        debug!(points = path.len(), "scene path updated");
    }

    fn set_current_position(&mut self, position: Option<Vec3>) {
        self.position = position;
        if let Some(p) = position {
            debug!(x = p.x, y = p.y, z = p.z, "marker moved");
        }
    }
}
