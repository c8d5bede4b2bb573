//=========================================================================
// Log Backend
//=========================================================================
//
// Default render backend: writes frames to the log instead of a screen.
//
// - `debug`: a compact status line, only when it changes
// - `trace`: the full HUD diagnostics every frame
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, log_enabled, trace, Level};

//=== Internal Dependencies ===============================================

use super::FrameSnapshot;

//=== LogBackend ==========================================================

/// Logs each presented frame under the `render` target.
#[derive(Debug, Default)]
pub struct LogBackend {
    last_status: Option<String>,
}

impl LogBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line summary of a frame's player, contact and camera state.
    pub fn status_line(frame: &FrameSnapshot) -> String {
        format!(
            "mode={:?} contact={} camera={} fovy={}",
            frame.vertical_mode, frame.colliding, frame.preset, frame.camera.fovy
        )
    }
}

impl super::RenderBackend for LogBackend {
    fn present(&mut self, frame: &FrameSnapshot) {
        let status = Self::status_line(frame);
        if self.last_status.as_deref() != Some(status.as_str()) {
            debug!(target: "render", "[frame {}] {}", frame.frame, status);
            self.last_status = Some(status);
        }

        if log_enabled!(target: "render", Level::Trace) {
            trace!(target: "render", "{}", frame.diagnostics.flying);
            trace!(target: "render", "Player: {}", frame.diagnostics.player);
            for (index, report) in frame.diagnostics.obstacles.iter().enumerate() {
                trace!(target: "render", "Pike {}: {}", index + 1, report);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::FrameIntents;
    use crate::core::render::RenderBackend;
    use crate::core::simulation::Simulation;

    #[test]
    fn status_line_describes_frame() {
        let sim = Simulation::new();
        let line = LogBackend::status_line(&sim.snapshot());

        assert_eq!(line, "mode=Grounded contact=false camera=original fovy=10");
    }

    #[test]
    fn remembers_last_status() {
        let mut backend = LogBackend::new();
        let mut sim = Simulation::new();

        backend.present(&sim.snapshot());
        let first = backend.last_status.clone();

        sim.step(&FrameIntents { toggle_fly: true, ..FrameIntents::default() });
        backend.present(&sim.snapshot());

        assert_ne!(backend.last_status, first);
        assert!(backend.last_status.as_deref().unwrap().contains("Flying"));
    }
}
