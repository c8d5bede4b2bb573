//=========================================================================
// Render Interface
//=========================================================================
//
// Contract between the simulation and whatever draws it.
//
// Architecture:
//   Simulation::snapshot() → FrameSnapshot → RenderBackend::present()
//
// The core never issues draw calls itself. A backend receives one
// immutable snapshot per tick on the logic thread and is free to draw,
// log, record or forward it.
//
//=========================================================================

//=== Module Declarations =================================================

mod color;
mod diagnostics;
mod log_backend;

//=== Public API ==========================================================

pub use color::Color;
pub use diagnostics::{obstacle_report, player_report, Diagnostics};
pub use log_backend::LogBackend;

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};

//=== Internal Dependencies ===============================================

use crate::core::simulation::{CameraPreset, CameraState, Obstacle, VerticalMode, ViewButton, OBSTACLE_COUNT};

//=== FrameSnapshot =======================================================

/// Read-only view of one simulated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Number of completed simulation frames.
    pub frame: u64,

    pub player_position: Vec3,
    pub player_size: Vec3,
    pub player_color: Color,
    pub vertical_mode: VerticalMode,
    pub colliding: bool,

    /// Ground patch under the player (x/z extent of the player box).
    pub ground_size: Vec2,

    pub obstacles: [Obstacle; OBSTACLE_COUNT],
    pub camera: CameraState,
    pub preset: CameraPreset,

    /// Button layout; clicks inside these rects come back as view requests.
    pub buttons: &'static [ViewButton],

    pub diagnostics: Diagnostics,
}

//=== RenderBackend =======================================================

/// Consumer of simulated frames.
///
/// Runs on the logic thread, hence `Send`.
pub trait RenderBackend: Send {
    /// Called once per tick with the frame just simulated.
    fn present(&mut self, frame: &FrameSnapshot);
}

impl<F> RenderBackend for F
where
    F: FnMut(&FrameSnapshot) + Send,
{
    fn present(&mut self, frame: &FrameSnapshot) {
        self(frame)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulation::Simulation;

    #[test]
    fn closures_are_backends() {
        let mut seen = Vec::new();
        {
            let mut backend = |frame: &FrameSnapshot| seen.push(frame.frame);
            let sim = Simulation::new();
            backend.present(&sim.snapshot());
            backend.present(&sim.snapshot());
        }
        assert_eq!(seen, vec![0, 0]);
    }

    #[test]
    fn backend_is_object_safe() {
        let mut backend: Box<dyn RenderBackend> = Box::new(LogBackend::new());
        backend.present(&Simulation::new().snapshot());
    }
}
