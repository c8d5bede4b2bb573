//=========================================================================
// Input System
//
// High-level interface for input handling within the engine.
// Wraps the low-level `StateTracker` and the key bindings, and turns each
// frame's raw events into `FrameIntents` for the simulation.
//
// Responsibilities:
// - Digest every input batch received during the current frame
// - Keep held/pressed/released state across frame boundaries
// - Resolve bindings and HUD clicks into per-frame intents
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator on the
// logic thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod action_mapper;
pub mod event;
pub mod intents;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, Trigger};
pub use action_mapper::ActionMapper;
pub use event::{InputEvent, KeyCode, MouseButton};
pub use intents::FrameIntents;
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Owns the input state and bindings; produces one `FrameIntents` per tick.
#[derive(Debug)]
pub struct InputSystem {
    tracker: StateTracker,
    mapper: ActionMapper,
    intents: FrameIntents,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with the default key layout.
    pub fn new() -> Self {
        Self::with_mapper(ActionMapper::with_default_bindings())
    }

    pub fn with_mapper(mapper: ActionMapper) -> Self {
        Self {
            tracker: StateTracker::new(),
            mapper,
            intents: FrameIntents::default(),
        }
    }

    //--- process_frame() --------------------------------------------------
    //
    // Consumes all input batches received during the current frame and
    // returns the intents they add up to.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> &FrameIntents {
        self.tracker.clear();
        for batch in batches {
            self.tracker.process_events(batch);
        }

        self.intents = FrameIntents::gather(&self.tracker, &self.mapper);

        if !self.intents.is_idle() {
            trace!(target: "core::input", "Intents: {:?}", self.intents);
        }

        &self.intents
    }

    //--- Query Methods ----------------------------------------------------

    /// Intents produced by the last `process_frame`.
    pub fn intents(&self) -> &FrameIntents {
        &self.intents
    }

    /// Raw key/button/cursor state.
    pub fn state(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn mapper(&self) -> &ActionMapper {
        &self.mapper
    }

    /// Mutable access for rebinding keys.
    pub fn mapper_mut(&mut self) -> &mut ActionMapper {
        &mut self.mapper
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn events_across_batches_are_combined() {
        let mut system = InputSystem::new();

        let intents = *system.process_frame(&[
            vec![key_down(KeyCode::KeyW)],
            vec![InputEvent::MouseWheel { delta: 1.0 }],
        ]);

        assert!(intents.move_forward);
        assert_eq!(intents.zoom, 1.0);
    }

    #[test]
    fn held_state_survives_empty_frames() {
        let mut system = InputSystem::new();
        system.process_frame(&[vec![key_down(KeyCode::KeyD)]]);

        let intents = *system.process_frame(&[]);

        assert!(intents.move_right);
        assert!(system.state().is_key_down(KeyCode::KeyD));
    }

    #[test]
    fn release_stops_movement() {
        let mut system = InputSystem::new();
        system.process_frame(&[vec![key_down(KeyCode::KeyS)]]);

        let intents = *system.process_frame(&[vec![key_up(KeyCode::KeyS)]]);

        assert!(!intents.move_back);
    }

    #[test]
    fn rebinding_changes_intents() {
        let mut system = InputSystem::new();
        system.mapper_mut().unbind_key(KeyCode::Space);
        system.mapper_mut().bind_key(KeyCode::KeyJ, Action::Jump);

        assert!(!system.process_frame(&[vec![key_down(KeyCode::Space)]]).jump);
        assert!(system.process_frame(&[vec![key_down(KeyCode::KeyJ)]]).jump);
    }

    #[test]
    fn last_intents_are_kept() {
        let mut system = InputSystem::new();
        system.process_frame(&[vec![key_down(KeyCode::KeyF)]]);

        assert!(system.intents().toggle_fly);
    }
}
