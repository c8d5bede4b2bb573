//=========================================================================
// Frame Intents
//=========================================================================
//
// What the player asked for during one frame, independent of which keys
// or buttons produced it.
//
// Level intents (movement) are true for every frame their input is
// held. Edge intents (jump, fly toggle, view change) are true only on
// the frame their input went down. Scroll is a per-frame scalar.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::action::{Action, Trigger};
use super::action_mapper::ActionMapper;
use super::event::MouseButton;
use super::state_tracker::StateTracker;
use crate::core::simulation::{button_at, CameraPreset};

//=== FrameIntents ========================================================

/// Input-derived requests consumed by the simulation each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameIntents {
    //--- Level-triggered -------------------------------------------------
    pub move_forward: bool,
    pub move_back: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub ascend: bool,
    pub descend: bool,

    //--- Edge-triggered --------------------------------------------------
    pub jump: bool,
    pub toggle_fly: bool,

    /// Requested camera preset, if a view button or shortcut fired.
    pub view: Option<CameraPreset>,

    //--- Continuous ------------------------------------------------------
    /// Scroll delta in lines, 0 when idle.
    pub zoom: f32,
}

impl FrameIntents {
    /// Reads the tracker through the mapper's bindings.
    ///
    /// A left-click press inside a HUD view button requests that view.
    /// When several views fire in one frame the last of Top, Side,
    /// Original wins.
    pub fn gather(tracker: &StateTracker, mapper: &ActionMapper) -> Self {
        let mut intents = Self {
            zoom: tracker.scroll_delta(),
            ..Self::default()
        };
        let mut views = ViewRequests::default();

        for (key, action) in mapper.bindings() {
            let active = match action.trigger() {
                Trigger::Level => tracker.is_key_down(key),
                Trigger::Edge => tracker.is_key_pressed(key),
            };
            if active {
                intents.activate(action, &mut views);
            }
        }

        if tracker.is_button_pressed(MouseButton::Left) {
            let (x, y) = tracker.mouse_position();
            if let Some(button) = button_at(x, y) {
                views.request(button.preset);
            }
        }

        intents.view = views.resolve();
        intents
    }

    fn activate(&mut self, action: Action, views: &mut ViewRequests) {
        match action {
            Action::MoveForward => self.move_forward = true,
            Action::MoveBack => self.move_back = true,
            Action::MoveLeft => self.move_left = true,
            Action::MoveRight => self.move_right = true,
            Action::Ascend => self.ascend = true,
            Action::Descend => self.descend = true,
            Action::Jump => self.jump = true,
            Action::ToggleFly => self.toggle_fly = true,
            Action::ViewTop => views.request(CameraPreset::Top),
            Action::ViewSide => views.request(CameraPreset::Side),
            Action::ViewOriginal => views.request(CameraPreset::Original),
        }
    }

    /// `true` when nothing was requested this frame.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

//=== ViewRequests ========================================================

/// View presses seen this frame, resolved in button order.
#[derive(Debug, Default)]
struct ViewRequests {
    top: bool,
    side: bool,
    original: bool,
}

impl ViewRequests {
    fn request(&mut self, preset: CameraPreset) {
        match preset {
            CameraPreset::Top => self.top = true,
            CameraPreset::Side => self.side = true,
            CameraPreset::Original => self.original = true,
        }
    }

    fn resolve(&self) -> Option<CameraPreset> {
        if self.original {
            Some(CameraPreset::Original)
        } else if self.side {
            Some(CameraPreset::Side)
        } else if self.top {
            Some(CameraPreset::Top)
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, KeyCode};

    //--- Test Helpers -----------------------------------------------------

    fn gather(tracker: &mut StateTracker, events: &[InputEvent]) -> FrameIntents {
        tracker.clear();
        tracker.process_events(events);
        FrameIntents::gather(tracker, &ActionMapper::with_default_bindings())
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn click_at(x: f32, y: f32) -> [InputEvent; 3] {
        [
            InputEvent::MouseMoved { x, y },
            InputEvent::MouseButtonDown { button: MouseButton::Left },
            InputEvent::MouseButtonUp { button: MouseButton::Left },
        ]
    }

    //=====================================================================
    // Level vs Edge
    //=====================================================================

    #[test]
    fn no_input_is_idle() {
        let mut tracker = StateTracker::new();
        assert!(gather(&mut tracker, &[]).is_idle());
    }

    #[test]
    fn held_movement_repeats_every_frame() {
        let mut tracker = StateTracker::new();

        assert!(gather(&mut tracker, &[key_down(KeyCode::KeyW)]).move_forward);
        assert!(gather(&mut tracker, &[]).move_forward);
        assert!(gather(&mut tracker, &[]).move_forward);
    }

    #[test]
    fn held_jump_fires_once() {
        let mut tracker = StateTracker::new();

        assert!(gather(&mut tracker, &[key_down(KeyCode::Space)]).jump);
        assert!(!gather(&mut tracker, &[]).jump);
        assert!(!gather(&mut tracker, &[]).jump);
    }

    #[test]
    fn fly_toggle_fires_once_per_press() {
        let mut tracker = StateTracker::new();

        assert!(gather(&mut tracker, &[key_down(KeyCode::KeyF)]).toggle_fly);
        assert!(!gather(&mut tracker, &[]).toggle_fly);
        assert!(!gather(&mut tracker, &[InputEvent::KeyUp { key: KeyCode::KeyF }]).toggle_fly);
        assert!(gather(&mut tracker, &[key_down(KeyCode::KeyF)]).toggle_fly);
    }

    #[test]
    fn opposite_keys_both_reported() {
        let mut tracker = StateTracker::new();
        let intents = gather(&mut tracker, &[key_down(KeyCode::KeyA), key_down(KeyCode::KeyD)]);

        assert!(intents.move_left && intents.move_right);
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut tracker = StateTracker::new();
        let intents = gather(&mut tracker, &[InputEvent::MouseWheel { delta: -2.0 }]);
        assert_eq!(intents.zoom, -2.0);
    }

    //=====================================================================
    // View Requests
    //=====================================================================

    #[test]
    fn clicking_a_button_requests_its_view() {
        let mut tracker = StateTracker::new();

        assert_eq!(gather(&mut tracker, &click_at(600.0, 20.0)).view, Some(CameraPreset::Top));
        assert_eq!(gather(&mut tracker, &click_at(600.0, 60.0)).view, Some(CameraPreset::Side));
        assert_eq!(gather(&mut tracker, &click_at(600.0, 100.0)).view, Some(CameraPreset::Original));
    }

    #[test]
    fn button_fires_on_press_not_release() {
        let mut tracker = StateTracker::new();
        let press = [
            InputEvent::MouseMoved { x: 600.0, y: 20.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Left },
        ];

        assert_eq!(gather(&mut tracker, &press).view, Some(CameraPreset::Top));
        assert_eq!(gather(&mut tracker, &[]).view, None);
        let release = [InputEvent::MouseButtonUp { button: MouseButton::Left }];
        assert_eq!(gather(&mut tracker, &release).view, None);
    }

    #[test]
    fn clicking_outside_buttons_requests_nothing() {
        let mut tracker = StateTracker::new();
        assert_eq!(gather(&mut tracker, &click_at(100.0, 100.0)).view, None);
    }

    #[test]
    fn right_click_does_not_press_buttons() {
        let mut tracker = StateTracker::new();
        let events = [
            InputEvent::MouseMoved { x: 600.0, y: 20.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Right },
        ];
        assert_eq!(gather(&mut tracker, &events).view, None);
    }

    #[test]
    fn keyboard_shortcuts_request_views() {
        let mut tracker = StateTracker::new();
        assert_eq!(gather(&mut tracker, &[key_down(KeyCode::Digit2)]).view, Some(CameraPreset::Side));
    }

    #[test]
    fn later_button_wins_when_several_fire() {
        let mut tracker = StateTracker::new();
        let mut events = vec![key_down(KeyCode::Digit3), key_down(KeyCode::Digit1)];
        events.extend(click_at(600.0, 60.0));

        assert_eq!(gather(&mut tracker, &events).view, Some(CameraPreset::Original));
    }
}
