//=========================================================================
// Input Event Types
//
// Engine-side representation of low-level input.
//
// The platform layer translates winit events into these types before
// they cross the thread boundary, so the core never sees winit.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held / pressed / released, cursor, scroll)
//         ↓
//    FrameIntents (what the player asked for this frame)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key (location, not the character produced).
///
/// Covers digits, letters, arrows and a handful of special keys. Anything
/// else arrives as `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    Space,
    Enter,
    Escape,
    Tab,

    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    MouseButtonDown { button: MouseButton },
    MouseButtonUp { button: MouseButton },

    /// Cursor position in logical window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Vertical scroll in lines; positive is away from the user.
    MouseWheel { delta: f32 },

    /// Unsupported event, ignored by the core.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_same_transition_is_equal() {
        assert_eq!(InputEvent::KeyDown { key: KeyCode::KeyW }, InputEvent::KeyDown { key: KeyCode::KeyW });
    }

    #[test]
    fn down_and_up_differ() {
        assert_ne!(InputEvent::KeyDown { key: KeyCode::KeyW }, InputEvent::KeyUp { key: KeyCode::KeyW });
    }

    #[test]
    fn different_keys_differ() {
        assert_ne!(InputEvent::KeyDown { key: KeyCode::KeyW }, InputEvent::KeyDown { key: KeyCode::KeyS });
    }

    #[test]
    fn continuous_events_compare_payload() {
        assert_ne!(InputEvent::MouseMoved { x: 1.0, y: 2.0 }, InputEvent::MouseMoved { x: 9.0, y: 9.0 });
        assert_ne!(InputEvent::MouseWheel { delta: 1.0 }, InputEvent::MouseWheel { delta: -3.0 });
        assert_eq!(InputEvent::MouseWheel { delta: 1.5 }, InputEvent::MouseWheel { delta: 1.5 });
    }
}
