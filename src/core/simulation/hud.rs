//=========================================================================
// HUD Layout
//=========================================================================
//
// Fixed screen-space layout of the three camera buttons.
//
// The renderer draws the buttons from this layout; the input system
// hit-tests clicks against the same rectangles, so a click resolves to a
// preset request within the frame it lands in.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::camera::CameraPreset;

//=== ScreenRect ==========================================================

/// Rectangle in window pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Edges are inclusive.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

//=== ViewButton ==========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewButton {
    pub preset: CameraPreset,
    pub label: &'static str,
    pub rect: ScreenRect,
}

const BUTTON_X: f32 = 550.0;
const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 30.0;

/// Camera buttons in evaluation order.
pub static VIEW_BUTTONS: [ViewButton; 3] = [
    ViewButton {
        preset: CameraPreset::Top,
        label: "Top View",
        rect: ScreenRect::new(BUTTON_X, 10.0, BUTTON_WIDTH, BUTTON_HEIGHT),
    },
    ViewButton {
        preset: CameraPreset::Side,
        label: "Side View",
        rect: ScreenRect::new(BUTTON_X, 50.0, BUTTON_WIDTH, BUTTON_HEIGHT),
    },
    ViewButton {
        preset: CameraPreset::Original,
        label: "Original View",
        rect: ScreenRect::new(BUTTON_X, 90.0, BUTTON_WIDTH, BUTTON_HEIGHT),
    },
];

/// Returns the button under the cursor, if any.
pub fn button_at(x: f32, y: f32) -> Option<&'static ViewButton> {
    VIEW_BUTTONS.iter().find(|button| button.rect.contains(x, y))
}

//=========================================================================
// Unit Tests
//=========================================================================
