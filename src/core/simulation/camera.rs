//=========================================================================
// Camera
//=========================================================================
//
// Three fixed camera presets plus a continuous zoom on the active one.
//
// Selecting a preset replaces the whole active camera with a fresh copy
// of the template, including its field of view. Zoom done before the
// switch is discarded. Templates themselves are never modified.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::str::FromStr;

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Constants ===========================================================

/// Field-of-view change per unit of scroll.
pub const ZOOM_SPEED: f32 = 5.0;

/// Narrowest allowed field of view.
pub const FOVY_MIN: f32 = 1.0;

/// Widest allowed field of view.
pub const FOVY_MAX: f32 = 170.0;

/// Field of view shared by all presets.
pub const PRESET_FOVY: f32 = 10.0;

//=== Projection ==========================================================

/// Projection kind handed to the renderer. Every preset is orthographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    Orthographic,
}

//=== CameraState =========================================================

/// Active camera parameters handed to the renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    /// Field of view (or view height for orthographic projection).
    pub fovy: f32,

    pub projection: Projection,
}

impl CameraState {
    /// Zooms by `delta` scroll units and clamps to [`FOVY_MIN`, `FOVY_MAX`].
    ///
    /// Positive deltas (scrolling up) narrow the view.
    pub fn apply_zoom(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.fovy = (self.fovy - delta * ZOOM_SPEED).clamp(FOVY_MIN, FOVY_MAX);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        CameraPreset::Original.camera()
    }
}

//=== CameraPreset ========================================================

/// Named camera template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraPreset {
    #[default]
    Original,
    Top,
    Side,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 3] = [Self::Top, Self::Side, Self::Original];

    /// Resolves a preset by name; unknown names fall back to `Original`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "side" => Self::Side,
            _ => Self::Original,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Top => "top",
            Self::Side => "side",
        }
    }

    /// Fresh copy of this preset's camera.
    pub fn camera(self) -> CameraState {
        let position = match self {
            Self::Original => Vec3::new(2.0, 1.5, 2.0),
            Self::Top => Vec3::new(4.0, 50.0, 0.0),
            Self::Side => Vec3::new(0.0, 50.0, 1000.0),
        };

        CameraState {
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: PRESET_FOVY,
            projection: Projection::Orthographic,
        }
    }
}

/// Returns a fresh camera for the preset named `name`.
pub fn select_preset(name: &str) -> CameraState {
    CameraPreset::from_name(name).camera()
}

impl FromStr for CameraPreset {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for CameraPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
