//=========================================================================
// Player
//=========================================================================
//
// The box avatar and its per-frame vertical state machine.
//
// Architecture:
//   FrameIntents → update() → position / VerticalMode
//
// Kinematics are fixed-increment stepping: every active intent moves the
// player by a constant amount per frame. Nothing is integrated from time
// deltas, and diagonal movement is not normalized.
//
// Vertical phases run in a fixed order every frame:
//   1. jump intent        Grounded → Jumping (ignored while flying)
//   2. rise               Jumping: +JUMP_STEP until JUMP_CEIL, then Grounded
//   3. descent            Grounded above JUMP_BASE: -JUMP_STEP, clamped
//   4. fly toggle         Flying ⇄ Grounded, y reset to 0
//   5. flight             Flying: ascend/descend at MOVE_STEP, unbounded
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::debug;

//=== Internal Dependencies ===============================================

use super::geometry::Aabb;
use crate::core::input::FrameIntents;
use crate::core::render::Color;

//=== Constants ===========================================================

pub const DISPLACEMENT: f32 = 0.2;
pub const SPEED: f32 = 0.5;

/// Horizontal and flight displacement per frame.
pub const MOVE_STEP: f32 = DISPLACEMENT * SPEED;

pub const JUMP_DISPLACEMENT: f32 = 0.5;
pub const JUMP_SPEED: f32 = 0.25;

/// Vertical displacement per frame while rising or falling.
pub const JUMP_STEP: f32 = JUMP_DISPLACEMENT * JUMP_SPEED;

/// Ground height.
pub const JUMP_BASE: f32 = 0.0;

/// Height at which a jump stops rising.
pub const JUMP_CEIL: f32 = 2.5;

/// Edge length of the avatar cube on every axis.
pub const PLAYER_SIZE: f32 = 1.0;

/// Fraction of the cube size used as the collision half-extent.
pub const PLAYER_HALF_EXTENT_SCALE: f32 = 0.5;

//=== VerticalMode ========================================================

/// Mutually exclusive vertical motion regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalMode {
    /// On the ground, or falling back to it.
    #[default]
    Grounded,

    /// Rising towards [`JUMP_CEIL`].
    Jumping,

    /// Free vertical control, no floor or ceiling.
    Flying,
}

//=== ColorState ==========================================================

/// Visual contact feedback derived every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorState {
    #[default]
    Idle,
    Danger,
}

impl ColorState {
    pub fn from_contact(contact: bool) -> Self {
        if contact {
            Self::Danger
        } else {
            Self::Idle
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Idle => Color::GREEN,
            Self::Danger => Color::RED,
        }
    }
}

//=== Player ==============================================================

/// The single controllable avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center of the avatar cube.
    pub position: Vec3,

    /// Cube edge lengths (width, height, length).
    size: Vec3,

    mode: VerticalMode,
    color_state: ColorState,
}

impl Player {
    /// Creates a grounded player at the origin.
    pub fn new() -> Self {
        Self::at(Vec3::ZERO)
    }

    /// Creates a grounded player at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            size: Vec3::splat(PLAYER_SIZE),
            mode: VerticalMode::Grounded,
            color_state: ColorState::Idle,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn mode(&self) -> VerticalMode {
        self.mode
    }

    pub fn is_flying(&self) -> bool {
        self.mode == VerticalMode::Flying
    }

    pub fn color_state(&self) -> ColorState {
        self.color_state
    }

    pub(crate) fn set_color_state(&mut self, state: ColorState) {
        self.color_state = state;
    }

    /// Collision box, recomputed from the current position.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.size * PLAYER_HALF_EXTENT_SCALE)
    }

    //--- update() ---------------------------------------------------------

    /// Advances the player by one frame.
    pub fn update(&mut self, intents: &FrameIntents) {
        let before = self.mode;

        self.apply_jump_intent(intents.jump);
        self.rise();
        self.descend();
        self.apply_fly_toggle(intents.toggle_fly);
        self.fly(intents);
        self.walk(intents);

        if self.mode != before {
            debug!(target: "simulation", "Vertical mode {:?} -> {:?} at y={}", before, self.mode, self.position.y);
        }
    }

    //--- Vertical Phases --------------------------------------------------

    fn apply_jump_intent(&mut self, jump: bool) {
        if jump && self.mode == VerticalMode::Grounded {
            self.mode = VerticalMode::Jumping;
        }
    }

    fn rise(&mut self) {
        if self.mode != VerticalMode::Jumping {
            return;
        }

        if self.position.y < JUMP_CEIL {
            self.position.y += JUMP_STEP;
        } else {
            self.mode = VerticalMode::Grounded;
        }
    }

    fn descend(&mut self) {
        if self.mode == VerticalMode::Grounded && self.position.y > JUMP_BASE {
            self.position.y = (self.position.y - JUMP_STEP).max(JUMP_BASE);
        }
    }

    fn apply_fly_toggle(&mut self, toggle: bool) {
        if !toggle {
            return;
        }

        self.mode = match self.mode {
            VerticalMode::Flying => VerticalMode::Grounded,
            VerticalMode::Grounded | VerticalMode::Jumping => VerticalMode::Flying,
        };
        self.position.y = JUMP_BASE;
    }

    fn fly(&mut self, intents: &FrameIntents) {
        if self.mode == VerticalMode::Flying {
            self.position.y += axis(intents.ascend, intents.descend) * MOVE_STEP;
        }
    }

    //--- Horizontal Movement ----------------------------------------------

    /// Forward is -x, left is +z. Opposite intents cancel exactly.
    fn walk(&mut self, intents: &FrameIntents) {
        self.position.x += axis(intents.move_back, intents.move_forward) * MOVE_STEP;
        self.position.z += axis(intents.move_left, intents.move_right) * MOVE_STEP;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Net direction of a pair of opposing level intents: +1, -1 or 0.
#[inline]
fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
