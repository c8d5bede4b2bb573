//=========================================================================
// Simulation
//
// Owns every piece of mutable arena state and advances it one frame at a
// time from the frame's input intents.
//
// Responsibilities:
// - Advance the player state machine
// - Re-evaluate pike contact and derive the player color
// - Apply zoom and camera preset requests
// - Produce a read-only snapshot for the render backend
//
// Notes:
// The simulation is owned by the core orchestrator and only ever touched
// from the logic thread. Nothing here blocks or fails; out-of-range
// values are clamped.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod hud;
pub mod obstacle;
pub mod player;

//=== Public API ==========================================================

pub use camera::{select_preset, CameraPreset, CameraState, Projection};
pub use collision::Contact;
pub use geometry::Aabb;
pub use hud::{button_at, ScreenRect, ViewButton, VIEW_BUTTONS};
pub use obstacle::{arena_obstacles, Obstacle, OBSTACLE_COUNT};
pub use player::{ColorState, Player, VerticalMode};

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Modules ====================================================

use crate::core::input::FrameIntents;
use crate::core::render::{Diagnostics, FrameSnapshot};

//=== Simulation ==========================================================

/// Complete arena state for one session.
#[derive(Debug, Clone)]
pub struct Simulation {
    player: Player,
    obstacles: [Obstacle; OBSTACLE_COUNT],
    camera: CameraState,
    preset: CameraPreset,
    contact: Contact,
    frame: u64,
}

impl Simulation {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            player: Player::new(),
            obstacles: arena_obstacles(),
            camera: CameraPreset::Original.camera(),
            preset: CameraPreset::Original,
            contact: Contact::default(),
            frame: 0,
        }
    }

    //--- step() -----------------------------------------------------------
    //
    // One frame, in order:
    //  1. Player movement and vertical state
    //  2. Contact evaluation and color
    //  3. Zoom on the active camera
    //  4. Camera preset switch (resets zoom)
    //
    pub fn step(&mut self, intents: &FrameIntents) {
        self.player.update(intents);
        self.evaluate_contact();

        self.camera.apply_zoom(intents.zoom);

        if let Some(preset) = intents.view {
            self.select_preset(preset);
        }

        self.frame += 1;
    }

    fn evaluate_contact(&mut self) {
        let contact = collision::evaluate(&self.player.bounding_box(), &self.obstacles);

        if contact.is_colliding() != self.contact.is_colliding() {
            match contact.first_hit {
                Some(index) => info!(target: "simulation", "Contact with pike {} at {:?}", index, self.player.position),
                None => info!(target: "simulation", "Contact cleared at {:?}", self.player.position),
            }
        }

        self.contact = contact;
        self.player.set_color_state(ColorState::from_contact(contact.is_colliding()));
    }

    /// Replaces the active camera with a fresh copy of `preset`.
    pub fn select_preset(&mut self, preset: CameraPreset) {
        debug!(target: "simulation", "Camera preset {} -> {}", self.preset, preset);
        self.preset = preset;
        self.camera = preset.camera();
    }

    //--- Queries ----------------------------------------------------------

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &[Obstacle; OBSTACLE_COUNT] {
        &self.obstacles
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn preset(&self) -> CameraPreset {
        self.preset
    }

    pub fn is_colliding(&self) -> bool {
        self.contact.is_colliding()
    }

    /// Number of completed frames.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    //--- snapshot() -------------------------------------------------------

    /// Everything the renderer needs to draw the current frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        let player_box = self.player.bounding_box();

        FrameSnapshot {
            frame: self.frame,
            player_position: self.player.position,
            player_size: self.player.size(),
            player_color: self.player.color_state().color(),
            vertical_mode: self.player.mode(),
            colliding: self.contact.is_colliding(),
            ground_size: glam::Vec2::new(player_box.size().x, player_box.size().z),
            obstacles: self.obstacles,
            camera: self.camera,
            preset: self.preset,
            buttons: &VIEW_BUTTONS,
            diagnostics: Diagnostics::collect(&self.player, &self.obstacles),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
