//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use pike_arena::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::EngineError;

// Input
pub use crate::core::input::{Action, ActionMapper, FrameIntents, KeyCode, MouseButton};

// Simulation
pub use crate::core::simulation::{CameraPreset, CameraState, Player, Simulation, VerticalMode};

// Rendering
pub use crate::core::render::{Color, FrameSnapshot, LogBackend, RenderBackend};
