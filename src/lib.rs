//=========================================================================
// Pike Arena: Library Root
//
// A small 3D arena: a box player walks, jumps and flies between two
// pikes, turns red on contact, and is watched through switchable camera
// presets.
//
// Typical usage:
// ```no_run
// use pike_arena::EngineBuilder;
//
// fn main() -> Result<(), pike_arena::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds input, simulation and render contracts. The simulation
// can be driven headless through `core::simulation::Simulation`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop and is not part of the
// public API surface.
//
mod engine;
mod error;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use error::EngineError;
