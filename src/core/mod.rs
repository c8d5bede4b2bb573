//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the arena running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Receive platform events over the bounded channel
// - Turn each tick's input into intents and advance the simulation
// - Hand one snapshot per tick to the render backend
// - Maintain deterministic pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer. It owns
// the input system, the simulation and the backend directly, so the
// simulation state is only ever mutated from this one thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod simulation;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================

use input::{InputEvent, InputSystem};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::RenderBackend;
use simulation::Simulation;

//=== CoreSystemsOrchestrator =============================================

/// Owns every logic-thread system and advances them one tick at a time.
pub struct CoreSystemsOrchestrator {
    input: InputSystem,
    simulation: Simulation,
    backend: Box<dyn RenderBackend>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all core systems but does not yet start the logic thread.
    //
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            input: InputSystem::new(),
            simulation: Simulation::new(),
            backend,
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One frame: input → simulation step → present.
    //
    pub fn tick(&mut self, batches: &[Vec<InputEvent>]) {
        let intents = *self.input.process_frame(batches);
        self.simulation.step(&intents);

        let snapshot = self.simulation.snapshot();
        self.backend.present(&snapshot);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking all core systems at a fixed rate.
    //
    // Each tick:
    //  1. Collects platform events (exits on close or disconnect)
    //  2. Runs one frame
    //  3. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            info!(target: "core", "Core thread started ({} TPS)", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!(
                        target: "core",
                        "Core thread exiting after {} frames",
                        self.simulation.frame()
                    );
                    break;
                }

                //--- Step 2: Advance the arena -----------------------------
                self.tick(collector.batches());

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- Accessors --------------------------------------------------------

    pub fn input(&self) -> &InputSystem {
        &self.input
    }

    /// Mutable input access, for rebinding keys before the thread starts.
    pub fn input_mut(&mut self) -> &mut InputSystem {
        &mut self.input
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::render::{Color, FrameSnapshot, LogBackend};
    use crate::core::simulation::{CameraPreset, VerticalMode};
    use crossbeam_channel::unbounded;
    use std::sync::{Arc, Mutex};

    //--- Test Helpers -----------------------------------------------------

    fn recording_orchestrator() -> (CoreSystemsOrchestrator, Arc<Mutex<Vec<FrameSnapshot>>>) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&frames);
        let backend = move |frame: &FrameSnapshot| sink.lock().unwrap().push(frame.clone());
        (CoreSystemsOrchestrator::new(Box::new(backend)), frames)
    }

    fn key_down(key: KeyCode) -> Vec<InputEvent> {
        vec![InputEvent::KeyDown { key }]
    }

    //=====================================================================
    // Tick
    //=====================================================================

    #[test]
    fn tick_presents_one_snapshot_per_frame() {
        let (mut core, frames) = recording_orchestrator();

        core.tick(&[]);
        core.tick(&[]);

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].frame, 1);
        assert_eq!(frames[1].frame, 2);
    }

    #[test]
    fn held_key_moves_player_every_tick() {
        let (mut core, _) = recording_orchestrator();

        core.tick(&[key_down(KeyCode::KeyW)]);
        core.tick(&[]);
        core.tick(&[]);

        let x = core.simulation().player().position.x;
        assert!((x - (-0.3)).abs() < 1e-5, "x = {}", x);
    }

    #[test]
    fn fly_toggle_reaches_simulation() {
        let (mut core, frames) = recording_orchestrator();

        core.tick(&[key_down(KeyCode::KeyF)]);

        assert!(core.simulation().player().is_flying());
        assert_eq!(frames.lock().unwrap()[0].vertical_mode, VerticalMode::Flying);
    }

    #[test]
    fn walking_into_pike_turns_player_red() {
        let (mut core, frames) = recording_orchestrator();

        core.tick(&[vec![
            InputEvent::KeyDown { key: KeyCode::KeyW },
            InputEvent::KeyDown { key: KeyCode::KeyD },
        ]]);
        for _ in 0..15 {
            core.tick(&[]);
        }

        let frames = frames.lock().unwrap();
        assert_eq!(frames.first().unwrap().player_color, Color::GREEN);
        assert_eq!(frames.last().unwrap().player_color, Color::RED);
    }

    #[test]
    fn view_shortcut_switches_camera() {
        let (mut core, _) = recording_orchestrator();

        core.tick(&[key_down(KeyCode::Digit1)]);

        assert_eq!(core.simulation().preset(), CameraPreset::Top);
    }

    //=====================================================================
    // Logic Thread
    //=====================================================================

    #[test]
    fn thread_exits_on_window_closed() {
        let (core, _) = recording_orchestrator();
        let (tx, rx) = unbounded();

        let handle = core.spawn_core_thread(rx, 1000.0);
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn thread_exits_on_disconnect() {
        let core = CoreSystemsOrchestrator::new(Box::new(LogBackend::new()));
        let (tx, rx) = unbounded::<PlatformEvent>();

        let handle = core.spawn_core_thread(rx, 1000.0);
        drop(tx);

        assert!(handle.join().is_ok());
    }

    #[test]
    fn thread_applies_sent_input() {
        let (core, frames) = recording_orchestrator();
        let (tx, rx) = unbounded();

        tx.send(PlatformEvent::Inputs { discrete: key_down(KeyCode::KeyF), continuous: vec![] })
            .unwrap();
        let handle = core.spawn_core_thread(rx, 1000.0);

        while frames.lock().unwrap().is_empty() {
            thread::sleep(Duration::from_millis(1));
        }
        tx.send(PlatformEvent::WindowClosed).unwrap();
        handle.join().unwrap();

        assert_eq!(frames.lock().unwrap()[0].vertical_mode, VerticalMode::Flying);
    }
}
