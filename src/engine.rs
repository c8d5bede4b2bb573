//=========================================================================
// Pike Arena Engine
//
// Main entry point and coordinator for the arena.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_window_title()        blocks until exit
//         ├─ with_window_size()
//         └─ with_backend()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::{LogBackend, RenderBackend};
use crate::core::CoreSystemsOrchestrator;
use crate::error::EngineError;
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (simulation frames per second)
/// - **Channel capacity**: 128 events
/// - **Window**: "Pike Arena", 800 × 450
/// - **Backend**: [`LogBackend`]
///
/// # Examples
///
/// ```no_run
/// use pike_arena::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_window_title("Arena")
///     .build()
///     .run()?;
/// # Ok::<(), pike_arena::EngineError>(())
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
    backend: Box<dyn RenderBackend>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig {
                title: "Pike Arena".to_string(),
                width: 800,
                height: 450,
            },
            backend: Box::new(LogBackend::new()),
        }
    }

    /// Sets the fixed frame rate of the logic thread.
    ///
    /// Every movement constant is a per-frame step, so this also sets
    /// how fast the player walks.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the platform → core channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window_title(mut self, title: &str) -> Self {
        self.window.title = title.to_string();
        self
    }

    /// Sets the window's logical size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Replaces the backend that receives each frame's snapshot.
    pub fn with_backend(mut self, backend: Box<dyn RenderBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "core",
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.backend),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Arena runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → Simulation → RenderBackend
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Gives access to the core systems before the logic thread starts
    /// (e.g. to rebind keys).
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut CoreSystemsOrchestrator),
    {
        init_fn(&mut self.orchestrator);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Joins the logic thread
    ///
    /// # Errors
    ///
    /// [`EngineError::Platform`] if the event loop fails, or
    /// [`EngineError::CoreThreadPanicked`] if the logic thread panicked.
    pub fn run(self) -> Result<(), EngineError> {
        info!(target: "core", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        let platform_result = platform.run();

        info!(target: "core", "Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        // Platform (and the sender) is gone by now, so the thread sees a
        // disconnect even if the window never reported closing.
        let core_result = core_handle.join();

        if let Err(e) = &platform_result {
            error!(target: "core", "Platform error: {}", e);
        }
        platform_result?;

        core_result.map_err(|_| {
            error!(target: "core", "Core thread panicked");
            EngineError::CoreThreadPanicked
        })?;

        info!(target: "core", "Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
