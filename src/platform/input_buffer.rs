//=========================================================================
// Input Buffer
//
// Collects raw input events between two redraws and normalizes them into
// discrete and continuous categories before they cross to the core
// thread.
//
// Responsibilities:
// - Keep discrete inputs (keys, buttons) in arrival order
// - Drop consecutive duplicate discrete inputs
// - Coalesce cursor moves (last position wins)
// - Sum wheel deltas into one event per frame
//
// Notes:
// The buffer only lives for the current frame and is emptied by
// `drain()` on every redraw.
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<(f32, f32)>,
    scroll: f32,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
            scroll: 0.0,
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // Cursor moves replace each other, wheel deltas add up.
    //
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::MouseWheel { delta } => self.scroll += delta,
            other => self.push_discrete(other),
        }
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Duplicate consecutive events are ignored to prevent flooding.
    //
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's (discrete, continuous) events and resets the
    // buffer, or `None` if nothing was buffered.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);

        let mut continuous = Vec::with_capacity(2);
        if let Some((x, y)) = self.cursor.take() {
            continuous.push(InputEvent::MouseMoved { x, y });
        }
        if self.scroll != 0.0 {
            continuous.push(InputEvent::MouseWheel { delta: self.scroll });
        }
        self.scroll = 0.0;

        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none() && self.scroll == 0.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
