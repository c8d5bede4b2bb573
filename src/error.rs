//=========================================================================
// Engine Errors
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;

//=== EngineError =========================================================

/// Failure of a whole engine run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The logic thread panicked before shutdown.
    #[error("Core thread panicked")]
    CoreThreadPanicked,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_errors_convert() {
        let err: EngineError = PlatformError::EventLoopCreation("no display".into()).into();

        assert!(matches!(err, EngineError::Platform(_)));
        assert_eq!(err.to_string(), "Event loop creation failed: no display");
    }

    #[test]
    fn panic_display() {
        assert_eq!(EngineError::CoreThreadPanicked.to_string(), "Core thread panicked");
    }
}
