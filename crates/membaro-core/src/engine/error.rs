use thiserror::Error;

use super::context::EngineError;

#[derive(Debug, Error)]
pub enum BarostatError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Barostat used before initialization")]
    NotInitialized,

    #[error("Failed to obtain a random seed from the operating system: {0}")]
    SeedResolution(String),

    #[error("Engine call failed: {source}")]
    Engine {
        #[from]
        source: EngineError,
    },

    /// Restoration after a rejected trial failed. The simulation geometry is
    /// no longer consistent; the caller must abort rather than continue.
    #[error("Failed to restore pre-trial state after rejection: {source}")]
    StateCorruption { source: EngineError },
}
