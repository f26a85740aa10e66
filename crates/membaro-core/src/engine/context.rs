use crate::core::geometry::BoxVectors;
use nalgebra::Vector3;
use thiserror::Error;

/// Name of the coordinate scaling/restoration capability this core requires
/// from the engine before the first trial.
pub const COORDINATE_SCALING_CAPABILITY: &str = "mc-barostat/scale-coordinates";

/// Name of the run-time pressure parameter (bar) introduced by this core.
pub const PRESSURE_PARAMETER: &str = "mc_membrane_pressure";

/// Name of the run-time surface-tension parameter (bar·nm) introduced by this core.
pub const SURFACE_TENSION_PARAMETER: &str = "mc_membrane_surface_tension";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine does not support required capability '{0}'")]
    UnsupportedCapability(String),

    #[error("Unknown run-time parameter '{0}'")]
    UnknownParameter(String),

    #[error("Potential energy evaluation failed: {0}")]
    EnergyEvaluation(String),

    #[error("Coordinate scaling failed: {0}")]
    CoordinateScaling(String),

    #[error("No coordinate checkpoint available to restore")]
    NoCheckpoint,
}

/// The narrow contract this core requires from the external simulation engine.
///
/// The engine owns the particle coordinates and the periodic box; the barostat
/// is the sole writer to both during a trial window and must leave them either
/// fully accepted or fully restored before returning. The potential-energy
/// evaluation is a single synchronous call; it may be arbitrarily expensive and
/// may internally parallelize, but that is opaque here.
pub trait SimulationEngine {
    /// Validates that the engine can provide a named computational capability.
    /// Called once at initialization for every capability in
    /// [`required_capabilities`](crate::MembraneBarostat::required_capabilities).
    fn bind_capability(&mut self, name: &str) -> Result<(), EngineError>;

    /// Registers a run-time parameter with its default value so the engine can
    /// initialize it before the first trial. The engine may mutate the value
    /// externally between trials.
    fn register_parameter(&mut self, name: &str, default: f64) -> Result<(), EngineError>;

    /// Atomic read of the periodic box geometry.
    fn box_vectors(&self) -> BoxVectors;

    /// Atomic replace of the periodic box geometry.
    fn set_box_vectors(&mut self, vectors: BoxVectors);

    /// Potential energy of the current coordinates and box. Synchronous and
    /// expensive; dominates the cost of a trial.
    fn potential_energy(&mut self) -> Result<f64, EngineError>;

    /// Affinely rescales every particle position about the box origin by the
    /// given per-axis factors, checkpointing the pre-scale state for a
    /// possible [`restore_coordinates`](Self::restore_coordinates).
    fn scale_coordinates(&mut self, scale: &Vector3<f64>) -> Result<(), EngineError>;

    /// Reverts particle positions to the state checkpointed by the most
    /// recent [`scale_coordinates`](Self::scale_coordinates) call.
    fn restore_coordinates(&mut self) -> Result<(), EngineError>;

    /// Current value of a named run-time parameter. Read fresh on every trial.
    fn parameter(&self, name: &str) -> Result<f64, EngineError>;

    /// Number of independently movable units (rigid clusters, not raw
    /// particles), used in the entropic volume term.
    fn rigid_unit_count(&self) -> usize;
}
