/// A spatial axis of the periodic box. Under isotropic XY coupling, `X`
/// stands for the coupled XY pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Adaptive trial state for one axis: the half-width of the symmetric volume
/// proposal and the rolling attempt/accept counters the tuner watches.
///
/// The counters are only ever reset together; `accepted <= attempted` holds
/// after every trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTrialState {
    /// Trial half-width in volume units. Always positive.
    pub step_magnitude: f64,
    pub attempted: u32,
    pub accepted: u32,
}

impl AxisTrialState {
    pub fn new(step_magnitude: f64) -> Self {
        Self {
            step_magnitude,
            attempted: 0,
            accepted: 0,
        }
    }

    pub fn reset_counters(&mut self) {
        self.attempted = 0;
        self.accepted = 0;
    }
}

/// Record of one completed trial, returned for observability; no barostat
/// behavior depends on the caller reading it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    pub axis: Axis,
    pub accepted: bool,
    /// The Metropolis weight `w` that drove the accept/reject decision.
    pub weight: f64,
    /// Proposed volume change (zero under constant-volume z handling).
    pub delta_volume: f64,
    /// Change in the xy-plane cross-sectional area.
    pub delta_area: f64,
}
