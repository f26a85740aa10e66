use rand::Rng;

use super::proposal::VolumeProposal;

/// Energies and ensemble parameters feeding one accept/reject decision.
/// Pressure and surface tension are already converted to kJ/(mol·nm³) and
/// kJ/(mol·nm²) respectively.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AcceptanceInput {
    pub energy_before: f64,
    pub energy_after: f64,
    pub pressure: f64,
    pub surface_tension: f64,
    pub kt: f64,
    pub rigid_units: usize,
}

/// The effective free-energy change driving the accept/reject probability:
/// `w = dE + P*dV - gamma*dA - N*kT*ln(V'/V)`.
pub(crate) fn metropolis_weight(input: &AcceptanceInput, proposal: &VolumeProposal) -> f64 {
    input.energy_after - input.energy_before
        + input.pressure * proposal.delta_volume
        - input.surface_tension * proposal.delta_area
        - input.rigid_units as f64 * input.kt * (proposal.new_volume / proposal.volume).ln()
}

/// Metropolis decision. The uniform draw is taken only when `w > 0`, so a
/// downhill move consumes nothing from the random stream.
pub(crate) fn accept(rng: &mut impl Rng, weight: f64, kt: f64) -> bool {
    !(weight > 0.0 && rng.r#gen::<f64>() > (-weight / kt).exp())
}
