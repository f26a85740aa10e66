use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::{debug, instrument};

use crate::core::units;

use super::acceptance::{self, AcceptanceInput};
use super::config::BarostatConfig;
use super::context::{
    COORDINATE_SCALING_CAPABILITY, PRESSURE_PARAMETER, SURFACE_TENSION_PARAMETER, SimulationEngine,
};
use super::error::BarostatError;
use super::proposal;
use super::selector;
use super::state::{Axis, AxisTrialState, TrialOutcome};
use super::tuner;

/// The adaptive Monte Carlo membrane barostat controller.
///
/// Owns the per-axis trial state and the seeded random stream. The simulation
/// driver calls [`on_simulation_step`](Self::on_simulation_step) once per step;
/// on the configured cadence the controller runs one full trial against the
/// engine (axis selection, volume proposal, two blocking energy evaluations,
/// Metropolis acceptance, adaptive tuning) strictly in sequence, and leaves
/// the engine's box and coordinates either fully accepted or fully restored.
pub struct MembraneBarostat {
    config: BarostatConfig,
    axes: [AxisTrialState; 3],
    step_count: u64,
    rng: Option<StdRng>,
}

impl MembraneBarostat {
    pub fn new(config: BarostatConfig) -> Self {
        Self {
            config,
            axes: [AxisTrialState::new(0.0); 3],
            step_count: 0,
            rng: None,
        }
    }

    /// Named computational capabilities the engine must provide before the
    /// first trial.
    pub fn required_capabilities() -> &'static [&'static str] {
        &[COORDINATE_SCALING_CAPABILITY]
    }

    /// The run-time parameters this core introduces, with their default
    /// values, for the engine to validate and initialize.
    pub fn default_parameters(&self) -> [(&'static str, f64); 2] {
        [
            (PRESSURE_PARAMETER, self.config.default_pressure),
            (
                SURFACE_TENSION_PARAMETER,
                self.config.default_surface_tension,
            ),
        ]
    }

    /// Attaches the barostat to a running simulation. Must be called exactly
    /// once before any trial step: binds the coordinate-scaling capability,
    /// registers the run-time parameters, sizes every axis's trial step to 1%
    /// of the starting box volume, and seeds the random stream (a zero
    /// configured seed is resolved from the operating system).
    pub fn initialize<E: SimulationEngine>(&mut self, engine: &mut E) -> Result<(), BarostatError> {
        if self.rng.is_some() {
            return Err(BarostatError::Initialization(
                "initialize called more than once".to_string(),
            ));
        }
        for name in Self::required_capabilities() {
            engine
                .bind_capability(name)
                .map_err(|e| BarostatError::Initialization(e.to_string()))?;
        }
        for (name, default) in self.default_parameters() {
            engine
                .register_parameter(name, default)
                .map_err(|e| BarostatError::Initialization(e.to_string()))?;
        }

        let volume = engine.box_vectors().volume();
        for state in &mut self.axes {
            *state = AxisTrialState::new(0.01 * volume);
        }
        self.step_count = 0;

        let seed = match self.config.random_seed {
            0 => os_seed()?,
            explicit => explicit,
        };
        self.rng = Some(StdRng::seed_from_u64(seed));

        debug!(volume, frequency = self.config.frequency, "Initialized membrane barostat");
        Ok(())
    }

    /// Called once per simulation step. Cheap to poll: off-cadence calls (and
    /// every call when the frequency is 0) return `Ok(None)` with no side
    /// effects. On a cadence hit the step counter resets and one full trial
    /// runs synchronously before returning.
    pub fn on_simulation_step<E: SimulationEngine>(
        &mut self,
        engine: &mut E,
    ) -> Result<Option<TrialOutcome>, BarostatError> {
        if self.rng.is_none() {
            return Err(BarostatError::NotInitialized);
        }
        self.step_count += 1;
        if self.config.frequency == 0 || self.step_count < self.config.frequency {
            return Ok(None);
        }
        self.step_count = 0;
        self.run_trial(engine).map(Some)
    }

    #[instrument(skip_all, name = "volume_trial")]
    fn run_trial<E: SimulationEngine>(
        &mut self,
        engine: &mut E,
    ) -> Result<TrialOutcome, BarostatError> {
        let rng = self.rng.as_mut().ok_or(BarostatError::NotInitialized)?;

        let energy_before = engine.potential_energy()?;
        let pressure = engine.parameter(PRESSURE_PARAMETER)? * units::BAR_TO_MOLAR;
        let surface_tension = engine.parameter(SURFACE_TENSION_PARAMETER)? * units::BAR_TO_MOLAR;

        let axis = selector::select_axis(rng, self.config.xy_coupling, self.config.z_mode);
        let box_vectors = engine.box_vectors();
        let proposal = proposal::propose(
            rng,
            axis,
            &box_vectors,
            self.axes[axis.index()].step_magnitude,
            self.config.xy_coupling,
            self.config.z_mode,
        );

        // Applied before acceptance is known; must stay fully reversible.
        engine.scale_coordinates(&proposal.scale)?;
        engine.set_box_vectors(box_vectors.scaled(&proposal.scale));

        // A failed evaluation must not leave the scaled, never-accepted
        // geometry behind: roll back first, then surface the error.
        let energy_after = match engine.potential_energy() {
            Ok(energy) => energy,
            Err(error) => {
                engine
                    .restore_coordinates()
                    .map_err(|source| BarostatError::StateCorruption { source })?;
                engine.set_box_vectors(box_vectors);
                return Err(error.into());
            }
        };
        let kt = units::kt(self.config.temperature);
        let input = AcceptanceInput {
            energy_before,
            energy_after,
            pressure,
            surface_tension,
            kt,
            rigid_units: engine.rigid_unit_count(),
        };
        let weight = acceptance::metropolis_weight(&input, &proposal);
        let accepted = acceptance::accept(rng, weight, kt);

        // Volume tracker feeding the tuner's growth cap. After a rejection it
        // holds the proposed volume, not the restored one; after an acceptance
        // it holds the pre-trial volume.
        let volume;
        if accepted {
            self.axes[axis.index()].accepted += 1;
            volume = proposal.volume;
        } else {
            engine
                .restore_coordinates()
                .map_err(|source| BarostatError::StateCorruption { source })?;
            engine.set_box_vectors(box_vectors);
            volume = proposal.new_volume;
        }
        self.axes[axis.index()].attempted += 1;

        debug!(
            ?axis,
            accepted,
            weight,
            delta_volume = proposal.delta_volume,
            "Completed volume trial"
        );
        tuner::tune(&mut self.axes[axis.index()], volume);

        Ok(TrialOutcome {
            axis,
            accepted,
            weight,
            delta_volume: proposal.delta_volume,
            delta_area: proposal.delta_area,
        })
    }

    pub fn config(&self) -> &BarostatConfig {
        &self.config
    }

    /// Read-only view of one axis's adaptive trial state.
    pub fn axis_state(&self, axis: Axis) -> &AxisTrialState {
        &self.axes[axis.index()]
    }
}

fn os_seed() -> Result<u64, BarostatError> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| BarostatError::SeedResolution(e.to_string()))?;
    Ok(u64::from_le_bytes(bytes))
}
