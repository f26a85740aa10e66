use tracing::debug;

use super::state::AxisTrialState;

const TUNE_INTERVAL: u32 = 10;
const LOW_ACCEPTANCE: f64 = 0.25;
const HIGH_ACCEPTANCE: f64 = 0.75;
const ADJUST_FACTOR: f64 = 1.1;
const MAX_STEP_VOLUME_FRACTION: f64 = 0.3;

/// Adjusts one axis's step magnitude toward the target acceptance band.
///
/// Runs after every trial on that axis but acts only once the attempt counter
/// reaches ten. Outside the 25-75% band the magnitude is scaled by 1.1 (down
/// or up, the latter capped at 0.3x `volume`) and both counters reset; inside
/// the band the counters keep accumulating. `volume` is the caller's
/// volume-tracking value at the end of the triggering trial, which after a
/// rejection holds the proposed (rejected) volume.
pub(crate) fn tune(state: &mut AxisTrialState, volume: f64) {
    if state.attempted < TUNE_INTERVAL {
        return;
    }
    let attempted = state.attempted as f64;
    let accepted = state.accepted as f64;
    if accepted < LOW_ACCEPTANCE * attempted {
        state.step_magnitude /= ADJUST_FACTOR;
        state.reset_counters();
        debug!(step_magnitude = state.step_magnitude, "Shrank trial step");
    } else if accepted > HIGH_ACCEPTANCE * attempted {
        state.step_magnitude =
            (state.step_magnitude * ADJUST_FACTOR).min(volume * MAX_STEP_VOLUME_FRACTION);
        state.reset_counters();
        debug!(step_magnitude = state.step_magnitude, "Grew trial step");
    }
}
