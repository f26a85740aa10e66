use nalgebra::Vector3;
use rand::Rng;
use tracing::trace;

use crate::core::geometry::BoxVectors;

use super::config::{XyCoupling, ZMode};
use super::state::Axis;

/// A candidate box rescaling, computed before the engine is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VolumeProposal {
    /// Per-axis length scale factors to apply to box edges and coordinates.
    pub scale: Vector3<f64>,
    /// Box volume before the trial.
    pub volume: f64,
    /// Proposed box volume, used in the entropic weight term. Equals `volume`
    /// under constant-volume z handling.
    pub new_volume: f64,
    /// `new_volume - volume`; forced to zero under constant-volume z handling.
    pub delta_volume: f64,
    /// Change in the xy-plane cross-sectional area.
    pub delta_area: f64,
}

/// Draws a symmetric volume perturbation in `[-step_magnitude, +step_magnitude]`
/// for the selected axis and converts it into per-axis length scale factors.
pub(crate) fn propose(
    rng: &mut impl Rng,
    axis: Axis,
    box_vectors: &BoxVectors,
    step_magnitude: f64,
    xy_coupling: XyCoupling,
    z_mode: ZMode,
) -> VolumeProposal {
    let volume = box_vectors.volume();
    let mut delta_volume = step_magnitude * 2.0 * (rng.r#gen::<f64>() - 0.5);
    let mut new_volume = volume + delta_volume;

    let mut scale = Vector3::new(1.0, 1.0, 1.0);
    if (axis == Axis::X || axis == Axis::Y) && xy_coupling == XyCoupling::Isotropic {
        let s = (new_volume / volume).sqrt();
        scale.x = s;
        scale.y = s;
    } else {
        scale[axis.index()] = new_volume / volume;
    }
    if z_mode == ZMode::ConstantVolume {
        // Z absorbs the XY change exactly; the volume term of the Metropolis
        // weight vanishes.
        scale.z = 1.0 / (scale.x * scale.y);
        new_volume = volume;
        delta_volume = 0.0;
    }

    let delta_area =
        box_vectors.a.x * scale.x * box_vectors.b.y * scale.y - box_vectors.xy_area();

    trace!(
        ?axis,
        delta_volume,
        delta_area,
        sx = scale.x,
        sy = scale.y,
        sz = scale.z,
        "Proposed volume trial"
    );

    VolumeProposal {
        scale,
        volume,
        new_volume,
        delta_volume,
        delta_area,
    }
}
