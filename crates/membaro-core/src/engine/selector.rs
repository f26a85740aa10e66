use rand::Rng;

use super::config::{XyCoupling, ZMode};
use super::state::Axis;

/// Chooses the axis to perturb by rejection sampling over one uniform draw in
/// [0, 3). The Z bucket is discarded (and the whole draw repeated) unless z is
/// free; the loop always terminates because the X bucket is always legal.
/// Under isotropic coupling the shared XY bucket is reported as `X`.
pub(crate) fn select_axis(rng: &mut impl Rng, xy_coupling: XyCoupling, z_mode: ZMode) -> Axis {
    loop {
        let r = rng.r#gen::<f64>() * 3.0;
        if r < 1.0 {
            return Axis::X;
        }
        if r < 2.0 {
            return match xy_coupling {
                XyCoupling::Isotropic => Axis::X,
                XyCoupling::Anisotropic => Axis::Y,
            };
        }
        if z_mode == ZMode::Free {
            return Axis::Z;
        }
    }
}
