//! Local geometry of an actuator's offset curve.
//!
//! An actuator bonded at a material-frame offset from the rod centerline
//! sees a different strain than the centerline itself: the rod's bend and
//! twist, acting across the offset, perturb the shear the actuator
//! experiences. These kernels compute that local shear and its unit tangent
//! from the rod's current deformation state.

use tendril_calculus::{
    adjacent_difference, batch_cross, midpoint_average, trapezoidal_quadrature,
};
use tendril_core::Vec3;
use tendril_core::error::GeometryError;

/// Local-shear columns with a norm below this have no usable tangent
/// direction and fail tangent computation.
pub const DEGENERATE_SHEAR_TOLERANCE: f64 = 1e-12;

/// Shear of the actuator's offset curve in the material frame.
///
/// ```text
/// local_shear = shear + Quadrature( kappa × Average(offsets)
///                                   + Difference(offsets) / delta_s )
/// ```
///
/// where `delta_s` is the deformed voronoi length
/// (`rest_voronoi_lengths * voronoi_dilatation`). For a uniform offset field
/// on a straight rod both correction terms vanish and the local shear equals
/// the centerline shear.
///
/// Shapes: `offsets` and `shear` are per element (`N`), `kappa` and
/// `delta_s` per voronoi point (`N - 1`); output is per element.
pub fn compute_local_shear(
    offsets: &[Vec3],
    shear: &[Vec3],
    kappa: &[Vec3],
    delta_s: &[f64],
) -> Vec<Vec3> {
    let bend_term = batch_cross(kappa, &midpoint_average(offsets));
    let offset_gradient: Vec<Vec3> = adjacent_difference(offsets)
        .iter()
        .zip(delta_s)
        .map(|(diff, ds)| diff / *ds)
        .collect();
    let correction: Vec<Vec3> = bend_term
        .iter()
        .zip(&offset_gradient)
        .map(|(bend, gradient)| bend + gradient)
        .collect();
    shear
        .iter()
        .zip(trapezoidal_quadrature(&correction))
        .map(|(s, c)| s + c)
        .collect()
}

/// Column-wise unit tangent of the local shear.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateShear`] for any column whose norm is
/// below [`DEGENERATE_SHEAR_TOLERANCE`]; a vanishing shear vector means the
/// host rod state has collapsed that element, and normalizing it would turn
/// the collapse into silent NaN propagation.
pub fn compute_local_tangent(local_shear: &[Vec3]) -> Result<Vec<Vec3>, GeometryError> {
    local_shear
        .iter()
        .enumerate()
        .map(|(element, shear)| {
            let norm = shear.norm();
            if norm < DEGENERATE_SHEAR_TOLERANCE {
                Err(GeometryError::DegenerateShear { element, norm })
            } else {
                Ok(shear / norm)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
