//! Reproducible rod-state fixtures.

use nalgebra::Rotation3;
use rand::Rng;
use tendril_core::Vec3;
use tendril_rod::RodState;

use crate::rng::seeded_rng;

/// A straight rod hanging along -z with its bending normal along +x,
/// matching the BR2 arm's rest configuration (0.16 m, any element count).
///
/// # Panics
///
/// Panics for `n_elements < 2` (fixture misuse, not a runtime condition).
pub fn downward_rod(n_elements: usize) -> RodState {
    RodState::straight(
        n_elements,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 0.0),
        0.16,
    )
    .expect("valid straight-rod fixture parameters")
}

/// A deterministically deformed rod: the straight fixture with small random
/// shear, curvature, dilatation, and director perturbations.
///
/// Perturbations are small enough that local shear never degenerates, so
/// actuator evaluation on this fixture always succeeds.
///
/// # Panics
///
/// Panics for `n_elements < 2`.
pub fn perturbed_rod(n_elements: usize, seed: u64) -> RodState {
    let mut rod = downward_rod(n_elements);
    let mut rng = seeded_rng(seed);

    for sigma in &mut rod.sigma {
        *sigma = Vec3::new(
            rng.gen_range(-0.05..0.05),
            rng.gen_range(-0.05..0.05),
            rng.gen_range(-0.05..0.05),
        );
    }
    for kappa in &mut rod.kappa {
        *kappa = Vec3::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        );
    }
    for dilatation in &mut rod.dilatation {
        *dilatation = rng.gen_range(0.95..1.05);
    }
    for dilatation in &mut rod.voronoi_dilatation {
        *dilatation = rng.gen_range(0.95..1.05);
    }
    for director in &mut rod.directors {
        let tilt = Rotation3::from_euler_angles(
            rng.gen_range(-0.1..0.1),
            rng.gen_range(-0.1..0.1),
            rng.gen_range(-0.1..0.1),
        );
        *director = tilt.into_inner() * *director;
    }
    for (tangent, director) in rod.tangents.iter_mut().zip(&rod.directors) {
        // Keep the lab tangent consistent with the perturbed frame (d3 row).
        *tangent = director.transpose() * Vec3::new(0.0, 0.0, 1.0);
    }
    rod
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
