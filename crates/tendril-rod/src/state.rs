//! Rod deformation state and external load accumulators.

use tendril_core::error::RodError;
use tendril_core::{Mat3, Vec3};

/// Tolerance for the unit-norm and orthogonality checks in
/// [`RodState::straight`].
const FRAME_TOLERANCE: f64 = 1e-12;

/// Current deformation state of a discretized rod with `N` elements.
///
/// Field resolutions:
/// - per element (`N`): `directors`, `sigma`, `dilatation`, `rest_lengths`,
///   `tangents`, `external_torques`
/// - per voronoi point (`N - 1`): `kappa`, `voronoi_dilatation`,
///   `rest_voronoi_lengths`
/// - per node (`N + 1`): `external_forces`
///
/// The host rod engine owns the evolution of every field except
/// `external_forces` / `external_torques`, which actuator groups add into
/// each step and the engine consumes and clears at the step boundary.
#[derive(Debug, Clone)]
pub struct RodState {
    /// Director frames, rows `d1, d2, d3` in lab coordinates (lab → material).
    pub directors: Vec<Mat3>,
    /// Shear strain in the material frame (zero for an undeformed rod).
    pub sigma: Vec<Vec3>,
    /// Curvature at the voronoi points, material frame.
    pub kappa: Vec<Vec3>,
    /// Per-element stretch relative to rest configuration.
    pub dilatation: Vec<f64>,
    /// Stretch of the voronoi regions.
    pub voronoi_dilatation: Vec<f64>,
    /// Rest length of each element.
    pub rest_lengths: Vec<f64>,
    /// Rest length of each voronoi region.
    pub rest_voronoi_lengths: Vec<f64>,
    /// Unit tangent of each element in the lab frame.
    pub tangents: Vec<Vec3>,
    /// External force accumulator at each node.
    pub external_forces: Vec<Vec3>,
    /// External torque accumulator at each element.
    pub external_torques: Vec<Vec3>,
}

impl RodState {
    /// Build the state of a straight, undeformed rod.
    ///
    /// `direction` is the rod axis (material `d3`), `normal` the material
    /// `d1`; both must be unit-norm and mutually orthogonal. Strains are
    /// zero, dilatations one, and rest lengths uniform at
    /// `base_length / n_elements`.
    ///
    /// # Errors
    ///
    /// Returns [`RodError`] for fewer than 2 elements, a non-positive base
    /// length, non-unit frame vectors, or a non-orthogonal frame.
    pub fn straight(
        n_elements: usize,
        direction: Vec3,
        normal: Vec3,
        base_length: f64,
    ) -> Result<Self, RodError> {
        if n_elements < 2 {
            return Err(RodError::TooFewElements(n_elements));
        }
        if !(base_length.is_finite() && base_length > 0.0) {
            return Err(RodError::InvalidLength(base_length));
        }
        let direction_norm = direction.norm();
        if (direction_norm - 1.0).abs() > FRAME_TOLERANCE {
            return Err(RodError::NonUnitVector {
                name: "direction",
                norm: direction_norm,
            });
        }
        let normal_norm = normal.norm();
        if (normal_norm - 1.0).abs() > FRAME_TOLERANCE {
            return Err(RodError::NonUnitVector {
                name: "normal",
                norm: normal_norm,
            });
        }
        let dot = direction.dot(&normal);
        if dot.abs() > FRAME_TOLERANCE {
            return Err(RodError::NotOrthogonal(dot));
        }

        // Material frame: d1 = normal, d3 = direction, d2 completes the
        // right-handed triad.
        let binormal = direction.cross(&normal);
        let director = Mat3::from_rows(&[
            normal.transpose(),
            binormal.transpose(),
            direction.transpose(),
        ]);

        let element_length = base_length / n_elements as f64;
        Ok(Self {
            directors: vec![director; n_elements],
            sigma: vec![Vec3::zeros(); n_elements],
            kappa: vec![Vec3::zeros(); n_elements - 1],
            dilatation: vec![1.0; n_elements],
            voronoi_dilatation: vec![1.0; n_elements - 1],
            rest_lengths: vec![element_length; n_elements],
            rest_voronoi_lengths: vec![element_length; n_elements - 1],
            tangents: vec![direction; n_elements],
            external_forces: vec![Vec3::zeros(); n_elements + 1],
            external_torques: vec![Vec3::zeros(); n_elements],
        })
    }

    /// Number of rod elements.
    pub fn n_elements(&self) -> usize {
        self.directors.len()
    }

    /// Deformed length of each voronoi region:
    /// `rest_voronoi_lengths * voronoi_dilatation`, pointwise.
    pub fn effective_voronoi_lengths(&self) -> Vec<f64> {
        self.rest_voronoi_lengths
            .iter()
            .zip(&self.voronoi_dilatation)
            .map(|(rest, dilatation)| rest * dilatation)
            .collect()
    }

    /// Zero the external force/torque accumulators.
    ///
    /// The host engine does this at every step boundary after consuming the
    /// loads; exposed here so standalone harnesses can do the same.
    pub fn reset_external_loads(&mut self) {
        self.external_forces.fill(Vec3::zeros());
        self.external_torques.fill(Vec3::zeros());
    }
}

/// Convert shear strain `sigma` to the material-frame shear vector.
///
/// An undeformed element has `sigma = 0` but shear vector `d3`; the
/// conversion adds one to the tangent component.
pub fn sigma_to_shear(sigma: &[Vec3]) -> Vec<Vec3> {
    sigma
        .iter()
        .map(|s| Vec3::new(s.x, s.y, s.z + 1.0))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn downward_rod(n_elements: usize) -> RodState {
        RodState::straight(
            n_elements,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 0.0),
            0.16,
        )
        .unwrap()
    }

    #[test]
    fn straight_rod_has_expected_shapes() {
        let rod = downward_rod(10);
        assert_eq!(rod.n_elements(), 10);
        assert_eq!(rod.sigma.len(), 10);
        assert_eq!(rod.kappa.len(), 9);
        assert_eq!(rod.rest_voronoi_lengths.len(), 9);
        assert_eq!(rod.external_forces.len(), 11);
        assert_eq!(rod.external_torques.len(), 10);
    }

    #[test]
    fn straight_rod_directors_are_right_handed() {
        let rod = downward_rod(4);
        let d = &rod.directors[0];
        // d1 = x, d3 = -z, so d2 = d3 × d1 = -y.
        assert_relative_eq!(d[(0, 0)], 1.0);
        assert_relative_eq!(d[(1, 1)], -1.0);
        assert_relative_eq!(d[(2, 2)], -1.0);
        assert_relative_eq!(d.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn straight_rod_rest_lengths_are_uniform() {
        let rod = downward_rod(8);
        for length in &rod.rest_lengths {
            assert_relative_eq!(*length, 0.02);
        }
        for length in rod.effective_voronoi_lengths() {
            assert_relative_eq!(length, 0.02);
        }
    }

    #[test]
    fn too_few_elements_rejected() {
        let result = RodState::straight(
            1,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
        );
        assert!(matches!(result, Err(RodError::TooFewElements(1))));
    }

    #[test]
    fn non_unit_direction_rejected() {
        let result = RodState::straight(
            5,
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
        );
        assert!(matches!(result, Err(RodError::NonUnitVector { .. })));
    }

    #[test]
    fn non_orthogonal_frame_rejected() {
        let result = RodState::straight(
            5,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            1.0,
        );
        assert!(matches!(result, Err(RodError::NotOrthogonal(_))));
    }

    #[test]
    fn sigma_to_shear_shifts_tangent_component() {
        let sigma = vec![Vec3::new(0.1, -0.2, 0.3); 3];
        let shear = sigma_to_shear(&sigma);
        for s in &shear {
            assert_relative_eq!(s.x, 0.1);
            assert_relative_eq!(s.y, -0.2);
            assert_relative_eq!(s.z, 1.3);
        }
    }

    #[test]
    fn reset_external_loads_zeroes_accumulators() {
        let mut rod = downward_rod(4);
        rod.external_forces[0] = Vec3::new(1.0, 2.0, 3.0);
        rod.external_torques[3] = Vec3::new(-1.0, 0.0, 0.0);
        rod.reset_external_loads();
        assert!(rod.external_forces.iter().all(|f| f.norm() == 0.0));
        assert!(rod.external_torques.iter().all(|t| t.norm() == 0.0));
    }
}
