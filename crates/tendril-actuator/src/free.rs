//! The FREE actuator: pressure in, equivalent external rod load out.

use tendril_core::Vec3;
use tendril_core::config::FreeConfig;
use tendril_core::error::ActuationError;
use tendril_rod::{RodState, sigma_to_shear};

use crate::geometry::{compute_local_shear, compute_local_tangent};
use crate::load::{
    LoadAccumulator, compute_internal_load, internal_load_to_equivalent_external_load,
};
use crate::pressure::{PressureCoefficients, PressureLimited};

/// A pressure-driven FREE bonded along a rod.
///
/// Holds the actuator's fixed material-frame offset field, its pressure
/// polynomials, the clamped pressure setpoint, and the [`LoadAccumulator`]
/// its per-step evaluation writes into.
///
/// # Per-step contract
///
/// Set the pressure, then call [`evaluate`](Self::evaluate) with the rod's
/// current state; afterwards [`load`](Self::load) holds the equivalent
/// external force (`N + 1` nodes) and couple (`N` elements) for this step.
/// Evaluation resets the accumulator first, so repeated calls with identical
/// state produce identical loads.
#[derive(Debug, Clone)]
pub struct FreeActuator {
    offsets: Vec<Vec3>,
    coefficients: PressureCoefficients,
    pressure_maximum: f64,
    pressure: f64,
    tangent: Vec<Vec3>,
    load: LoadAccumulator,
}

impl FreeActuator {
    /// Create an actuator from its offset field (one column per rod
    /// element), pressure polynomials, and maximum pressure.
    ///
    /// The pressure setpoint starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::TooFewElements`] for fewer than 2 offset
    /// columns and [`ActuationError::InvalidPressureMaximum`] for a
    /// non-positive or non-finite maximum.
    pub fn new(
        offsets: Vec<Vec3>,
        coefficients: PressureCoefficients,
        pressure_maximum: f64,
    ) -> Result<Self, ActuationError> {
        let n_elements = offsets.len();
        if n_elements < 2 {
            return Err(ActuationError::TooFewElements(n_elements));
        }
        if !(pressure_maximum.is_finite() && pressure_maximum > 0.0) {
            return Err(ActuationError::InvalidPressureMaximum(pressure_maximum));
        }
        Ok(Self {
            offsets,
            coefficients,
            pressure_maximum,
            pressure: 0.0,
            tangent: vec![Vec3::zeros(); n_elements],
            load: LoadAccumulator::new(n_elements),
        })
    }

    /// Build an actuator from a validated [`FreeConfig`] for a rod with
    /// `n_elements` elements and radius `rod_radius`.
    ///
    /// The uniform offset field is `offset_ratio * rod_radius` along the
    /// unit vector of the configured direction.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::Config`] if the config fails
    /// [`FreeConfig::validate`] (configs built in code bypass the TOML
    /// loader's validation), otherwise as [`Self::new`].
    pub fn from_config(
        config: &FreeConfig,
        n_elements: usize,
        rod_radius: f64,
    ) -> Result<Self, ActuationError> {
        config.validate()?;
        let direction = Vec3::new(
            config.offset_direction[0],
            config.offset_direction[1],
            config.offset_direction[2],
        );
        let offset = config.offset_ratio * rod_radius * direction.normalize();
        Self::new(
            vec![offset; n_elements],
            PressureCoefficients::new(
                config.force_coefficients.clone(),
                config.couple_coefficients.clone(),
            ),
            config.pressure_maximum,
        )
    }

    /// Number of rod elements this actuator is sized for.
    pub fn n_elements(&self) -> usize {
        self.offsets.len()
    }

    /// Current (clamped) pressure setpoint.
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Command a new pressure, clamped into `[0, pressure_maximum]` before
    /// storage. This is the only write path to the setpoint.
    pub fn set_pressure(&mut self, pressure: f64) {
        self.pressure = self.clamp_pressure(pressure);
    }

    /// This step's computed load buffers.
    pub fn load(&self) -> &LoadAccumulator {
        &self.load
    }

    /// Compute this actuator's load for the rod's current state.
    ///
    /// Resets the accumulator, computes the offset curve's local geometry,
    /// evaluates the pressure polynomials, forms the internal load, and
    /// converts it to the equivalent external nodal force and elemental
    /// couple.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::ElementCountMismatch`] if the rod's element
    /// count differs from this actuator's, or a geometry error if the rod
    /// state has degenerate local shear.
    pub fn evaluate(&mut self, rod: &RodState) -> Result<(), ActuationError> {
        let n_elements = self.n_elements();
        if rod.n_elements() != n_elements {
            return Err(ActuationError::ElementCountMismatch {
                expected: n_elements,
                actual: rod.n_elements(),
            });
        }
        self.load.reset();

        let local_shear = compute_local_shear(
            &self.offsets,
            &sigma_to_shear(&rod.sigma),
            &rod.kappa,
            &rod.effective_voronoi_lengths(),
        );
        self.tangent = compute_local_tangent(&local_shear)?;

        let force_density = self.coefficients.force_density(self.pressure, n_elements);
        let couple_density = self.coefficients.couple_density(self.pressure, n_elements);
        compute_internal_load(
            &self.offsets,
            &self.tangent,
            &force_density,
            &couple_density,
            &mut self.load,
        );
        internal_load_to_equivalent_external_load(rod, &mut self.load);
        Ok(())
    }
}

impl PressureLimited for FreeActuator {
    fn pressure_maximum(&self) -> f64 {
        self.pressure_maximum
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tendril_test_utils::{downward_rod, perturbed_rod};

    fn bending_actuator(n_elements: usize) -> FreeActuator {
        FreeActuator::new(
            vec![Vec3::new(0.01, 0.0, 0.0); n_elements],
            PressureCoefficients::new(vec![-8.0, 0.0], vec![0.0, 0.0]),
            30.0,
        )
        .unwrap()
    }

    #[test]
    fn construction_rejects_too_few_elements() {
        let result = FreeActuator::new(
            vec![Vec3::zeros(); 1],
            PressureCoefficients::default(),
            30.0,
        );
        assert!(matches!(result, Err(ActuationError::TooFewElements(1))));
    }

    #[test]
    fn construction_rejects_bad_pressure_maximum() {
        let result = FreeActuator::new(
            vec![Vec3::zeros(); 4],
            PressureCoefficients::default(),
            0.0,
        );
        assert!(matches!(
            result,
            Err(ActuationError::InvalidPressureMaximum(_))
        ));
    }

    #[test]
    fn pressure_setter_clamps_below_zero() {
        let mut actuator = bending_actuator(10);
        actuator.set_pressure(-5.0);
        assert_relative_eq!(actuator.pressure(), 0.0);
    }

    #[test]
    fn pressure_setter_clamps_above_maximum() {
        let mut actuator = bending_actuator(10);
        actuator.set_pressure(50.0);
        assert_relative_eq!(actuator.pressure(), 30.0);
    }

    #[test]
    fn pressure_setter_maps_nan_to_zero() {
        let mut actuator = bending_actuator(10);
        actuator.set_pressure(f64::NAN);
        // The stored setpoint must stay finite and in range for any command.
        assert!((0.0..=30.0).contains(&actuator.pressure()));
        assert_relative_eq!(actuator.pressure(), 0.0);
    }

    #[test]
    fn pressure_in_range_stored_unchanged() {
        let mut actuator = bending_actuator(10);
        actuator.set_pressure(12.5);
        assert_relative_eq!(actuator.pressure(), 12.5);
    }

    #[test]
    fn evaluate_rejects_element_count_mismatch() {
        let mut actuator = bending_actuator(10);
        let rod = downward_rod(12);
        assert!(matches!(
            actuator.evaluate(&rod),
            Err(ActuationError::ElementCountMismatch {
                expected: 10,
                actual: 12,
            })
        ));
    }

    #[test]
    fn zero_pressure_zero_coefficients_give_zero_internal_load() {
        let n = 10;
        let mut actuator = FreeActuator::new(
            vec![Vec3::new(0.01, 0.0, 0.0); n],
            PressureCoefficients::new(vec![0.0], vec![0.0]),
            30.0,
        )
        .unwrap();
        let rod = perturbed_rod(n, 5);

        actuator.evaluate(&rod).unwrap();

        assert!(
            actuator
                .load()
                .internal_force
                .iter()
                .all(|f| f.norm() == 0.0)
        );
        assert!(
            actuator
                .load()
                .internal_couple
                .iter()
                .all(|c| c.norm() == 0.0)
        );
    }

    #[test]
    fn straight_rod_internal_force_is_along_material_tangent() {
        let n = 10;
        let mut actuator = bending_actuator(n);
        actuator.set_pressure(10.0);
        let rod = downward_rod(n);

        actuator.evaluate(&rod).unwrap();

        // polyval([-8, 0], 10) = -80; straight rod tangent is material e3.
        for force in &actuator.load().internal_force {
            assert_relative_eq!(force.x, 0.0, epsilon = 1e-12);
            assert_relative_eq!(force.y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(force.z, -80.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn straight_rod_external_force_concentrates_at_ends() {
        let n = 10;
        let mut actuator = bending_actuator(n);
        actuator.set_pressure(10.0);
        let rod = downward_rod(n);

        actuator.evaluate(&rod).unwrap();

        let force = &actuator.load().equivalent_external_force;
        assert_relative_eq!(force[0].z, 80.0, epsilon = 1e-12);
        assert_relative_eq!(force[n].z, -80.0, epsilon = 1e-12);
        for node in 1..n {
            assert_relative_eq!(force[node].norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn evaluate_is_idempotent_for_fixed_state() {
        let n = 8;
        let mut actuator = bending_actuator(n);
        actuator.set_pressure(17.0);
        let rod = perturbed_rod(n, 23);

        actuator.evaluate(&rod).unwrap();
        let first = actuator.load().clone();
        actuator.evaluate(&rod).unwrap();

        assert_eq!(*actuator.load(), first);
    }

    #[test]
    fn from_config_matches_hand_built() {
        let config = FreeConfig {
            name: "bending".into(),
            offset_direction: [2.0, 0.0, 0.0],
            offset_ratio: 2.0 / 3.0,
            force_coefficients: vec![-8.0, 0.0],
            couple_coefficients: vec![0.0, 0.0],
            pressure_maximum: 30.0,
        };
        let n = 10;
        let mut from_config = FreeActuator::from_config(&config, n, 0.015).unwrap();
        let mut by_hand = FreeActuator::new(
            vec![Vec3::new(0.01, 0.0, 0.0); n],
            PressureCoefficients::new(vec![-8.0, 0.0], vec![0.0, 0.0]),
            30.0,
        )
        .unwrap();

        let rod = perturbed_rod(n, 31);
        from_config.set_pressure(10.0);
        by_hand.set_pressure(10.0);
        from_config.evaluate(&rod).unwrap();
        by_hand.evaluate(&rod).unwrap();

        let a = &from_config.load().equivalent_external_force;
        let b = &by_hand.load().equivalent_external_force;
        for (u, v) in a.iter().zip(b) {
            assert_relative_eq!(u.x, v.x, epsilon = 1e-12);
            assert_relative_eq!(u.y, v.y, epsilon = 1e-12);
            assert_relative_eq!(u.z, v.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn from_config_rejects_zero_offset_direction() {
        // A zero direction cannot be normalized; construction must fail
        // instead of producing NaN offsets.
        let config = FreeConfig {
            name: "broken".into(),
            offset_direction: [0.0, 0.0, 0.0],
            offset_ratio: 2.0 / 3.0,
            force_coefficients: vec![-8.0, 0.0],
            couple_coefficients: vec![0.0, 0.0],
            pressure_maximum: 30.0,
        };
        let result = FreeActuator::from_config(&config, 10, 0.015);
        assert!(matches!(result, Err(ActuationError::Config(_))));
    }

    #[test]
    fn pressure_limited_reports_maximum() {
        let actuator = bending_actuator(4);
        assert_relative_eq!(actuator.pressure_maximum(), 30.0);
    }

    // -- Send + Sync --

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn actuator_types_are_send_sync() {
        assert_send_sync::<FreeActuator>();
        assert_send_sync::<LoadAccumulator>();
        assert_send_sync::<PressureCoefficients>();
    }
}
