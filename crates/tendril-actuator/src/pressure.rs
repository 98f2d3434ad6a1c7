//! Pressure-to-load polynomial model and pressure clamping.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PressureCoefficients
// ---------------------------------------------------------------------------

/// Polynomial coefficients mapping pressure to axial load densities.
///
/// Two independent polynomials in pressure, coefficients highest degree
/// first: one for the axial-force density and one for the axial-couple
/// density. Each evaluates to a single scalar that is broadcast uniformly
/// across all rod elements of one actuator.
///
/// Immutable after construction; evaluation is a pure function of
/// `(pressure, coefficients)` and is defined for all real pressures.
/// Clamping to the actuator's pressure range is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PressureCoefficients {
    /// Axial-force polynomial, highest degree first.
    force: Vec<f64>,
    /// Axial-couple polynomial, highest degree first.
    couple: Vec<f64>,
}

impl PressureCoefficients {
    /// Create a coefficient pair. Empty vectors evaluate to zero.
    pub const fn new(force: Vec<f64>, couple: Vec<f64>) -> Self {
        Self { force, couple }
    }

    /// Axial-force density at `pressure`, broadcast to `n_elements` values.
    pub fn force_density(&self, pressure: f64, n_elements: usize) -> Vec<f64> {
        vec![polyval(&self.force, pressure); n_elements]
    }

    /// Axial-couple density at `pressure`, broadcast to `n_elements` values.
    pub fn couple_density(&self, pressure: f64, n_elements: usize) -> Vec<f64> {
        vec![polyval(&self.couple, pressure); n_elements]
    }
}

/// Evaluate a polynomial with coefficients ordered highest degree first.
///
/// Horner's method; an empty coefficient slice evaluates to zero.
fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc.mul_add(x, *c))
}

// ---------------------------------------------------------------------------
// PressureLimited
// ---------------------------------------------------------------------------

/// Anything with a maximum commanded pressure.
///
/// The provided [`clamp_pressure`](Self::clamp_pressure) is the single place
/// pressure setpoints are forced into range; every setter routes through it.
pub trait PressureLimited {
    /// Maximum commanded pressure \[psi\].
    fn pressure_maximum(&self) -> f64;

    /// Clamp a commanded pressure into `[0, pressure_maximum]`.
    ///
    /// A NaN command clamps to zero, so the stored setpoint is always a
    /// finite in-range value.
    fn clamp_pressure(&self, pressure: f64) -> f64 {
        if pressure.is_nan() {
            return 0.0;
        }
        pressure.clamp(0.0, self.pressure_maximum())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polyval_is_highest_degree_first() {
        // 2p² - 3p + 1 at p = 4 → 32 - 12 + 1 = 21.
        assert_relative_eq!(polyval(&[2.0, -3.0, 1.0], 4.0), 21.0);
    }

    #[test]
    fn polyval_empty_is_zero() {
        assert_relative_eq!(polyval(&[], 12.5), 0.0);
    }

    #[test]
    fn linear_force_density_broadcasts() {
        let coefficients = PressureCoefficients::new(vec![-8.0, 0.0], vec![0.0, 0.0]);
        let density = coefficients.force_density(10.0, 5);
        assert_eq!(density.len(), 5);
        for value in density {
            assert_relative_eq!(value, -80.0);
        }
    }

    #[test]
    fn couple_density_independent_of_force() {
        let coefficients = PressureCoefficients::new(vec![-8.0, 0.0], vec![0.1, 0.0]);
        let density = coefficients.couple_density(20.0, 3);
        for value in density {
            assert_relative_eq!(value, 2.0);
        }
    }

    #[test]
    fn zero_coefficients_give_zero_density_at_any_pressure() {
        let coefficients = PressureCoefficients::new(vec![0.0, 0.0], vec![0.0]);
        assert!(
            coefficients
                .force_density(17.3, 4)
                .iter()
                .all(|v| *v == 0.0)
        );
        assert!(
            coefficients
                .couple_density(17.3, 4)
                .iter()
                .all(|v| *v == 0.0)
        );
    }

    struct Limit(f64);
    impl PressureLimited for Limit {
        fn pressure_maximum(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn clamp_pressure_enforces_range() {
        let limit = Limit(30.0);
        assert_relative_eq!(limit.clamp_pressure(-5.0), 0.0);
        assert_relative_eq!(limit.clamp_pressure(12.0), 12.0);
        assert_relative_eq!(limit.clamp_pressure(50.0), 30.0);
    }

    #[test]
    fn clamp_pressure_maps_nan_to_zero() {
        let limit = Limit(30.0);
        let stored = limit.clamp_pressure(f64::NAN);
        assert!((0.0..=30.0).contains(&stored));
        assert_relative_eq!(stored, 0.0);
    }
}
