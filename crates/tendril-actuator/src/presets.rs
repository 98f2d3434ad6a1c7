//! Actuator presets for the BR2 soft arm.
//!
//! The BR2 arm carries three FREEs moulded around a central rod: one bending
//! actuator and an antagonistic pair of rotation actuators, their lines of
//! action spaced 120° apart around the cross-section. Coefficients are the
//! identified linear pressure fits for the physical arm.

use tendril_core::Vec3;
use tendril_core::error::ActuationError;

use crate::free::FreeActuator;
use crate::group::ActuatorGroup;
use crate::pressure::PressureCoefficients;

/// Offset of each FREE's line of action from the rod centerline, as a
/// fraction of the rod radius: `2 / (2 + √3)` for three circles packed
/// against a central one.
pub const OFFSET_RATIO: f64 = 2.0 / (2.0 + 1.732_050_807_568_877_2);

/// Default maximum pressure for all BR2 FREEs \[psi\].
pub const PRESSURE_MAXIMUM: f64 = 30.0;

fn uniform_offsets(n_elements: usize, rod_radius: f64, direction: Vec3) -> Vec<Vec3> {
    vec![OFFSET_RATIO * rod_radius * direction; n_elements]
}

/// Bending FREE: offset along material `+d1`, axial force linear in
/// pressure (`-8 p`), no direct couple.
///
/// # Errors
///
/// Returns [`ActuationError::TooFewElements`] for `n_elements < 2`.
pub fn bending(n_elements: usize, rod_radius: f64) -> Result<FreeActuator, ActuationError> {
    FreeActuator::new(
        uniform_offsets(n_elements, rod_radius, Vec3::new(1.0, 0.0, 0.0)),
        PressureCoefficients::new(vec![-8.0, 0.0], vec![0.0, 0.0]),
        PRESSURE_MAXIMUM,
    )
}

/// Clockwise rotation FREE: offset at 120° from the bending direction,
/// axial couple linear in pressure (`0.1 p`), no direct force.
///
/// # Errors
///
/// Returns [`ActuationError::TooFewElements`] for `n_elements < 2`.
pub fn rotation_cw(n_elements: usize, rod_radius: f64) -> Result<FreeActuator, ActuationError> {
    let direction = Vec3::new(
        (120.0_f64).to_radians().cos(),
        (120.0_f64).to_radians().sin(),
        0.0,
    );
    FreeActuator::new(
        uniform_offsets(n_elements, rod_radius, direction),
        PressureCoefficients::new(vec![0.0, 0.0], vec![0.1, 0.0]),
        PRESSURE_MAXIMUM,
    )
}

/// Counter-clockwise rotation FREE: offset at 240°, axial couple `-0.1 p`.
///
/// # Errors
///
/// Returns [`ActuationError::TooFewElements`] for `n_elements < 2`.
pub fn rotation_ccw(n_elements: usize, rod_radius: f64) -> Result<FreeActuator, ActuationError> {
    let direction = Vec3::new(
        (240.0_f64).to_radians().cos(),
        (240.0_f64).to_radians().sin(),
        0.0,
    );
    FreeActuator::new(
        uniform_offsets(n_elements, rod_radius, direction),
        PressureCoefficients::new(vec![0.0, 0.0], vec![-0.1, 0.0]),
        PRESSURE_MAXIMUM,
    )
}

/// The full BR2 group: bending, rotation CW, rotation CCW, in that order.
///
/// # Errors
///
/// Returns [`ActuationError::TooFewElements`] for `n_elements < 2`.
pub fn br2_group(n_elements: usize, rod_radius: f64) -> Result<ActuatorGroup, ActuationError> {
    ActuatorGroup::new(
        vec![
            bending(n_elements, rod_radius)?,
            rotation_cw(n_elements, rod_radius)?,
            rotation_ccw(n_elements, rod_radius)?,
        ],
        n_elements,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
