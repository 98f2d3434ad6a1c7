//! Ordered collections of FREE actuators sharing one rod.

use tendril_core::config::GroupConfig;
use tendril_core::error::ActuationError;
use tendril_rod::RodState;

use crate::free::FreeActuator;

/// An ordered, fixed collection of [`FreeActuator`]s targeting the same rod.
///
/// Per step: evaluate each member in order, then superpose its equivalent
/// external force/couple into the rod's external load accumulators. Members
/// are independent, so the summed load equals the sum of each member's load
/// computed alone (up to floating-point rounding).
#[derive(Debug, Clone)]
pub struct ActuatorGroup {
    actuators: Vec<FreeActuator>,
    n_elements: usize,
}

impl ActuatorGroup {
    /// Create a group for a rod with `n_elements` elements.
    ///
    /// An empty actuator list is valid and contributes zero load.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::ElementCountMismatch`] if any member is
    /// sized for a different element count; the per-step path can then never
    /// see a misshapen actuator.
    pub fn new(
        actuators: Vec<FreeActuator>,
        n_elements: usize,
    ) -> Result<Self, ActuationError> {
        for actuator in &actuators {
            if actuator.n_elements() != n_elements {
                return Err(ActuationError::ElementCountMismatch {
                    expected: n_elements,
                    actual: actuator.n_elements(),
                });
            }
        }
        Ok(Self {
            actuators,
            n_elements,
        })
    }

    /// Build a group from a validated [`GroupConfig`].
    ///
    /// # Errors
    ///
    /// As [`Self::new`], plus any member construction error.
    pub fn from_config(
        config: &GroupConfig,
        n_elements: usize,
        rod_radius: f64,
    ) -> Result<Self, ActuationError> {
        let actuators = config
            .actuators
            .iter()
            .map(|c| FreeActuator::from_config(c, n_elements, rod_radius))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(actuators, n_elements)
    }

    /// Number of member actuators.
    pub fn len(&self) -> usize {
        self.actuators.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.actuators.is_empty()
    }

    /// Element count this group is sized for.
    pub fn n_elements(&self) -> usize {
        self.n_elements
    }

    /// Member actuator by position.
    pub fn get(&self, index: usize) -> Option<&FreeActuator> {
        self.actuators.get(index)
    }

    /// Mutable member actuator by position (e.g. to set its pressure).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FreeActuator> {
        self.actuators.get_mut(index)
    }

    /// Iterate over member actuators in application order.
    pub fn iter(&self) -> impl Iterator<Item = &FreeActuator> {
        self.actuators.iter()
    }

    /// Command one pressure setpoint per member, in order. Each value is
    /// clamped by its actuator's own setter.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::PressureCountMismatch`] if the slice length
    /// differs from the member count.
    pub fn set_pressures(&mut self, pressures: &[f64]) -> Result<(), ActuationError> {
        if pressures.len() != self.actuators.len() {
            return Err(ActuationError::PressureCountMismatch {
                expected: self.actuators.len(),
                actual: pressures.len(),
            });
        }
        for (actuator, pressure) in self.actuators.iter_mut().zip(pressures) {
            actuator.set_pressure(*pressure);
        }
        Ok(())
    }

    /// Evaluate every member against the rod's current state and add each
    /// equivalent external load into the rod's accumulators (summation, not
    /// overwrite).
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::ElementCountMismatch`] if the rod's element
    /// count differs from the group's, or any member's evaluation error.
    pub fn apply(&mut self, rod: &mut RodState) -> Result<(), ActuationError> {
        if rod.n_elements() != self.n_elements {
            return Err(ActuationError::ElementCountMismatch {
                expected: self.n_elements,
                actual: rod.n_elements(),
            });
        }
        for actuator in &mut self.actuators {
            actuator.evaluate(rod)?;
            let load = actuator.load();
            for (node, force) in rod
                .external_forces
                .iter_mut()
                .zip(&load.equivalent_external_force)
            {
                *node += force;
            }
            for (element, couple) in rod
                .external_torques
                .iter_mut()
                .zip(&load.equivalent_external_couple)
            {
                *element += couple;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
