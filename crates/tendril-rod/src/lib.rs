//! Rod deformation state surface consumed by the Tendril actuation core.
//!
//! The rod's equations of motion, time stepping, and state evolution belong
//! to the host rod engine. This crate holds only the read surface actuators
//! need each step (directors, strains, dilatations, rest geometry) plus the
//! external force/torque accumulators actuator groups sum into.

pub mod state;

pub use state::{RodState, sigma_to_shear};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::state::{RodState, sigma_to_shear};
}
