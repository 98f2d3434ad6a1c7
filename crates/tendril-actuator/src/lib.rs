//! Pressure-driven FREE actuation loads for discretized elastic rods.
//!
//! A FREE (Fluidic Rotary/Bending Elastomeric Element) is a pressure-driven
//! soft actuator bonded along a rod at a material-frame offset from the
//! centerline. Pressurizing it produces an axial force and couple along the
//! actuator's own line of action; this crate converts that internal load
//! into the per-node force and per-element couple the host rod engine adds
//! to its external load fields.
//!
//! # Load Pipeline
//!
//! ```text
//! pressure → polynomial model → internal force/couple → equivalent external load
//!            (per element)      (material frame)        (rod nodes/elements)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use tendril_actuator::prelude::*;
//! use tendril_core::Vec3;
//! use tendril_rod::RodState;
//!
//! let n_elements = 10;
//! let rod = RodState::straight(
//!     n_elements,
//!     Vec3::new(0.0, 0.0, -1.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     0.16,
//! )
//! .unwrap();
//!
//! let offsets = vec![Vec3::new(0.01, 0.0, 0.0); n_elements];
//! let coefficients = PressureCoefficients::new(vec![-8.0, 0.0], vec![0.0, 0.0]);
//! let actuator = FreeActuator::new(offsets, coefficients, 30.0).unwrap();
//!
//! let mut group = ActuatorGroup::new(vec![actuator], n_elements).unwrap();
//! group.get_mut(0).unwrap().set_pressure(10.0);
//!
//! let mut rod = rod;
//! group.apply(&mut rod).unwrap();
//! ```

pub mod free;
pub mod geometry;
pub mod group;
pub mod load;
pub mod presets;
pub mod pressure;

pub use free::FreeActuator;
pub use geometry::{compute_local_shear, compute_local_tangent};
pub use group::ActuatorGroup;
pub use load::LoadAccumulator;
pub use pressure::{PressureCoefficients, PressureLimited};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::free::FreeActuator;
    pub use crate::geometry::{compute_local_shear, compute_local_tangent};
    pub use crate::group::ActuatorGroup;
    pub use crate::load::LoadAccumulator;
    pub use crate::presets;
    pub use crate::pressure::{PressureCoefficients, PressureLimited};
}
