// tendril-core: Types, errors, and configuration for Tendril soft-rod actuation.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ActuationError, ConfigError, GeometryError, RodError, TendrilError};
pub use types::{Mat3, Vec3};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{FreeConfig, GroupConfig};
    pub use crate::error::{
        ActuationError, ConfigError, GeometryError, RodError, TendrilError,
    };
    pub use crate::types::{Mat3, Vec3};
}
