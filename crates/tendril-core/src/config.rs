//! TOML-backed configuration for actuator groups.
//!
//! The orchestration layer describes a set of FREE actuators in a TOML file;
//! the actuator crate turns a validated [`GroupConfig`] into live actuators
//! once the host rod's element count and radius are known.
//!
//! # Example
//!
//! ```toml
//! [[actuators]]
//! name = "bending"
//! offset_direction = [1.0, 0.0, 0.0]
//! offset_ratio = 0.5358983848622454
//! force_coefficients = [-8.0, 0.0]
//! couple_coefficients = [0.0, 0.0]
//! pressure_maximum = 30.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_pressure_maximum() -> f64 {
    30.0
}

fn default_name() -> String {
    "free".into()
}

// ---------------------------------------------------------------------------
// FreeConfig
// ---------------------------------------------------------------------------

/// Configuration for a single FREE actuator.
///
/// The actuator's material-frame offset field is uniform along the rod:
/// `offset_ratio * rod_radius` along the unit vector of `offset_direction`,
/// repeated for every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeConfig {
    /// Human-readable actuator name (default: "free").
    #[serde(default = "default_name")]
    pub name: String,

    /// Material-frame direction of the offset from the rod centerline.
    /// Need not be unit-norm; it is normalized when the actuator is built.
    pub offset_direction: [f64; 3],

    /// Offset magnitude as a fraction of the rod radius.
    pub offset_ratio: f64,

    /// Axial-force polynomial in pressure, highest degree first.
    pub force_coefficients: Vec<f64>,

    /// Axial-couple polynomial in pressure, highest degree first.
    pub couple_coefficients: Vec<f64>,

    /// Maximum commanded pressure \[psi\] (default: 30.0).
    #[serde(default = "default_pressure_maximum")]
    pub pressure_maximum: f64,
}

impl FreeConfig {
    /// Validate this actuator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero or non-finite offset
    /// direction, a negative or non-finite offset ratio, empty coefficient
    /// vectors, or a non-positive `pressure_maximum`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dir_norm_sq: f64 = self.offset_direction.iter().map(|c| c * c).sum();
        if !dir_norm_sq.is_finite() || dir_norm_sq == 0.0 {
            return Err(invalid(
                "offset_direction",
                "must be finite and nonzero",
            ));
        }
        if !self.offset_ratio.is_finite() || self.offset_ratio < 0.0 {
            return Err(invalid("offset_ratio", "must be finite and >= 0"));
        }
        if self.force_coefficients.is_empty() {
            return Err(invalid("force_coefficients", "must not be empty"));
        }
        if self.couple_coefficients.is_empty() {
            return Err(invalid("couple_coefficients", "must not be empty"));
        }
        if !self.pressure_maximum.is_finite() || self.pressure_maximum <= 0.0 {
            return Err(invalid("pressure_maximum", "must be finite and > 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// GroupConfig
// ---------------------------------------------------------------------------

/// Configuration for a full actuator group sharing one rod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Member actuators, in application order.
    #[serde(default)]
    pub actuators: Vec<FreeConfig>,
}

impl GroupConfig {
    /// Parse and validate a group configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on parse failure or
    /// [`ConfigError::InvalidValue`] on validation failure.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a group configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate every member actuator.
    ///
    /// # Errors
    ///
    /// Returns the first member's [`ConfigError`], if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for actuator in &self.actuators {
            actuator.validate()?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
