use thiserror::Error;

/// Top-level error type for the Tendril crates.
#[derive(Debug, Error)]
pub enum TendrilError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rod state error: {0}")]
    Rod(#[from] RodError),

    #[error("Actuation error: {0}")]
    Actuation(#[from] ActuationError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Rod state construction errors.
#[derive(Debug, Error)]
pub enum RodError {
    #[error("Rod needs at least 2 elements, got {0}")]
    TooFewElements(usize),

    #[error("Rod base length must be positive, got {0}")]
    InvalidLength(f64),

    #[error("Rod {name} vector must be unit-norm, got norm {norm}")]
    NonUnitVector { name: &'static str, norm: f64 },

    #[error("Rod direction and normal must be orthogonal (dot product {0})")]
    NotOrthogonal(f64),
}

/// Geometry kernel errors.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A local-shear column has (near-)zero norm, so no tangent direction
    /// exists for that element. Indicates a collapsed element in the host
    /// rod state.
    #[error("Degenerate local shear at element {element}: norm {norm} below tolerance")]
    DegenerateShear { element: usize, norm: f64 },
}

/// Actuator and actuator-group errors.
#[derive(Debug, Error)]
pub enum ActuationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Actuator needs at least 2 elements, got {0}")]
    TooFewElements(usize),

    #[error("pressure_maximum must be positive and finite, got {0}")]
    InvalidPressureMaximum(f64),

    #[error("Element count mismatch: actuator sized for {expected}, rod has {actual}")]
    ElementCountMismatch { expected: usize, actual: usize },

    #[error("Pressure count mismatch: group has {expected} actuators, got {actual} setpoints")]
    PressureCountMismatch { expected: usize, actual: usize },

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
