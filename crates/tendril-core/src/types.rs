//! Shared math types for the Tendril crates.
//!
//! All rod and actuator quantities are batches of per-element (or per-node,
//! or per-voronoi-point) 3-vectors, stored as `Vec<Vec3>` with one entry per
//! column of the corresponding continuum field. Director frames are one
//! [`Mat3`] per element, rows holding the material axes `d1, d2, d3`, so the
//! matrix itself rotates lab-frame vectors into the material frame.

/// A 3-vector of `f64` (one column of a batched field).
pub type Vec3 = nalgebra::Vector3<f64>;

/// A 3×3 matrix of `f64` (one director frame).
pub type Mat3 = nalgebra::Matrix3<f64>;
