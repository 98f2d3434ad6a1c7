//! Resolution-shifting kernels: average, difference, and quadrature.
//!
//! Shape conventions (input length `n`):
//! - [`midpoint_average`]: `n → n - 1`
//! - [`adjacent_difference`]: `n → n - 1`
//! - [`padded_difference`]: `n → n + 1` (zero ghost columns at both ends)
//! - [`trapezoidal_quadrature`]: `n → n + 1` (zero ghost columns at both ends)
//!
//! `padded_difference` and `trapezoidal_quadrature` are duals: the first
//! turns a per-element field into net per-node values, the second spreads a
//! voronoi-point field back onto elements.

use tendril_core::Vec3;

/// Midpoint average of adjacent columns: `out[i] = (v[i] + v[i + 1]) / 2`.
///
/// Maps an element field to the voronoi points (or a node field to the
/// elements). Output has one column fewer than the input.
pub fn midpoint_average(vectors: &[Vec3]) -> Vec<Vec3> {
    vectors
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]))
        .collect()
}

/// First difference of adjacent columns: `out[i] = v[i + 1] - v[i]`.
///
/// Output has one column fewer than the input.
pub fn adjacent_difference(vectors: &[Vec3]) -> Vec<Vec3> {
    vectors.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Zero-boundary-padded first difference: `out[i] = v[i] - v[i - 1]` with
/// ghost columns `v[-1] = v[n] = 0`.
///
/// Output has one column more than the input, so a per-element internal
/// load becomes the net load at each node: `out[0] = v[0]`,
/// `out[n] = -v[n - 1]`, interior columns are plain differences.
pub fn padded_difference(vectors: &[Vec3]) -> Vec<Vec3> {
    let n = vectors.len();
    let mut output = vec![Vec3::zeros(); n + 1];
    output[0] = vectors[0];
    for i in 1..n {
        output[i] = vectors[i] - vectors[i - 1];
    }
    output[n] = -vectors[n - 1];
    output
}

/// Two-point trapezoidal quadrature with zero ghost columns:
/// `out[i] = (v[i - 1] + v[i]) / 2` with `v[-1] = v[n] = 0`.
///
/// Output has one column more than the input; a voronoi-point integrand is
/// spread back onto the adjacent elements with half weight at each boundary.
pub fn trapezoidal_quadrature(vectors: &[Vec3]) -> Vec<Vec3> {
    let n = vectors.len();
    let mut output = vec![Vec3::zeros(); n + 1];
    output[0] = 0.5 * vectors[0];
    for i in 1..n {
        output[i] = 0.5 * (vectors[i - 1] + vectors[i]);
    }
    output[n] = 0.5 * vectors[n - 1];
    output
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
