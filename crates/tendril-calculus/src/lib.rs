//! Discrete-calculus and batched frame kernels over rod element meshes.
//!
//! A discretized rod with `N` elements carries fields at three resolutions:
//! per node (`N + 1` columns), per element (`N`), and per voronoi point
//! (`N - 1`, the interior boundaries between adjacent elements). The kernels
//! here move batched 3-vector fields between those resolutions and apply
//! per-column algebra (cross products, director-frame rotations).
//!
//! All functions are pure and allocate their output; no kernel reads or
//! writes anything outside its arguments.

pub mod frames;
pub mod kernels;

pub use frames::{batch_cross, lab_to_material, material_to_lab, scale_columns};
pub use kernels::{
    adjacent_difference, midpoint_average, padded_difference, trapezoidal_quadrature,
};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::frames::{batch_cross, lab_to_material, material_to_lab, scale_columns};
    pub use crate::kernels::{
        adjacent_difference, midpoint_average, padded_difference, trapezoidal_quadrature,
    };
}
