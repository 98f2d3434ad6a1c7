//! Per-actuator load buffers and internal→external load conversion.

use tendril_calculus::{
    batch_cross, lab_to_material, material_to_lab, midpoint_average, padded_difference,
    scale_columns, trapezoidal_quadrature,
};
use tendril_core::Vec3;
use tendril_rod::RodState;

// ---------------------------------------------------------------------------
// LoadAccumulator
// ---------------------------------------------------------------------------

/// Fixed-shape load buffers owned by one actuator.
///
/// For a rod with `N` elements:
/// - `internal_force`: `N` columns (axial force per element, material frame)
/// - `internal_couple`: `N - 1` columns (axial couple per voronoi point,
///   material frame)
/// - `equivalent_external_force`: `N + 1` columns (force to add at each node)
/// - `equivalent_external_couple`: `N` columns (couple to add at each element)
///
/// Allocated once at actuator construction, zeroed at the start of every
/// step's load computation, then fully overwritten within the step.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadAccumulator {
    /// Axial force per element, material frame.
    pub internal_force: Vec<Vec3>,
    /// Axial couple per voronoi point, material frame.
    pub internal_couple: Vec<Vec3>,
    /// Equivalent force at each rod node, lab frame.
    pub equivalent_external_force: Vec<Vec3>,
    /// Equivalent couple at each rod element, material frame.
    pub equivalent_external_couple: Vec<Vec3>,
}

impl LoadAccumulator {
    /// Allocate zeroed buffers sized for a rod with `n_elements` elements.
    pub fn new(n_elements: usize) -> Self {
        Self {
            internal_force: vec![Vec3::zeros(); n_elements],
            internal_couple: vec![Vec3::zeros(); n_elements - 1],
            equivalent_external_force: vec![Vec3::zeros(); n_elements + 1],
            equivalent_external_couple: vec![Vec3::zeros(); n_elements],
        }
    }

    /// Number of rod elements these buffers are sized for.
    pub fn n_elements(&self) -> usize {
        self.internal_force.len()
    }

    /// Zero all four buffers.
    pub fn reset(&mut self) {
        self.internal_force.fill(Vec3::zeros());
        self.internal_couple.fill(Vec3::zeros());
        self.equivalent_external_force.fill(Vec3::zeros());
        self.equivalent_external_couple.fill(Vec3::zeros());
    }
}

// ---------------------------------------------------------------------------
// Internal load
// ---------------------------------------------------------------------------

/// Couple induced by a per-element force acting at an offset from the
/// centerline, averaged onto the voronoi points: `Average(offset × force)`.
///
/// Output has `N - 1` columns, matching `internal_couple`.
pub fn force_induced_couple(offsets: &[Vec3], force: &[Vec3]) -> Vec<Vec3> {
    midpoint_average(&batch_cross(offsets, force))
}

/// Fill `internal_force` / `internal_couple` from the per-element load
/// densities and the actuator's local tangent.
///
/// The force is the density along the tangent. The couple is the density
/// along the tangent averaged onto voronoi points, plus the
/// [`force_induced_couple`] of the internal force across the offset field.
pub fn compute_internal_load(
    offsets: &[Vec3],
    tangent: &[Vec3],
    force_density: &[f64],
    couple_density: &[f64],
    load: &mut LoadAccumulator,
) {
    for ((force, t), fd) in load
        .internal_force
        .iter_mut()
        .zip(tangent)
        .zip(force_density)
    {
        *force = *fd * t;
    }
    let axial_couple = scale_columns(tangent, couple_density);
    let averaged = midpoint_average(&axial_couple);
    let induced = force_induced_couple(offsets, &load.internal_force);
    for ((couple, avg), ind) in load
        .internal_couple
        .iter_mut()
        .zip(&averaged)
        .zip(&induced)
    {
        *couple = avg + ind;
    }
}

// ---------------------------------------------------------------------------
// Internal → equivalent external load
// ---------------------------------------------------------------------------

/// Convert the accumulator's internal load (actuator material frame) into
/// the equivalent external nodal force and elemental couple on the rod.
///
/// ```text
/// external_force  = Difference( material_to_lab(directors, internal_force) )
/// external_couple = Difference(internal_couple)
///                 + Quadrature( (kappa × internal_couple) * rest_voronoi_lengths )
///                 + ( lab_to_material(directors, tangents * dilatation)
///                     × internal_force ) * rest_lengths
/// ```
///
/// Output shapes are `N + 1` nodes and `N` elements, exactly what the rod
/// engine adds to its own external load fields.
pub fn internal_load_to_equivalent_external_load(rod: &RodState, load: &mut LoadAccumulator) {
    let lab_force = material_to_lab(&rod.directors, &load.internal_force);
    load.equivalent_external_force
        .copy_from_slice(&padded_difference(&lab_force));

    let couple_difference = padded_difference(&load.internal_couple);
    let transport = trapezoidal_quadrature(&scale_columns(
        &batch_cross(&rod.kappa, &load.internal_couple),
        &rod.rest_voronoi_lengths,
    ));
    let stretched_tangents = scale_columns(&rod.tangents, &rod.dilatation);
    let twist = batch_cross(
        &lab_to_material(&rod.directors, &stretched_tangents),
        &load.internal_force,
    );
    for (i, couple) in load.equivalent_external_couple.iter_mut().enumerate() {
        *couple = couple_difference[i] + transport[i] + rod.rest_lengths[i] * twist[i];
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
