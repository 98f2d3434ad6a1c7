//! Per-column algebra: cross products, director rotations, scalar scaling.
//!
//! A director frame is a [`Mat3`] whose rows are the material axes
//! `d1, d2, d3` expressed in the lab frame. The matrix therefore rotates
//! lab vectors into the material frame; its transpose rotates back.

use tendril_core::{Mat3, Vec3};

/// Column-wise cross product of two matched-length batches.
///
/// # Panics
///
/// Panics if the batches differ in length (shape invariants are enforced at
/// actuator construction, so a mismatch here is a caller bug).
pub fn batch_cross(a: &[Vec3], b: &[Vec3]) -> Vec<Vec3> {
    assert_eq!(a.len(), b.len(), "batch_cross length mismatch");
    a.iter().zip(b).map(|(u, v)| u.cross(v)).collect()
}

/// Rotate lab-frame vectors into each element's material frame:
/// `out[i] = D[i] * v[i]`.
///
/// # Panics
///
/// Panics if the batches differ in length.
pub fn lab_to_material(directors: &[Mat3], lab_vectors: &[Vec3]) -> Vec<Vec3> {
    assert_eq!(
        directors.len(),
        lab_vectors.len(),
        "lab_to_material length mismatch"
    );
    directors
        .iter()
        .zip(lab_vectors)
        .map(|(d, v)| d * v)
        .collect()
}

/// Rotate material-frame vectors into the lab frame:
/// `out[i] = D[i]ᵀ * v[i]`.
///
/// # Panics
///
/// Panics if the batches differ in length.
pub fn material_to_lab(directors: &[Mat3], material_vectors: &[Vec3]) -> Vec<Vec3> {
    assert_eq!(
        directors.len(),
        material_vectors.len(),
        "material_to_lab length mismatch"
    );
    directors
        .iter()
        .zip(material_vectors)
        .map(|(d, v)| d.transpose() * v)
        .collect()
}

/// Scale each column by the matching scalar: `out[i] = s[i] * v[i]`.
///
/// # Panics
///
/// Panics if the batches differ in length.
pub fn scale_columns(vectors: &[Vec3], scalars: &[f64]) -> Vec<Vec3> {
    assert_eq!(
        vectors.len(),
        scalars.len(),
        "scale_columns length mismatch"
    );
    vectors
        .iter()
        .zip(scalars)
        .map(|(v, s)| *s * v)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
