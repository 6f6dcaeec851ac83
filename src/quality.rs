// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint-quality predicates.
//!
//! Both predicates treat a row (one joint) as an atomic unit: any single
//! failing coordinate invalidates the whole joint. Inputs are `(n, dim)`
//! arrays where rows are joints or flattened samples×joints.

use ndarray::{Array1, ArrayView2, Axis};

/// Sentinel threshold below which a coordinate marks a missing joint.
const VALID_THRESHOLD: f32 = -1e6;

/// Flag joints whose normalized coordinates all lie strictly inside (0, 1).
///
/// # Arguments
///
/// * `joints` - Array of shape `(n, dim)`.
///
/// # Returns
///
/// * An array of length `n` with 1 for visible joints and 0 otherwise.
#[must_use]
pub fn get_visible_joints(joints: ArrayView2<'_, f32>) -> Array1<u8> {
    joints.map_axis(Axis(1), |row| {
        u8::from(row.iter().all(|&v| v > 0.0 && v < 1.0))
    })
}

/// Flag joints not carrying the missing-data sentinel.
///
/// # Arguments
///
/// * `joints` - Array of shape `(n, dim)`.
///
/// # Returns
///
/// * An array of length `n` with 1 for valid joints and 0 otherwise.
#[must_use]
pub fn get_valid_joints(joints: ArrayView2<'_, f32>) -> Array1<u8> {
    joints.map_axis(Axis(1), |row| {
        u8::from(row.iter().all(|&v| v > VALID_THRESHOLD))
    })
}
