// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Layout conversion functions.
//!
//! All conversions follow the same contract: validate the input shape before
//! reading any data, select rows through the registered joint-index table,
//! truncate to the first `target_dim` coordinate columns, and return a fresh
//! array that never aliases the input. Sequences are converted sample by
//! sample along the leading axis with no cross-sample state.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis, s};

use crate::error::{LayoutError, Result};
use crate::layout::{Layout, PA17J3D, PeerFormat};

/// Check a single-pose array against a layout's declared shape.
fn check_pose_shape(pose: ArrayView2<'_, f32>, layout: &Layout) -> Result<()> {
    if pose.dim() != (layout.num_joints, layout.dim) {
        return Err(LayoutError::ShapeMismatch(format!(
            "expected ({}, {}) for {}, got {:?}",
            layout.num_joints,
            layout.dim,
            layout.name,
            pose.dim()
        )));
    }
    Ok(())
}

/// Check that the requested output dimensionality is available in the input.
fn check_target_dim(available: usize, target_dim: usize) -> Result<()> {
    if target_dim == 0 || target_dim > available {
        return Err(LayoutError::ShapeMismatch(format!(
            "target dim {target_dim} not in 1..={available}"
        )));
    }
    Ok(())
}

/// Select rows of `pose` by `table` and keep the first `target_dim` columns.
fn select_joints(pose: ArrayView2<'_, f32>, table: &[usize], target_dim: usize) -> Array2<f32> {
    pose.select(Axis(0), table)
        .slice(s![.., ..target_dim])
        .to_owned()
}

/// Project a pose onto a peer format using the source layout's `map_to` table.
///
/// # Arguments
///
/// * `pose` - Array of shape `(source.num_joints, source.dim)`.
/// * `source` - Layout the pose is expressed in.
/// * `peer` - Target joint convention.
/// * `target_dim` - Number of coordinate columns to keep.
///
/// # Returns
///
/// * A fresh array of shape `(table_len, target_dim)` in the peer's ordering.
///
/// # Errors
///
/// Returns [`LayoutError::ShapeMismatch`] on a shape violation and
/// [`LayoutError::MissingMapping`] when the source layout has no table for
/// `peer`.
pub fn project_pose(
    pose: ArrayView2<'_, f32>,
    source: &Layout,
    peer: PeerFormat,
    target_dim: usize,
) -> Result<Array2<f32>> {
    check_pose_shape(pose, source)?;
    check_target_dim(source.dim, target_dim)?;
    let projection = source.projection_to(peer)?;
    Ok(select_joints(pose, projection.table, target_dim))
}

/// Adopt a pose from a peer format using the target layout's `map_from` table.
///
/// # Arguments
///
/// * `pose` - Array with `peer.num_joints()` rows.
/// * `peer` - Joint convention the pose is expressed in.
/// * `target` - Layout to project onto.
/// * `target_dim` - Number of coordinate columns to keep.
///
/// # Returns
///
/// * A fresh array of shape `(target.num_joints, target_dim)`.
///
/// # Errors
///
/// Returns [`LayoutError::ShapeMismatch`] on a shape violation and
/// [`LayoutError::MissingMapping`] when the target layout has no table for
/// `peer`.
pub fn adopt_pose(
    pose: ArrayView2<'_, f32>,
    peer: PeerFormat,
    target: &Layout,
    target_dim: usize,
) -> Result<Array2<f32>> {
    if pose.nrows() != peer.num_joints() {
        return Err(LayoutError::ShapeMismatch(format!(
            "expected {} rows for {}, got {}",
            peer.num_joints(),
            peer.name(),
            pose.nrows()
        )));
    }
    check_target_dim(pose.ncols(), target_dim)?;
    let projection = target.projection_from(peer)?;
    Ok(select_joints(pose, projection.table, target_dim))
}

/// Mirror a pose horizontally by permuting joints through the flip table.
///
/// Coordinate values are untouched; only the left/right joint correspondence
/// is swapped. Callers negating an axis do so separately.
///
/// # Errors
///
/// Returns [`LayoutError::ShapeMismatch`] on a shape violation and
/// [`LayoutError::MissingMapping`] when the layout defines no flip table.
pub fn hflip_pose(pose: ArrayView2<'_, f32>, layout: &Layout) -> Result<Array2<f32>> {
    check_pose_shape(pose, layout)?;
    let table = layout.hflip_table()?;
    Ok(pose.select(Axis(0), table))
}

/// Apply [`project_pose`] to every sample along the leading axis.
///
/// # Errors
///
/// Same conditions as [`project_pose`], checked once against the trailing
/// shape before any sample is converted.
pub fn project_pose_sequence(
    poses: ArrayView3<'_, f32>,
    source: &Layout,
    peer: PeerFormat,
    target_dim: usize,
) -> Result<Array3<f32>> {
    let (num_samples, num_joints, dim) = poses.dim();
    if (num_joints, dim) != (source.num_joints, source.dim) {
        return Err(LayoutError::ShapeMismatch(format!(
            "expected (_, {}, {}) for {}, got {:?}",
            source.num_joints,
            source.dim,
            source.name,
            poses.dim()
        )));
    }
    check_target_dim(source.dim, target_dim)?;
    let projection = source.projection_to(peer)?;

    let mut out = Array3::zeros((num_samples, projection.table.len(), target_dim));
    for (i, pose) in poses.outer_iter().enumerate() {
        out.index_axis_mut(Axis(0), i)
            .assign(&select_joints(pose, projection.table, target_dim));
    }
    Ok(out)
}

/// Apply [`adopt_pose`] to every sample along the leading axis.
///
/// # Errors
///
/// Same conditions as [`adopt_pose`], checked once against the trailing shape
/// before any sample is converted.
pub fn adopt_pose_sequence(
    poses: ArrayView3<'_, f32>,
    peer: PeerFormat,
    target: &Layout,
    target_dim: usize,
) -> Result<Array3<f32>> {
    let (num_samples, num_joints, dim) = poses.dim();
    if num_joints != peer.num_joints() {
        return Err(LayoutError::ShapeMismatch(format!(
            "expected (_, {}, _) for {}, got {:?}",
            peer.num_joints(),
            peer.name(),
            poses.dim()
        )));
    }
    check_target_dim(dim, target_dim)?;
    let projection = target.projection_from(peer)?;

    let mut out = Array3::zeros((num_samples, target.num_joints, target_dim));
    for (i, pose) in poses.outer_iter().enumerate() {
        out.index_axis_mut(Axis(0), i)
            .assign(&select_joints(pose, projection.table, target_dim));
    }
    Ok(out)
}

/// Convert a PA17J3D pose to PA16J, keeping the first `target_dim` columns.
///
/// Canonical conversion of the pipeline: drops the mid-spine joint at index
/// 16 and truncates the coordinates.
///
/// # Errors
///
/// Returns [`LayoutError::ShapeMismatch`] if `pose` is not `(17, 3)` or
/// `target_dim` is not 1, 2, or 3.
pub fn convert_pose(pose: ArrayView2<'_, f32>, target_dim: usize) -> Result<Array2<f32>> {
    project_pose(pose, &PA17J3D, PeerFormat::Pa16j, target_dim)
}

/// Convert a sequence of PA17J3D poses to PA16J, sample by sample.
///
/// # Errors
///
/// Returns [`LayoutError::ShapeMismatch`] if `poses` is not `(_, 17, 3)` or
/// `target_dim` is not 1, 2, or 3.
pub fn convert_pose_sequence(
    poses: ArrayView3<'_, f32>,
    target_dim: usize,
) -> Result<Array3<f32>> {
    project_pose_sequence(poses, &PA17J3D, PeerFormat::Pa16j, target_dim)
}
