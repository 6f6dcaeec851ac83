// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose-list serialization.
//!
//! The pose-list format is plain text: one sample per line, fields
//! comma-separated, joint-major then coordinate order, each field fixed-point
//! with 6 fractional digits. No header, no trailing metadata.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use ndarray::ArrayView3;

use crate::error::Result;
use crate::verbose;

/// Write a batch of poses to a text file.
///
/// Each sample's joints and coordinates are flattened into one row of
/// `num_joints * dim` comma-delimited `%.6f` fields. The full output is
/// buffered in memory and written in a single call, so no partial rows are
/// visible on success; an existing file at `path` is overwritten.
///
/// # Arguments
///
/// * `path` - Output file path.
/// * `poses` - Array of shape `(num_samples, num_joints, dim)`.
///
/// # Errors
///
/// Returns [`crate::LayoutError::Io`] if the path is not writable.
pub fn write_pose_list<P: AsRef<Path>>(path: P, poses: ArrayView3<'_, f32>) -> Result<()> {
    let (num_samples, num_joints, dim) = poses.dim();

    // ~13 bytes per "-123.456789," field
    let mut buf = String::with_capacity(num_samples * num_joints * dim * 13);
    for sample in poses.outer_iter() {
        let mut first = true;
        for &coord in &sample {
            if !first {
                buf.push(',');
            }
            // Infallible for String
            let _ = write!(buf, "{coord:.6}");
            first = false;
        }
        buf.push('\n');
    }

    fs::write(path.as_ref(), buf)?;
    verbose!(
        "Saved pose list to {} ({num_samples} samples)",
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_write_pose_list_format() {
        let poses = Array3::from_shape_vec(
            (2, 2, 2),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poses.txt");
        write_pose_list(&path, poses.view()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "1.000000,2.000000,3.000000,4.000000\n5.000000,6.000000,7.000000,8.000000\n"
        );
    }

    #[test]
    fn test_write_pose_list_fixed_point() {
        // No scientific notation, even for values that would default to it
        let poses = Array3::from_shape_vec((1, 1, 2), vec![-1e6, 0.000_001_2]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poses.txt");
        write_pose_list(&path, poses.view()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "-1000000.000000,0.000001\n");
    }

    #[test]
    fn test_write_pose_list_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poses.txt");
        fs::write(&path, "stale contents").unwrap();

        let poses = Array3::<f32>::zeros((1, 1, 1));
        write_pose_list(&path, poses.view()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "0.000000\n");
    }

    #[test]
    fn test_write_pose_list_unwritable_path() {
        let poses = Array3::<f32>::zeros((1, 1, 1));
        let err = write_pose_list("/nonexistent-dir/poses.txt", poses.view()).unwrap_err();
        assert!(matches!(err, crate::LayoutError::Io(_)));
    }
}
