// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! # Pose Layouts
//!
//! Skeleton layout registry and pose-array conversion utilities for pose
//! estimation pipelines.
//!
//! A *layout* is a named joint-index convention: how many joints a skeleton
//! has, in what order, and in how many spatial dimensions. This crate defines
//! the closed set of layouts used by the pipeline (PA16J/PA17J/PA20J families
//! and NTU25J), their fixed permutation tables (horizontal flip, projections
//! to and from MPII, NTU, H36M, JHMDB, and PA13J), and pure array functions
//! built on top of them: layout conversion, joint visibility/validity
//! predicates, and a comma-delimited pose-list writer.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::Array3;
//! use pose_layouts::{convert_pose_sequence, write_pose_list};
//!
//! fn main() -> pose_layouts::Result<()> {
//!     // Poses from an upstream estimator, PA17J3D layout
//!     let poses = Array3::<f32>::zeros((5, 17, 3));
//!
//!     // Project to the 16-joint standard, keeping 2D coordinates
//!     let converted = convert_pose_sequence(poses.view(), 2)?;
//!     assert_eq!(converted.dim(), (5, 16, 2));
//!
//!     # let dir = tempfile::tempdir().unwrap();
//!     # let path = dir.path().join("poses.txt");
//!     write_pose_list(&path, converted.view())?;
//!     Ok(())
//! }
//! ```
//!
//! All layout tables are process-wide constants; every conversion validates
//! its input shape before reading data and returns a fresh array. Nothing in
//! this crate holds mutable shared state, so conversions on independent
//! arrays may run concurrently without coordination.

// Modules
pub mod color;
pub mod convert;
pub mod error;
pub mod io;
pub mod layout;
pub mod logging;
pub mod quality;

// Re-export main types for convenience
pub use color::Color;
pub use convert::{
    adopt_pose, adopt_pose_sequence, convert_pose, convert_pose_sequence, hflip_pose,
    project_pose, project_pose_sequence,
};
pub use error::{LayoutError, Result};
pub use io::write_pose_list;
pub use layout::{
    LAYOUTS, Layout, NTU25J3D, PA16J2D, PA16J3D, PA17J2D, PA17J3D, PA20J3D, PeerFormat,
    Projection,
};
pub use quality::{get_valid_joints, get_visible_joints};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
