// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton layout registry.
//!
//! A layout is a named convention for the number and ordering of skeletal
//! joints and their spatial dimensionality. Each layout carries fixed
//! permutation tables (horizontal flip, projections to and from other joint
//! conventions) and presentation metadata (joint-group colors and link pairs
//! for rendering collaborators). All tables are `const` data shared between
//! the 2D and 3D variants of a family; nothing here is mutable at runtime.

use crate::color::{Color, GROUP_COLORS};
use crate::error::{LayoutError, Result};

/// External joint conventions referenced by projection tables.
///
/// These are formats a layout can project to or adopt from; they are not
/// themselves registered layouts (except `Pa16j`, which doubles as the
/// canonical projection target of PA17J).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerFormat {
    /// MPII Human Pose, 16 joints.
    Mpii,
    /// NTU RGB+D, 25 joints.
    Ntu,
    /// Human3.6M, 32 joints.
    H36m,
    /// Penn Action 13-joint subset.
    Pa13j,
    /// JHMDB, 15 joints.
    Jhmdb,
    /// Pose-alternated 16-joint standard.
    Pa16j,
}

impl PeerFormat {
    /// Number of joints in this convention.
    #[must_use]
    pub const fn num_joints(self) -> usize {
        match self {
            Self::Mpii | Self::Pa16j => 16,
            Self::Ntu => 25,
            Self::H36m => 32,
            Self::Pa13j => 13,
            Self::Jhmdb => 15,
        }
    }

    /// Lowercase name of this convention.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mpii => "mpii",
            Self::Ntu => "ntu",
            Self::H36m => "h36m",
            Self::Pa13j => "pa13j",
            Self::Jhmdb => "jhmdb",
            Self::Pa16j => "pa16j",
        }
    }
}

/// A fixed joint-index table mapping between a layout and a peer format.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// The peer format this table maps to or from.
    pub peer: PeerFormat,
    /// Joint indices, one per output joint.
    pub table: &'static [usize],
}

/// A skeleton layout descriptor.
///
/// Plain record of immutable tables; all instances are process-wide statics.
/// `map_from` tables index into the peer's joint set and produce this
/// layout's ordering; `map_to` tables index into this layout's joint set and
/// produce the peer's ordering.
#[derive(Debug)]
pub struct Layout {
    /// Registry name, lowercase.
    pub name: &'static str,
    /// Number of joints.
    pub num_joints: usize,
    /// Spatial dimensionality, 2 or 3.
    pub dim: usize,
    /// Horizontal-mirror joint correspondence; a self-inverse permutation of
    /// `[0, num_joints)`. `None` when the layout defines no flip table.
    pub map_hflip: Option<&'static [usize]>,
    /// Projections adopting a peer format's pose into this layout.
    pub map_from: &'static [Projection],
    /// Projections of this layout's pose onto a peer format.
    pub map_to: &'static [Projection],
    /// Joint-group colors for rendering collaborators.
    pub color: &'static [Color],
    /// Per-joint index into `color`; same length as `num_joints`.
    pub cmap: &'static [usize],
    /// Joint-index pairs describing skeletal connectivity.
    pub links: &'static [[usize; 2]],
}

impl Layout {
    /// Look up a registered layout by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownLayout`] if the name is not registered.
    pub fn get(name: &str) -> Result<&'static Layout> {
        let key = name.to_ascii_lowercase();
        LAYOUTS
            .iter()
            .find(|layout| layout.name == key)
            .copied()
            .ok_or_else(|| LayoutError::UnknownLayout(name.to_string()))
    }

    /// Get the horizontal flip table.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingMapping`] if the layout defines no flip
    /// table (NTU25J3D).
    pub fn hflip_table(&self) -> Result<&'static [usize]> {
        self.map_hflip.ok_or_else(|| {
            LayoutError::MissingMapping(format!("{} defines no hflip table", self.name))
        })
    }

    /// Get the projection table adopting `peer` poses into this layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingMapping`] if no table is registered for
    /// that peer.
    pub fn projection_from(&self, peer: PeerFormat) -> Result<&'static Projection> {
        self.map_from
            .iter()
            .find(|p| p.peer == peer)
            .ok_or_else(|| {
                LayoutError::MissingMapping(format!(
                    "{} defines no projection from {}",
                    self.name,
                    peer.name()
                ))
            })
    }

    /// Get the projection table of this layout onto `peer`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingMapping`] if no table is registered for
    /// that peer.
    pub fn projection_to(&self, peer: PeerFormat) -> Result<&'static Projection> {
        self.map_to.iter().find(|p| p.peer == peer).ok_or_else(|| {
            LayoutError::MissingMapping(format!(
                "{} defines no projection to {}",
                self.name,
                peer.name()
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// PA16J: pose alternated with 16 joints (Penn Action plus three spine joints).
// ---------------------------------------------------------------------------

const PA16J_HFLIP: &[usize] = &[0, 1, 2, 3, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14];

const PA16J_FROM_MPII: &[usize] = &[6, 7, 8, 9, 12, 13, 11, 14, 10, 15, 2, 3, 1, 4, 0, 5];
const PA16J_FROM_NTU: &[usize] = &[0, 20, 2, 3, 8, 4, 9, 5, 10, 6, 16, 12, 17, 13, 18, 14];

const PA16J_TO_PA13J: &[usize] = &[3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
const PA16J_TO_JHMDB: &[usize] = &[2, 1, 3, 4, 5, 10, 11, 6, 7, 12, 13, 8, 9, 14, 15];
const PA16J_TO_MPII: &[usize] = &[14, 12, 10, 11, 13, 15, 0, 1, 2, 3, 8, 6, 4, 5, 7, 9];

const PA16J_MAP_FROM: &[Projection] = &[
    Projection {
        peer: PeerFormat::Mpii,
        table: PA16J_FROM_MPII,
    },
    Projection {
        peer: PeerFormat::Ntu,
        table: PA16J_FROM_NTU,
    },
];

const PA16J_MAP_TO: &[Projection] = &[
    Projection {
        peer: PeerFormat::Pa13j,
        table: PA16J_TO_PA13J,
    },
    Projection {
        peer: PeerFormat::Jhmdb,
        table: PA16J_TO_JHMDB,
    },
    Projection {
        peer: PeerFormat::Mpii,
        table: PA16J_TO_MPII,
    },
];

const PA16J_CMAP: &[usize] = &[0, 0, 0, 0, 1, 2, 1, 2, 1, 2, 3, 4, 3, 4, 3, 4];
const PA16J_LINKS: &[[usize; 2]] = &[
    [0, 1],
    [1, 2],
    [2, 3],
    [4, 6],
    [6, 8],
    [5, 7],
    [7, 9],
    [10, 12],
    [12, 14],
    [11, 13],
    [13, 15],
];

/// PA16J layout, 2D.
pub static PA16J2D: Layout = Layout {
    name: "pa16j2d",
    num_joints: 16,
    dim: 2,
    map_hflip: Some(PA16J_HFLIP),
    map_from: PA16J_MAP_FROM,
    map_to: PA16J_MAP_TO,
    color: &GROUP_COLORS,
    cmap: PA16J_CMAP,
    links: PA16J_LINKS,
};

/// PA16J layout, 3D.
pub static PA16J3D: Layout = Layout {
    name: "pa16j3d",
    num_joints: 16,
    dim: 3,
    map_hflip: Some(PA16J_HFLIP),
    map_from: PA16J_MAP_FROM,
    map_to: PA16J_MAP_TO,
    color: &GROUP_COLORS,
    cmap: PA16J_CMAP,
    links: PA16J_LINKS,
};

// ---------------------------------------------------------------------------
// PA17J: PA16J with one mid-spine joint appended at index 16.
// ---------------------------------------------------------------------------

const PA17J_HFLIP: &[usize] = &[0, 1, 2, 3, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14, 16];

const PA17J_FROM_H36M: &[usize] = &[0, 12, 13, 15, 25, 17, 26, 18, 27, 19, 1, 6, 2, 7, 3, 8, 11];

const PA17J_TO_MPII: &[usize] = &[14, 12, 10, 11, 13, 15, 0, 1, 2, 3, 8, 6, 4, 5, 7, 9];
const PA17J_TO_PA16J: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

const PA17J_MAP_FROM: &[Projection] = &[Projection {
    peer: PeerFormat::H36m,
    table: PA17J_FROM_H36M,
}];

const PA17J_MAP_TO: &[Projection] = &[
    Projection {
        peer: PeerFormat::Mpii,
        table: PA17J_TO_MPII,
    },
    Projection {
        peer: PeerFormat::Pa16j,
        table: PA17J_TO_PA16J,
    },
];

const PA17J_CMAP: &[usize] = &[0, 0, 0, 0, 1, 2, 1, 2, 1, 2, 3, 4, 3, 4, 3, 4, 0];
const PA17J_LINKS: &[[usize; 2]] = &[
    [0, 16],
    [16, 1],
    [1, 2],
    [2, 3],
    [4, 6],
    [6, 8],
    [5, 7],
    [7, 9],
    [10, 12],
    [12, 14],
    [11, 13],
    [13, 15],
];

/// PA17J layout, 2D.
pub static PA17J2D: Layout = Layout {
    name: "pa17j2d",
    num_joints: 17,
    dim: 2,
    map_hflip: Some(PA17J_HFLIP),
    map_from: PA17J_MAP_FROM,
    map_to: PA17J_MAP_TO,
    color: &GROUP_COLORS,
    cmap: PA17J_CMAP,
    links: PA17J_LINKS,
};

/// PA17J layout, 3D.
pub static PA17J3D: Layout = Layout {
    name: "pa17j3d",
    num_joints: 17,
    dim: 3,
    map_hflip: Some(PA17J_HFLIP),
    map_from: PA17J_MAP_FROM,
    map_to: PA17J_MAP_TO,
    color: &GROUP_COLORS,
    cmap: PA17J_CMAP,
    links: PA17J_LINKS,
};

// ---------------------------------------------------------------------------
// PA20J: PA16J with one more joint on each hand and foot.
// ---------------------------------------------------------------------------

const PA20J_HFLIP: &[usize] = &[
    0, 1, 2, 3, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14, 17, 16, 19, 18,
];

const PA20J_FROM_H36M: &[usize] = &[
    0, 12, 13, 15, 25, 17, 26, 18, 27, 19, 30, 22, 1, 6, 2, 7, 3, 8, 4, 9,
];
const PA20J_FROM_NTU: &[usize] = &[
    0, 20, 2, 3, 8, 4, 9, 5, 10, 6, 11, 7, 16, 12, 17, 13, 18, 14, 19, 15,
];

const PA20J_TO_MPII: &[usize] = &[16, 14, 12, 13, 15, 17, 0, 1, 2, 3, 8, 6, 4, 5, 7, 9];

const PA20J_MAP_FROM: &[Projection] = &[
    Projection {
        peer: PeerFormat::H36m,
        table: PA20J_FROM_H36M,
    },
    Projection {
        peer: PeerFormat::Ntu,
        table: PA20J_FROM_NTU,
    },
];

const PA20J_MAP_TO: &[Projection] = &[Projection {
    peer: PeerFormat::Mpii,
    table: PA20J_TO_MPII,
}];

const PA20J_CMAP: &[usize] = &[0, 0, 0, 0, 1, 2, 1, 2, 1, 2, 1, 2, 3, 4, 3, 4, 3, 4, 3, 4];
const PA20J_LINKS: &[[usize; 2]] = &[
    [0, 1],
    [1, 2],
    [2, 3],
    [4, 6],
    [6, 8],
    [8, 10],
    [5, 7],
    [7, 9],
    [9, 11],
    [12, 14],
    [14, 16],
    [16, 18],
    [13, 15],
    [15, 17],
    [17, 19],
];

/// PA20J layout, 3D.
pub static PA20J3D: Layout = Layout {
    name: "pa20j3d",
    num_joints: 20,
    dim: 3,
    map_hflip: Some(PA20J_HFLIP),
    map_from: PA20J_MAP_FROM,
    map_to: PA20J_MAP_TO,
    color: &GROUP_COLORS,
    cmap: PA20J_CMAP,
    links: PA20J_LINKS,
};

// ---------------------------------------------------------------------------
// NTU25J: native NTU RGB+D skeleton.
// ---------------------------------------------------------------------------

/// NTU25J layout, 3D.
///
/// Registered with joint count and dimensionality only. The upstream
/// definition carries no flip or projection tables, so any conversion through
/// this layout fails with `MissingMapping` rather than silently no-opping;
/// whether that omission is intentional is an open question for the dataset
/// owners.
pub static NTU25J3D: Layout = Layout {
    name: "ntu25j3d",
    num_joints: 25,
    dim: 3,
    map_hflip: None,
    map_from: &[],
    map_to: &[],
    color: &[],
    cmap: &[],
    links: &[],
};

/// All registered layouts, in registry order.
pub static LAYOUTS: [&Layout; 6] = [
    &PA16J2D, &PA16J3D, &PA17J2D, &PA17J3D, &PA20J3D, &NTU25J3D,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let layout = Layout::get("pa17j3d").unwrap();
        assert_eq!(layout.num_joints, 17);
        assert_eq!(layout.dim, 3);

        // Case-insensitive
        let layout = Layout::get("PA16J2D").unwrap();
        assert_eq!(layout.num_joints, 16);
        assert_eq!(layout.dim, 2);
    }

    #[test]
    fn test_registry_unknown_name() {
        let err = Layout::get("pa99j").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownLayout(_)));
    }

    #[test]
    fn test_hflip_is_involution() {
        for layout in LAYOUTS {
            let Some(hflip) = layout.map_hflip else {
                continue;
            };
            assert_eq!(hflip.len(), layout.num_joints, "{}", layout.name);
            for (i, &j) in hflip.iter().enumerate() {
                assert!(j < layout.num_joints, "{}", layout.name);
                // Applying the flip twice is the identity
                assert_eq!(hflip[j], i, "{} index {i}", layout.name);
            }
        }
    }

    #[test]
    fn test_map_from_tables_in_bounds() {
        for layout in LAYOUTS {
            for proj in layout.map_from {
                assert_eq!(proj.table.len(), layout.num_joints, "{}", layout.name);
                for &idx in proj.table {
                    assert!(
                        idx < proj.peer.num_joints(),
                        "{} from {}: index {idx}",
                        layout.name,
                        proj.peer.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_map_to_tables_in_bounds() {
        for layout in LAYOUTS {
            for proj in layout.map_to {
                assert!(proj.table.len() <= layout.num_joints, "{}", layout.name);
                for &idx in proj.table {
                    assert!(
                        idx < layout.num_joints,
                        "{} to {}: index {idx}",
                        layout.name,
                        proj.peer.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_presentation_metadata_consistent() {
        for layout in LAYOUTS {
            if layout.cmap.is_empty() {
                // NTU25J3D registers no presentation metadata
                assert!(layout.links.is_empty(), "{}", layout.name);
                continue;
            }
            assert_eq!(layout.cmap.len(), layout.num_joints, "{}", layout.name);
            for &group in layout.cmap {
                assert!(group < layout.color.len(), "{}", layout.name);
            }
            for link in layout.links {
                assert!(link[0] < layout.num_joints, "{}", layout.name);
                assert!(link[1] < layout.num_joints, "{}", layout.name);
            }
        }
    }

    #[test]
    fn test_ntu25j3d_has_no_mappings() {
        assert!(matches!(
            NTU25J3D.hflip_table(),
            Err(LayoutError::MissingMapping(_))
        ));
        assert!(matches!(
            NTU25J3D.projection_from(PeerFormat::Mpii),
            Err(LayoutError::MissingMapping(_))
        ));
        assert!(matches!(
            NTU25J3D.projection_to(PeerFormat::Mpii),
            Err(LayoutError::MissingMapping(_))
        ));
    }

    #[test]
    fn test_pa17j_extends_pa16j() {
        // PA17J is PA16J plus a mid-spine joint fixed under flip
        let to_pa16j = PA17J3D.projection_to(PeerFormat::Pa16j).unwrap();
        let identity: Vec<usize> = (0..16).collect();
        assert_eq!(to_pa16j.table, identity.as_slice());
        assert_eq!(PA17J_HFLIP[16], 16);
        assert_eq!(&PA17J_HFLIP[..16], PA16J_HFLIP);
    }
}
