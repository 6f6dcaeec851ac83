// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// Color type for joint-group presentation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Green color.
    pub const GREEN: Color = Color(0, 255, 0);
    /// Red color.
    pub const RED: Color = Color(255, 0, 0);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255);
    /// Yellow color.
    pub const YELLOW: Color = Color(255, 255, 0);
    /// Magenta color.
    pub const MAGENTA: Color = Color(255, 0, 255);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Get a color from the joint-group palette by index.
    #[must_use]
    pub const fn from_group_index(index: usize) -> Self {
        GROUP_COLORS[index % GROUP_COLORS.len()]
    }
}

/// Joint-group palette shared by the PA layout families.
///
/// Order matters: layout `cmap` entries index into this palette
/// (trunk/head, right arm, left arm, right leg, left leg).
pub const GROUP_COLORS: [Color; 5] = [
    Color::GREEN,
    Color::RED,
    Color::BLUE,
    Color::YELLOW,
    Color::MAGENTA,
];
