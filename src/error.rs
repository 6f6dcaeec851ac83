// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pose layout library.

use std::fmt;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Main error type for the pose layout library.
#[derive(Debug)]
pub enum LayoutError {
    /// Input array does not match the shape declared by a layout.
    ShapeMismatch(String),
    /// Lookup of a layout name not in the registry.
    UnknownLayout(String),
    /// Conversion requested through a layout pair with no registered table.
    MissingMapping(String),
    /// Wrapped `std::io::Error` from the pose-list writer.
    Io(std::io::Error),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch(msg) => write!(f, "Shape mismatch: {msg}"),
            Self::UnknownLayout(name) => write!(f, "Unknown layout: {name}"),
            Self::MissingMapping(msg) => write!(f, "Missing mapping: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::UnknownLayout("pa99j".to_string());
        assert_eq!(err.to_string(), "Unknown layout: pa99j");

        let err = LayoutError::ShapeMismatch("expected (17, 3), got (16, 3)".to_string());
        assert!(err.to_string().starts_with("Shape mismatch"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: LayoutError = io_err.into();
        assert!(matches!(err, LayoutError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
