//! Error types for the Mukzi recommendation engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Mukzi core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
///
/// Data-quality problems (missing weather values, unparseable history rows,
/// empty history) are deliberately *not* represented here: they degrade to
/// neutral defaults inside the components and never surface as errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MukziError {
    /// Coordinate outside the supported bounding box. Caller-correctable.
    #[error("Coordinate out of supported domain: lat={lat}, lng={lng}")]
    OutOfDomain { lat: f64, lng: f64 },

    /// Projection produced a cell outside the forecast grid. Should not
    /// occur for in-domain input.
    #[error("Projected grid cell out of range: x={x}, y={y}")]
    ProjectionRange { x: i32, y: i32 },

    /// The category catalog cannot satisfy the requested ranking size.
    #[error("Insufficient categories in catalog: {available} available")]
    InsufficientCategories { available: usize },

    /// Invalid caller-supplied input outside the geometry domain.
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MukziError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an OutOfDomain error
    pub fn out_of_domain(lat: f64, lng: f64) -> Self {
        Self::OutOfDomain { lat, lng }
    }

    /// Creates a ProjectionRange error
    pub fn projection_range(x: i32, y: i32) -> Self {
        Self::ProjectionRange { x, y }
    }

    /// Creates an InsufficientCategories error
    pub fn insufficient_categories(available: usize) -> Self {
        Self::InsufficientCategories { available }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an OutOfDomain error
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }

    /// Check if this is a ProjectionRange error
    pub fn is_projection_range(&self) -> bool {
        matches!(self, Self::ProjectionRange { .. })
    }

    /// Check if this is an InsufficientCategories error
    pub fn is_insufficient_categories(&self) -> bool {
        matches!(self, Self::InsufficientCategories { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MukziError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MukziError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MukziError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MukziError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (repository seam)
impl From<anyhow::Error> for MukziError {
    fn from(err: anyhow::Error) -> Self {
        Self::DataAccess(err.to_string())
    }
}

/// A type alias for `Result<T, MukziError>`.
pub type Result<T> = std::result::Result<T, MukziError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_domain_display() {
        let err = MukziError::out_of_domain(32.5, 131.0);
        assert!(err.to_string().contains("32.5"));
        assert!(err.is_out_of_domain());
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MukziError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_insufficient_categories() {
        let err = MukziError::insufficient_categories(1);
        assert!(err.is_insufficient_categories());
        assert_eq!(err.to_string(), "Insufficient categories in catalog: 1 available");
    }
}
