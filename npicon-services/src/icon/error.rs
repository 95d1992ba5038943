//! Error types for the icon system.
//!
//! Only the edges of the system can fail. Rasterization, lookup and caching
//! never return an error.

/// Errors that can occur in the icon system.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Name does not belong to the icon catalog.
    #[error("Icon '{0}' is not part of the catalog")]
    UnknownIcon(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Encoding a bitmap failed.
    #[error("Failed to encode icon: {0}")]
    Encode(#[from] image::ImageError),
}
