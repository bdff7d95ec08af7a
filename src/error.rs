//! Error types for the resume rendering engine

use thiserror::Error;

/// Result type alias for the resume rendering engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the resume rendering engine
#[derive(Error, Debug)]
pub enum Error {
    /// Request rejected before any rendering was attempted
    #[error("Invalid request: {reason}")]
    Validation { reason: String },

    /// The headless rendering engine could not launch, settle, or capture
    #[error("Render engine failed: {reason}")]
    RenderEngine { reason: String },

    /// Photo bytes could not be decoded as an image
    #[error("Could not decode photo: {reason}")]
    AssetDecode { reason: String },

    /// Word-processor package could not be assembled
    #[error("Document packaging failed: {reason}")]
    DocumentPack { reason: String },

    /// Uploaded extraction file is not one of the accepted kinds.
    /// Raised by the extraction collaborator, surfaced through this taxonomy.
    #[error("Unsupported file format: {kind}")]
    UnsupportedFormat { kind: String },

    /// The AI extraction call failed or returned unparseable content.
    /// Raised by the extraction collaborator, surfaced through this taxonomy.
    #[error("Upstream service failed: {reason}")]
    UpstreamService { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
