//! Error types for split-tone operations.
//!
//! Only call-level failures live here. A pixel that cannot be addressed
//! inside an otherwise valid buffer is skipped by the processor and never
//! becomes an [`OpsError`].

use thiserror::Error;

/// Error type for split-tone operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Source or destination buffer was not supplied.
    #[error("missing {0} buffer")]
    MissingBuffer(&'static str),

    /// Buffer layout is not float RGBA.
    #[error("unsupported {role} layout: {layout} (expected RGBA/F32)")]
    UnsupportedLayout {
        /// Which buffer ("source" or "destination").
        role: &'static str,
        /// Layout that was presented.
        layout: splittone_core::PixelLayout,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Parameter file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Parameter file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from a core buffer operation.
    #[error(transparent)]
    Core(#[from] splittone_core::Error),
}

/// Result type for split-tone operations.
pub type OpsResult<T> = Result<T, OpsError>;
