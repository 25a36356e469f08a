//! Error taxonomy for the sweep core

use thiserror::Error;

/// Everything that can go wrong while configuring or driving a sweep
#[derive(Error, Debug)]
pub enum SweepError {
    /// Geometry or tuning that cannot be projected onto the ring.
    /// Surfaced before the first tick; nothing downstream is usable.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A tick was supplied an elapsed time that is negative or not finite
    #[error("invalid elapsed time {elapsed} (must be finite and >= 0)")]
    InvalidInput { elapsed: f32 },

    #[error("failed to parse settings: {source}")]
    Settings {
        #[from]
        source: serde_json::Error,
    },

    #[error("failed to read settings: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SweepError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
