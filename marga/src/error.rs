//! Path pipeline error types.

use thiserror::Error;

/// Errors raised while turning a search result into motion.
///
/// None of these are fatal to the agent: each path request is independent,
/// and a failure leaves the follower in its arrived state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Search returned an empty or single-node path.
    #[error("No path found")]
    NoPathFound,

    /// Smoother was handed fewer than two nodes.
    #[error("Cannot smooth a path of {nodes} node(s), need at least 2")]
    DegenerateSmoothingInput {
        /// Number of nodes received.
        nodes: usize,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PathError {
    /// Build an `InvalidConfiguration` error from a message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoPathFound => "NO_PATH",
            Self::DegenerateSmoothingInput { .. } => "DEGENERATE_INPUT",
            Self::InvalidConfiguration(_) => "INVALID_CONFIG",
        }
    }

    /// True when the caller should treat this as "already arrived".
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoPathFound | Self::DegenerateSmoothingInput { .. }
        )
    }
}
