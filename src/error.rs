//! Error types for algoviz.
//!
//! All fallible operations return `Result<T, VizError>` instead of panicking.
//! A rejected re-entrant run is not an error: it is reported as
//! [`crate::visualizer::RunReport::Rejected`] and changes nothing.

use thiserror::Error;

/// Result type alias for algoviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all algoviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    // ===== User Input =====
    /// Search target could not be parsed as a number.
    #[error("Invalid input: '{input}' is not a number")]
    InvalidInput {
        /// The raw text that was rejected.
        input: String,
    },

    // ===== Model Errors =====
    /// Graph lookup for an unknown node identifier.
    #[error("Graph lookup failure: node '{node}' not found")]
    NodeNotFound {
        /// The identifier that was looked up.
        node: String,
    },

    /// Adjacency list references a node that does not exist.
    #[error("Graph lookup failure: edge {from} -> {to} points to an unknown node")]
    DanglingEdge {
        /// Source node of the edge.
        from: String,
        /// Missing target node.
        to: String,
    },

    /// Array index outside `0..len`.
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Array length at the time of the access.
        len: usize,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid-input error for rejected user text.
    #[must_use]
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    /// Create a node-not-found error.
    #[must_use]
    pub fn node_not_found(node: impl Into<String>) -> Self {
        Self::NodeNotFound { node: node.into() }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Whether this error indicates malformed build-time data (graph or
    /// configuration) rather than recoverable user input.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NodeNotFound { .. }
                | Self::DanglingEdge { .. }
                | Self::IndexOutOfRange { .. }
                | Self::Config { .. }
                | Self::YamlParse(_)
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_recoverable() {
        let err = VizError::invalid_input("abc");
        assert!(!err.is_fatal());
        let msg = err.to_string();
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_graph_errors_are_fatal() {
        assert!(VizError::node_not_found("Z").is_fatal());
        let dangling = VizError::DanglingEdge {
            from: "A".to_string(),
            to: "Q".to_string(),
        };
        assert!(dangling.is_fatal());
        assert!(dangling.to_string().contains("A -> Q"));
    }

    #[test]
    fn test_error_config() {
        let err = VizError::config("min_size exceeds max_size");
        assert!(err.is_fatal());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("min_size exceeds max_size"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = VizError::IndexOutOfRange { index: 7, len: 3 };
        let msg = err.to_string();
        assert!(msg.contains("Index 7"));
        assert!(msg.contains("length 3"));
    }

    #[test]
    fn test_error_serialization() {
        let err = VizError::serialization("bad frame");
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_io_from() {
        let err: VizError = std::io::Error::other("disk gone").into();
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = VizError::node_not_found("X");
        let debug = format!("{err:?}");
        assert!(debug.contains("NodeNotFound"));
    }
}
