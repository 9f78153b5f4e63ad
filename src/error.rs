use thiserror::Error;

/// Errors surfaced by the encoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload does not fit any supported version at the fixed ECC level
    #[error("payload of {length} bytes exceeds the maximum of {max} bytes")]
    CapacityExceeded {
        /// Offending payload length in bytes
        length: usize,
        /// Largest payload the configured version range accepts
        max: usize,
    },
    /// Explicitly built configuration is out of range
    #[error("invalid encoder configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = EncodeError::CapacityExceeded { length: 50, max: 42 };
        assert_eq!(
            err.to_string(),
            "payload of 50 bytes exceeds the maximum of 42 bytes"
        );
    }
}
