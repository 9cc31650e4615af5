//! Error types shared by every module of the crate.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, IpError>;

/// Failures reported by address parsing, conversion and subnet arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpError {
    /// Malformed dotted-decimal (or radix) address string.
    #[error("invalid IPv4 address: {0}")]
    InvalidFormat(String),
    /// Prefix length outside `0..=32`.
    #[error("invalid prefix length: {0} (expected 0-32)")]
    InvalidPrefix(i64),
    /// Subnet mask that is not a run of 1 bits followed by 0 bits.
    #[error("invalid subnet mask: {0}")]
    InvalidMask(String),
    /// Malformed `address/prefix` or `address/mask` descriptor.
    #[error("invalid CIDR: {0}")]
    InvalidCidr(String),
    /// Flattened radix string longer than four fixed-width octets.
    #[error("source length {len} exceeds {max} characters")]
    LengthError { len: usize, max: usize },
    #[error("unsupported radix: {0}")]
    UnsupportedRadix(String),
    /// External command failed to run or exited non-zero.
    #[error("command failed: {0}")]
    Command(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IpError::InvalidPrefix(33).to_string(),
            "invalid prefix length: 33 (expected 0-32)"
        );
        assert_eq!(
            IpError::LengthError { len: 33, max: 32 }.to_string(),
            "source length 33 exceeds 32 characters"
        );
        assert_eq!(
            IpError::InvalidFormat("10.0.0".to_string()).to_string(),
            "invalid IPv4 address: 10.0.0"
        );
    }
}
