//! Address membership checks.
//!
//! - [`range`] - wildcard/range patterns such as `10.25-32.*.*`
//! - [`subnet`] - CIDR membership and RFC 1918 private ranges

mod range;
mod subnet;

// Re-export public functions
pub use range::{is_ip_in_range, is_ip_not_in_range};
pub use subnet::{is_ip_in_subnet, is_private_ipv4, PRIVATE_IPV4_BLOCKS};
