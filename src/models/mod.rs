//! Address value types.
//!
//! - [`Ipv4Address`] - validated IPv4 address
//! - [`CidrBlock`] - IPv4 block in CIDR notation, with its [`Hosts`] iterator
//! - [`is_string_ipv6`] - IPv6 syntax check

mod cidr;
mod ipv4;
mod ipv6;

// Re-export public types
pub use cidr::{CidrBlock, Hosts};
pub use ipv4::{is_string_ipv4, Ipv4Address, OCTETS};
pub use ipv6::is_string_ipv6;
