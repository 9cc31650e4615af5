//! IPv4 address manipulation.
//!
//! Validation of dotted-decimal strings, conversion to and from
//! binary/octal/hex/integer forms, CIDR subnet arithmetic and membership
//! checks. All operations are synchronous and side-effect free, except
//! [`system::ping`] which runs the platform `ping` utility.

pub mod config;
pub mod convert;
mod error;
pub mod membership;
pub mod models;
pub mod output;
pub mod system;

pub use convert::{
    convert_to_ipv4, format_address, from_integer, from_radix_str, ipv4_format, mask_to_prefix,
    prefix_to_int, prefix_to_mask, subnet_mask_to_prefix, to_integer, FormatOptions, Radix,
};
pub use error::{IpError, Result};
pub use membership::{
    is_ip_in_range, is_ip_in_subnet, is_ip_not_in_range, is_private_ipv4, PRIVATE_IPV4_BLOCKS,
};
pub use models::{is_string_ipv4, is_string_ipv6, CidrBlock, Hosts, Ipv4Address};
pub use system::{ping, PingOptions};
