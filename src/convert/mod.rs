//! Numeric conversions for IPv4 addresses.
//!
//! - [`radix`] - dotted decimal to and from binary/octal/hex/integer forms
//! - [`mask`] - prefix length to and from subnet masks

mod mask;
mod radix;

// Re-export public types and functions
pub use mask::{
    mask_to_prefix, prefix_to_int, prefix_to_mask, subnet_mask_to_prefix, MAX_LENGTH,
};
pub use radix::{
    convert_to_ipv4, format_address, from_integer, from_radix_str, from_wide_integer,
    ipv4_format, to_integer, FormatOptions, Radix,
};
pub(crate) use radix::render_octets;
