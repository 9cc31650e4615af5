//! Prefix length <-> subnet mask conversion.

use super::radix::{format_address, FormatOptions, Radix};
use crate::error::{IpError, Result};
use crate::models::Ipv4Address;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum prefix length of an IPv4 network (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A run of ones followed by a run of zeros.
static MASK_BITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_mask_bits_regex() -> &'static Regex {
    MASK_BITS_REGEX.get_or_init(|| Regex::new(r"^(1*)0*$").expect("Invalid Regex"))
}

/// Convert a prefix length to its mask as a `u32`.
///
/// # Examples
/// ```
/// use ip_tools::prefix_to_int;
/// assert_eq!(prefix_to_int(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(prefix_to_int(0).unwrap(), 0);
/// ```
pub fn prefix_to_int(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        return Err(IpError::InvalidPrefix(i64::from(len)));
    }
    if len == 0 {
        // Shifting a u32 by 32 is an overflow.
        return Ok(0);
    }
    let ones = u32::MAX >> (MAX_LENGTH - len);
    Ok(ones << (MAX_LENGTH - len))
}

/// Convert a prefix length to its dotted subnet mask.
pub fn prefix_to_mask(len: u8) -> Result<Ipv4Address> {
    prefix_to_int(len).map(Ipv4Address::from)
}

/// Recover the prefix length of a subnet mask.
///
/// Fails with [`IpError::InvalidMask`] unless the mask's bits are a run of
/// ones followed only by zeros.
pub fn mask_to_prefix(mask: &Ipv4Address) -> Result<u8> {
    let bits = format_address(mask, Radix::Binary, &FormatOptions::default().separator(""))?;
    let caps = get_mask_bits_regex().captures(&bits).ok_or_else(|| {
        log::debug!("mask {mask} is not contiguous: {bits}");
        IpError::InvalidMask(mask.to_string())
    })?;
    let ones = caps.get(1).map_or(0, |m| m.len());
    u8::try_from(ones).map_err(|_| IpError::InvalidMask(mask.to_string()))
}

/// String form of [`mask_to_prefix`].
///
/// # Examples
/// ```
/// use ip_tools::subnet_mask_to_prefix;
/// assert_eq!(subnet_mask_to_prefix("255.255.240.0").unwrap(), 20);
/// assert!(subnet_mask_to_prefix("255.0.255.0").is_err());
/// ```
pub fn subnet_mask_to_prefix(mask: &str) -> Result<u8> {
    mask_to_prefix(&Ipv4Address::parse(mask)?)
}
