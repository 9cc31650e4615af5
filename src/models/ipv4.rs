//! IPv4 address value type and dotted-decimal validation.
//!
//! Every other module goes through [`Ipv4Address::parse`] before doing any
//! arithmetic, so a value of this type is always a valid address.

use crate::convert::{render_octets, FormatOptions, Radix};
use crate::error::{IpError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of octets in an IPv4 address.
pub const OCTETS: usize = 4;

/// A validated IPv4 address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Address {
    addr: Ipv4Addr,
}

impl Ipv4Address {
    /// Parse a dotted-decimal address.
    ///
    /// Surrounding whitespace is ignored. Each of the four segments must be a
    /// non-empty run of ASCII digits with a value in `0..=255`.
    ///
    /// # Examples
    /// ```
    /// use ip_tools::Ipv4Address;
    /// let ip = Ipv4Address::parse(" 10.5.25.6 ").unwrap();
    /// assert_eq!(ip.to_string(), "10.5.25.6");
    /// assert!(Ipv4Address::parse("10.5.256.6").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Ipv4Address> {
        let trimmed = s.trim();
        let segments: Vec<&str> = trimmed.split('.').collect();
        if segments.len() != OCTETS {
            log::debug!("rejecting {trimmed:?}: {} segments", segments.len());
            return Err(IpError::InvalidFormat(trimmed.to_string()));
        }

        let mut octets = [0u8; OCTETS];
        for (octet, seg) in octets.iter_mut().zip(segments) {
            *octet = parse_octet(seg).ok_or_else(|| {
                log::debug!("rejecting {trimmed:?}: bad segment {seg:?}");
                IpError::InvalidFormat(trimmed.to_string())
            })?;
        }
        Ok(Ipv4Address::from(octets))
    }

    /// Build an address from a sequence of four integers.
    pub fn from_octets(values: &[i64]) -> Result<Ipv4Address> {
        let dotted = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(".");
        if values.len() != OCTETS {
            return Err(IpError::InvalidFormat(dotted));
        }
        Ipv4Address::parse(&dotted)
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        self.addr.octets()
    }

    /// Big-endian packing of the four octets.
    pub fn to_u32(&self) -> u32 {
        self.octets()
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, octet)| {
                acc | (u32::from(*octet) << (24 - 8 * i))
            })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Zero-padded binary form, e.g. `00001010.00000000.00000000.00000001`.
    pub fn to_bin(&self) -> String {
        self.padded(Radix::Binary)
    }

    pub fn to_oct(&self) -> String {
        self.padded(Radix::Octal)
    }

    pub fn to_hex(&self) -> String {
        self.padded(Radix::Hex)
    }

    fn padded(&self, radix: Radix) -> String {
        render_octets(self, radix, &FormatOptions::default())
    }
}

fn parse_octet(seg: &str) -> Option<u8> {
    if seg.is_empty() || !seg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overlong digit runs overflow u8 and are rejected here too.
    seg.parse::<u8>().ok()
}

/// Check whether `s` is a dotted-decimal IPv4 address.
///
/// Returns the canonical form of the address when it is valid.
///
/// # Examples
/// ```
/// use ip_tools::is_string_ipv4;
/// assert_eq!(is_string_ipv4("10.5.25.6"), Some("10.5.25.6".to_string()));
/// assert_eq!(is_string_ipv4("10.5.256.6"), None);
/// ```
pub fn is_string_ipv4(s: &str) -> Option<String> {
    Ipv4Address::parse(s).ok().map(|ip| ip.to_string())
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Ipv4Address {
            addr: Ipv4Addr::from(value),
        }
    }
}

impl From<[u8; OCTETS]> for Ipv4Address {
    fn from(octets: [u8; OCTETS]) -> Self {
        Ipv4Address {
            addr: Ipv4Addr::from(octets),
        }
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address { addr }
    }
}

impl From<Ipv4Address> for u32 {
    fn from(ip: Ipv4Address) -> Self {
        ip.to_u32()
    }
}

impl FromStr for Ipv4Address {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4Address::parse(s)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::parse(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}
