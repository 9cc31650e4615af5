//! Conversion between dotted-decimal addresses and other numeric forms.
//!
//! Each octet is rendered on its own, zero-padded to the width of `255` in the
//! target radix, so the flattened forms always have a fixed length:
//! 32 characters in binary, 12 in octal, 8 in hex.

use crate::error::{IpError, Result};
use crate::models::{Ipv4Address, OCTETS};
use itertools::Itertools;
use std::str::FromStr;

/// Numeric base of a textual address representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
    /// The whole address as a single unsigned integer.
    Integer,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal | Radix::Integer => 10,
            Radix::Hex => 16,
        }
    }

    /// Width of `255` in this radix.
    pub fn octet_width(self) -> usize {
        match self {
            Radix::Binary => 8,
            Radix::Octal | Radix::Decimal | Radix::Integer => 3,
            Radix::Hex => 2,
        }
    }

    fn render(self, octet: u8, zero_pad: bool) -> String {
        let width = if zero_pad { self.octet_width() } else { 0 };
        match self {
            Radix::Binary => format!("{octet:0width$b}"),
            Radix::Octal => format!("{octet:0width$o}"),
            Radix::Hex => format!("{octet:0width$x}"),
            Radix::Decimal | Radix::Integer => format!("{octet:0width$}"),
        }
    }
}

impl FromStr for Radix {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Radix> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "bin" | "binary" => Ok(Radix::Binary),
            "o" | "oct" | "octal" => Ok(Radix::Octal),
            "d" | "dec" | "decimal" => Ok(Radix::Decimal),
            "x" | "hex" | "hexadecimal" => Ok(Radix::Hex),
            "int" | "integer" => Ok(Radix::Integer),
            other => Err(IpError::UnsupportedRadix(other.to_string())),
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
            Radix::Integer => "integer",
        };
        write!(f, "{name}")
    }
}

/// Options for [`format_address`] and [`ipv4_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions<'a> {
    /// Left-pad every octet with `0` to the radix's fixed width.
    pub zero_pad: bool,
    /// Joins the four octets; `""` yields one contiguous numeral.
    pub separator: &'a str,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        FormatOptions {
            zero_pad: true,
            separator: ".",
        }
    }
}

impl<'a> FormatOptions<'a> {
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    pub fn zero_pad(mut self, zero_pad: bool) -> Self {
        self.zero_pad = zero_pad;
        self
    }
}

/// Render an address in binary, octal, hex, or as a single integer.
///
/// [`Radix::Decimal`] is not an output format (that is just the address
/// itself) and fails with [`IpError::UnsupportedRadix`].
pub fn format_address(addr: &Ipv4Address, radix: Radix, opts: &FormatOptions) -> Result<String> {
    match radix {
        Radix::Integer => Ok(addr.to_u32().to_string()),
        Radix::Decimal => Err(IpError::UnsupportedRadix(radix.to_string())),
        Radix::Binary | Radix::Octal | Radix::Hex => Ok(render_octets(addr, radix, opts)),
    }
}

/// Render each octet in `radix` and join them, with no radix check.
pub(crate) fn render_octets(addr: &Ipv4Address, radix: Radix, opts: &FormatOptions) -> String {
    addr.octets()
        .iter()
        .map(|octet| radix.render(*octet, opts.zero_pad))
        .join(opts.separator)
}

/// Validate a dotted-decimal string and render it in `radix`.
///
/// # Examples
/// ```
/// use ip_tools::{ipv4_format, FormatOptions, Radix};
/// let bits = ipv4_format("10.25.5.8", Radix::Binary, &FormatOptions::default().separator(""));
/// assert_eq!(bits.unwrap(), "00001010000110010000010100001000");
/// ```
pub fn ipv4_format(addr: &str, radix: Radix, opts: &FormatOptions) -> Result<String> {
    let ip = Ipv4Address::parse(addr)?;
    format_address(&ip, radix, opts)
}

/// Validate a dotted-decimal string and pack it into a `u32`.
pub fn to_integer(addr: &str) -> Result<u32> {
    Ok(Ipv4Address::parse(addr)?.to_u32())
}

/// Parse an address written in `radix`.
///
/// A source containing `.` is read as four separate numerals. Otherwise it is
/// one flattened numeral covering all four octets: it is left-padded with `0`
/// to four times the octet width and cut into equal chunks. With
/// [`Radix::Integer`] the source is a decimal integer for the whole address.
pub fn from_radix_str(source: &str, radix: Radix) -> Result<Ipv4Address> {
    let source = source.trim();
    if radix == Radix::Integer {
        let value: i128 = source
            .parse()
            .map_err(|_| IpError::InvalidFormat(source.to_string()))?;
        return from_wide_integer(value);
    }

    let segments: Vec<String> = if source.contains('.') {
        source.split('.').map(str::to_string).collect()
    } else {
        let width = radix.octet_width();
        let max = width * OCTETS;
        if source.len() > max {
            return Err(IpError::LengthError {
                len: source.len(),
                max,
            });
        }
        let padded = format!("{source:0>max$}");
        padded
            .as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect()
    };

    let dotted = segments
        .iter()
        .map(|seg| segment_value(seg, radix).map(|v| v.to_string()))
        .collect::<Result<Vec<_>>>()
        .map_err(|_| IpError::InvalidFormat(source.to_string()))?
        .join(".");
    Ipv4Address::parse(&dotted)
}

fn segment_value(seg: &str, radix: Radix) -> Result<u32> {
    let base = radix.base();
    // from_str_radix tolerates a leading '+', digits only here.
    if seg.is_empty() || !seg.chars().all(|c| c.is_digit(base)) {
        return Err(IpError::InvalidFormat(seg.to_string()));
    }
    u32::from_str_radix(seg, base).map_err(|_| IpError::InvalidFormat(seg.to_string()))
}

/// Convert a 32-bit integer into an address.
pub fn from_integer(value: u32) -> Ipv4Address {
    Ipv4Address::from(value)
}

/// Convert an integer that may lie outside the 32-bit range.
///
/// The value goes through the flattened binary path, so anything wider than
/// 32 bits fails with [`IpError::LengthError`] instead of being truncated.
pub fn from_wide_integer(value: i128) -> Result<Ipv4Address> {
    if value < 0 {
        return Err(IpError::InvalidFormat(value.to_string()));
    }
    from_radix_str(&format!("{value:b}"), Radix::Binary)
}

/// Convert `source` written in `radix` to dotted decimal.
///
/// # Examples
/// ```
/// use ip_tools::{convert_to_ipv4, Radix};
/// let ip = convert_to_ipv4("00001010.00011001.00000101.00001000", Radix::Binary).unwrap();
/// assert_eq!(ip, "10.25.5.8");
/// ```
pub fn convert_to_ipv4(source: &str, radix: Radix) -> Result<String> {
    from_radix_str(source, radix).map(|ip| ip.to_string())
}
