//! CIDR blocks and the subnet properties derived from them.
//!
//! A [`CidrBlock`] keeps the address exactly as the caller gave it together
//! with the prefix length. The network, mask and broadcast addresses are
//! computed on first access and cached for the lifetime of the value.

use super::ipv4::Ipv4Address;
use crate::convert::{from_wide_integer, prefix_to_int, subnet_mask_to_prefix, MAX_LENGTH};
use crate::error::{IpError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::str::FromStr;
use std::sync::OnceLock;

/// An IPv4 address block in `address/prefix` notation.
#[derive(Debug, Clone)]
pub struct CidrBlock {
    base: Ipv4Address,
    prefix: u8,
    mask_bits: u32,
    network: OnceLock<Ipv4Address>,
    mask: OnceLock<Ipv4Address>,
    broadcast: OnceLock<Ipv4Address>,
    first_usable: OnceLock<Result<Ipv4Address>>,
    last_usable: OnceLock<Result<Ipv4Address>>,
}

impl CidrBlock {
    /// Parse `a.b.c.d/N` or `a.b.c.d/m.m.m.m`.
    ///
    /// # Examples
    /// ```
    /// use ip_tools::CidrBlock;
    /// let block = CidrBlock::new("10.0.0.5/24").unwrap();
    /// assert_eq!(block.network().to_string(), "10.0.0.0");
    /// assert_eq!(block.broadcast().to_string(), "10.0.0.255");
    /// let same = CidrBlock::new("10.0.0.5/255.255.255.0").unwrap();
    /// assert_eq!(block, same);
    /// ```
    pub fn new(addr_cidr: &str) -> Result<CidrBlock> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| IpError::InvalidCidr(addr_cidr.to_string()))?;
        let base = Ipv4Address::parse(addr)?;

        let len = len.trim();
        let prefix = if len.contains('.') {
            subnet_mask_to_prefix(len).map_err(|e| {
                log::debug!("bad mask in {addr_cidr}: {e}");
                IpError::InvalidCidr(addr_cidr.to_string())
            })?
        } else {
            if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
                return Err(IpError::InvalidCidr(addr_cidr.to_string()));
            }
            len.parse::<u8>()
                .map_err(|_| IpError::InvalidCidr(addr_cidr.to_string()))?
        };

        CidrBlock::from_parts(base, prefix).map_err(|_| IpError::InvalidCidr(addr_cidr.to_string()))
    }

    /// Build a block from an address and a prefix length in `0..=32`.
    pub fn from_parts(base: Ipv4Address, prefix: u8) -> Result<CidrBlock> {
        let mask_bits = prefix_to_int(prefix)?;
        Ok(CidrBlock {
            base,
            prefix,
            mask_bits,
            network: OnceLock::new(),
            mask: OnceLock::new(),
            broadcast: OnceLock::new(),
            first_usable: OnceLock::new(),
            last_usable: OnceLock::new(),
        })
    }

    /// The address as given by the caller, host bits included.
    pub fn base(&self) -> Ipv4Address {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Lowest address of the block (all host bits zero).
    pub fn network(&self) -> Ipv4Address {
        *self
            .network
            .get_or_init(|| Ipv4Address::from(self.base.to_u32() & self.mask_bits))
    }

    /// Dotted subnet mask.
    pub fn mask(&self) -> Ipv4Address {
        *self.mask.get_or_init(|| Ipv4Address::from(self.mask_bits))
    }

    /// Highest address of the block (all host bits one).
    pub fn broadcast(&self) -> Ipv4Address {
        *self.broadcast.get_or_init(|| {
            let last = u64::from(self.network().to_u32()) + self.size() - 1;
            // The network is aligned to the block size, so this stays in range.
            Ipv4Address::from(last as u32)
        })
    }

    /// `network + 1`.
    ///
    /// This is plain arithmetic, also for /31 and /32 where the result is not a
    /// conventional host address (it may be past the broadcast). It fails only
    /// when the result leaves the 32-bit range (`255.255.255.255/32`).
    pub fn first_usable(&self) -> Result<Ipv4Address> {
        self.first_usable
            .get_or_init(|| from_wide_integer(i128::from(self.network().to_u32()) + 1))
            .clone()
    }

    /// `broadcast - 1`, with the same caveats as [`CidrBlock::first_usable`].
    /// Fails for `0.0.0.0/32`.
    pub fn last_usable(&self) -> Result<Ipv4Address> {
        self.last_usable
            .get_or_init(|| from_wide_integer(i128::from(self.broadcast().to_u32()) - 1))
            .clone()
    }

    /// Number of addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    pub fn contains(&self, ip: &Ipv4Address) -> bool {
        ip.to_u32() & self.mask_bits == self.network().to_u32()
    }

    /// Every address from the network to the broadcast address, in order.
    ///
    /// Addresses are produced one at a time; calling this again starts over.
    pub fn hosts(&self) -> Hosts {
        Hosts::new(self.network(), self.broadcast())
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.base == other.base && self.prefix == other.prefix
    }
}

impl Eq for CidrBlock {}

impl Hash for CidrBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.prefix.hash(state);
    }
}

impl FromStr for CidrBlock {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self> {
        CidrBlock::new(s)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Lazy iterator over the addresses of a [`CidrBlock`].
///
/// Only the cursor and the upper bound are stored. Bounds are kept as `u64`
/// so iterating up to `255.255.255.255` terminates without wrapping.
#[derive(Debug, Clone)]
pub struct Hosts {
    next: u64,
    end: u64,
}

impl Hosts {
    fn new(first: Ipv4Address, last: Ipv4Address) -> Hosts {
        Hosts {
            next: u64::from(first.to_u32()),
            end: u64::from(last.to_u32()),
        }
    }
}

impl Iterator for Hosts {
    type Item = Ipv4Address;

    fn next(&mut self) -> Option<Ipv4Address> {
        if self.next > self.end {
            return None;
        }
        let current = self.next as u32;
        self.next += 1;
        Some(Ipv4Address::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end + 1).saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Hosts {}
