//! CIDR membership and private address classification.

use crate::error::Result;
use crate::models::{CidrBlock, Ipv4Address};
use std::sync::OnceLock;

/// RFC 1918 private address blocks.
pub const PRIVATE_IPV4_BLOCKS: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

static PRIVATE_BLOCKS: OnceLock<Vec<CidrBlock>> = OnceLock::new();

fn private_blocks() -> &'static [CidrBlock] {
    PRIVATE_BLOCKS.get_or_init(|| {
        PRIVATE_IPV4_BLOCKS
            .iter()
            .filter_map(|cidr| CidrBlock::new(cidr).ok())
            .collect()
    })
}

/// Check whether `ip` lies inside the block described by `cidr`.
///
/// # Examples
/// ```
/// use ip_tools::is_ip_in_subnet;
/// assert!(is_ip_in_subnet("172.20.5.0", "172.16.0.0/12").unwrap());
/// assert!(!is_ip_in_subnet("172.32.5.0", "172.16.0.0/12").unwrap());
/// ```
pub fn is_ip_in_subnet(ip: &str, cidr: &str) -> Result<bool> {
    let ip = Ipv4Address::parse(ip)?;
    let block = CidrBlock::new(cidr)?;
    Ok(block.contains(&ip))
}

/// Check whether `ip` is in one of the RFC 1918 private ranges.
///
/// A malformed address is reported as not private.
pub fn is_private_ipv4(ip: &str) -> bool {
    match Ipv4Address::parse(ip) {
        Ok(ip) => private_blocks().iter().any(|block| block.contains(&ip)),
        Err(_) => {
            log::debug!("{ip:?} is not an IPv4 address, treating as public");
            false
        }
    }
}
