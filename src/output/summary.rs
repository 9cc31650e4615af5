//! Summary of the properties derived from a CIDR block.

use super::terminal::format_row;
use crate::membership::is_private_ipv4;
use crate::models::{CidrBlock, Ipv4Address};
use serde::Serialize;

/// Everything the tool reports about a block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CidrSummary {
    pub cidr: CidrBlock,
    pub network: Ipv4Address,
    pub mask: Ipv4Address,
    /// `None` when `network + 1` leaves the address space.
    pub first_usable: Option<Ipv4Address>,
    /// `None` when `broadcast - 1` leaves the address space.
    pub last_usable: Option<Ipv4Address>,
    pub broadcast: Ipv4Address,
    pub size: u64,
    pub private: bool,
}

impl From<&CidrBlock> for CidrSummary {
    fn from(block: &CidrBlock) -> Self {
        let network = block.network();
        CidrSummary {
            cidr: block.clone(),
            network,
            mask: block.mask(),
            first_usable: block.first_usable().ok(),
            last_usable: block.last_usable().ok(),
            broadcast: block.broadcast(),
            size: block.size(),
            private: is_private_ipv4(&network.to_string()),
        }
    }
}

impl CidrSummary {
    /// One formatted line per property.
    pub fn rows(&self) -> Vec<String> {
        let or_none =
            |ip: Option<Ipv4Address>| ip.map_or_else(|| "none".to_string(), |ip| ip.to_string());
        vec![
            format_row("cidr", &self.cidr),
            format_row("network", self.network),
            format_row("mask", self.mask),
            format_row("first_usable", or_none(self.first_usable)),
            format_row("last_usable", or_none(self.last_usable)),
            format_row("broadcast", self.broadcast),
            format_row("size", self.size),
            format_row("private", self.private),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_block() {
        let block = CidrBlock::new("10.0.0.5/24").unwrap();
        let summary = CidrSummary::from(&block);
        assert_eq!(summary.network.to_string(), "10.0.0.0");
        assert_eq!(summary.first_usable.unwrap().to_string(), "10.0.0.1");
        assert_eq!(summary.last_usable.unwrap().to_string(), "10.0.0.254");
        assert_eq!(summary.size, 256);
        assert!(summary.private);
    }

    #[test]
    fn test_summary_rows() {
        let block = CidrBlock::new("255.255.255.255/32").unwrap();
        let rows = CidrSummary::from(&block).rows();
        assert_eq!(rows.len(), 8);
        assert!(rows[3].ends_with("\"none\""));
        assert!(rows[7].ends_with("\"false\""));
    }

    #[test]
    fn test_summary_json() {
        let block = CidrBlock::new("192.168.1.77/255.255.255.192").unwrap();
        let json = serde_json::to_value(CidrSummary::from(&block)).unwrap();
        assert_eq!(json["cidr"], "192.168.1.77/26");
        assert_eq!(json["network"], "192.168.1.64");
        assert_eq!(json["broadcast"], "192.168.1.127");
        assert_eq!(json["size"], 64);
        assert_eq!(json["private"], true);
    }
}
