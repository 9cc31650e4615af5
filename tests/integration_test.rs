//! Integration tests for ip-tools
//!
//! These tests exercise the public API end to end.

use ip_tools::{
    convert_to_ipv4, from_integer, from_radix_str, ipv4_format, is_ip_in_range, is_ip_in_subnet,
    is_private_ipv4, is_string_ipv4, is_string_ipv6, mask_to_prefix, prefix_to_int,
    prefix_to_mask, subnet_mask_to_prefix, CidrBlock, FormatOptions, IpError, Ipv4Address, Radix,
};

#[test]
fn test_cidr_block_scenario() {
    let block = CidrBlock::new("10.0.0.5/24").expect("Failed to parse CIDR");

    assert_eq!(block.network().to_string(), "10.0.0.0");
    assert_eq!(block.mask().to_string(), "255.255.255.0");
    assert_eq!(block.first_usable().unwrap().to_string(), "10.0.0.1");
    assert_eq!(block.last_usable().unwrap().to_string(), "10.0.0.254");
    assert_eq!(block.broadcast().to_string(), "10.0.0.255");
}

#[test]
fn test_validation_scenario() {
    assert_eq!(is_string_ipv4("10.5.25.6"), Some("10.5.25.6".to_string()));
    assert_eq!(is_string_ipv4("10.5.256.6"), None);
    assert!(is_string_ipv6("fe80::9d2a:fc30:d071:66f1").is_some());
}

#[test]
fn test_conversion_scenarios() {
    let flat = ipv4_format(
        "10.25.5.8",
        Radix::Binary,
        &FormatOptions::default().separator(""),
    )
    .expect("Failed to format");
    assert_eq!(flat, "00001010000110010000010100001000");

    assert_eq!(
        convert_to_ipv4("00001010.00011001.00000101.00001000", Radix::Binary).unwrap(),
        "10.25.5.8"
    );
}

#[test]
fn test_membership_scenarios() {
    assert!(is_ip_in_subnet("172.20.5.0", "172.16.0.0/12").unwrap());
    assert!(!is_ip_in_subnet("172.32.5.0", "172.16.0.0/12").unwrap());
    assert!(is_private_ipv4("172.20.5.0"));
    assert!(!is_private_ipv4("123.66.129.235"));
    assert!(is_ip_in_range("10.25.7.1", "10.25-32.*.*").unwrap());
}

#[test]
fn test_round_trips_over_address_space() {
    // Stride through the whole space rather than enumerating it.
    let mut value: u64 = 0;
    while value <= u64::from(u32::MAX) {
        let addr = from_integer(value as u32);
        assert_eq!(from_integer(addr.to_u32()), addr);
        for radix in [Radix::Binary, Radix::Octal, Radix::Hex] {
            let text = ipv4_format(&addr.to_string(), radix, &FormatOptions::default()).unwrap();
            assert_eq!(from_radix_str(&text, radix).unwrap(), addr);
        }
        value += 0x00FE_DCBA + 1;
    }
}

#[test]
fn test_prefix_mask_bijection() {
    for prefix in 0..=32u8 {
        let mask = prefix_to_mask(prefix).unwrap();
        assert_eq!(mask.to_u32(), prefix_to_int(prefix).unwrap());
        assert_eq!(mask_to_prefix(&mask).unwrap(), prefix);
    }
    assert_eq!(prefix_to_mask(0).unwrap().to_string(), "0.0.0.0");
    assert_eq!(prefix_to_mask(32).unwrap().to_string(), "255.255.255.255");
    assert!(matches!(
        subnet_mask_to_prefix("255.0.255.0"),
        Err(IpError::InvalidMask(_))
    ));
}

#[test]
fn test_prefix_32_block() {
    let block = CidrBlock::new("192.0.2.1/32").unwrap();
    assert_eq!(block.network(), block.base());
    assert_eq!(block.broadcast(), block.base());
    let hosts: Vec<Ipv4Address> = block.hosts().collect();
    assert_eq!(hosts, vec![block.base()]);
}

#[test]
fn test_hosts_are_ascending_and_complete() {
    let block = CidrBlock::new("10.1.2.3/22").unwrap();
    let hosts: Vec<Ipv4Address> = block.hosts().collect();
    assert_eq!(hosts.len() as u64, block.size());
    assert_eq!(hosts.first(), Some(&block.network()));
    assert_eq!(hosts.last(), Some(&block.broadcast()));
    assert!(hosts.windows(2).all(|w| w[1].to_u32() == w[0].to_u32() + 1));
    assert!(hosts.iter().all(|ip| block.contains(ip)));
}

#[test]
fn test_errors_do_not_build_values() {
    assert!(matches!(
        CidrBlock::new("10.0.0.0/33"),
        Err(IpError::InvalidCidr(_))
    ));
    assert!(matches!(
        "q".parse::<Radix>(),
        Err(IpError::UnsupportedRadix(_))
    ));
    assert!(matches!(
        convert_to_ipv4(&"0".repeat(13), Radix::Octal),
        Err(IpError::LengthError { len: 13, max: 12 })
    ));
}
