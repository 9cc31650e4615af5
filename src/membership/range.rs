//! Wildcard and range pattern matching.
//!
//! A pattern has four dot-separated tokens, one per octet: `*` matches any
//! octet, `N` matches exactly, and `lo-hi` matches an inclusive span.
//!
//! Tokens are compared as decimal *strings* against the octets exactly as the
//! caller wrote them, not as numbers, so a span such as `5-20` does not match
//! octet `9` (`"9" > "20"`) and `010` only matches a pattern token `010`.
//! Patterns whose bounds have the same number of digits as the octets they
//! cover behave numerically.

use crate::error::{IpError, Result};
use crate::models::{Ipv4Address, OCTETS};

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Any,
    Exact(&'a str),
    Span(&'a str, &'a str),
}

impl<'a> Token<'a> {
    fn parse(token: &'a str) -> Token<'a> {
        if token == "*" {
            return Token::Any;
        }
        // Parts past the second `-` are ignored.
        let mut bounds = token.split('-');
        match (bounds.next(), bounds.next()) {
            (Some(lo), Some(hi)) => Token::Span(lo, hi),
            _ => Token::Exact(token),
        }
    }

    fn matches(&self, octet: &str) -> bool {
        match self {
            Token::Any => true,
            Token::Exact(value) => *value == octet,
            Token::Span(lo, hi) => *lo <= octet && octet <= *hi,
        }
    }
}

/// Check `ip` against a wildcard/range pattern such as `10.25-32.*.*`.
///
/// # Examples
/// ```
/// use ip_tools::is_ip_in_range;
/// assert!(is_ip_in_range("10.25.5.8", "10.25.*.*").unwrap());
/// assert!(is_ip_in_range("10.28.5.8", "10.25-32.*.*").unwrap());
/// assert!(!is_ip_in_range("11.25.5.8", "10.*.*.*").unwrap());
/// ```
pub fn is_ip_in_range(ip: &str, pattern: &str) -> Result<bool> {
    Ipv4Address::parse(ip)?;
    let octets: Vec<&str> = ip.trim().split('.').collect();
    let tokens: Vec<Token> = pattern.trim().split('.').map(Token::parse).collect();
    if tokens.len() != OCTETS {
        return Err(IpError::InvalidFormat(pattern.to_string()));
    }

    let matched = octets
        .iter()
        .zip(&tokens)
        .all(|(octet, token)| token.matches(octet));
    Ok(matched)
}

pub fn is_ip_not_in_range(ip: &str, pattern: &str) -> Result<bool> {
    is_ip_in_range(ip, pattern).map(|matched| !matched)
}
