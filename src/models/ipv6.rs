//! IPv6 syntax recognition.
//!
//! Only the textual form is checked; no IPv6 arithmetic is offered.

use super::ipv4::Ipv4Address;

/// Number of 16-bit groups in a full IPv6 address.
const GROUPS: usize = 8;

/// Check whether `s` is a textual IPv6 address.
///
/// Accepts the full eight-group form, the `::` zero-compressed form and both
/// of those with a trailing dotted IPv4 address. Returns the trimmed,
/// lower-cased address when it is valid.
///
/// # Examples
/// ```
/// use ip_tools::is_string_ipv6;
/// assert!(is_string_ipv6("fe80::9d2a:fc30:d071:66f1").is_some());
/// assert!(is_string_ipv6("::ffff:192.168.1.1").is_some());
/// assert!(is_string_ipv6("fe80:::1").is_none());
/// ```
pub fn is_string_ipv6(s: &str) -> Option<String> {
    let s = s.trim().to_ascii_lowercase();
    let valid = if s.contains(':') && s.contains('.') {
        with_ipv4_suffix(&s)
    } else if s.contains("::") {
        compressed(&s, GROUPS)
    } else {
        full(&s, GROUPS)
    };
    valid.then_some(s)
}

fn is_group(group: &str) -> bool {
    !group.is_empty() && group.len() <= 4 && group.chars().all(|c| c.is_ascii_hexdigit())
}

/// Exactly `groups` colon-separated groups.
fn full(s: &str, groups: usize) -> bool {
    let parts: Vec<&str> = s.split(':').collect();
    parts.len() == groups && parts.iter().all(|g| is_group(g))
}

/// One `::` standing in for at least two zero groups.
fn compressed(s: &str, groups: usize) -> bool {
    let Some((head, tail)) = s.split_once("::") else {
        return false;
    };
    if tail.contains("::") {
        return false;
    }
    let edge_colon = |part: &str| part.starts_with(':') || part.ends_with(':');
    if edge_colon(head) || edge_colon(tail) {
        return false;
    }

    let explicit: Vec<&str> = [head, tail]
        .into_iter()
        .filter(|part| !part.is_empty())
        .flat_map(|part| part.split(':'))
        .collect();
    explicit.len() <= groups - 2 && explicit.iter().all(|g| is_group(g))
}

/// A dotted IPv4 address standing in for the last two groups.
fn with_ipv4_suffix(s: &str) -> bool {
    let Some((v6, v4)) = s.rsplit_once(':') else {
        return false;
    };
    if v4.contains(char::is_whitespace) || Ipv4Address::parse(v4).is_err() {
        return false;
    }
    let v6 = format!("{v6}:0:0");
    if v6.contains("::") {
        compressed(&v6, GROUPS)
    } else {
        full(&v6, GROUPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_form() {
        assert_eq!(
            is_string_ipv6(" 2001:0DB8:0000:0000:0000:ff00:0042:8329 "),
            Some("2001:0db8:0000:0000:0000:ff00:0042:8329".to_string())
        );
        assert!(is_string_ipv6("2001:db8:0:0:0:ff00:42").is_none());
        assert!(is_string_ipv6("2001:db8:0:0:0:ff00:42:8329:1").is_none());
        assert!(is_string_ipv6("2001:db8:0:0:0:ff00:42:83290").is_none());
        assert!(is_string_ipv6("2001:db8:0:0:0:ff00:42:832g").is_none());
        assert!(is_string_ipv6(":db8:0:0:0:ff00:42:8329").is_none());
    }

    #[test]
    fn test_compressed_form() {
        assert!(is_string_ipv6("fe80::9d2a:fc30:d071:66f1").is_some());
        assert!(is_string_ipv6("::1").is_some());
        assert!(is_string_ipv6("fe80::").is_some());
        assert!(is_string_ipv6("1:2:3:4:5:6::").is_some());
        assert!(is_string_ipv6("1:2:3:4:5:6:7::").is_none());
        assert!(is_string_ipv6("1::2::3").is_none());
        assert!(is_string_ipv6("fe80:::1").is_none());
        assert!(is_string_ipv6("::").is_some());
    }

    #[test]
    fn test_ipv4_suffix() {
        assert!(is_string_ipv6("::ffff:192.168.1.1").is_some());
        assert!(is_string_ipv6("::192.168.1.1").is_some());
        assert!(is_string_ipv6("0:0:0:0:0:ffff:10.0.0.1").is_some());
        assert!(is_string_ipv6("0:0:0:0:ffff:10.0.0.1").is_none());
        assert!(is_string_ipv6("::ffff:192.168.1.256").is_none());
        assert!(is_string_ipv6("1::10.0.0.1").is_some());
        assert!(is_string_ipv6("::ffff: 10.0.0.1").is_none());
        assert!(is_string_ipv6("192.168.1.1").is_none());
    }
}
