//! Wrapper around the platform `ping` utility.

use super::cli::run;
use super::platform::Platform;
use crate::error::{IpError, Result};

/// Echo-request settings passed to `ping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingOptions {
    /// Number of echo requests.
    pub count: u32,
    /// Payload size in bytes.
    pub size: u32,
    /// Time to live.
    pub ttl: u32,
}

impl Default for PingOptions {
    fn default() -> Self {
        PingOptions {
            count: 4,
            size: 56,
            ttl: 64,
        }
    }
}

/// Build the `ping` command line for `platform`.
///
/// The host must be a single token without whitespace or quotes, and must
/// not look like a flag.
pub fn ping_command(host: &str, opts: &PingOptions, platform: Platform) -> Result<String> {
    let host = host.trim();
    let bad_char = |c: char| c.is_whitespace() || c == '\'' || c == '"';
    if host.is_empty() || host.starts_with('-') || host.contains(bad_char) {
        return Err(IpError::Command(format!("invalid ping host: {host:?}")));
    }
    let PingOptions { count, size, ttl } = *opts;
    let cmd = match platform {
        Platform::Windows => format!("ping -n {count} -l {size} -i {ttl} {host}"),
        Platform::Linux => format!("ping -c {count} -s {size} -t {ttl} {host}"),
        Platform::Other => format!("ping -c {count} -s {size} -m {ttl} {host}"),
    };
    Ok(cmd)
}

/// Ping `host` and return the raw output of the `ping` utility.
///
/// Blocks until `ping` exits.
pub fn ping(host: &str, opts: &PingOptions) -> Result<String> {
    let cmd = ping_command(host, opts, Platform::detect())?;
    log::info!("pinging {host} with {opts:?}");
    run(&cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_command_flags() {
        let opts = PingOptions {
            count: 2,
            size: 32,
            ttl: 10,
        };
        assert_eq!(
            ping_command("10.0.0.1", &opts, Platform::Linux).unwrap(),
            "ping -c 2 -s 32 -t 10 10.0.0.1"
        );
        assert_eq!(
            ping_command("10.0.0.1", &opts, Platform::Windows).unwrap(),
            "ping -n 2 -l 32 -i 10 10.0.0.1"
        );
        assert_eq!(
            ping_command("example.com", &opts, Platform::Other).unwrap(),
            "ping -c 2 -s 32 -m 10 example.com"
        );
    }

    #[test]
    fn test_ping_command_default_options() {
        assert_eq!(
            ping_command(" ::1 ", &PingOptions::default(), Platform::Linux).unwrap(),
            "ping -c 4 -s 56 -t 64 ::1"
        );
    }

    #[test]
    fn test_ping_command_rejects_bad_hosts() {
        let opts = PingOptions::default();
        for bad in ["", "   ", "10.0.0.1 -f", "-f", "'10.0.0.1'", "a\"b"] {
            assert!(
                matches!(ping_command(bad, &opts, Platform::Linux), Err(IpError::Command(_))),
                "host {bad:?}"
            );
        }
    }

    #[test]
    fn test_ping_rejects_bad_host_without_running() {
        assert!(ping("bad host", &PingOptions::default()).is_err());
    }
}
