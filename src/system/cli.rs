//! External command execution.
//!
//! Provides utilities for running a command line and capturing its output.

use crate::error::{IpError, Result};
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Largest stdout accepted from a command.
///
/// Checked after the process has exited and its output has been captured, so
/// it rejects oversized replies but does not bound memory use while reading.
const MAX_OUTPUT_BYTES: usize = 500_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

fn check_output_size(len: usize, cmds: &[&str]) -> Result<()> {
    if len > MAX_OUTPUT_BYTES {
        return Err(IpError::Command(format!(
            "response too large: {len} bytes for command: {cmds:?}"
        )));
    }
    Ok(())
}

/// Run a command line and return its stdout, decoded lossily as UTF-8.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// A non-zero exit status is only an error when nothing was written to
/// stdout: tools such as `ping` report failures through their normal output.
pub fn run(cmd: &str) -> Result<String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds
        .split_first()
        .filter(|(program, _)| !program.is_empty())
        .ok_or_else(|| IpError::Command("empty command".to_string()))?;

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        IpError::Command(format!("failed to execute {program}: {e}"))
    })?;

    check_output_size(output.stdout.len(), &cmds)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        if output.stdout.is_empty() {
            return Err(IpError::Command(format!("{program}: {}", stderr.trim())));
        }
    } else {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_plain() {
        assert_eq!(
            split_and_strip("ping -c 4 -s 56 10.0.0.1"),
            vec!["ping", "-c", "4", "-s", "56", "10.0.0.1"]
        );
    }

    #[test]
    fn test_split_and_strip_quoted() {
        let input = "echo 'hello world'  \"and more\" done";
        assert_eq!(
            split_and_strip(input),
            vec!["echo", "hello world", "and more", "done"]
        );
    }

    #[test]
    fn test_split_and_strip_extra_spaces() {
        assert_eq!(split_and_strip("  a   b "), vec!["a", "b"]);
    }

    #[test]
    fn test_check_output_size() {
        let cmds = ["ping", "-c", "4", "10.0.0.1"];
        assert!(check_output_size(0, &cmds).is_ok());
        assert!(check_output_size(MAX_OUTPUT_BYTES, &cmds).is_ok());
        assert!(matches!(
            check_output_size(MAX_OUTPUT_BYTES + 1, &cmds),
            Err(IpError::Command(msg)) if msg.starts_with("response too large: 500001 bytes")
        ));
    }

    #[test]
    fn test_run_empty_command() {
        assert!(matches!(run("   "), Err(IpError::Command(_))));
    }

    #[test]
    fn test_run_missing_program() {
        assert!(matches!(
            run("ip-tools-no-such-program-xyz --flag"),
            Err(IpError::Command(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_echo() {
        assert_eq!(run("echo 'hello world'").unwrap(), "hello world\n");
    }
}
