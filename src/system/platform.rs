//! Operating system detection.

/// Operating system family, as far as command-line flags are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    /// macOS and the BSDs.
    Other,
}

impl Platform {
    /// Detect the platform this binary was built for.
    pub fn detect() -> Platform {
        Platform::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Platform {
        match os {
            "windows" => Platform::Windows,
            "linux" | "android" => Platform::Linux,
            _ => Platform::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("macos"), Platform::Other);
        assert_eq!(Platform::from_os("freebsd"), Platform::Other);
    }

    #[test]
    fn test_detect_matches_build_target() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else if cfg!(any(target_os = "linux", target_os = "android")) {
            Platform::Linux
        } else {
            Platform::Other
        };
        assert_eq!(Platform::detect(), expected);
    }
}
