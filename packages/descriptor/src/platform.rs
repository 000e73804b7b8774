use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    #[serde(alias = "macos")]
    Darwin,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Linux => write!(f, "linux"),
            Os::Darwin => write!(f, "darwin"),
        }
    }
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    #[serde(alias = "amd64")]
    X86_64,
    #[serde(alias = "arm64")]
    Aarch64,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X86_64 => write!(f, "x86_64"),
            Arch::Aarch64 => write!(f, "aarch64"),
        }
    }
}

/// A CPU + operating-system pair, written `<arch>-<os>` (e.g. `aarch64-darwin`).
///
/// The supported set is closed: the four combinations in [`Platform::SUPPORTED`].
/// Parsing or detecting anything outside it fails with
/// [`ConfigurationError::UnsupportedPlatform`], so a constructed `Platform`
/// is always one resolution can succeed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub arch: Arch,
    pub os: Os,
}

impl Platform {
    /// Every platform the descriptor can resolve for.
    pub const SUPPORTED: [Platform; 4] = [
        Platform { arch: Arch::X86_64, os: Os::Linux },
        Platform { arch: Arch::Aarch64, os: Os::Linux },
        Platform { arch: Arch::X86_64, os: Os::Darwin },
        Platform { arch: Arch::Aarch64, os: Os::Darwin },
    ];

    pub fn new(arch: Arch, os: Os) -> Self {
        Self { arch, os }
    }

    /// Whether this platform belongs to the Apple family.
    pub fn is_darwin(&self) -> bool {
        self.os == Os::Darwin
    }

    /// Detect the host platform, failing if the host is outside the
    /// supported set.
    pub fn detect() -> Result<Self, ConfigurationError> {
        let info = os_info::get();

        let os = match info.os_type() {
            os_info::Type::Macos => Os::Darwin,
            os_info::Type::Alpine
            | os_info::Type::Arch
            | os_info::Type::CentOS
            | os_info::Type::Debian
            | os_info::Type::Fedora
            | os_info::Type::Linux
            | os_info::Type::Mint
            | os_info::Type::NixOS
            | os_info::Type::openSUSE
            | os_info::Type::Pop
            | os_info::Type::Redhat
            | os_info::Type::RedHatEnterprise
            | os_info::Type::Ubuntu => Os::Linux,
            other => {
                return Err(ConfigurationError::UnsupportedPlatform(other.to_string()));
            }
        };

        let arch = match std::env::consts::ARCH {
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            other => {
                return Err(ConfigurationError::UnsupportedPlatform(format!(
                    "{other}-{os}"
                )));
            }
        };

        Ok(Self { arch, os })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.arch, self.os)
    }
}

impl FromStr for Platform {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || ConfigurationError::UnsupportedPlatform(s.to_string());

        let (arch, os) = s.split_once('-').ok_or_else(unsupported)?;

        let arch = match arch {
            "x86_64" | "amd64" => Arch::X86_64,
            "aarch64" | "arm64" => Arch::Aarch64,
            _ => return Err(unsupported()),
        };
        let os = match os {
            "linux" => Os::Linux,
            "darwin" | "macos" => Os::Darwin,
            _ => return Err(unsupported()),
        };

        Ok(Self { arch, os })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        for platform in Platform::SUPPORTED {
            let parsed: Platform = platform.to_string().parse().unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn parse_accepts_common_aliases() {
        assert_eq!(
            "arm64-macos".parse::<Platform>().unwrap(),
            Platform::new(Arch::Aarch64, Os::Darwin)
        );
        assert_eq!(
            "amd64-linux".parse::<Platform>().unwrap(),
            Platform::new(Arch::X86_64, Os::Linux)
        );
    }

    #[test]
    fn parse_rejects_unsupported_identifiers() {
        for bad in ["armv7l-linux", "x86_64-windows", "riscv64-linux", "redis"] {
            let err = bad.parse::<Platform>().unwrap_err();
            assert!(matches!(err, ConfigurationError::UnsupportedPlatform(_)));
        }
    }

    #[test]
    fn darwin_family_predicate() {
        assert!(Platform::new(Arch::Aarch64, Os::Darwin).is_darwin());
        assert!(!Platform::new(Arch::Aarch64, Os::Linux).is_darwin());
    }

    #[test]
    fn host_detection_lands_in_supported_set() {
        let host = Platform::detect().expect("host should be supported");
        assert!(Platform::SUPPORTED.contains(&host));
    }
}
