use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ConfigurationError;

/// Release channel of the compiler distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Stable,
    Beta,
    Nightly,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stable => write!(f, "stable"),
            Channel::Beta => write!(f, "beta"),
            Channel::Nightly => write!(f, "nightly"),
        }
    }
}

/// Extension names the toolchain provider knows how to attach.
const KNOWN_EXTENSIONS: &[&str] = &[
    "rust-src",
    "rust-analyzer",
    "llvm-tools",
    "clippy",
    "rustfmt",
    "miri",
];

/// Binaries every channel ships in its default profile.
const DEFAULT_PROFILE_BINARIES: &[&str] = &["cargo", "rustc", "rustdoc", "rustfmt"];

/// A named toolchain extension, validated against the provider's registry.
///
/// Construction is the validation point: an unknown name never becomes an
/// `Extension`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extension(String);

impl Extension {
    pub fn new(name: &str) -> Result<Self, ConfigurationError> {
        if KNOWN_EXTENSIONS.contains(&name) {
            Ok(Self(name.to_string()))
        } else {
            Err(ConfigurationError::UnknownExtension(name.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Binaries this extension adds to the toolchain's exposed set.
    /// Source-only extensions add none.
    pub fn binaries(&self) -> &'static [&'static str] {
        match self.0.as_str() {
            "rust-analyzer" => &["rust-analyzer"],
            "llvm-tools" => &["llvm-profdata", "llvm-cov"],
            "clippy" => &["cargo-clippy", "clippy-driver"],
            "miri" => &["miri", "cargo-miri"],
            _ => &[],
        }
    }
}

impl TryFrom<String> for Extension {
    type Error = ConfigurationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl From<Extension> for String {
    fn from(ext: Extension) -> Self {
        ext.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cross-compilation target triple, e.g. `x86_64-unknown-linux-musl`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetTriple(String);

impl TargetTriple {
    pub fn new(triple: &str) -> Result<Self, ConfigurationError> {
        // Arch-vendor-os at minimum.
        if triple.split('-').filter(|part| !part.is_empty()).count() < 3 {
            return Err(ConfigurationError::InvalidTarget(triple.to_string()));
        }
        Ok(Self(triple.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TargetTriple {
    type Error = ConfigurationError;

    fn try_from(triple: String) -> Result<Self, Self::Error> {
        Self::new(&triple)
    }
}

impl From<TargetTriple> for String {
    fn from(triple: TargetTriple) -> Self {
        triple.0
    }
}

impl fmt::Display for TargetTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The pinned compiler toolchain: a channel plus named extensions and
/// cross-compilation targets. Extension and target sets are
/// order-irrelevant and duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    #[serde(default)]
    pub channel: Channel,
    #[serde(default)]
    pub extensions: BTreeSet<Extension>,
    #[serde(default)]
    pub targets: BTreeSet<TargetTriple>,
}

impl Toolchain {
    /// The pinned stable toolchain: compiler sources, the language server,
    /// the LLVM profiling tools, and the two static cross targets.
    pub fn pinned() -> Self {
        Self {
            channel: Channel::Stable,
            extensions: ["rust-src", "rust-analyzer", "llvm-tools"]
                .into_iter()
                .map(|name| Extension(name.to_string()))
                .collect(),
            targets: ["x86_64-unknown-linux-musl", "aarch64-unknown-linux-musl"]
                .into_iter()
                .map(|triple| TargetTriple(triple.to_string()))
                .collect(),
        }
    }

    /// Binaries the toolchain puts on the search path: the default profile
    /// (which already carries the formatter) plus whatever the extensions
    /// add.
    pub fn exposed_binaries(&self) -> BTreeSet<String> {
        let mut binaries: BTreeSet<String> = DEFAULT_PROFILE_BINARIES
            .iter()
            .map(|name| name.to_string())
            .collect();
        for extension in &self.extensions {
            binaries.extend(extension.binaries().iter().map(|name| name.to_string()));
        }
        binaries
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::pinned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = Extension::new("rust-docs-json").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownExtension(_)));
    }

    #[test]
    fn pinned_toolchain_shape() {
        let toolchain = Toolchain::pinned();
        assert_eq!(toolchain.channel, Channel::Stable);
        assert_eq!(toolchain.extensions.len(), 3);
        assert_eq!(toolchain.targets.len(), 2);
    }

    #[test]
    fn exposed_binaries_cover_profile_and_extensions() {
        let binaries = Toolchain::pinned().exposed_binaries();
        for expected in ["cargo", "rustc", "rustfmt", "rust-analyzer", "llvm-profdata"] {
            assert!(binaries.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn malformed_target_triple_is_rejected() {
        let err = TargetTriple::new("musl").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidTarget(_)));
    }
}
