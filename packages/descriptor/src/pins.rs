use serde::{Deserialize, Serialize};

/// A version-pinned external input: where it lives and the exact revision
/// a resolution is relative to. How the collaborator fetches it is not
/// this crate's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub name: String,
    pub locator: String,
    pub rev: String,
}

impl Pin {
    fn new(name: &str, locator: &str, rev: &str) -> Self {
        Self {
            name: name.to_string(),
            locator: locator.to_string(),
            rev: rev.to_string(),
        }
    }
}

/// The three pinned sources every resolution is made against: the package
/// index, the toolchain overlay, and the platform utility library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pins {
    pub package_index: Pin,
    pub toolchain_overlay: Pin,
    pub platform_utils: Pin,
}

impl Default for Pins {
    fn default() -> Self {
        Self {
            package_index: Pin::new("nixpkgs", "github:NixOS/nixpkgs", "nixos-24.05"),
            toolchain_overlay: Pin::new("rust-overlay", "github:oxalica/rust-overlay", "260ff391290a2b23958d04db0d3e7015c8417401"),
            platform_utils: Pin::new("flake-utils", "github:numtide/flake-utils", "b1d9ab70662946ef0850d488da1c9019f3a9752a"),
        }
    }
}
