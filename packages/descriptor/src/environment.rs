use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::package::{Package, PackageKind};
use crate::pins::Pins;
use crate::platform::Platform;
use crate::toolchain::Toolchain;

/// The fully resolved environment for one platform: the value a shell
/// session is built from.
///
/// Resolution is pure, so two environments resolved from the same
/// descriptor and platform compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellEnvironment {
    pub platform: Platform,
    pub toolchain: Toolchain,
    pub packages: BTreeSet<Package>,
    pub pins: Pins,
}

impl ShellEnvironment {
    /// Every executable the shell's search path must expose: the
    /// toolchain's binaries plus the binary packages.
    pub fn executables(&self) -> BTreeSet<String> {
        let mut set = self.toolchain.exposed_binaries();
        set.extend(
            self.packages
                .iter()
                .filter(|package| package.kind == PackageKind::Binary)
                .map(|package| package.name.clone()),
        );
        set
    }

    /// Whether the resolved set contains `name`, as a package of any kind
    /// or as a toolchain binary.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.iter().any(|package| package.name == name)
            || self.toolchain.exposed_binaries().contains(name)
    }

    /// Names of the resolved system frameworks, in sorted order. Empty
    /// outside the Apple family.
    pub fn frameworks(&self) -> Vec<&str> {
        self.packages
            .iter()
            .filter(|package| package.kind == PackageKind::Framework)
            .map(|package| package.name.as_str())
            .collect()
    }
}
