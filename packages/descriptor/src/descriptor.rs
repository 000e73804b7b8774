use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::environment::ShellEnvironment;
use crate::error::ConfigurationError;
use crate::package::Package;
use crate::pins::Pins;
use crate::platform::Platform;
use crate::toolchain::Toolchain;

/// The declarative environment descriptor: one pinned toolchain, a base
/// package set, and the packages that join it on Apple platforms.
///
/// The built-in pin is [`Descriptor::pinned`]; teams that keep the
/// descriptor in-repo load the same structure from `shellpin.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptor {
    #[serde(default)]
    pub toolchain: Toolchain,

    #[serde(default)]
    pub packages: BTreeSet<Package>,

    /// Unioned into `packages` when the target platform is in the Darwin
    /// family. Union is idempotent, so listing a base package here is
    /// harmless.
    #[serde(default)]
    pub darwin_packages: BTreeSet<Package>,

    #[serde(default)]
    pub pins: Pins,
}

impl Descriptor {
    /// The built-in pinned descriptor: the stable toolchain and the redis
    /// server, with the iconv library and the two system frameworks on
    /// Apple platforms.
    pub fn pinned() -> Self {
        Self {
            toolchain: Toolchain::pinned(),
            packages: BTreeSet::from([Package::binary("redis")]),
            darwin_packages: BTreeSet::from([
                Package::library("libiconv"),
                Package::framework("Security"),
                Package::framework("SystemConfiguration"),
            ]),
            pins: Pins::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        let descriptor: Self = toml::from_str(content)
            .map_err(|err| ConfigurationError::Manifest(err.message().to_string()))?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Structural validation beyond what the types already enforce.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for package in self.packages.iter().chain(&self.darwin_packages) {
            if package.name.trim().is_empty() {
                return Err(ConfigurationError::InvalidPackage(
                    "package name must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolve the descriptor for one platform.
    ///
    /// Pure and deterministic: the result is a function of the descriptor
    /// and the platform, nothing else. Either the full environment is
    /// produced or an error is returned; there is no partial success.
    pub fn resolve(&self, platform: Platform) -> Result<ShellEnvironment, ConfigurationError> {
        self.validate()?;

        let mut packages = self.packages.clone();
        if platform.is_darwin() {
            packages.extend(self.darwin_packages.iter().cloned());
        }

        Ok(ShellEnvironment {
            platform,
            toolchain: self.toolchain.clone(),
            packages,
            pins: self.pins.clone(),
        })
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::pinned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toml_round_trip_preserves_the_pin() {
        let pinned = Descriptor::pinned();
        let toml = toml::to_string(&pinned).unwrap();
        let reloaded = Descriptor::from_toml_str(&toml).unwrap();
        assert_eq!(reloaded, pinned);
    }

    #[test]
    fn manifest_with_unknown_extension_is_rejected() {
        let manifest = r#"
            [toolchain]
            channel = "stable"
            extensions = ["rust-docs-json"]
        "#;
        let err = Descriptor::from_toml_str(manifest).unwrap_err();
        assert!(matches!(err, ConfigurationError::Manifest(_)));
        assert!(err.to_string().contains("unknown toolchain extension"));
    }

    #[test]
    fn manifest_with_unknown_field_is_rejected() {
        let err = Descriptor::from_toml_str("profiles = []").unwrap_err();
        assert!(matches!(err, ConfigurationError::Manifest(_)));
    }

    #[test]
    fn empty_package_name_is_rejected() {
        let mut descriptor = Descriptor::pinned();
        descriptor.packages.insert(Package::binary("  "));
        let err = descriptor.validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPackage(_)));
    }

    #[test]
    fn load_reads_a_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shellpin.toml");
        fs::write(&path, toml::to_string(&Descriptor::pinned()).unwrap()).unwrap();

        let loaded = Descriptor::load(&path).unwrap();
        assert_eq!(loaded, Descriptor::pinned());
    }

    #[test]
    fn missing_manifest_file_is_an_io_error() {
        let err = Descriptor::load(Path::new("/nonexistent/shellpin.toml")).unwrap_err();
        assert!(matches!(err, ConfigurationError::Io(_)));
    }
}
