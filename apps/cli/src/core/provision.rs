use std::collections::BTreeMap;

use shellpin_descriptor::{Materialized, Provisioner, ResolutionError, ShellEnvironment};

/// The default external collaborator: every required executable must
/// already be reachable on PATH. Fetching and building binaries stays
/// outside this tool.
#[derive(Default)]
pub struct PathProvisioner;

impl PathProvisioner {
    pub fn new() -> Self {
        Self
    }

    /// Locate one executable without failing the whole environment.
    pub fn locate(&self, name: &str) -> Option<std::path::PathBuf> {
        which::which(name).ok()
    }
}

impl Provisioner for PathProvisioner {
    fn materialize(&self, env: &ShellEnvironment) -> Result<Materialized, ResolutionError> {
        let mut executables = BTreeMap::new();

        for name in env.executables() {
            let path = which::which(&name)
                .map_err(|_| ResolutionError::MissingExecutable(name.clone()))?;
            tracing::debug!(%name, path = %path.display(), "located executable");
            executables.insert(name, path);
        }

        Ok(Materialized { executables })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellpin_descriptor::{Arch, Descriptor, Os, Package, Platform};

    #[test]
    fn missing_executable_fails_materialization() {
        let mut descriptor = Descriptor::pinned();
        descriptor
            .packages
            .insert(Package::binary("shellpin-test-binary-that-cannot-exist"));

        let env = descriptor
            .resolve(Platform::new(Arch::X86_64, Os::Linux))
            .unwrap();

        let err = PathProvisioner::new().materialize(&env).unwrap_err();
        assert!(matches!(err, ResolutionError::MissingExecutable(_)));
    }

    #[test]
    fn locate_is_a_non_failing_probe() {
        assert!(PathProvisioner::new()
            .locate("shellpin-test-binary-that-cannot-exist")
            .is_none());
    }
}
