pub mod error;
pub mod provision;

use std::path::Path;

use shellpin_descriptor::Descriptor;

use self::error::CliError;

/// The built-in pinned descriptor, or the manifest the user pointed at.
pub fn load_descriptor(manifest: Option<&Path>) -> Result<Descriptor, CliError> {
    match manifest {
        Some(path) => Ok(Descriptor::load(path)?),
        None => Ok(Descriptor::pinned()),
    }
}
