//! Domain model for shellpin: the declarative environment descriptor and
//! its resolution into a concrete, reproducible shell environment.

pub mod descriptor;
pub mod environment;
pub mod error;
pub mod package;
pub mod pins;
pub mod platform;
pub mod ports;
pub mod toolchain;

pub use descriptor::Descriptor;
pub use environment::ShellEnvironment;
pub use error::{ConfigurationError, ResolutionError};
pub use package::{Package, PackageKind};
pub use pins::{Pin, Pins};
pub use platform::{Arch, Os, Platform};
pub use ports::{Materialized, Provisioner};
pub use toolchain::{Channel, Extension, TargetTriple, Toolchain};
