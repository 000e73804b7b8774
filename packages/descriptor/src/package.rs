use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of artifact a package contributes to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// An executable exposed on the shell's search path.
    Binary,
    /// A linkable library.
    Library,
    /// A system framework (Apple platforms).
    Framework,
}

/// A named external package to make available in the shell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub kind: PackageKind,
}

impl Package {
    pub fn binary(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PackageKind::Binary,
        }
    }

    pub fn library(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PackageKind::Library,
        }
    }

    pub fn framework(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PackageKind::Framework,
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PackageKind::Binary => write!(f, "{}", self.name),
            PackageKind::Library => write!(f, "{} (library)", self.name),
            PackageKind::Framework => write!(f, "{} (framework)", self.name),
        }
    }
}
