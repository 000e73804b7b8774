use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use shellpin_descriptor::Platform;

use crate::core::error::CliError;
use crate::core::provision::PathProvisioner;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct DoctorCommand {
    /// Load the descriptor from a TOML manifest instead of the built-in pin
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

impl DoctorCommand {
    pub fn execute(self) -> Result<()> {
        let descriptor = crate::core::load_descriptor(self.manifest.as_deref())?;
        let platform = Platform::detect().map_err(CliError::from)?;
        let env = descriptor.resolve(platform).map_err(CliError::from)?;

        println!(
            "{} {} {}",
            Icon::Pin,
            Theme::primary("Checking materialized environment for"),
            Theme::bold(platform)
        );

        let provisioner = PathProvisioner::new();
        let mut missing = 0usize;

        for name in env.executables() {
            match provisioner.locate(&name) {
                Some(path) => {
                    println!("  {} {name}  {}", Icon::Check, Theme::muted(path.display()));
                }
                None => {
                    missing += 1;
                    println!("  {} {name}  {}", Icon::Cross, Theme::warning("missing"));
                }
            }
        }

        if missing == 0 {
            println!("\n{}", Theme::success("Environment is complete."));
            return Ok(());
        }

        Err(CliError::Runtime(format!("{missing} required executables are missing")).into())
    }
}
