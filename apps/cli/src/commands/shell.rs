use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;

use shellpin_descriptor::{Platform, Provisioner};

use crate::core::error::CliError;
use crate::core::provision::PathProvisioner;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug, Default)]
pub struct ShellCommand {
    /// Load the descriptor from a TOML manifest instead of the built-in pin
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

impl ShellCommand {
    pub fn execute(self) -> Result<()> {
        let descriptor = crate::core::load_descriptor(self.manifest.as_deref())?;
        let platform = Platform::detect().map_err(CliError::from)?;
        let env = descriptor.resolve(platform).map_err(CliError::from)?;

        println!(
            "{} {} {}",
            Icon::Pin,
            Theme::primary("Entering pinned shell for"),
            Theme::bold(platform)
        );

        let materialized = PathProvisioner::new()
            .materialize(&env)
            .map_err(CliError::from)?;
        tracing::debug!(
            executables = materialized.executables.len(),
            "environment materialized"
        );

        // Link every resolved executable into one bin directory and put
        // that directory first on the spawned shell's search path.
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let bin_dir = root.join(".shellpin").join("bin");
        std::fs::create_dir_all(&bin_dir)?;

        #[cfg(unix)]
        for (name, path) in &materialized.executables {
            let link = bin_dir.join(name);
            if link.symlink_metadata().is_ok() {
                std::fs::remove_file(&link)?;
            }
            std::os::unix::fs::symlink(path, &link)
                .with_context(|| format!("Failed to link {name} into {}", bin_dir.display()))?;
        }

        let shell = std::env::var("SHELL").unwrap_or_else(|_| "sh".to_string());
        let path_env = std::env::var("PATH").unwrap_or_default();
        let new_path = format!("{}:{}", bin_dir.to_string_lossy(), path_env);

        println!("{} Spawning {} with pinned context...", Icon::Check, shell);

        let mut child = Command::new(&shell)
            .env("PATH", new_path)
            .env("SHELLPIN_PLATFORM", platform.to_string())
            .spawn()
            .context(format!("Failed to spawn shell: {shell}"))?;

        let status = child.wait()?;

        if status.success() {
            println!("\n{} Shell exited cleanly.", Icon::Check);
        } else {
            println!("\n{} Shell exited with error.", Icon::Cross);
        }

        Ok(())
    }
}
