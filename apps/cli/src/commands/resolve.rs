use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use shellpin_descriptor::{PackageKind, Platform};

use crate::core::error::CliError;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct ResolveCommand {
    /// Resolve for this platform instead of the detected host
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Print the resolved environment as JSON
    #[arg(long)]
    pub json: bool,

    /// Load the descriptor from a TOML manifest instead of the built-in pin
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self) -> Result<()> {
        let descriptor = crate::core::load_descriptor(self.manifest.as_deref())?;
        let platform = match self.platform {
            Some(platform) => platform,
            None => Platform::detect().map_err(CliError::from)?,
        };
        let env = descriptor.resolve(platform).map_err(CliError::from)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&env)?);
            return Ok(());
        }

        println!(
            "{} {} {}",
            Icon::Pin,
            Theme::primary("Resolved environment for"),
            Theme::bold(platform)
        );

        println!(
            "\n  toolchain: {} ({} extensions, {} targets)",
            Theme::bold(&env.toolchain.channel),
            env.toolchain.extensions.len(),
            env.toolchain.targets.len()
        );
        for extension in &env.toolchain.extensions {
            println!("    + {extension}");
        }
        for target in &env.toolchain.targets {
            println!("    {} {}", Theme::muted("target"), Theme::muted(target));
        }

        println!("\n  packages:");
        for package in &env.packages {
            let icon = match package.kind {
                PackageKind::Binary => Icon::Package,
                PackageKind::Library | PackageKind::Framework => Icon::Gear,
            };
            println!("    {icon} {package}");
        }

        println!("\n  pins:");
        for pin in [
            &env.pins.package_index,
            &env.pins.toolchain_overlay,
            &env.pins.platform_utils,
        ] {
            println!(
                "    {} {} @ {}",
                Theme::muted(&pin.name),
                Theme::muted(&pin.locator),
                Theme::muted(&pin.rev)
            );
        }

        println!(
            "\n  {} executables on the search path",
            env.executables().len()
        );

        Ok(())
    }
}
