use anyhow::Result;
use clap::Parser;

use shellpin_descriptor::Platform;

use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct PlatformsCommand {}

impl PlatformsCommand {
    pub fn execute(self) -> Result<()> {
        let host = Platform::detect().ok();

        println!("{}", Theme::primary("Supported platforms:"));
        for platform in Platform::SUPPORTED {
            if host == Some(platform) {
                println!("  {} {} {}", Icon::Check, platform, Theme::muted("(host)"));
            } else {
                println!("    {platform}");
            }
        }

        Ok(())
    }
}
