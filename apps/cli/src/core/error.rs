use shellpin_descriptor::{ConfigurationError, ResolutionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(ConfigurationError::UnsupportedPlatform(_)) => {
                Some("Run `shellpin platforms` to list the supported set.".to_string())
            }
            CliError::Config(_) => {
                Some("Check shellpin.toml for syntax errors or unknown names.".to_string())
            }
            CliError::Resolution(_) => {
                Some("Install the missing package or fix PATH, then retry.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}
