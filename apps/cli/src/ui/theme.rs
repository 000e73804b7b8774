use std::fmt;

/// The central theme definition for the shellpin CLI.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) - headers, the pin itself.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).bold())
    }

    /// Success color (Green)
    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).green().bold())
    }

    /// Warning color (Yellow)
    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).yellow().bold())
    }

    /// Muted color - metadata, paths, pins.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).dim())
    }
}

/// Standardized icons.
/// Usage: `println!("{} Resolving...", Icon::Pin)`
pub enum Icon {
    Pin,
    Package,
    Gear,
    Check,
    Cross,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Pin => "📌",
            Icon::Package => "📦",
            Icon::Gear => "⚙️ ",
            Icon::Check => "✔",
            Icon::Cross => "✖",
        };
        write!(f, "{}", icon)
    }
}
