use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named color scheme. The lowercase name is what gets persisted and what the
/// stylesheet matches on through `body[data-theme=...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Emerald,
    Glossy,
    Cyberpunk,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    Unknown(String),
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Default,
        Theme::Dark,
        Theme::Emerald,
        Theme::Glossy,
        Theme::Cyberpunk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Emerald => "emerald",
            Theme::Glossy => "glossy",
            Theme::Cyberpunk => "cyberpunk",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Dark => "Dark",
            Theme::Emerald => "Emerald",
            Theme::Glossy => "Glossy",
            Theme::Cyberpunk => "Cyberpunk",
        }
    }

    /// Material icon shown next to the label in the theme menu.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Default => "light_mode",
            Theme::Dark => "dark_mode",
            _ => "palette",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}
