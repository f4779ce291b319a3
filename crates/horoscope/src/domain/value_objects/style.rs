//! Style - Tone requested for AI-written horoscopes

use serde::{Deserialize, Serialize};

/// Writing style of a generated horoscope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Default,
    Romantique,
    Pragmatique,
    Humoristique,
    Spirituel,
    Carriere,
}

impl Style {
    /// Lenient parse: anything unrecognized (or absent) is the default tone
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.trim().parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Romantique => "romantique",
            Style::Pragmatique => "pragmatique",
            Style::Humoristique => "humoristique",
            Style::Spirituel => "spirituel",
            Style::Carriere => "carriere",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Style::Default),
            "romantique" => Ok(Style::Romantique),
            "pragmatique" => Ok(Style::Pragmatique),
            "humoristique" => Ok(Style::Humoristique),
            "spirituel" => Ok(Style::Spirituel),
            "carriere" | "carrière" => Ok(Style::Carriere),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}
