//! Length - How long each generated prediction should be

use serde::{Deserialize, Serialize};

/// Requested prediction length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    #[default]
    Short,
    Medium,
    Long,
}

impl Length {
    /// Lenient parse: anything unrecognized (or absent) is short
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.trim().parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            _ => Err(format!("Unknown length: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_length_falls_back_to_short() {
        assert_eq!(Length::from_param(Some("xl")), Length::Short);
        assert_eq!(Length::from_param(Some("")), Length::Short);
        assert_eq!(Length::from_param(None), Length::Short);
        assert_eq!(Length::from_param(Some(" Medium ")), Length::Medium);
    }
}
