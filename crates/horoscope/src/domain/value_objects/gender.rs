//! Gender - Optional hint used to phrase AI-written horoscopes

use serde::{Deserialize, Serialize};

/// Gender hint supplied by the client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Homme,
    Femme,
    Autre,
}

impl Gender {
    /// Lenient parse: unrecognized values are treated as unset
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.trim().parse().ok())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Homme => "homme",
            Gender::Femme => "femme",
            Gender::Autre => "autre",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "homme" => Ok(Gender::Homme),
            "femme" => Ok(Gender::Femme),
            "autre" => Ok(Gender::Autre),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::from_param(Some("FEMME")), Some(Gender::Femme));
        assert_eq!(Gender::from_param(Some("")), None);
        assert_eq!(Gender::from_param(Some("robot")), None);
        assert_eq!(Gender::from_param(None), None);
    }
}
