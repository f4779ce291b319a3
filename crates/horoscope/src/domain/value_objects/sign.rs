//! Sign - The twelve zodiac signs, named in French

use serde::{Deserialize, Serialize};

/// Zodiac sign
///
/// `Unknown` is only produced if the resolver's ranges ever stop covering
/// the whole calendar; every real date maps to one of the twelve signs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sign {
    #[serde(rename = "Bélier")]
    Belier,
    Taureau,
    #[serde(rename = "Gémeaux")]
    Gemeaux,
    Cancer,
    Lion,
    Vierge,
    Balance,
    Scorpion,
    Sagittaire,
    Capricorne,
    Verseau,
    Poissons,
    #[serde(rename = "Inconnu")]
    Unknown,
}

impl Sign {
    /// The twelve signs a calendar date can resolve to
    pub const ALL: [Sign; 12] = [
        Sign::Belier,
        Sign::Taureau,
        Sign::Gemeaux,
        Sign::Cancer,
        Sign::Lion,
        Sign::Vierge,
        Sign::Balance,
        Sign::Scorpion,
        Sign::Sagittaire,
        Sign::Capricorne,
        Sign::Verseau,
        Sign::Poissons,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Belier => "Bélier",
            Sign::Taureau => "Taureau",
            Sign::Gemeaux => "Gémeaux",
            Sign::Cancer => "Cancer",
            Sign::Lion => "Lion",
            Sign::Vierge => "Vierge",
            Sign::Balance => "Balance",
            Sign::Scorpion => "Scorpion",
            Sign::Sagittaire => "Sagittaire",
            Sign::Capricorne => "Capricorne",
            Sign::Verseau => "Verseau",
            Sign::Poissons => "Poissons",
            Sign::Unknown => "Inconnu",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Sign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown sign: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_french_name() {
        let json = serde_json::to_string(&Sign::Belier).unwrap();
        assert_eq!(json, "\"Bélier\"");
        assert_eq!(serde_json::to_string(&Sign::Unknown).unwrap(), "\"Inconnu\"");
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for sign in Sign::ALL {
            assert_eq!(sign.name().parse::<Sign>().unwrap(), sign);
        }
        assert!("Ophiuchus".parse::<Sign>().is_err());
    }
}
