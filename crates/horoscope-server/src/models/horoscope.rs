//! Horoscope request/response DTOs

use horoscope::{PredictionSet, Style};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================
// Request DTOs
// ============================================

/// Horoscope request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeRequest {
    /// Birth date, e.g. "1990-07-10"
    pub date_of_birth: Option<String>,
    /// "homme", "femme" or "autre"
    pub gender: Option<String>,
    /// default, romantique, pragmatique, humoristique, spirituel, carriere
    pub style: Option<String>,
    /// short, medium or long
    pub length: Option<String>,
}

// ============================================
// Response DTOs
// ============================================

/// Where the predictions came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    OpenAi,
    Templates,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct PredictionsResponse {
    pub daily: String,
    pub weekly: String,
    pub monthly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl From<PredictionSet> for PredictionsResponse {
    fn from(set: PredictionSet) -> Self {
        Self {
            daily: set.daily,
            weekly: set.weekly,
            monthly: set.monthly,
            tip: set.tip,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ResponseMeta {
    pub source: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResponseMeta {
    pub fn openai(style: Style) -> Self {
        Self {
            source: Provenance::OpenAi,
            style: Some(style.to_string()),
            note: None,
        }
    }

    pub fn templates(note: Option<&str>) -> Self {
        Self {
            source: Provenance::Templates,
            style: None,
            note: note.map(str::to_string),
        }
    }
}

/// Horoscope response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct HoroscopeResponse {
    /// Zodiac sign in French, e.g. "Cancer"
    pub sign: String,
    pub predictions: PredictionsResponse,
    pub meta: ResponseMeta,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
