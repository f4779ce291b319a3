//! PredictionSet - The horoscope text bundle returned to clients

use serde::{Deserialize, Serialize};

/// Daily, weekly and monthly predictions, plus a tip when written by the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionSet {
    pub daily: String,
    pub weekly: String,
    pub monthly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl PredictionSet {
    pub fn new(
        daily: impl Into<String>,
        weekly: impl Into<String>,
        monthly: impl Into<String>,
        tip: Option<String>,
    ) -> Self {
        Self {
            daily: daily.into(),
            weekly: weekly.into(),
            monthly: monthly.into(),
            tip,
        }
    }

    /// Overlay these (AI) predictions on a baseline: every non-blank field
    /// of `self` wins, blank ones fall back to the baseline's.
    pub fn merged_over(self, base: &PredictionSet) -> PredictionSet {
        fn pick(primary: String, fallback: &str) -> String {
            if primary.trim().is_empty() {
                fallback.to_string()
            } else {
                primary
            }
        }

        PredictionSet {
            daily: pick(self.daily, &base.daily),
            weekly: pick(self.weekly, &base.weekly),
            monthly: pick(self.monthly, &base.monthly),
            tip: self
                .tip
                .filter(|t| !t.trim().is_empty())
                .or_else(|| base.tip.clone()),
        }
    }
}
