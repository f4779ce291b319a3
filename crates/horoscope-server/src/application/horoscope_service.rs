//! Horoscope Application Service (Use Case)
//!
//! Resolves the sign, always draws the template baseline, and overlays AI
//! predictions when the AI mode is on and the generator delivers.

use std::sync::{Arc, Mutex};

use horoscope::{
    resolve_sign, BirthInput, DomainError, Gender, Length, PredictionSet, PromptConfig, Sign,
    Style, TemplateStore,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::AiGenerator;
use crate::models::Provenance;

/// Note attached when AI mode is on but templates were served
pub const AI_UNAVAILABLE_NOTE: &str = "IA indisponible, modérée ou erreur";

/// Result of one horoscope request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeOutcome {
    pub sign: Sign,
    pub predictions: PredictionSet,
    pub source: Provenance,
    pub style: Option<Style>,
    pub note: Option<&'static str>,
}

/// Application service for horoscope requests
pub struct HoroscopeService {
    templates: TemplateStore,
    rng: Mutex<StdRng>,
    ai: Option<Arc<AiGenerator>>,
}

impl HoroscopeService {
    /// Templates-only service with an entropy-seeded RNG
    pub fn new(templates: TemplateStore) -> Self {
        Self {
            templates,
            rng: Mutex::new(StdRng::from_entropy()),
            ai: None,
        }
    }

    /// Reproducible template picks
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Turn AI mode on
    pub fn with_ai(mut self, ai: Arc<AiGenerator>) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// Build the horoscope for a validated birth input
    pub async fn horoscope(
        &self,
        input: &BirthInput,
        style: Style,
        length: Length,
    ) -> Result<HoroscopeOutcome, DomainError> {
        let sign = resolve_sign(&input.date);
        let baseline = self.baseline(sign, input.gender)?;

        let Some(ai) = &self.ai else {
            return Ok(HoroscopeOutcome {
                sign,
                predictions: baseline,
                source: Provenance::Templates,
                style: None,
                note: None,
            });
        };

        let request = PromptConfig {
            style,
            length,
            sign,
            gender: input.gender,
            birth_date: Some(input.date),
        };

        match ai.generate(&request).await {
            Ok(predictions) => Ok(HoroscopeOutcome {
                sign,
                predictions: predictions.merged_over(&baseline),
                source: Provenance::OpenAi,
                style: Some(style),
                note: None,
            }),
            Err(reason) => {
                tracing::warn!("AI unavailable for {} ({}), serving templates", sign, reason);
                Ok(HoroscopeOutcome {
                    sign,
                    predictions: baseline,
                    source: Provenance::Templates,
                    style: None,
                    note: Some(AI_UNAVAILABLE_NOTE),
                })
            }
        }
    }

    fn baseline(&self, sign: Sign, gender: Option<Gender>) -> Result<PredictionSet, DomainError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| DomainError::Internal("template RNG lock poisoned".to_string()))?;

        Ok(self.templates.generate(sign, gender, &mut *rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ai_generator::tests::{
        generator_with, test_clock, ScriptedProvider, VALID_JSON,
    };
    use chrono::NaiveDate;

    fn cancer_input() -> BirthInput {
        BirthInput::new(NaiveDate::from_ymd_opt(1990, 7, 10).unwrap(), None)
    }

    #[tokio::test]
    async fn test_templates_when_ai_disabled() {
        let service = HoroscopeService::new(TemplateStore::builtin()).with_seed(1);
        let outcome = service
            .horoscope(&cancer_input(), Style::Romantique, Length::Short)
            .await
            .unwrap();

        assert_eq!(outcome.sign, Sign::Cancer);
        assert_eq!(outcome.source, Provenance::Templates);
        assert_eq!(outcome.note, None);
        assert!(outcome.predictions.tip.is_none());
        let pools = TemplateStore::builtin();
        assert!(pools
            .pools_for(Sign::Cancer)
            .daily
            .contains(&outcome.predictions.daily.as_str()));
    }

    #[tokio::test]
    async fn test_templates_with_note_when_ai_unavailable() {
        let generator = Arc::new(generator_with(None, test_clock()));
        let service = HoroscopeService::new(TemplateStore::builtin()).with_ai(generator);

        let outcome = service
            .horoscope(&cancer_input(), Style::Default, Length::Short)
            .await
            .unwrap();

        assert_eq!(outcome.source, Provenance::Templates);
        assert_eq!(outcome.note, Some(AI_UNAVAILABLE_NOTE));
        assert!(!outcome.predictions.daily.is_empty());
    }

    #[tokio::test]
    async fn test_ai_predictions_when_available() {
        let provider = ScriptedProvider::replying(VALID_JSON);
        let generator = Arc::new(generator_with(Some(provider.clone()), test_clock()));
        let service = HoroscopeService::new(TemplateStore::builtin()).with_ai(generator);

        let outcome = service
            .horoscope(&cancer_input(), Style::Carriere, Length::Long)
            .await
            .unwrap();

        assert_eq!(outcome.source, Provenance::OpenAi);
        assert_eq!(outcome.style, Some(Style::Carriere));
        assert_eq!(outcome.predictions.daily, "Jour lumineux.");
        assert_eq!(outcome.predictions.tip.as_deref(), Some("Souris."));
        assert_eq!(provider.calls(), 1);
    }
}
