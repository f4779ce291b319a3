//! Response Parser - Model output to validated predictions
//!
//! The model is asked for a JSON object, but replies often wrap it in prose
//! or code fences. Parsing takes the text between the first `{` and the last
//! `}`; when that is not valid JSON, a best-effort fallback maps plain text
//! lines positionally onto the four fields.

use serde_json::{json, Map, Value};

use crate::domain::entities::PredictionSet;
use crate::domain::errors::DomainError;

/// Keys the model must fill with non-blank strings
pub const REQUIRED_KEYS: [&str; 4] = ["daily", "weekly", "monthly", "tip"];

/// Minimum number of non-empty lines for the line-based fallback
const MIN_FALLBACK_LINES: usize = 3;

/// Parse and validate a raw completion into a trimmed [`PredictionSet`]
pub fn parse_completion(text: &str) -> Result<PredictionSet, DomainError> {
    let candidate = extract_json_object(text)
        .or_else(|| fields_from_lines(text))
        .ok_or_else(|| DomainError::Parse("no JSON object or usable lines in response".into()))?;

    validate_prediction(&candidate)
}

/// Decode the substring between the first `{` and the last `}`
pub fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}

/// Map newline-separated lines to (daily, weekly, monthly, tip).
///
/// Needs at least three non-empty lines; a missing fourth line leaves the
/// tip empty, which validation then rejects. Lines past the fourth are ignored.
pub fn fields_from_lines(text: &str) -> Option<Value> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < MIN_FALLBACK_LINES {
        return None;
    }

    Some(json!({
        "daily": lines[0],
        "weekly": lines[1],
        "monthly": lines[2],
        "tip": lines.get(3).copied().unwrap_or_default(),
    }))
}

/// Require every key as a non-blank string; returns trimmed fields
pub fn validate_prediction(value: &Value) -> Result<PredictionSet, DomainError> {
    let object = value
        .as_object()
        .ok_or_else(|| DomainError::Validation("response is not a JSON object".into()))?;

    let daily = required_field(object, "daily")?;
    let weekly = required_field(object, "weekly")?;
    let monthly = required_field(object, "monthly")?;
    let tip = required_field(object, "tip")?;

    Ok(PredictionSet::new(daily, weekly, monthly, Some(tip)))
}

fn required_field(object: &Map<String, Value>, key: &str) -> Result<String, DomainError> {
    let value = object
        .get(key)
        .ok_or_else(|| DomainError::Validation(format!("missing key '{}'", key)))?;

    let text = value
        .as_str()
        .ok_or_else(|| DomainError::Validation(format!("key '{}' is not a string", key)))?
        .trim();

    if text.is_empty() {
        return Err(DomainError::Validation(format!("key '{}' is empty", key)));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"daily":" Jour ","weekly":"Semaine","monthly":"Mois","tip":"Astuce"}"#;

    #[test]
    fn test_parses_json_wrapped_in_prose() {
        let text = format!("Voici ton horoscope:\n```json\n{}\n```\nBonne journée!", VALID);
        let set = parse_completion(&text).unwrap();

        assert_eq!(set.daily, "Jour");
        assert_eq!(set.weekly, "Semaine");
        assert_eq!(set.monthly, "Mois");
        assert_eq!(set.tip.as_deref(), Some("Astuce"));
    }

    #[test]
    fn test_line_fallback_with_four_lines() {
        let text = "Belle journée.\n\nSemaine calme.\nMois riche.\nBois de l'eau.\nExtra ignorée.";
        let set = parse_completion(text).unwrap();

        assert_eq!(set.daily, "Belle journée.");
        assert_eq!(set.tip.as_deref(), Some("Bois de l'eau."));
    }

    #[test]
    fn test_line_fallback_with_three_lines_fails_validation() {
        let text = "Belle journée.\nSemaine calme.\nMois riche.";
        assert!(fields_from_lines(text).is_some());
        assert!(matches!(parse_completion(text), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_too_few_lines_is_parse_error() {
        assert!(matches!(
            parse_completion("Une seule ligne.\nDeux."),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(parse_completion(""), Err(DomainError::Parse(_))));
    }

    #[test]
    fn test_validation_rejects_missing_or_blank_keys() {
        for key in REQUIRED_KEYS {
            let mut value: Value = serde_json::from_str(VALID).unwrap();
            value.as_object_mut().unwrap().remove(key);
            assert!(validate_prediction(&value).is_err(), "missing {key}");

            let mut value: Value = serde_json::from_str(VALID).unwrap();
            value[key] = json!("   ");
            assert!(validate_prediction(&value).is_err(), "blank {key}");

            let mut value: Value = serde_json::from_str(VALID).unwrap();
            value[key] = json!(42);
            assert!(validate_prediction(&value).is_err(), "non-string {key}");
        }
    }

    #[test]
    fn test_valid_json_missing_key_does_not_use_line_fallback() {
        let text = "{\"daily\":\"a\",\n\"weekly\":\"b\",\n\"monthly\":\"c\"}";
        assert!(matches!(parse_completion(text), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_reversed_braces_ignored() {
        assert!(extract_json_object("} nope {").is_none());
    }
}
