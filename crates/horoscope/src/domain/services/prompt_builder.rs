//! Prompt Builder - Instruction text for the language model
//!
//! Pure function of a [`PromptConfig`]. Sections appear in a fixed order:
//! role, tone, length, safety, gender phrasing, output schema, few-shot
//! examples, subject data, closing instruction.

use serde::Serialize;

use crate::domain::entities::PromptConfig;
use crate::domain::value_objects::{Length, Style};

/// System message sent alongside every prompt
pub const SYSTEM_INSTRUCTION: &str = "Tu es un assistant spécialisé dans la rédaction d'horoscopes en français, respecte le format JSON demandé.";

/// Appended to the prompt on the retry attempt
pub const STRICT_JSON_SUFFIX: &str = "\n\nIMPORTANT: Réponds strictement par l'objet JSON demandé, sans aucun texte additionnel, et assure-toi que le JSON est valide.";

const ROLE_FRAMING: &str = "System: Tu es un·e astrologue professionnel·le et bienveillant·e qui rédige des horoscopes courts et utiles en français.";

const SAFETY_CONSTRAINTS: &str = "Contraintes de sécurité :
- N'offre jamais de conseils médicaux, juridiques, fiscaux ou d'investissement.
- Ne demande ni ne révèle d'informations personnelles sensibles.
- N'affirme jamais des faits vérifiables qui pourraient être faux (évite les dates/événements factuels non vérifiés).
- Sois bienveillant·e, réaliste et évite les promesses absolues.";

const GENDER_INSTRUCTION: &str = "Important: Utilise les pronoms et le registre adaptés au paramètre 'genre' fourni; si 'neutre', privilégie un langage inclusif.";

const SCHEMA_INSTRUCTION: &str = r#"Réponds strictement en JSON valide. Objet attendu:
{
  "daily": "<1-3 phrases en français>",
  "weekly": "<1-3 phrases en français>",
  "monthly": "<1-3 phrases en français>",
  "tip": "<1 phrase pratique et courte en français>"
}
Ne fournis aucun texte hors de ce JSON. Si tu ajoutes des guillemets échappés, assure-toi que le JSON reste valide."#;

const FEW_SHOT_HEADER: &str = "Exemples pour illustrer le format (few-shot):";

const FINAL_INSTRUCTION: &str = "Instruction finale: Produis uniquement l'objet JSON demandé. Ne fournis aucun commentaire additionnel.";

/// Build the full user prompt
pub fn build_prompt(config: &PromptConfig) -> String {
    let parts = [
        ROLE_FRAMING.to_string(),
        tone_instruction(config.style).to_string(),
        length_instruction(config.length).to_string(),
        SAFETY_CONSTRAINTS.to_string(),
        GENDER_INSTRUCTION.to_string(),
        SCHEMA_INSTRUCTION.to_string(),
        FEW_SHOT_HEADER.to_string(),
        few_shot_examples(config.style),
        subject_data(config),
        FINAL_INSTRUCTION.to_string(),
    ];

    parts.join("\n\n")
}

fn tone_instruction(style: Style) -> &'static str {
    match style {
        Style::Romantique => {
            "Ton: tendre, chaleureux, empathique. Met l'accent sur les relations et les émotions."
        }
        Style::Pragmatique => "Ton: factuel, concis, orienté actions concrètes et priorités.",
        Style::Humoristique => "Ton: léger, drôle, imagé; évite l'ironie blessante.",
        Style::Spirituel => {
            "Ton: contemplatif, inspirant, un peu métaphorique; privilégie l'intuition."
        }
        Style::Carriere => "Ton: professionnel, orienté carrière, opportunités et stratégie.",
        Style::Default => "Ton: bienveillant, clair et accessible.",
    }
}

fn length_instruction(length: Length) -> &'static str {
    match length {
        Length::Short => "Chaque valeur (daily/weekly/monthly) doit faire 1 à 2 phrases.",
        Length::Medium => "Chaque valeur peut faire 1 à 3 phrases.",
        Length::Long => "Chaque valeur peut faire 2 à 4 phrases.",
    }
}

#[derive(Serialize)]
struct Example {
    daily: &'static str,
    weekly: &'static str,
    monthly: &'static str,
    tip: &'static str,
}

/// Two JSON examples; the style only rewords one field of each
fn few_shot_examples(style: Style) -> String {
    let mut first = Example {
        daily: "Aujourd'hui, tu te sens motivé·e et prêt·e à avancer sur un petit projet; profite de l'élan.",
        weekly: "Semaine active: des opportunités sociales apparaissent, privilégie l'écoute.",
        monthly: "Mois favorable aux fondations durables: planifie et établis des priorités.",
        tip: "Note une tâche réalisable chaque matin.",
    };
    let mut second = Example {
        daily: "Énergie modérée: prends le temps d'organiser ta journée avant d'agir.",
        weekly: "Des discussions importantes pourraient survenir; prépare tes arguments avec calme.",
        monthly: "Période de réévaluation: revois tes objectifs à moyen terme.",
        tip: "Respire profondément avant une décision majeure.",
    };

    match style {
        Style::Romantique => {
            first.daily = "Aujourd'hui, une attention tendre pourrait rapprocher quelqu'un de toi; laisse parler ton coeur.";
            second.weekly = "Les sentiments s'approfondissent; exprime ta vulnérabilité avec douceur.";
        }
        Style::Humoristique => {
            first.daily = "Ton magnétisme fait mouche, attention à ne pas déclencher une émeute d'admirateurs·rices.";
            second.weekly = "Semaine piquante: garde ton sens de l'humour pour désamorcer les quiproquos.";
        }
        Style::Pragmatique => {
            first.daily = "Fais une liste priorisée: une tâche terminée vaut mieux que dix idées.";
            second.weekly = "Semaine productive si tu délègues ce qui te pèse.";
        }
        Style::Spirituel => {
            first.daily = "Écoute ton intuition: un petit signe pourrait te guider.";
            second.weekly = "Temps de recueillement: prends un moment pour te recentrer.";
        }
        Style::Carriere => {
            first.daily = "Montre tes compétences avec humilité; un collègue remarquera ton travail.";
            second.weekly = "Semaine propice aux propositions: sois prêt·e à défendre une idée claire.";
        }
        Style::Default => {}
    }

    format!(
        "Exemple 1 (JSON attendu):\n{}\n\nExemple 2 (JSON attendu):\n{}",
        to_pretty_json(&first),
        to_pretty_json(&second)
    )
}

fn to_pretty_json(example: &Example) -> String {
    // A struct of plain strings always serializes
    serde_json::to_string_pretty(example).unwrap_or_default()
}

fn subject_data(config: &PromptConfig) -> String {
    let birth_date = config
        .birth_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "inconnue".to_string());
    let gender = config.gender.map(|g| g.as_str()).unwrap_or("neutre");

    format!(
        "Données: signe=\"{}\", date_de_naissance=\"{}\", genre=\"{}\". Rédige en français.",
        config.sign, birth_date, gender
    )
}
