//! Template Store - Static French prediction pools per sign
//!
//! Used for every request as the guaranteed baseline, whether or not the
//! language model is enabled.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::PredictionSet;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Gender, Sign};

/// Candidate sentences for one sign
#[derive(Debug, Clone, Copy)]
pub struct SignTemplates {
    pub daily: &'static [&'static str],
    pub weekly: &'static [&'static str],
    pub monthly: &'static [&'static str],
}

impl SignTemplates {
    fn is_complete(&self) -> bool {
        !self.daily.is_empty() && !self.weekly.is_empty() && !self.monthly.is_empty()
    }
}

/// Per-sign template pools with a designated fallback sign
#[derive(Debug, Clone)]
pub struct TemplateStore {
    pools: HashMap<Sign, SignTemplates>,
    fallback: Sign,
}

impl TemplateStore {
    /// Sign whose pools serve any sign without its own
    pub const DEFAULT_FALLBACK: Sign = Sign::Balance;

    /// Store with the built-in pools for all twelve signs
    pub fn builtin() -> Self {
        Self {
            pools: BUILTIN_POOLS.iter().copied().collect(),
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    /// Store from custom pools. The fallback sign must be registered and
    /// every registered pool must be non-empty.
    pub fn with_pools(
        pools: impl IntoIterator<Item = (Sign, SignTemplates)>,
        fallback: Sign,
    ) -> Result<Self, DomainError> {
        let pools: HashMap<Sign, SignTemplates> = pools.into_iter().collect();

        if let Some((sign, _)) = pools.iter().find(|(_, t)| !t.is_complete()) {
            return Err(DomainError::Validation(format!(
                "Template pools for {} must not be empty",
                sign
            )));
        }
        if !pools.contains_key(&fallback) {
            return Err(DomainError::Validation(format!(
                "Fallback sign {} has no templates",
                fallback
            )));
        }

        Ok(Self { pools, fallback })
    }

    /// Pools registered for `sign`, or the fallback sign's pools
    pub fn pools_for(&self, sign: Sign) -> &SignTemplates {
        match self.pools.get(&sign) {
            Some(pools) => pools,
            None => {
                tracing::debug!("No templates for {}, using {}", sign, self.fallback);
                &self.pools[&self.fallback]
            }
        }
    }

    /// Pick one sentence uniformly from each pool.
    ///
    /// The gender hint is accepted for future tailoring but does not
    /// influence the selection yet.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sign: Sign,
        _gender: Option<Gender>,
        rng: &mut R,
    ) -> PredictionSet {
        let pools = self.pools_for(sign);

        PredictionSet::new(
            pick(pools.daily, rng),
            pick(pools.weekly, rng),
            pick(pools.monthly, rng),
            None,
        )
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

const BUILTIN_POOLS: [(Sign, SignTemplates); 12] = [
    (
        Sign::Belier,
        SignTemplates {
            daily: &[
                "Aujourd'hui tu te sens plein·e d'énergie: profite pour avancer sur un projet.",
                "Ton enthousiasme attire l'attention, mais attention à la précipitation.",
            ],
            weekly: &[
                "Semaine dynamique: de belles opportunités sociales arrivent.",
                "Garde le cap, quelques tensions peuvent apparaître au travail.",
            ],
            monthly: &[
                "Mois favorable pour initier des changements. Fais confiance à ton instinct.",
                "Une période de prise de décision: priorise ce qui compte.",
            ],
        },
    ),
    (
        Sign::Taureau,
        SignTemplates {
            daily: &[
                "Journée stable: une bonne occasion de consolider ce que tu as construit.",
                "Prends soin de toi, un moment de détente te fera du bien.",
            ],
            weekly: &[
                "Finances et confort au centre: évite les dépenses impulsives.",
                "Relations solides cette semaine, cultive la patience.",
            ],
            monthly: &[
                "Mois propice à la maturation d'un projet concret.",
                "Bons résultats si tu rends le travail quotidien plus efficace.",
            ],
        },
    ),
    (
        Sign::Gemeaux,
        SignTemplates {
            daily: &[
                "Communiquer t'apportera des avantages aujourd'hui.",
                "Curiosité en hausse: renseigne-toi avant de t'engager.",
            ],
            weekly: &[
                "Rencontres intéressantes à prévoir; sois attentif·ve aux détails.",
                "Esprit vif: une opportunité d'apprentissage se présente.",
            ],
            monthly: &[
                "Mois favorable pour étendre ton réseau et apprendre.",
                "Activité mentale intense: organise tes idées pour les concrétiser.",
            ],
        },
    ),
    (
        Sign::Cancer,
        SignTemplates {
            daily: &[
                "Émotions sensibles: protège ton espace personnel.",
                "Un geste affectueux renforcera un lien important.",
            ],
            weekly: &[
                "Famille et foyer en focus; une bonne discussion résoudra des tensions.",
                "Instinct protecteur utile: soutiens quelqu'un qui en a besoin.",
            ],
            monthly: &[
                "Mois pour consolider le sentiment de sécurité et planifier.",
                "Travail sur les racines émotionnelles: guérison possible.",
            ],
        },
    ),
    (
        Sign::Lion,
        SignTemplates {
            daily: &[
                "Charisme au rendez-vous: ose te montrer.",
                "Attention à l'ego: briller sans écraser les autres.",
            ],
            weekly: &[
                "Projets créatifs en lumière; bonne semaine pour présenter tes idées.",
                "Relations se dynamisent: prends l'initiative.",
            ],
            monthly: &[
                "Mois pour assumer une position de leadership.",
                "Succès probable si tu combines ambition et générosité.",
            ],
        },
    ),
    (
        Sign::Vierge,
        SignTemplates {
            daily: &[
                "Détails et organisation t'aident aujourd'hui.",
                "Un tri personnel te fera du bien: nettoie ce qui encombre.",
            ],
            weekly: &[
                "Productivité en hausse; évite la sur-critique.",
                "Opportunités d'amélioration: adopte une méthode simple.",
            ],
            monthly: &[
                "Amélioration progressive: persévérance récompensée.",
                "Faire le point sur ta routine apporte des bénéfices durables.",
            ],
        },
    ),
    (
        Sign::Balance,
        SignTemplates {
            daily: &[
                "Recherche d'équilibre: privilégie des compromis justes.",
                "Esthétique et relations sont favorisées aujourd'hui.",
            ],
            weekly: &[
                "Négociations positives: écoute et diplomatie payent.",
                "Harmonie possible si tu exprimes clairement tes besoins.",
            ],
            monthly: &[
                "Mois idéal pour rééquilibrer vie pro/perso.",
                "Projets collaboratifs avancent bien avec coopération.",
            ],
        },
    ),
    (
        Sign::Scorpion,
        SignTemplates {
            daily: &[
                "Intensité émotionnelle: transforme-la en concentration.",
                "Discrétion recommandée, surtout dans les confidences.",
            ],
            weekly: &[
                "Période de révélations: sois prêt·e à t'adapter.",
                "Puissance de transformation: laisse partir ce qui te freine.",
            ],
            monthly: &[
                "Mois pour creuser en profondeur un sujet important.",
                "Changements profonds à l'horizon: accompagne-les avec lucidité.",
            ],
        },
    ),
    (
        Sign::Sagittaire,
        SignTemplates {
            daily: &[
                "Goût d'aventure: une petite escapade te fera du bien.",
                "Optimisme contagieux: partage tes projets.",
            ],
            weekly: &[
                "Apprentissage et voyages (même imaginaires) favorisés.",
                "Chance dans les connexions lointaines: sois à l'écoute.",
            ],
            monthly: &[
                "Mois pour élargir tes horizons et viser plus grand.",
                "Opportunités d'évolution si tu restes ouvert·e et honnête.",
            ],
        },
    ),
    (
        Sign::Capricorne,
        SignTemplates {
            daily: &[
                "Discipline et sérieux: aujourd'hui tu fais avancer le concret.",
                "Patience: les résultats viendront si tu persistes.",
            ],
            weekly: &[
                "Responsabilités accrues; accepte-les stratégiquement.",
                "Progrès constants si tu planifies chaque étape.",
            ],
            monthly: &[
                "Mois où la construction sur le long terme est favorisée.",
                "Investis dans ce qui portera ses fruits plus tard.",
            ],
        },
    ),
    (
        Sign::Verseau,
        SignTemplates {
            daily: &[
                "Idées originales fusent: note tout.",
                "Besoin d'autonomie: préserve ton espace créatif.",
            ],
            weekly: &[
                "Projets innovants avancent: collabore avec des esprits libres.",
                "Ton point de vue apporte des solutions inédites.",
            ],
            monthly: &[
                "Mois propice aux changements progressifs et aux expérimentations.",
                "Implication sociale forte: engage-toi pour une cause.",
            ],
        },
    ),
    (
        Sign::Poissons,
        SignTemplates {
            daily: &[
                "Sensibilité accrue: l'art et l'intuition t'aident.",
                "Rêverie productive: canalise-la en création.",
            ],
            weekly: &[
                "Empathie favorise les relations profondes.",
                "Attention à la dispersion: clarifie une idée avant d'agir.",
            ],
            monthly: &[
                "Mois pour nourrir ton monde intérieur et ta créativité.",
                "Soins personnels et repos productifs recommandés.",
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_sign_has_builtin_templates() {
        let store = TemplateStore::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for sign in Sign::ALL {
            let pools = store.pools_for(sign);
            let set = store.generate(sign, None, &mut rng);

            assert!(pools.daily.contains(&set.daily.as_str()), "{sign}");
            assert!(pools.weekly.contains(&set.weekly.as_str()), "{sign}");
            assert!(pools.monthly.contains(&set.monthly.as_str()), "{sign}");
            assert!(set.tip.is_none());
        }
    }

    #[test]
    fn test_unknown_sign_uses_fallback_pools() {
        let store = TemplateStore::builtin();
        let mut rng = StdRng::seed_from_u64(1);

        let set = store.generate(Sign::Unknown, None, &mut rng);
        let balance = store.pools_for(Sign::Balance);
        assert!(balance.daily.contains(&set.daily.as_str()));
    }

    #[test]
    fn test_same_seed_same_pick() {
        let store = TemplateStore::builtin();
        let a = store.generate(Sign::Lion, None, &mut StdRng::seed_from_u64(42));
        let b = store.generate(Sign::Lion, None, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_pools_validation() {
        let lion = SignTemplates {
            daily: &["d"],
            weekly: &["w"],
            monthly: &["m"],
        };
        let empty = SignTemplates {
            daily: &[],
            weekly: &["w"],
            monthly: &["m"],
        };

        assert!(TemplateStore::with_pools([(Sign::Lion, lion)], Sign::Balance).is_err());
        assert!(TemplateStore::with_pools(
            [(Sign::Lion, lion), (Sign::Balance, empty)],
            Sign::Lion
        )
        .is_err());

        let store = TemplateStore::with_pools([(Sign::Lion, lion)], Sign::Lion).unwrap();
        let set = store.generate(Sign::Cancer, Some(Gender::Femme), &mut StdRng::seed_from_u64(3));
        assert_eq!(set, PredictionSet::new("d", "w", "m", None));
    }
}
