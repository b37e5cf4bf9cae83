//! Template-based marketing copy, no language model involved
//!
//! The copy is French; clients render these strings as-is.

use crate::types::{AdCopy, ChannelAds, CopyDeck, CopyRequest};

const BULLETS: [&str; 5] = [
    "Suivi temps réel + alertes IA",
    "A/B testing autonome (bandit)",
    "Leads qualifiés avec scoring prédictif",
    "Liens courts & attribution omnicanale",
    "Tarification dynamique & anti-fraude",
];

const CTA: &str = "Essayer gratuitement";
const LINKEDIN_CTA: &str = "Demander une démo";
const FACEBOOK_CTA: &str = "Commencer maintenant";

pub fn generate_copy(request: &CopyRequest) -> CopyDeck {
    let product = request.product.trim();
    let audience = request.audience.trim().to_lowercase();
    let goal = request.goal.trim();

    let primary = format!("{product} automatise vos campagnes. Moins d’outils, plus de conversions.");

    CopyDeck {
        headline: format!("{product} : votre copilote {audience}"),
        subheadline: format!("Objectif : {goal}. Démarrez en 2 minutes, suivez et optimisez automatiquement."),
        bullets: BULLETS.iter().map(|b| b.to_string()).collect(),
        cta: CTA.to_string(),
        ads: ChannelAds {
            linkedin: AdCopy {
                primary: primary.clone(),
                cta: LINKEDIN_CTA.to_string(),
            },
            facebook: AdCopy {
                primary,
                cta: FACEBOOK_CTA.to_string(),
            },
        },
    }
}
