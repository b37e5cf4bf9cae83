//! Heuristic lead scoring
//!
//! A fixed-weight logistic model: no training, no persisted parameters.

use crate::core::round_to;
use crate::types::{LeadFeatures, LeadScore};

/// Weights for corporate email, phone, known UTM source, pro campaign, engagement
pub const LEAD_WEIGHTS: [f64; 5] = [1.2, 1.0, 0.6, 0.8, 1.6];
pub const LEAD_BIAS: f64 = 2.0;

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

pub fn feature_vector(features: &LeadFeatures) -> [f64; 5] {
    [
        indicator(features.email_domain_corporate),
        indicator(features.has_phone),
        indicator(features.utm_source_known),
        indicator(features.utm_campaign_pro),
        features.engagement_score,
    ]
}

pub fn score_lead(features: &LeadFeatures) -> LeadScore {
    let z: f64 = LEAD_WEIGHTS
        .iter()
        .zip(feature_vector(features))
        .map(|(w, x)| w * x)
        .sum::<f64>()
        - LEAD_BIAS;

    let probability = 1.0 / (1.0 + (-z).exp());

    LeadScore {
        probability,
        score: round_to(probability * 100.0, 2),
    }
}
