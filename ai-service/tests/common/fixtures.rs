//! Request payloads reused across test suites

use serde_json::{Value, json};

pub struct TestFixtures;

impl TestFixtures {
    /// Nine values near 10 and one spike at index 9
    pub fn spiky_series() -> Vec<f64> {
        vec![10.0, 10.5, 9.5, 10.2, 9.8, 10.1, 9.9, 10.3, 9.7, 95.0]
    }

    pub fn hot_lead() -> Value {
        json!({
            "email_domain_corporate": true,
            "has_phone": true,
            "utm_source_known": true,
            "utm_campaign_pro": true,
            "engagement_score": 1.0
        })
    }

    pub fn copy_request() -> Value {
        json!({
            "product": "Insight",
            "audience": "Growth Teams",
            "goal": "double qualified demos"
        })
    }

    pub fn variants(stats: &[(&str, u64, u64)]) -> Value {
        let variants: Vec<Value> = stats
            .iter()
            .map(|(name, views, conversions)| json!({ "name": name, "views": views, "conversions": conversions }))
            .collect();
        json!({ "variants": variants })
    }
}
