//! Request and response payloads for the HTTP surface
//!
//! Request types carry their field constraints as `validator` rules so the
//! web layer can reject a bad payload before any computation runs.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Identifier attached to every inbound request
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =======================
//     Lead prediction
// =======================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LeadFeatures {
    #[serde(default)]
    pub email_domain_corporate: bool,
    #[serde(default)]
    pub has_phone: bool,
    #[serde(default)]
    pub utm_source_known: bool,
    #[serde(default)]
    pub utm_campaign_pro: bool,
    /// Normalized engagement in [0,1]
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub engagement_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScore {
    pub probability: f64,
    /// Probability on a 0-100 scale, two decimals
    pub score: f64,
}

// =======================
//    A/B variant select
// =======================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "conversions_within_views"))]
pub struct VariantStat {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub conversions: u64,
}

impl VariantStat {
    pub fn new(name: impl Into<String>, views: u64, conversions: u64) -> Self {
        Self {
            name: name.into(),
            views,
            conversions,
        }
    }
}

fn conversions_within_views(stat: &VariantStat) -> Result<(), ValidationError> {
    if stat.conversions > stat.views {
        let mut error = ValidationError::new("conversions_exceed_views");
        error.message = Some(Cow::from("conversions cannot exceed views"));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AbSelectRequest {
    #[validate(length(min = 1), nested)]
    pub variants: Vec<VariantStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantChoice {
    pub variant: String,
    pub sample: f64,
}

// =======================
//    Anomaly detection
// =======================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionMethod {
    #[default]
    #[serde(rename = "zscore")]
    ZScore,
    #[serde(rename = "iforest")]
    IsolationForest,
}

fn default_z_thresh() -> f64 {
    2.5
}

fn default_contamination() -> f64 {
    0.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TimeSeriesInput {
    #[validate(length(min = 5))]
    pub values: Vec<f64>,
    #[serde(default)]
    pub method: DetectionMethod,
    /// Absolute Z-score threshold for `zscore`
    #[serde(default = "default_z_thresh")]
    #[validate(range(exclusive_min = 0.0))]
    pub z_thresh: f64,
    /// Expected outlier fraction for `iforest`
    #[serde(default = "default_contamination")]
    #[validate(range(exclusive_min = 0.0, exclusive_max = 0.5))]
    pub contamination: f64,
    /// Seed handed to the `iforest` detector
    #[serde(default)]
    pub random_state: Option<u64>,
}

impl TimeSeriesInput {
    pub fn isolation_params(&self) -> IsolationParams {
        IsolationParams {
            contamination: self.contamination,
            random_state: self.random_state,
        }
    }
}

/// Settings handed to an outlier detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsolationParams {
    pub contamination: f64,
    pub random_state: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum AnomalyReport {
    #[serde(rename = "zscore")]
    ZScore { anomalies: Vec<usize>, mean: f64, std: f64 },
    #[serde(rename = "iforest")]
    IsolationForest { anomalies: Vec<usize> },
}

// =======================
//     Copy generation
// =======================

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 2 {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("must contain at least 2 non-whitespace characters"));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CopyRequest {
    #[validate(length(min = 2, max = 80), custom(function = "not_blank"))]
    pub product: String,
    #[validate(length(min = 2, max = 80), custom(function = "not_blank"))]
    pub audience: String,
    #[validate(length(min = 2, max = 160), custom(function = "not_blank"))]
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCopy {
    pub primary: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAds {
    pub linkedin: AdCopy,
    pub facebook: AdCopy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyDeck {
    pub headline: String,
    pub subheadline: String,
    pub bullets: Vec<String>,
    pub cta: String,
    pub ads: ChannelAds,
}

// =======================
//     Pricing suggest
// =======================

fn default_currency() -> String {
    "USD".to_string()
}

fn default_base_monthly() -> f64 {
    19.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PricingRequest {
    #[serde(default = "default_currency")]
    #[validate(length(min = 3, max = 5))]
    pub currency: String,
    #[serde(default)]
    #[validate(length(min = 2, max = 3))]
    pub country: Option<String>,
    #[serde(default = "default_base_monthly")]
    #[validate(range(exclusive_min = 0.0))]
    pub base_monthly: f64,
}

impl Default for PricingRequest {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            country: None,
            base_monthly: default_base_monthly(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub currency: String,
    pub country: String,
    pub monthly: f64,
    pub annual: f64,
    pub factor: f64,
}

// =======================
//      Health & meta
// =======================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    /// Whether `method=iforest` can be served; keeps the `sklearn` wire key
    /// existing clients read
    #[serde(rename = "sklearn")]
    pub iforest: bool,
}
