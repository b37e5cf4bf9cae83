//! Core computations behind each endpoint
//!
//! Every function here is pure apart from the random source the caller hands
//! in. Validation has already happened by the time these run.

pub mod anomaly;
pub mod bandit;
pub mod copy;
pub mod lead;
pub mod pricing;

pub use anomaly::{ZScoreSummary, detect_zscore};
pub use bandit::{best_draw, select_variant};
pub use copy::generate_copy;
pub use lead::{LEAD_BIAS, LEAD_WEIGHTS, score_lead};
pub use pricing::{DEFAULT_PPP_FACTOR, ppp_factor, suggest_price};

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
