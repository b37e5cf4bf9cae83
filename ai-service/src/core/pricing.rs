//! Regional price adjustment by purchasing-power-parity factor

use crate::core::round_to;
use crate::types::{PriceSuggestion, PricingRequest};

/// Applied to any country missing from [`PPP_FACTORS`]
pub const DEFAULT_PPP_FACTOR: f64 = 0.90;

/// Country used when the request names none
pub const DEFAULT_COUNTRY: &str = "US";

/// Annual price is ten monthly payments (two months free)
pub const ANNUAL_MONTHS_BILLED: f64 = 10.0;

pub const PPP_FACTORS: [(&str, f64); 10] = [
    ("US", 1.0),
    ("CA", 0.95),
    ("FR", 0.90),
    ("DE", 0.95),
    ("UK", 1.05),
    ("CM", 0.70),
    ("CI", 0.70),
    ("SN", 0.70),
    ("NG", 0.65),
    ("IN", 0.60),
];

/// Look up the factor for an upper-cased country code
pub fn ppp_factor(country: &str) -> f64 {
    PPP_FACTORS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, factor)| *factor)
        .unwrap_or(DEFAULT_PPP_FACTOR)
}

pub fn suggest_price(request: &PricingRequest) -> PriceSuggestion {
    let country = request
        .country
        .as_deref()
        .unwrap_or(DEFAULT_COUNTRY)
        .to_uppercase();

    let factor = ppp_factor(&country);
    let monthly = round_to(request.base_monthly * factor, 2);
    let annual = round_to(monthly * ANNUAL_MONTHS_BILLED, 2);

    PriceSuggestion {
        currency: request.currency.to_uppercase(),
        country,
        monthly,
        annual,
        factor,
    }
}
