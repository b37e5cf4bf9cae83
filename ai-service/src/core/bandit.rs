//! Thompson Sampling over Beta posteriors for A/B variant selection

use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::error::{ServiceError, ServiceResult};
use crate::types::{VariantChoice, VariantStat};

/// Posterior `Beta(1 + conversions, 1 + misses)` under a uniform prior
pub fn posterior(stat: &VariantStat) -> ServiceResult<Beta<f64>> {
    let alpha = 1.0 + stat.conversions as f64;
    let beta = 1.0 + stat.views.saturating_sub(stat.conversions) as f64;

    Beta::new(alpha, beta).map_err(|e| ServiceError::SamplingError {
        variant: stat.name.clone(),
        message: e.to_string(),
    })
}

/// Keep the highest draw; on exact ties the earlier entry wins.
pub fn best_draw<'a, I>(draws: I) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;
    let mut best_sample = -1.0;

    for (name, sample) in draws {
        if sample > best_sample {
            best_sample = sample;
            best = Some((name, sample));
        }
    }

    best
}

/// Draw once from every variant's posterior and return the winner.
pub fn select_variant<R>(variants: &[VariantStat], rng: &mut R) -> ServiceResult<VariantChoice>
where
    R: Rng + ?Sized,
{
    let mut draws = Vec::with_capacity(variants.len());
    for stat in variants {
        let sample = posterior(stat)?.sample(&mut *rng);
        draws.push((stat.name.as_str(), sample));
    }

    let (name, sample) = best_draw(draws).ok_or_else(|| ServiceError::InvalidRequest {
        details: "at least one variant is required".to_string(),
    })?;

    tracing::debug!(variant = %name, sample, candidates = variants.len(), "Thompson draw");

    Ok(VariantChoice {
        variant: name.to_string(),
        sample,
    })
}
