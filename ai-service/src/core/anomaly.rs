//! Z-score anomaly detection over a 1-D series

/// Result of a Z-score pass
#[derive(Debug, Clone, PartialEq)]
pub struct ZScoreSummary {
    pub anomalies: Vec<usize>,
    pub mean: f64,
    /// Population standard deviation, floored to 1.0 when zero
    pub std: f64,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`)
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Flag every index whose absolute Z-score reaches `z_thresh`.
pub fn detect_zscore(values: &[f64], z_thresh: f64) -> ZScoreSummary {
    let mean = mean(values);
    let std = match population_std(values, mean) {
        std if std > 0.0 => std,
        _ => 1.0,
    };

    let anomalies = values
        .iter()
        .enumerate()
        .filter(|(_, v)| ((*v - mean) / std).abs() >= z_thresh)
        .map(|(i, _)| i)
        .collect();

    ZScoreSummary { anomalies, mean, std }
}
