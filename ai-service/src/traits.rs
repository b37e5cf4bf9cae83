//! Service trait definitions for dependency injection
//!
//! The web layer only talks to outlier detection through this trait so the
//! capability can be swapped at startup or mocked in tests.

use crate::error::ServiceResult;
use crate::types::IsolationParams;

/// Outlier detection capability for `method=iforest`
#[mockall::automock]
pub trait OutlierDetector: Send + Sync {
    /// Whether `detect_outliers` can succeed at all
    fn is_available(&self) -> bool;

    /// Indices of the values labelled as outliers, in ascending order
    fn detect_outliers(&self, values: &[f64], params: &IsolationParams) -> ServiceResult<Vec<usize>>;
}
