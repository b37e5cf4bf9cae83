//! Stand-in detector used when Isolation Forest cannot be served

use crate::error::{ServiceError, ServiceResult};
use crate::traits::OutlierDetector;
use crate::types::IsolationParams;

pub const CAPABILITY_NAME: &str = "IsolationForest";

#[derive(Debug, Clone, PartialEq)]
pub struct UnavailableDetector {
    reason: String,
}

impl UnavailableDetector {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl OutlierDetector for UnavailableDetector {
    fn is_available(&self) -> bool {
        false
    }

    fn detect_outliers(&self, _values: &[f64], _params: &IsolationParams) -> ServiceResult<Vec<usize>> {
        Err(ServiceError::CapabilityUnavailable {
            capability: CAPABILITY_NAME.to_string(),
            reason: self.reason.clone(),
        })
    }
}
