//! Service implementations
//!
//! Outlier detection is the one optional capability of the service. It is
//! picked once at startup and injected into the web layer.

#[cfg(feature = "iforest")]
pub mod isolation_forest;
pub mod unavailable;

#[cfg(feature = "iforest")]
pub use isolation_forest::IsolationForestDetector;
pub use unavailable::UnavailableDetector;

use shared::ServiceConfig;

use crate::error::ServiceResult;
use crate::traits::OutlierDetector;
use crate::types::IsolationParams;

/// Outlier detection as selected at startup
#[derive(Debug, Clone, PartialEq)]
pub enum OutlierCapability {
    #[cfg(feature = "iforest")]
    Available(IsolationForestDetector),
    Unavailable(UnavailableDetector),
}

impl OutlierCapability {
    /// Pick the capability from compiled features and configuration
    pub fn from_config(config: &ServiceConfig) -> Self {
        #[cfg(feature = "iforest")]
        {
            if config.iforest_enabled {
                return OutlierCapability::Available(IsolationForestDetector::default());
            }
            OutlierCapability::Unavailable(UnavailableDetector::new("disabled by configuration (AI_IFOREST_ENABLED)"))
        }

        #[cfg(not(feature = "iforest"))]
        {
            let _ = config;
            OutlierCapability::Unavailable(UnavailableDetector::new("built without the `iforest` feature"))
        }
    }
}

impl OutlierDetector for OutlierCapability {
    fn is_available(&self) -> bool {
        match self {
            #[cfg(feature = "iforest")]
            OutlierCapability::Available(detector) => detector.is_available(),
            OutlierCapability::Unavailable(detector) => detector.is_available(),
        }
    }

    fn detect_outliers(&self, values: &[f64], params: &IsolationParams) -> ServiceResult<Vec<usize>> {
        match self {
            #[cfg(feature = "iforest")]
            OutlierCapability::Available(detector) => detector.detect_outliers(values, params),
            OutlierCapability::Unavailable(detector) => detector.detect_outliers(values, params),
        }
    }
}
