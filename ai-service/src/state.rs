//! Router state shared by all handlers
//!
//! Nothing in here is mutable: the configuration and the outlier capability
//! are fixed at startup and handed to every request by reference count.

use std::sync::Arc;

use shared::ServiceConfig;

use crate::traits::OutlierDetector;

pub struct AppState<D>
where
    D: OutlierDetector,
{
    pub config: Arc<ServiceConfig>,
    pub detector: Arc<D>,
}

impl<D> AppState<D>
where
    D: OutlierDetector,
{
    pub fn new(config: ServiceConfig, detector: D) -> Self {
        Self {
            config: Arc::new(config),
            detector: Arc::new(detector),
        }
    }
}

// Manual impl: `D` itself does not have to be `Clone`
impl<D> Clone for AppState<D>
where
    D: OutlierDetector,
{
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            detector: Arc::clone(&self.detector),
        }
    }
}
