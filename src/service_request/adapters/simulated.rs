//! Simulated quality inspector.

use crate::config::SimulationConfig;
use crate::service_request::{
    domain::{CertificationOutcome, ServiceRequest},
    ports::{QualityInspectionResult, QualityInspector},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Inspector that certifies every request after a fixed delay.
///
/// The checklist item at the configured index is flagged and every other
/// item approved. No failure path is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedQualityInspector {
    delay: Duration,
    flagged_index: Option<usize>,
}

impl SimulatedQualityInspector {
    /// Creates an inspector with an explicit delay and flagged index.
    #[must_use]
    pub const fn new(delay: Duration, flagged_index: Option<usize>) -> Self {
        Self {
            delay,
            flagged_index,
        }
    }

    /// Creates an inspector from the simulation settings.
    #[must_use]
    pub const fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.certification_delay(), config.flagged_checklist_index)
    }
}

impl Default for SimulatedQualityInspector {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

#[async_trait]
impl QualityInspector for SimulatedQualityInspector {
    async fn inspect(
        &self,
        request: &ServiceRequest,
    ) -> QualityInspectionResult<CertificationOutcome> {
        debug!(request_id = %request.id(), delay = ?self.delay, "simulating quality inspection");
        tokio::time::sleep(self.delay).await;
        Ok(CertificationOutcome::certified_with_flag(
            request.checklist(),
            self.flagged_index,
        ))
    }
}
