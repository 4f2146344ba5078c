//! Simulated payment gateway.

use crate::billing::{
    domain::{Invoice, PaymentReceipt},
    ports::{PaymentGateway, PaymentGatewayResult},
};
use crate::config::SimulationConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Gateway that approves every charge after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPaymentGateway {
    delay: Duration,
    payment_method: String,
}

impl SimulatedPaymentGateway {
    /// Creates a gateway with an explicit delay and payment method label.
    #[must_use]
    pub fn new(delay: Duration, payment_method: impl Into<String>) -> Self {
        Self {
            delay,
            payment_method: payment_method.into(),
        }
    }

    /// Creates a gateway from the simulation settings.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.payment_delay(), config.payment_method_label.clone())
    }
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn charge(&self, invoice: &Invoice) -> PaymentGatewayResult<PaymentReceipt> {
        debug!(invoice_id = %invoice.id(), amount = %invoice.amount(), "simulating charge");
        tokio::time::sleep(self.delay).await;
        Ok(PaymentReceipt {
            payment_method: self.payment_method.clone(),
            transaction_id: format!("ch_{}", Uuid::new_v4().simple()),
        })
    }
}
