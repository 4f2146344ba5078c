//! Walks the seeded marketplace through completion, certification and
//! payment.
//!
//! Usage:
//!
//! ```text
//! jetcare-demo [config-path]
//! ```
//!
//! The optional JSON document at `config-path` must deserialize into a
//! [`MarketplaceConfig`]; omitted fields take their defaults. A
//! representative document is:
//!
//! ```json
//! {
//!   "simulation": {
//!     "certification_delay_ms": 500,
//!     "payment_delay_ms": 500
//!   },
//!   "language": "nl"
//! }
//! ```
//!
//! Progress is reported through `tracing`; set `JETCARE_LOG` to adjust the
//! filter.

use std::sync::Arc;

use jetcare::account::domain::SignInRequest;
use jetcare::billing::domain::InvoiceId;
use jetcare::config::MarketplaceConfig;
use jetcare::marketplace::{Marketplace, RequestFilter};
use jetcare::service_request::domain::{PhotoRef, RequestId};
use jetcare::telemetry::init_tracing;
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("certification finished without a scheduled task")]
    CertificationNotScheduled,
}

fn load_config(path: Option<String>) -> Result<MarketplaceConfig, BoxError> {
    let Some(config_path) = path else {
        return Ok(MarketplaceConfig::default());
    };
    let document = std::fs::read_to_string(&config_path).map_err(|source| {
        DemoError::ConfigRead {
            path: config_path.clone(),
            source,
        }
    })?;
    Ok(MarketplaceConfig::from_json_str(&document)?)
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing()?;
    let config = load_config(std::env::args().nth(1))?;
    let marketplace = Marketplace::seeded(config, Arc::new(DefaultClock)).await?;

    let provider =
        marketplace.sign_in(&SignInRequest::new("provider@jetcare.com", "123544"))?;
    let queue = marketplace.provider_queue(&provider).await?;
    info!(provider = provider.name(), queued = queue.len(), "provider queue loaded");

    let request_id = RequestId::new("req-3")?;
    let mut report = marketplace.begin_completion(&request_id).await?;
    let keys: Vec<_> = report.items().iter().map(|item| item.key()).collect();
    for key in keys {
        report.attach_photos(
            key,
            PhotoRef::new(format!("uploads/{request_id}/{key}-before.jpg"))?,
            PhotoRef::new(format!("uploads/{request_id}/{key}-after.jpg"))?,
        )?;
    }
    let submission = marketplace.submit_completion(report, &provider).await?;
    info!(
        request_id = %request_id,
        status = %submission.request.status(),
        "completion submitted, waiting for certification"
    );
    let certified = submission
        .certification
        .ok_or(DemoError::CertificationNotScheduled)?
        .wait()
        .await?;
    for item in certified.checklist() {
        info!(
            item = %marketplace.translate(&item.key().translation_key(), &[]),
            status = %item.status(),
            "checklist item inspected"
        );
    }
    info!(veritas = %certified.veritas_status(), "certification recorded");

    let invoice = marketplace.issue_invoice(&request_id).await?;
    info!(invoice_id = %invoice.id(), amount = %invoice.amount(), "invoice issued");

    let paid = marketplace.pay_invoice(&InvoiceId::new("INV002")?).await?;
    info!(
        invoice_id = %paid.id(),
        status = %paid.status(),
        transaction = paid.receipt().map_or("", |receipt| receipt.transaction_id.as_str()),
        "payment settled"
    );

    let counts = marketplace.filter_counts().await?;
    for filter in RequestFilter::ALL {
        info!(
            tab = %marketplace.translate(filter.translation_key(), &[]),
            count = counts.get(filter),
            "request tab"
        );
    }
    let summary = marketplace.dashboard_summary().await?;
    info!(
        active = summary.active_requests,
        pending_actions = summary.pending_actions,
        outstanding = %summary.outstanding_total,
        unread = marketplace.unread_notifications().await?,
        "dashboard"
    );
    Ok(())
}
