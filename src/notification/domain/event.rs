//! Typed notification events and their localized text templates.

use super::{NotificationDomainError, ParseNotificationKindError};
use crate::billing::domain::InvoiceId;
use crate::i18n::{Language, Translator};
use crate::money::Money;
use crate::service_request::domain::RequestStatus;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Feed category, used for the entry icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Service request updates.
    Request,
    /// Chat messages.
    Message,
    /// Invoice updates.
    Invoice,
}

impl NotificationKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Message => "message",
            Self::Invoice => "invoice",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NotificationKind {
    type Error = ParseNotificationKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "request" => Ok(Self::Request),
            "message" => Ok(Self::Message),
            "invoice" => Ok(Self::Invoice),
            _ => Err(ParseNotificationKindError(value.to_owned())),
        }
    }
}

const SOME_PROVIDER_KEY: &str = "notifications.someProvider";

/// Marketplace occurrence that produces a feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A request reached a new status.
    RequestStatusChanged {
        /// Registration of the serviced jet.
        tail_number: String,
        /// Status that was reached.
        status: RequestStatus,
        /// Assigned provider, if any.
        provider: Option<String>,
    },
    /// A chat message was posted on a request.
    MessagePosted {
        /// Display name of the author.
        sender: String,
    },
    /// An invoice was issued.
    InvoiceIssued {
        /// Issued invoice.
        invoice_id: InvoiceId,
        /// Registration of the billed jet.
        tail_number: String,
    },
    /// An invoice was paid.
    InvoicePaid {
        /// Paid invoice.
        invoice_id: InvoiceId,
        /// Charged amount.
        amount: Money,
    },
}

impl NotificationEvent {
    /// Returns the feed category of the event.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::RequestStatusChanged { .. } => NotificationKind::Request,
            Self::MessagePosted { .. } => NotificationKind::Message,
            Self::InvoiceIssued { .. } | Self::InvoicePaid { .. } => NotificationKind::Invoice,
        }
    }

    /// Renders the feed text for the event in `language`.
    ///
    /// The template is the catalog entry named by [`Self::template_key`],
    /// taken from the English catalog when `language` lacks it.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::TemplateRender`] when no catalog
    /// carries the template or the template fails to render.
    pub fn render(
        &self,
        translator: &Translator,
        language: Language,
    ) -> Result<String, NotificationDomainError> {
        let key = self.template_key();
        let template = translator.resolve(language, &key).ok_or_else(|| {
            NotificationDomainError::TemplateRender {
                kind: self.kind(),
                reason: format!("no catalog entry for {key}"),
            }
        })?;
        Environment::new()
            .render_str(template, self.context(translator, language))
            .map_err(|error| NotificationDomainError::TemplateRender {
                kind: self.kind(),
                reason: error.to_string(),
            })
    }

    /// Returns the catalog key of the event's text template.
    #[must_use]
    pub fn template_key(&self) -> String {
        match self {
            Self::RequestStatusChanged { status, .. } => {
                format!("notifications.requestStatus.{}", status.as_str())
            }
            Self::MessagePosted { .. } => "notifications.messagePosted".to_owned(),
            Self::InvoiceIssued { .. } => "notifications.invoiceIssued".to_owned(),
            Self::InvoicePaid { .. } => "notifications.invoicePaid".to_owned(),
        }
    }

    fn context(&self, translator: &Translator, language: Language) -> Value {
        match self {
            Self::RequestStatusChanged {
                tail_number,
                provider,
                ..
            } => json!({
                "tail_number": tail_number,
                "provider": provider.clone().unwrap_or_else(|| {
                    translator.translate(language, SOME_PROVIDER_KEY, &[])
                }),
            }),
            Self::MessagePosted { sender } => json!({ "sender": sender }),
            Self::InvoiceIssued {
                invoice_id,
                tail_number,
            } => json!({ "invoice_id": invoice_id.as_str(), "tail_number": tail_number }),
            Self::InvoicePaid { invoice_id, amount } => {
                json!({ "invoice_id": invoice_id.as_str(), "amount": amount.to_string() })
            }
        }
    }
}
