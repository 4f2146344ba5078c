//! The marketplace container and its operations.

use super::seed::{demo_invoices, demo_jets, demo_notifications, demo_requests};
use super::views::{
    DashboardSummary, FilterCounts, RequestFilter, TimelineStep, status_timeline,
};
use super::{MarketplaceError, MarketplaceResult};
use crate::account::domain::{SignInRequest, User};
use crate::billing::{
    adapters::{SimulatedPaymentGateway, memory::InMemoryInvoiceRepository},
    domain::{Invoice, InvoiceId},
    services::BillingService,
};
use crate::config::MarketplaceConfig;
use crate::fleet::{
    adapters::memory::InMemoryFleetRepository,
    domain::{Jet, JetId, NewAircraft},
    services::FleetService,
};
use crate::i18n::{Language, Translator};
use crate::money::Money;
use crate::notification::{
    adapters::memory::InMemoryNotificationRepository,
    domain::{Notification, NotificationEvent, NotificationId},
    services::NotificationFeedService,
};
use crate::service_request::{
    adapters::{SimulatedQualityInspector, memory::InMemoryServiceRequestRepository},
    domain::{
        ChatMessage, CompletionReport, ProviderAssignment, RequestId, RequestStatus,
        ServiceRequest,
    },
    services::{
        CompletionSubmission, CreateServiceRequestRequest, ServiceCompletionService,
        ServiceMessagingService, ServiceRequestLifecycleService,
    },
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::{debug, info};

/// Session-wide owner of requests, jets, invoices and notifications.
///
/// Every mutation goes through the bounded-context services. Operations
/// that change what a user would want to hear about also push a feed
/// notification.
pub struct Marketplace<C = DefaultClock>
where
    C: Clock + Send + Sync + 'static,
{
    config: MarketplaceConfig,
    language: Language,
    translator: Arc<Translator>,
    requests: ServiceRequestLifecycleService<InMemoryServiceRequestRepository, C>,
    completion: ServiceCompletionService<
        InMemoryServiceRequestRepository,
        SimulatedQualityInspector,
        C,
    >,
    messaging: ServiceMessagingService<InMemoryServiceRequestRepository, C>,
    fleet: FleetService<InMemoryFleetRepository>,
    billing: BillingService<InMemoryInvoiceRepository, SimulatedPaymentGateway, C>,
    notifications: NotificationFeedService<InMemoryNotificationRepository, C>,
}

impl Marketplace<DefaultClock> {
    /// Creates an empty marketplace on the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Catalog`] when the bundled catalogs fail
    /// to load.
    pub fn from_config(config: MarketplaceConfig) -> MarketplaceResult<Self> {
        Self::new(config, Arc::new(DefaultClock))
    }
}

impl<C> Marketplace<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates an empty marketplace on an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Catalog`] when the bundled catalogs fail
    /// to load.
    pub fn new(config: MarketplaceConfig, clock: Arc<C>) -> MarketplaceResult<Self> {
        let request_store = Arc::new(InMemoryServiceRequestRepository::new());
        let inspector = Arc::new(SimulatedQualityInspector::from_config(&config.simulation));
        let gateway = Arc::new(SimulatedPaymentGateway::from_config(&config.simulation));
        let translator = Arc::new(Translator::embedded()?);
        Ok(Self {
            language: config.language,
            translator: Arc::clone(&translator),
            requests: ServiceRequestLifecycleService::new(
                Arc::clone(&request_store),
                Arc::clone(&clock),
            ),
            completion: ServiceCompletionService::new(
                Arc::clone(&request_store),
                inspector,
                Arc::clone(&clock),
            ),
            messaging: ServiceMessagingService::new(request_store, Arc::clone(&clock)),
            fleet: FleetService::new(Arc::new(InMemoryFleetRepository::new())),
            billing: BillingService::new(
                Arc::new(InMemoryInvoiceRepository::new()),
                gateway,
                Arc::clone(&clock),
            ),
            notifications: NotificationFeedService::new(
                Arc::new(InMemoryNotificationRepository::new()),
                translator,
                clock,
            ),
            config,
        })
    }

    /// Creates a marketplace loaded with the demo data set.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Seed`] when the demo data fails
    /// validation.
    pub async fn seeded(config: MarketplaceConfig, clock: Arc<C>) -> MarketplaceResult<Self> {
        let marketplace = Self::new(config, clock)?;
        for jet in demo_jets()? {
            marketplace.fleet.restore(jet).await?;
        }
        for request in demo_requests()? {
            marketplace.requests.restore(request).await?;
        }
        for invoice in demo_invoices()? {
            marketplace.billing.restore(invoice).await?;
        }
        for notification in demo_notifications()?.into_iter().rev() {
            marketplace.notifications.restore(notification).await?;
        }
        info!("marketplace seeded with demo data");
        Ok(marketplace)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// Returns the session language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Switches the session language.
    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translates `key` into the session language.
    #[must_use]
    pub fn translate(&self, key: &str, args: &[&str]) -> String {
        self.translator.translate(self.language, key, args)
    }

    // Accounts

    /// Resolves the session user against the demo directory.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Account`] for blank or rejected
    /// credentials.
    pub fn sign_in(&self, request: &SignInRequest) -> MarketplaceResult<User> {
        let user = self.config.directory.sign_in(request)?;
        info!(user = user.name(), role = %user.role(), "signed in");
        Ok(user)
    }

    // Fleet

    /// Adds a jet to the fleet.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Fleet`] for invalid or duplicate jets.
    pub async fn add_aircraft(&self, form: NewAircraft) -> MarketplaceResult<Jet> {
        Ok(self.fleet.add_aircraft(form).await?)
    }

    /// Lists the fleet.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Fleet`] on storage failure.
    pub async fn jets(&self) -> MarketplaceResult<Vec<Jet>> {
        Ok(self.fleet.list().await?)
    }

    /// Finds a jet.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Fleet`] on storage failure.
    pub async fn jet(&self, id: &JetId) -> MarketplaceResult<Option<Jet>> {
        Ok(self.fleet.find(id).await?)
    }

    // Requests

    /// Submits a new request for a jet in the fleet.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::UnknownJet`] when the jet is not in the
    /// fleet and [`MarketplaceError::Lifecycle`] when validation fails.
    pub async fn create_request(
        &self,
        form: CreateServiceRequestRequest,
    ) -> MarketplaceResult<ServiceRequest> {
        if let Ok(jet_id) = JetId::new(form.jet_id())
            && self.fleet.find(&jet_id).await?.is_none()
        {
            return Err(MarketplaceError::UnknownJet(jet_id));
        }
        let request = self.requests.create(form).await?;
        self.notify_status(&request, RequestStatus::Requested).await?;
        Ok(request)
    }

    /// Assigns a provider, crew and checklist to a requested service.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] when the user or status does
    /// not allow the assignment.
    pub async fn assign_provider(
        &self,
        id: &RequestId,
        assignment: ProviderAssignment,
        user: &User,
    ) -> MarketplaceResult<ServiceRequest> {
        let update = self
            .requests
            .apply_assignment(id, assignment, user.role())
            .await?;
        if update.applied() {
            self.notify_status(&update.request, RequestStatus::Assigned)
                .await?;
        }
        Ok(update.request)
    }

    /// Marks assigned work as started.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] for rejected transitions.
    pub async fn start_work(
        &self,
        id: &RequestId,
        user: &User,
    ) -> MarketplaceResult<ServiceRequest> {
        self.transition(id, RequestStatus::InProgress, user).await
    }

    /// Approves completed work.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] for rejected transitions.
    pub async fn approve(&self, id: &RequestId, user: &User) -> MarketplaceResult<ServiceRequest> {
        self.transition(id, RequestStatus::Approved, user).await
    }

    /// Cancels a request that has not reached a terminal status.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] for rejected transitions.
    pub async fn cancel(&self, id: &RequestId, user: &User) -> MarketplaceResult<ServiceRequest> {
        self.transition(id, RequestStatus::Cancelled, user).await
    }

    /// Starts a completion report for the request's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Completion`] for unknown requests.
    pub async fn begin_completion(&self, id: &RequestId) -> MarketplaceResult<CompletionReport> {
        Ok(self.completion.begin_completion(id).await?)
    }

    /// Submits a completion report and starts background certification.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Completion`] when the report is rejected,
    /// for example while photos are missing.
    pub async fn submit_completion(
        &self,
        report: CompletionReport,
        user: &User,
    ) -> MarketplaceResult<CompletionSubmission> {
        let submission = self.completion.submit(report, user.role()).await?;
        if submission.certification.is_some() {
            self.notify_status(&submission.request, RequestStatus::Completed)
                .await?;
        }
        Ok(submission)
    }

    /// Posts a chat message on a request.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Messaging`] for blank text or unknown
    /// requests.
    pub async fn post_message(
        &self,
        id: &RequestId,
        user: &User,
        text: impl Into<String> + Send,
    ) -> MarketplaceResult<ChatMessage> {
        let message = self.messaging.post_message(id, user.role(), text).await?;
        let event = NotificationEvent::MessagePosted {
            sender: user.name().to_owned(),
        };
        self.notifications.push(&event, self.language).await?;
        Ok(message)
    }

    /// Returns a request's chat in posting order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Messaging`] for unknown requests.
    pub async fn messages(&self, id: &RequestId) -> MarketplaceResult<Vec<ChatMessage>> {
        Ok(self.messaging.messages(id).await?)
    }

    /// Lists every request, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] on storage failure.
    pub async fn requests(&self) -> MarketplaceResult<Vec<ServiceRequest>> {
        Ok(self.requests.list().await?)
    }

    /// Finds a request.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] on storage failure.
    pub async fn request(&self, id: &RequestId) -> MarketplaceResult<Option<ServiceRequest>> {
        Ok(self.requests.find(id).await?)
    }

    // Billing

    /// Issues the invoice for a completed request.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::UnknownRequest`] or
    /// [`MarketplaceError::UnknownJet`] for dangling references and
    /// [`MarketplaceError::Billing`] when the request cannot be billed.
    pub async fn issue_invoice(&self, request_id: &RequestId) -> MarketplaceResult<Invoice> {
        let request = self
            .requests
            .find(request_id)
            .await?
            .ok_or_else(|| MarketplaceError::UnknownRequest(request_id.clone()))?;
        let jet = self
            .fleet
            .find(request.jet_id())
            .await?
            .ok_or_else(|| MarketplaceError::UnknownJet(request.jet_id().clone()))?;
        let invoice = self.billing.issue_invoice(&request, &jet).await?;
        let event = NotificationEvent::InvoiceIssued {
            invoice_id: invoice.id().clone(),
            tail_number: jet.tail_number().to_string(),
        };
        self.notifications.push(&event, self.language).await?;
        Ok(invoice)
    }

    /// Pays a due invoice through the simulated gateway.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Billing`] when the invoice is not due or
    /// unknown.
    pub async fn pay_invoice(&self, id: &InvoiceId) -> MarketplaceResult<Invoice> {
        let invoice = self.billing.pay_invoice(id).await?;
        let event = NotificationEvent::InvoicePaid {
            invoice_id: invoice.id().clone(),
            amount: invoice.amount(),
        };
        self.notifications.push(&event, self.language).await?;
        Ok(invoice)
    }

    /// Lists invoices in issue order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Billing`] on storage failure.
    pub async fn invoices(&self) -> MarketplaceResult<Vec<Invoice>> {
        Ok(self.billing.list().await?)
    }

    /// Finds an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Billing`] on storage failure.
    pub async fn invoice(&self, id: &InvoiceId) -> MarketplaceResult<Option<Invoice>> {
        Ok(self.billing.find(id).await?)
    }

    /// Sums due and overdue invoices.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Billing`] on storage failure.
    pub async fn outstanding_total(&self) -> MarketplaceResult<Money> {
        Ok(self.billing.outstanding_total().await?)
    }

    // Notifications

    /// Returns the feed, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Notification`] on storage failure.
    pub async fn notifications(&self) -> MarketplaceResult<Vec<Notification>> {
        Ok(self.notifications.list().await?)
    }

    /// Counts unread feed entries.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Notification`] on storage failure.
    pub async fn unread_notifications(&self) -> MarketplaceResult<usize> {
        Ok(self.notifications.unread_count().await?)
    }

    /// Marks one feed entry read.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Notification`] for unknown entries.
    pub async fn mark_notification_read(
        &self,
        id: &NotificationId,
    ) -> MarketplaceResult<Notification> {
        Ok(self.notifications.mark_read(id).await?)
    }

    /// Marks the whole feed read.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Notification`] on storage failure.
    pub async fn mark_all_notifications_read(&self) -> MarketplaceResult<usize> {
        Ok(self.notifications.mark_all_read().await?)
    }

    // Views

    /// Requests on one tab of the client list, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] on storage failure.
    pub async fn filtered_requests(
        &self,
        filter: RequestFilter,
    ) -> MarketplaceResult<Vec<ServiceRequest>> {
        Ok(filter.apply(&self.requests.list().await?))
    }

    /// Request counts per tab.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] on storage failure.
    pub async fn filter_counts(&self) -> MarketplaceResult<FilterCounts> {
        Ok(FilterCounts::tally(&self.requests.list().await?))
    }

    /// Requests assigned to the signed-in provider, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Lifecycle`] on storage failure.
    pub async fn provider_queue(&self, user: &User) -> MarketplaceResult<Vec<ServiceRequest>> {
        Ok(self.requests.list_for_provider(user.name()).await?)
    }

    /// Headline dashboard figures.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError`] when a collection cannot be read.
    pub async fn dashboard_summary(&self) -> MarketplaceResult<DashboardSummary> {
        let requests = self.requests.list().await?;
        let invoices = self.billing.list().await?;
        Ok(DashboardSummary {
            active_requests: requests
                .iter()
                .filter(|request| DashboardSummary::active(request.status()))
                .count(),
            pending_actions: requests
                .iter()
                .filter(|request| request.status() == RequestStatus::Completed)
                .count(),
            fleet_size: self.fleet.list().await?.len(),
            outstanding_invoices: invoices
                .iter()
                .filter(|invoice| invoice.status().is_outstanding())
                .count(),
            outstanding_total: self.billing.outstanding_total().await?,
        })
    }

    /// Status timeline of a request.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::UnknownRequest`] for unknown ids.
    pub async fn timeline(&self, id: &RequestId) -> MarketplaceResult<Vec<TimelineStep>> {
        let request = self
            .requests
            .find(id)
            .await?
            .ok_or_else(|| MarketplaceError::UnknownRequest(id.clone()))?;
        Ok(status_timeline(&request))
    }

    async fn transition(
        &self,
        id: &RequestId,
        target: RequestStatus,
        user: &User,
    ) -> MarketplaceResult<ServiceRequest> {
        let update = self
            .requests
            .apply_transition(id, target, user.role())
            .await?;
        if update.applied() {
            self.notify_status(&update.request, target).await?;
        }
        Ok(update.request)
    }

    async fn notify_status(
        &self,
        request: &ServiceRequest,
        status: RequestStatus,
    ) -> MarketplaceResult<()> {
        let tail_number = self.fleet.find(request.jet_id()).await?.map_or_else(
            || {
                debug!(jet_id = %request.jet_id(), "jet missing from fleet, using its id");
                request.jet_id().to_string()
            },
            |jet| jet.tail_number().to_string(),
        );
        let event = NotificationEvent::RequestStatusChanged {
            tail_number,
            status,
            provider: request.provider().map(str::to_owned),
        };
        self.notifications.push(&event, self.language).await?;
        Ok(())
    }
}
