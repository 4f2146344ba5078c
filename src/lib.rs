//! JetCare: aircraft-detailing service marketplace core.
//!
//! This crate holds the in-process domain of a marketplace connecting
//! aircraft owners (clients), detailing companies (providers) and the
//! platform operator. It covers service requests and their lifecycle, the
//! completion and quality-certification flow, per-request chat, the fleet,
//! invoices with simulated payment, and the notification feed.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and collaborators
//! - **Adapters**: In-memory repositories and simulated collaborators
//! - **Services**: Orchestration generic over ports and clock
//!
//! # Modules
//!
//! - [`service_request`]: Request lifecycle, completion, certification and chat
//! - [`fleet`]: Aircraft records
//! - [`billing`]: Invoices and simulated payment
//! - [`notification`]: Rendered feed entries
//! - [`account`]: Roles, sign-in, sign-up and onboarding
//! - [`i18n`]: Translation lookup
//! - [`reference`]: Static lookup tables
//! - [`marketplace`]: Container owning all collections and derived views

pub mod account;
pub mod billing;
pub mod config;
pub mod fleet;
pub mod i18n;
pub mod marketplace;
pub mod money;
pub mod notification;
pub mod reference;
pub mod service_request;
pub mod telemetry;
