//! Shared fixtures for in-memory adapter integration tests.

use std::sync::Arc;
use std::time::Duration;

use jetcare::{
    fleet::{adapters::memory::InMemoryFleetRepository, services::FleetService},
    service_request::{
        adapters::{SimulatedQualityInspector, memory::InMemoryServiceRequestRepository},
        services::{ServiceCompletionService, ServiceRequestLifecycleService},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Lifecycle service type used by the integration tests.
pub type Lifecycle = ServiceRequestLifecycleService<InMemoryServiceRequestRepository, DefaultClock>;

/// Completion service type used by the integration tests.
pub type Completion = ServiceCompletionService<
    InMemoryServiceRequestRepository,
    SimulatedQualityInspector,
    DefaultClock,
>;

/// Services sharing one in-memory request store.
pub struct RequestServices {
    pub lifecycle: Lifecycle,
    pub completion: Completion,
    pub fleet: FleetService<InMemoryFleetRepository>,
}

/// Provides request services over a fresh store with an instant inspector.
#[fixture]
pub fn services() -> RequestServices {
    let store = Arc::new(InMemoryServiceRequestRepository::new());
    let clock = Arc::new(DefaultClock);
    RequestServices {
        lifecycle: ServiceRequestLifecycleService::new(Arc::clone(&store), Arc::clone(&clock)),
        completion: ServiceCompletionService::new(
            store,
            Arc::new(SimulatedQualityInspector::new(Duration::ZERO, None)),
            clock,
        ),
        fleet: FleetService::new(Arc::new(InMemoryFleetRepository::new())),
    }
}
