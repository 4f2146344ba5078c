//! Tests for the service request module.

mod completion_service_tests;
