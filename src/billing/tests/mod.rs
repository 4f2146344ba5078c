//! Tests for the billing module.

mod domain_tests;
