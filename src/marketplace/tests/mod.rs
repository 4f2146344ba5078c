//! Tests for the marketplace facade and its views.

mod facade_tests;
