//! Session users, roles, sign-in, sign-up and onboarding.
//!
//! Sign-in resolves against a configurable demo directory and is not an
//! authentication mechanism; it only decides which role drives the session.
//! The role of the signed-in [`domain::User`] gates which service request
//! transitions are available.

pub mod domain;

#[cfg(test)]
mod tests;
