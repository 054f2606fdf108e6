//! Integration tests for the GOST key methods
//!
//! This test suite validates:
//! - Full parameter/key generation and signing flows per family
//! - Operation cloning and shared-secret ownership
//! - MAC key installation, keyed digest setup and tagging
//! - Configuration-driven method registration

pub mod test_utils;

#[cfg(test)]
mod signing_flow_tests;

#[cfg(test)]
mod context_clone_tests;

#[cfg(test)]
mod mac_flow_tests;

#[cfg(test)]
mod registration_tests;
