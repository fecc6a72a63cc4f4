//! SecondXE Core - Shared types library.
//!
//! This crate provides common types used across the SecondXE admin components:
//! - `admin` - Headless administration service for the marketplace
//! - `integration-tests` - Live-backend integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no access to
//! the hosted backend. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
