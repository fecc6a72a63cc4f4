//! SecondXE Admin library.
//!
//! This crate provides the admin panel functionality as a library,
//! allowing it to be tested and reused.
//!
//! The panel is a thin moderation surface over a hosted backend service:
//! every row it reads or writes lives in the hosted project's `User`,
//! `VehiclePost`, `PostPayment`, and `Report` tables, reached through the
//! service's REST data API and its password auth endpoints. The hosted
//! service's row-level policies are the trust boundary; everything here
//! assumes a revoked session will be rejected remotely.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod credential;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
