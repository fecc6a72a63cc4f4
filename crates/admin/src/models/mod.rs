//! Domain models mirroring the hosted marketplace tables.
//!
//! Field names follow the remote columns exactly (including the legacy
//! `imageURL` casing), so these structs round-trip through the table API
//! without a mapping layer. The admin holds read/write cache copies only;
//! the hosted service owns every row.

mod account;
mod payment;
mod post;
mod report;

pub use account::{Account, AccountPatch, NewAccount};
pub use payment::{NewPayment, Payment, PaymentPatch};
pub use post::{Post, PostPatch, PostSummary};
pub use report::{Report, ReportPatch};
