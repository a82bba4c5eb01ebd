//! Domain types: record identifiers and the two record shapes the
//! gateway owns.

pub mod contact;
pub mod status_check;

pub use contact::{ContactSubmission, StoredContact};
pub use status_check::{StatusCheck, StatusCheckId};
