//! # contact-gateway
//!
//! REST API gateway for status checks and contact-form submissions.
//!
//! The service owns a handful of HTTP endpoints and delegates all durable
//! state to two external collaborators: a MongoDB document store (optional
//! at runtime) and a sheet-logging webhook that receives contact-form
//! payloads. There is no business logic beyond validation, one store call
//! and at most one outbound webhook call per request.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DocumentStore (persistence/)   ── MongoDB, optional
//!     └── SheetWebhook  (webhook/)       ── external HTTP endpoint
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod webhook;
