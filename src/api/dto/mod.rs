//! Data Transfer Objects for REST request/response serialization.

pub mod contact_dto;
pub mod status_dto;

pub use contact_dto::*;
pub use status_dto::*;
