//! Data contracts shared between the admin frontend and the restaurant API.
//!
//! Everything here is plain serde data: entity records as the API returns
//! them (joined display fields already embedded), the create-payload DTOs
//! with their client-side validation, and the status enumerations with
//! their explicit transition tables.

pub mod domain;
pub mod session;
