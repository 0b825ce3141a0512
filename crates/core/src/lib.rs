//! # Clinic Core
//!
//! Domain rows, request schemas and the error taxonomy shared by the
//! database gateway and the HTTP layer.

pub mod errors;
pub mod models;
