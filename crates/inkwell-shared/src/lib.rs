//! # Inkwell Shared
//!
//! Wire types shared between the servers and their HTTP clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
