//! # Inkwell Core
//!
//! The domain layer of the Inkwell blogging backend.
//! This crate contains the author/post model, the ports infrastructure must
//! implement, and the operations both transports expose. It has zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::{BlogService, CurrentUser, NewAuthor};
