//! Application layer services implementing business logic.
//!
//! Services coordinate the translator with the repository and audit traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::converter_service::ConverterService`] - Store-backed link conversion

pub mod services;
