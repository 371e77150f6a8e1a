//! Domain layer: link translation, entities and collaborator contracts.
//!
//! - [`translator`] - Pure web URL / deeplink translation
//! - [`entities`] - Link pair and page classification
//! - [`repositories`] - Mapping store trait
//! - [`audit`] - Conversion outcome sink
//!
//! The translator depends on nothing else in the crate; services in
//! [`crate::application::services`] wire it to the store and audit log.

pub mod audit;
pub mod entities;
pub mod repositories;
pub mod translator;
