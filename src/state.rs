//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ConverterService, DynConverterService};
use crate::domain::audit::AuditLog;
use crate::domain::repositories::LinkRepository;
use crate::domain::translator::Translator;

#[derive(Clone)]
pub struct AppState {
    pub converter_service: Arc<DynConverterService>,
    pub link_repository: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Builds the state around a repository and audit log, using the
    /// production translator.
    pub fn new(link_repository: Arc<dyn LinkRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self::with_translator(Translator::new(), link_repository, audit_log)
    }

    pub fn with_translator(
        translator: Translator,
        link_repository: Arc<dyn LinkRepository>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        let converter_service = Arc::new(ConverterService::new(
            translator,
            link_repository.clone(),
            audit_log,
        ));

        Self {
            converter_service,
            link_repository,
        }
    }
}
