//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthService, CatalogueReader};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthService>,
    pub catalogue: Arc<dyn CatalogueReader>,
}

impl HttpState {
    /// Construct state from the two ports the landing page needs.
    pub fn new(auth: Arc<dyn AuthService>, catalogue: Arc<dyn CatalogueReader>) -> Self {
        Self { auth, catalogue }
    }
}
