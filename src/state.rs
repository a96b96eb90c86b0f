//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site content is a `'static` literal; configuration is read once at startup.

use std::sync::Arc;

use crate::config::{ContactConfig, SiteConfig};
use crate::content::{SiteContent, data};
use crate::services::mailer::Mailer;

/// Mail relay wiring. Present only when the three contact secrets are set;
/// `/api/contact` reports a configuration error otherwise.
#[derive(Clone)]
pub struct ContactRelay {
    pub config: Arc<ContactConfig>,
    /// Trait object so tests can substitute a recording mock.
    pub mailer: Arc<dyn Mailer>,
}

/// Shared application state. Clone is required by Axum; all inner fields are
/// `'static`, Arc-wrapped, or Clone.
#[derive(Clone)]
pub struct AppState {
    pub content: &'static SiteContent,
    pub site: Arc<SiteConfig>,
    pub contact: Option<ContactRelay>,
}

impl AppState {
    #[must_use]
    pub fn new(site: SiteConfig, contact: Option<ContactRelay>) -> Self {
        Self { content: &data::CONTENT, site: Arc::new(site), contact }
    }
}
