//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the hosted-provider clients: the datastore is required, while
//! billing and the LLM are optional — their features degrade to notices
//! when unconfigured.

use std::sync::Arc;

use lessons::PriceCatalog;

use crate::llm::LlmChat;
use crate::rate_limit::RateLimiter;
use crate::services::billing::BillingClient;
use crate::services::datastore::Datastore;

/// Shared application state, injected into Axum handlers via State
/// extractor. Clone is required by Axum — all inner fields are Arc-wrapped
/// or Clone.
#[derive(Clone)]
pub struct AppState {
    pub datastore: Arc<Datastore>,
    /// `None` if billing env vars are not configured.
    pub billing: Option<Arc<BillingClient>>,
    /// `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Limiter for generation requests.
    pub rate_limiter: RateLimiter,
    /// Public origin for success/cancel/return URLs, no trailing slash.
    pub site_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(
        datastore: Datastore,
        billing: Option<BillingClient>,
        llm: Option<Arc<dyn LlmChat>>,
        site_url: String,
    ) -> Self {
        Self {
            datastore: Arc::new(datastore),
            billing: billing.map(Arc::new),
            llm,
            rate_limiter: RateLimiter::new(),
            site_url,
        }
    }

    /// Configured paid price IDs, when billing is enabled.
    #[must_use]
    pub fn prices(&self) -> Option<PriceCatalog> {
        self.billing.as_ref().map(|billing| billing.prices())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
