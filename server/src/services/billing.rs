//! Payment-processor client — checkout and billing-portal sessions.
//!
//! DESIGN
//! ======
//! The processor's API is form-encoded POST with basic auth on the secret
//! key. Both calls here create short-lived hosted sessions; the route layer
//! redirects the browser to the returned URL and the processor owns the
//! rest of the flow (including syncing subscription rows back into the
//! datastore).

use std::time::Duration;

use serde::Deserialize;

use lessons::PriceCatalog;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_BILLING_API_BASE: &str = "https://api.stripe.com";

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone)]
pub struct BillingConfig {
    pub secret_key: String,
    pub price_pro: String,
    pub price_unlimited: String,
    pub api_base: String,
}

impl BillingConfig {
    /// Load from `BILLING_SECRET_KEY`, `BILLING_PRICE_PRO`, and
    /// `BILLING_PRICE_UNLIMITED`. Returns `None` if any are missing
    /// (checkout and the portal will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let secret_key = std::env::var("BILLING_SECRET_KEY").ok()?;
        let price_pro = std::env::var("BILLING_PRICE_PRO").ok()?;
        let price_unlimited = std::env::var("BILLING_PRICE_UNLIMITED").ok()?;
        let api_base = std::env::var("BILLING_API_BASE")
            .unwrap_or_else(|_| DEFAULT_BILLING_API_BASE.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Some(Self { secret_key, price_pro, price_unlimited, api_base })
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// Paid plan selected by a checkout form. `super` is the historical slug
/// for the Unlimited tier and remains accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChoice {
    Pro,
    Unlimited,
}

impl PlanChoice {
    #[must_use]
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "pro" => Some(Self::Pro),
            "super" | "unlimited" => Some(Self::Unlimited),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("billing request failed: {0}")]
    Request(String),

    #[error("billing api error: status {status}")]
    Api { status: u16, body: String },

    #[error("billing response parse failed: {0}")]
    Decode(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Hosted checkout session the browser is redirected to.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Hosted billing-portal session.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSession {
    pub url: String,
}

/// Inputs for a new checkout session.
pub struct CheckoutParams<'a> {
    pub price_id: &'a str,
    pub customer_email: &'a str,
    pub client_reference_id: &'a str,
    pub success_url: &'a str,
    pub cancel_url: &'a str,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct BillingClient {
    http: reqwest::Client,
    config: BillingConfig,
}

impl BillingClient {
    pub fn new(config: BillingConfig) -> Result<Self, BillingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BillingError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Configured price ID for a plan.
    #[must_use]
    pub fn price_for(&self, plan: PlanChoice) -> &str {
        match plan {
            PlanChoice::Pro => &self.config.price_pro,
            PlanChoice::Unlimited => &self.config.price_unlimited,
        }
    }

    /// Price IDs in the shape the domain crate's tier resolution wants.
    #[must_use]
    pub fn prices(&self) -> PriceCatalog {
        PriceCatalog {
            pro: self.config.price_pro.clone(),
            unlimited: self.config.price_unlimited.clone(),
        }
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, BillingError> {
        let response = self
            .http
            .post(format!("{}{path}", self.config.api_base))
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(form)
            .send()
            .await
            .map_err(|e| BillingError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BillingError::Request(e.to_string()))?;

        if status != 200 {
            return Err(BillingError::Api { status, body });
        }
        serde_json::from_str(&body).map_err(|e| BillingError::Decode(e.to_string()))
    }

    /// Create a subscription checkout session for one price.
    pub async fn create_checkout_session(
        &self,
        params: CheckoutParams<'_>,
    ) -> Result<CheckoutSession, BillingError> {
        self.post_form(
            "/v1/checkout/sessions",
            &[
                ("mode", "subscription"),
                ("line_items[0][price]", params.price_id),
                ("line_items[0][quantity]", "1"),
                ("customer_email", params.customer_email),
                ("client_reference_id", params.client_reference_id),
                ("success_url", params.success_url),
                ("cancel_url", params.cancel_url),
            ],
        )
        .await
    }

    /// Create a billing-portal session for an existing customer.
    pub async fn create_portal_session(
        &self,
        customer: &str,
        return_url: &str,
    ) -> Result<PortalSession, BillingError> {
        self.post_form(
            "/v1/billing_portal/sessions",
            &[("customer", customer), ("return_url", return_url)],
        )
        .await
    }
}

#[cfg(test)]
#[path = "billing_test.rs"]
mod tests;
