mod llm;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use llm::LlmChat;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let site_url = std::env::var("SITE_URL")
        .unwrap_or_else(|_| format!("http://localhost:{port}"))
        .trim_end_matches('/')
        .to_owned();

    let datastore_config = services::datastore::DatastoreConfig::from_env()
        .expect("DATASTORE_URL and DATASTORE_ANON_KEY required");
    let datastore = services::datastore::Datastore::new(datastore_config).expect("datastore client init failed");

    // Billing is optional: checkout/portal actions degrade to flash notices.
    let billing = match services::billing::BillingConfig::from_env() {
        Some(config) => match services::billing::BillingClient::new(config) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "billing client init failed — checkout disabled");
                None
            }
        },
        None => {
            tracing::warn!("billing env vars not set — checkout disabled");
            None
        }
    };

    // Initialize LLM client (non-fatal: generation disabled if config missing).
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client) as Arc<dyn LlmChat>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — lesson generation disabled");
            None
        }
    };

    let state = state::AppState::new(datastore, billing, llm, site_url);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lessongo listening");
    axum::serve(listener, app).await.expect("server failed");
}
