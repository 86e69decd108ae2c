//! Service layer: hosted-provider clients and generation orchestration.

pub mod billing;
pub mod datastore;
pub mod generate;

use uuid::Uuid;

use lessons::{PlanTier, Subscription};

use crate::state::AppState;
use datastore::DatastoreError;

/// Fetch the caller's subscription row and resolve their plan tier.
///
/// With billing unconfigured there are no price IDs to match, so every
/// caller resolves to the free tier.
pub async fn resolve_tier(
    state: &AppState,
    token: &str,
    user_id: Uuid,
) -> Result<(Option<Subscription>, PlanTier), DatastoreError> {
    let subscription = state.datastore.subscription_for_user(Some(token), user_id).await?;
    let tier = match state.billing.as_ref() {
        Some(billing) => PlanTier::resolve(subscription.as_ref(), &billing.prices()),
        None => PlanTier::Free,
    };
    Ok((subscription, tier))
}
