//! Plan tiers and credit arithmetic.
//!
//! DESIGN
//! ======
//! Tier resolution is driven by the subscription row's `price_id` against
//! the two configured paid price IDs. A subscription only grants its tier
//! while its status grants access; everything else falls back to the free
//! trial allowance.

use crate::types::Subscription;

/// Free-trial allowance: total lessons per account.
pub const FREE_LESSON_LIMIT: usize = 5;

/// Pro allowance: lessons per calendar month.
pub const PRO_MONTHLY_LESSON_LIMIT: usize = 30;

/// The two paid price IDs as configured for the payment processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCatalog {
    pub pro: String,
    pub unlimited: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTier {
    Free,
    Pro,
    Unlimited,
}

impl PlanTier {
    /// Resolve the caller's tier from their subscription row, if any.
    ///
    /// An access-granting subscription with an unrecognized price ID is
    /// treated as free rather than guessed at.
    #[must_use]
    pub fn resolve(subscription: Option<&Subscription>, prices: &PriceCatalog) -> Self {
        let Some(sub) = subscription else {
            return Self::Free;
        };
        if !sub.status.grants_access() {
            return Self::Free;
        }
        match sub.price_id.as_deref() {
            Some(price) if price == prices.pro => Self::Pro,
            Some(price) if price == prices.unlimited => Self::Unlimited,
            _ => Self::Free,
        }
    }

    #[must_use]
    pub fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }
}

/// Lessons the caller may still generate. `None` means no cap.
///
/// `total` is the all-time lesson count, `month` the count for the current
/// calendar month; each tier reads the one its allowance is defined over.
#[must_use]
pub fn credits_remaining(tier: PlanTier, total: usize, month: usize) -> Option<usize> {
    match tier {
        PlanTier::Free => Some(FREE_LESSON_LIMIT.saturating_sub(total)),
        PlanTier::Pro => Some(PRO_MONTHLY_LESSON_LIMIT.saturating_sub(month)),
        PlanTier::Unlimited => None,
    }
}

/// Usage-meter fill percentage, clamped to `0..=100`.
#[must_use]
pub fn meter_percent(used: usize, limit: usize) -> u8 {
    if limit == 0 {
        return 100;
    }
    let pct = used.saturating_mul(100) / limit;
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
