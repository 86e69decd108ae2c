//! Account page: credit meters, subscription management, checkout flashes.

use leptos::prelude::*;
use time::macros::format_description;

use lessons::plan::{FREE_LESSON_LIMIT, PRO_MONTHLY_LESSON_LIMIT, credits_remaining, meter_percent};
use lessons::{PlanTier, Subscription};

use crate::components::{Button, ButtonVariant, MainLayout};
use crate::shell;

// =============================================================================
// FLASH MESSAGES
// =============================================================================

/// One-shot banner state carried in query parameters across redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFlash {
    Subscribed,
    AlreadySubscribed,
    CheckoutFailed,
    PortalFailed,
    OutOfCredits,
}

impl AccountFlash {
    /// Parse the `subscribed` / `error` query parameters.
    #[must_use]
    pub fn from_query(subscribed: Option<&str>, error: Option<&str>) -> Option<Self> {
        if subscribed == Some("true") {
            return Some(Self::Subscribed);
        }
        match error {
            Some("exists") => Some(Self::AlreadySubscribed),
            Some("checkout") => Some(Self::CheckoutFailed),
            Some("portal") => Some(Self::PortalFailed),
            Some("credits") => Some(Self::OutOfCredits),
            _ => None,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Subscribed => "Welcome aboard! You're successfully subscribed!",
            Self::AlreadySubscribed => {
                "You already have a subscription. Manage it from your billing portal below."
            }
            Self::CheckoutFailed => "Sorry, we had an error on our side. Please try again later.",
            Self::PortalFailed => "We couldn't open your billing portal. Please try again later.",
            Self::OutOfCredits => "You're out of lesson credits for now. Upgrade to keep planning.",
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Subscribed)
    }
}

// =============================================================================
// PAGE DATA
// =============================================================================

/// Everything the account page renders, assembled by the route handler.
pub struct AccountData {
    pub email: String,
    pub tier: PlanTier,
    pub subscription: Option<Subscription>,
    pub lessons_total: usize,
    pub month_count: usize,
    pub flash: Option<AccountFlash>,
    /// False when the payment processor is not configured; upgrade and
    /// portal actions are hidden rather than rendered broken.
    pub billing_enabled: bool,
}

/// Renewal/cancellation line under the manage button.
#[must_use]
pub fn renewal_line(subscription: &Subscription) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    let date = subscription.current_period_end.format(&format).unwrap_or_default();
    if subscription.cancel_at_period_end {
        format!("Your subscription ends on {date}.")
    } else {
        format!("Your subscription will renew on {date}.")
    }
}

/// Inline style for a usage-meter fill bar.
#[must_use]
pub fn meter_style(used: usize, limit: usize) -> String {
    format!("width: {}%", meter_percent(used, limit))
}

pub fn render(data: AccountData) -> String {
    shell::document("Account | Lessongo", view! { <MainLayout><AccountPage data/></MainLayout> })
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
pub fn AccountPage(data: AccountData) -> impl IntoView {
    let flash = data.flash.map(|flash| {
        let classes = if flash.is_success() {
            "p-4 mb-3 text-white bg-green-700 rounded-xl"
        } else {
            "p-4 mb-3 text-white bg-red-700 rounded-xl"
        };
        view! { <div class=classes>{flash.message()}</div> }
    });

    let email = data.email;
    let credits =
        credit_panel(data.tier, data.lessons_total, data.month_count, data.billing_enabled);
    let manage = data
        .subscription
        .filter(|sub| sub.status.grants_access())
        .map(|sub| manage_panel(sub, data.billing_enabled));

    view! {
        <div class="col-span-12 sm:col-span-10 sm:col-start-2 lg:col-span-8 lg:col-start-3">
            <h1 class="mb-3 text-3xl font-bold mt-11">"Account"</h1>
            <p class="mb-3 text-slate-600">{email}</p>
            {flash}
            <div class="flex flex-col gap-3 p-4 ring-2 ring-slate-200 rounded-xl">
                {credits}
                {manage}
            </div>
            <form method="post" action="/auth/logout">
                <button
                    type="submit"
                    class="w-24 px-4 py-2 mt-8 font-medium text-white bg-black rounded-xl sm:mt-10 hover:bg-black/80"
                >
                    "Logout"
                </button>
            </form>
        </div>
    }
}

fn credit_panel(tier: PlanTier, lessons_total: usize, month_count: usize, billing_enabled: bool) -> impl IntoView {
    match tier {
        PlanTier::Pro => {
            let remaining = credits_remaining(PlanTier::Pro, lessons_total, month_count).unwrap_or(0);
            view! {
                <h2 class="text-xl font-semibold">
                    {format!("{remaining} / {PRO_MONTHLY_LESSON_LIMIT} lesson credits remaining for this month.")}
                </h2>
                <div class="w-full h-3 bg-gray-200 rounded-full">
                    <div class="h-3 bg-blue-600 rounded-full" style=meter_style(month_count, PRO_MONTHLY_LESSON_LIMIT)></div>
                </div>
                {billing_enabled.then(|| view! {
                    <p>
                        "Get a prorated upgrade to Unlimited from your "
                        <button
                            type="submit"
                            form="portal-form"
                            class="inline font-bold underline underline-offset-2 hover:no-underline"
                        >
                            "billing portal"
                        </button>
                        "."
                    </p>
                })}
            }
            .into_any()
        }
        PlanTier::Unlimited => view! {
            <h2 class="text-xl font-semibold">"Unlimited lesson plans. Go forth and teach."</h2>
        }
        .into_any(),
        PlanTier::Free => {
            let remaining = credits_remaining(PlanTier::Free, lessons_total, month_count).unwrap_or(0);
            view! {
                <h2 class="text-xl font-semibold">
                    {format!("You have {remaining} of {FREE_LESSON_LIMIT} free lesson credits left.")}
                </h2>
                <div class="w-full h-3 bg-gray-200 rounded-full">
                    <div class="h-3 bg-blue-600 rounded-full" style=meter_style(lessons_total, FREE_LESSON_LIMIT)></div>
                </div>
                {billing_enabled.then(|| view! {
                    <form method="post" action="/billing/checkout">
                        <input type="hidden" name="plan" value="pro"/>
                        <Button variant=ButtonVariant::Primary>"Upgrade to Pro"</Button>
                    </form>
                })}
            }
            .into_any()
        }
    }
}

fn manage_panel(subscription: Subscription, billing_enabled: bool) -> impl IntoView {
    let renewal = renewal_line(&subscription);
    if !billing_enabled {
        return view! { <p>{renewal}</p> }.into_any();
    }
    view! {
        <form id="portal-form" method="post" action="/billing/portal">
            <Button variant=ButtonVariant::Outline full_width=true>
                "Manage your subscription"
            </Button>
        </form>
        <p>{renewal}</p>
    }
    .into_any()
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
