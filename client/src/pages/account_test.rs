use super::*;
use lessons::SubscriptionStatus;
use time::macros::datetime;
use uuid::Uuid;

fn subscription(status: SubscriptionStatus) -> Subscription {
    Subscription {
        id: "sub_1".to_owned(),
        user_id: Uuid::new_v4(),
        status,
        price_id: Some("price_pro".to_owned()),
        current_period_end: datetime!(2026-09-01 00:00 UTC),
        cancel_at_period_end: false,
    }
}

fn data(tier: PlanTier) -> AccountData {
    AccountData {
        email: "teacher@example.com".to_owned(),
        tier,
        subscription: None,
        lessons_total: 0,
        month_count: 0,
        flash: None,
        billing_enabled: true,
    }
}

#[test]
fn flash_from_query_subscribed_wins() {
    assert_eq!(AccountFlash::from_query(Some("true"), None), Some(AccountFlash::Subscribed));
    assert_eq!(
        AccountFlash::from_query(Some("true"), Some("exists")),
        Some(AccountFlash::Subscribed)
    );
}

#[test]
fn flash_from_query_error_codes() {
    assert_eq!(AccountFlash::from_query(None, Some("exists")), Some(AccountFlash::AlreadySubscribed));
    assert_eq!(AccountFlash::from_query(None, Some("checkout")), Some(AccountFlash::CheckoutFailed));
    assert_eq!(AccountFlash::from_query(None, Some("portal")), Some(AccountFlash::PortalFailed));
    assert_eq!(AccountFlash::from_query(None, Some("credits")), Some(AccountFlash::OutOfCredits));
}

#[test]
fn flash_from_query_ignores_unknown() {
    assert_eq!(AccountFlash::from_query(None, Some("mystery")), None);
    assert_eq!(AccountFlash::from_query(Some("false"), None), None);
    assert_eq!(AccountFlash::from_query(None, None), None);
}

#[test]
fn only_subscribed_flash_is_success() {
    assert!(AccountFlash::Subscribed.is_success());
    assert!(!AccountFlash::AlreadySubscribed.is_success());
    assert!(!AccountFlash::PortalFailed.is_success());
}

#[test]
fn renewal_line_formats_period_end() {
    let sub = subscription(SubscriptionStatus::Active);
    assert_eq!(renewal_line(&sub), "Your subscription will renew on September 1, 2026.");
}

#[test]
fn renewal_line_for_cancelling_subscription() {
    let mut sub = subscription(SubscriptionStatus::Active);
    sub.cancel_at_period_end = true;
    assert_eq!(renewal_line(&sub), "Your subscription ends on September 1, 2026.");
}

#[test]
fn meter_style_clamps() {
    assert_eq!(meter_style(15, 30), "width: 50%");
    assert_eq!(meter_style(45, 30), "width: 100%");
}

#[test]
fn free_account_renders_upgrade_form() {
    let mut d = data(PlanTier::Free);
    d.lessons_total = 3;
    let html = view! { <AccountPage data=d/> }.to_html();
    assert!(html.contains("2 of 5 free lesson credits"));
    assert!(html.contains("action=\"/billing/checkout\""));
    assert!(html.contains("Upgrade to Pro"));
    assert!(!html.contains("Manage your subscription"));
}

#[test]
fn pro_account_renders_month_meter_and_portal() {
    let mut d = data(PlanTier::Pro);
    d.subscription = Some(subscription(SubscriptionStatus::Active));
    d.month_count = 12;
    let html = view! { <AccountPage data=d/> }.to_html();
    assert!(html.contains("18 / 30 lesson credits"));
    assert!(html.contains("width: 40%"));
    assert!(html.contains("Manage your subscription"));
    assert!(html.contains("Your subscription will renew on"));
}

#[test]
fn canceled_subscription_gets_no_manage_panel() {
    let mut d = data(PlanTier::Free);
    d.subscription = Some(subscription(SubscriptionStatus::Canceled));
    let html = view! { <AccountPage data=d/> }.to_html();
    assert!(!html.contains("Manage your subscription"));
}

#[test]
fn billing_disabled_hides_upgrade_actions() {
    let mut d = data(PlanTier::Free);
    d.billing_enabled = false;
    let html = view! { <AccountPage data=d/> }.to_html();
    assert!(!html.contains("/billing/checkout"));
}

#[test]
fn flash_banner_renders() {
    let mut d = data(PlanTier::Free);
    d.flash = Some(AccountFlash::Subscribed);
    let html = view! { <AccountPage data=d/> }.to_html();
    assert!(html.contains("successfully subscribed"));
    assert!(html.contains("bg-green-700"));
}
