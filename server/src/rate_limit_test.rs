use super::*;

fn config(per_user: usize, global: usize) -> RateLimitConfig {
    RateLimitConfig {
        per_user_limit: per_user,
        per_user_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
    }
}

#[test]
fn admits_up_to_per_user_limit() {
    let limiter = RateLimiter::with_config(config(3, 100));
    let user = Uuid::new_v4();
    let now = Instant::now();

    for _ in 0..3 {
        assert!(limiter.check_at(user, now).is_ok());
    }
    assert!(limiter.check_at(user, now).is_err());
}

#[test]
fn per_user_limit_is_per_user() {
    let limiter = RateLimiter::with_config(config(1, 100));
    let now = Instant::now();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    assert!(limiter.check_at(alice, now).is_ok());
    assert!(limiter.check_at(alice, now).is_err());
    assert!(limiter.check_at(bob, now).is_ok());
}

#[test]
fn window_expiry_frees_slots() {
    let limiter = RateLimiter::with_config(config(1, 100));
    let user = Uuid::new_v4();
    let now = Instant::now();

    assert!(limiter.check_at(user, now).is_ok());
    assert!(limiter.check_at(user, now + Duration::from_secs(30)).is_err());
    assert!(limiter.check_at(user, now + Duration::from_secs(61)).is_ok());
}

#[test]
fn global_limit_spans_users() {
    let limiter = RateLimiter::with_config(config(10, 2));
    let now = Instant::now();

    assert!(limiter.check_at(Uuid::new_v4(), now).is_ok());
    assert!(limiter.check_at(Uuid::new_v4(), now).is_ok());
    assert!(limiter.check_at(Uuid::new_v4(), now).is_err());
}

#[test]
fn rejected_requests_do_not_consume_quota() {
    let limiter = RateLimiter::with_config(config(1, 100));
    let user = Uuid::new_v4();
    let now = Instant::now();

    assert!(limiter.check_at(user, now).is_ok());
    // A burst of rejected calls must not extend the lockout.
    for _ in 0..10 {
        assert!(limiter.check_at(user, now + Duration::from_secs(1)).is_err());
    }
    assert!(limiter.check_at(user, now + Duration::from_secs(61)).is_ok());
}

#[test]
fn clones_share_state() {
    let limiter = RateLimiter::with_config(config(1, 100));
    let clone = limiter.clone();
    let user = Uuid::new_v4();
    let now = Instant::now();

    assert!(limiter.check_at(user, now).is_ok());
    assert!(clone.check_at(user, now).is_err());
}
