use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_4417__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_17__"), None);
}

// =============================================================================
// safe_return_url
// =============================================================================

#[test]
fn safe_return_url_accepts_site_paths() {
    assert_eq!(safe_return_url(Some("/lessons/new")), "/lessons/new");
    assert_eq!(safe_return_url(Some("/account?upgrade=pro")), "/account?upgrade=pro");
}

#[test]
fn safe_return_url_rejects_external_targets() {
    assert_eq!(safe_return_url(Some("https://evil.example")), "/account");
    assert_eq!(safe_return_url(Some("//evil.example")), "/account");
    assert_eq!(safe_return_url(Some("javascript:alert(1)")), "/account");
}

#[test]
fn safe_return_url_defaults_to_account() {
    assert_eq!(safe_return_url(None), "/account");
    assert_eq!(safe_return_url(Some("")), "/account");
}

// =============================================================================
// session cookie
// =============================================================================

#[test]
fn session_cookie_is_scoped_and_http_only() {
    let cookie = session_cookie("tok-123".to_owned());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok-123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::days(7)));
}
