//! Query-string escaping for hrefs built in markup.
//!
//! Only the characters that would terminate or restructure a query value
//! are escaped; everything unreserved passes through so hrefs stay
//! readable in rendered HTML.

/// Percent-encode a string for use as a single query-parameter value.
#[must_use]
pub fn query_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// Build a `/login` href that returns to `target` after sign-in.
#[must_use]
pub fn login_href(target: &str) -> String {
    format!("/login?return_url={}", query_escape(target))
}

#[cfg(test)]
#[path = "urls_test.rs"]
mod tests;
