//! Login page: email/password form against the hosted auth service.

use leptos::prelude::*;

use crate::components::{Button, FormField, MainLayout};
use crate::shell;
use crate::util::urls::query_escape;

/// User-facing text for a `?error=` code; unknown codes render nothing.
#[must_use]
pub fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "invalid" => Some("Invalid email or password."),
        "signup" => Some("We couldn't create that account. Try a different email."),
        _ => None,
    }
}

/// User-facing text for a `?notice=` code.
#[must_use]
pub fn notice_message(code: &str) -> Option<&'static str> {
    match code {
        "confirm" => Some("Check your email to confirm your account, then sign in."),
        _ => None,
    }
}

/// Href to the register page, carrying the pending return target.
#[must_use]
pub fn register_href(return_url: Option<&str>) -> String {
    match return_url {
        Some(target) => format!("/register?return_url={}", query_escape(target)),
        None => "/register".to_owned(),
    }
}

pub fn render(return_url: Option<String>, error: Option<String>, notice: Option<String>) -> String {
    shell::document(
        "Sign in | Lessongo",
        view! { <MainLayout><LoginPage return_url error notice/></MainLayout> },
    )
}

#[component]
pub fn LoginPage(
    return_url: Option<String>,
    error: Option<String>,
    notice: Option<String>,
) -> impl IntoView {
    let error_banner = error
        .as_deref()
        .and_then(error_message)
        .map(|message| view! { <div class="p-4 mb-3 text-white bg-red-700 rounded-xl">{message}</div> });
    let notice_banner = notice
        .as_deref()
        .and_then(notice_message)
        .map(|message| view! { <div class="p-4 mb-3 text-white bg-green-700 rounded-xl">{message}</div> });
    let register = register_href(return_url.as_deref());

    view! {
        <div class="col-span-12 w-full max-w-md mx-auto">
            <h1 class="mb-8 text-4xl font-bold mt-11">"Sign in"</h1>
            {error_banner}
            {notice_banner}
            <form method="post" action="/auth/login">
                <FormField label="Email".to_owned()>
                    <input
                        type="email"
                        name="email"
                        required=true
                        class="w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-black"
                    />
                </FormField>
                <FormField label="Password".to_owned()>
                    <input
                        type="password"
                        name="password"
                        required=true
                        class="w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-black"
                    />
                </FormField>
                {return_url.map(|target| view! { <input type="hidden" name="return_url" value=target/> })}
                <Button full_width=true>"Sign in"</Button>
            </form>
            <p class="mt-6 text-slate-600">
                "New here? " <a href=register class="font-bold underline underline-offset-2 hover:no-underline">"Create an account"</a> "."
            </p>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
