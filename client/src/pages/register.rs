//! Registration page, mirroring the login form.

use leptos::prelude::*;

use crate::components::{Button, FormField, MainLayout};
use crate::shell;
use crate::util::urls::query_escape;

/// Href back to the login page, carrying the pending return target.
#[must_use]
pub fn login_page_href(return_url: Option<&str>) -> String {
    match return_url {
        Some(target) => format!("/login?return_url={}", query_escape(target)),
        None => "/login".to_owned(),
    }
}

pub fn render(return_url: Option<String>, error: Option<String>) -> String {
    shell::document(
        "Create an account | Lessongo",
        view! { <MainLayout><RegisterPage return_url error/></MainLayout> },
    )
}

#[component]
pub fn RegisterPage(return_url: Option<String>, error: Option<String>) -> impl IntoView {
    let error_banner = error
        .as_deref()
        .and_then(super::login::error_message)
        .map(|message| view! { <div class="p-4 mb-3 text-white bg-red-700 rounded-xl">{message}</div> });
    let login = login_page_href(return_url.as_deref());

    view! {
        <div class="col-span-12 w-full max-w-md mx-auto">
            <h1 class="mb-8 text-4xl font-bold mt-11">"Create an account"</h1>
            {error_banner}
            <form method="post" action="/auth/register">
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
                        minlength="8"
                        class="w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-black"
                    />
                </FormField>
                {return_url.map(|target| view! { <input type="hidden" name="return_url" value=target/> })}
                <Button full_width=true>"Create account"</Button>
            </form>
            <p class="mt-6 text-slate-600">
                "Already registered? " <a href=login class="font-bold underline underline-offset-2 hover:no-underline">"Sign in"</a> "."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_href_carries_return_target() {
        assert_eq!(login_page_href(None), "/login");
        assert_eq!(login_page_href(Some("/lessons/new")), "/login?return_url=/lessons/new");
    }

    #[test]
    fn renders_register_form() {
        let html = view! { <RegisterPage return_url=None error=None/> }.to_html();
        assert!(html.contains("action=\"/auth/register\""));
        assert!(html.contains("minlength=\"8\""));
    }
}
