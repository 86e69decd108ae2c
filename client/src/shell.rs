//! HTML document shell rendered around every page.

use leptos::prelude::*;

/// Render a full document around `body` and return it as an HTML string.
///
/// The Tailwind runtime is loaded from its CDN build; `/public/app.css`
/// carries the handful of rules utilities cannot express (dropdown
/// disclosure, print layout).
pub fn document(title: &str, body: impl IntoView) -> String {
    let title = title.to_owned();
    let view = view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="icon" href="/public/favicon.svg"/>
                <script src="https://cdn.tailwindcss.com"></script>
                <link rel="stylesheet" href="/public/app.css"/>
            </head>
            <body class="min-h-screen bg-white text-slate-900">{body}</body>
        </html>
    };
    view.to_html()
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
