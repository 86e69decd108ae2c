//! New-lesson page: topic/grade/subject form driving the generation route.

use leptos::prelude::*;

use lessons::catalog::{GRADES, SUBJECTS};

use crate::components::{Button, FormField, MainLayout};
use crate::shell;

/// Credit hint under the form. `None` remaining means no cap.
#[must_use]
pub fn credits_hint(remaining: Option<usize>) -> Option<String> {
    match remaining {
        None => None,
        Some(1) => Some("1 lesson credit remaining.".to_owned()),
        Some(n) => Some(format!("{n} lesson credits remaining.")),
    }
}

/// User-facing text for a `?error=` code on this page.
#[must_use]
pub fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "rate_limited" => Some("You're generating lessons a little too fast. Give it a minute."),
        "failed" => Some("We couldn't generate that lesson. Please try again."),
        _ => None,
    }
}

pub fn render(remaining: Option<usize>, generation_enabled: bool, error: Option<String>) -> String {
    shell::document(
        "New lesson | Lessongo",
        view! { <MainLayout><NewLessonPage remaining generation_enabled error/></MainLayout> },
    )
}

#[component]
pub fn NewLessonPage(
    remaining: Option<usize>,
    generation_enabled: bool,
    error: Option<String>,
) -> impl IntoView {
    let out_of_credits = remaining == Some(0);
    let error_banner = error
        .as_deref()
        .and_then(error_message)
        .map(|message| view! { <div class="p-4 mb-3 text-white bg-red-700 rounded-xl">{message}</div> });
    let hint = credits_hint(remaining);

    view! {
        <div class="col-span-12 w-full max-w-2xl mx-auto">
            <h1 class="mb-8 text-5xl font-bold mt-11">"Plan a lesson"</h1>
            {error_banner}
            {(!generation_enabled).then(|| view! {
                <div class="p-4 mb-3 bg-gray-100 rounded-xl text-slate-700">
                    "Lesson generation isn't available right now. Please check back soon."
                </div>
            })}
            {out_of_credits.then(|| view! {
                <div class="p-4 mb-3 bg-gray-100 rounded-xl text-slate-700">
                    "You're out of lesson credits. "
                    <a href="/account" class="font-bold underline underline-offset-2 hover:no-underline">
                        "Upgrade your plan"
                    </a>
                    " to keep planning."
                </div>
            })}
            <form method="post" action="/lessons/new">
                <FormField label="What's your lesson about?".to_owned()>
                    <input
                        type="text"
                        name="title"
                        required=true
                        placeholder="e.g. Charlotte's Web, chapter 3"
                        class="w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-black"
                    />
                </FormField>
                <FormField label="Grade".to_owned()>
                    <select
                        name="grade"
                        class="w-full px-4 py-2 bg-white border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-black"
                    >
                        {GRADES.iter().map(|(value, label)| view! {
                            <option value=value.to_string()>{*label}</option>
                        }).collect_view()}
                    </select>
                </FormField>
                <FormField label="Subject".to_owned()>
                    <select
                        name="subject"
                        class="w-full px-4 py-2 bg-white border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-black"
                    >
                        {SUBJECTS.iter().map(|subject| view! {
                            <option value={*subject}>{*subject}</option>
                        }).collect_view()}
                    </select>
                </FormField>
                <Button full_width=true>"Generate my lesson plan"</Button>
            </form>
            {hint.map(|hint| view! { <p class="mt-4 text-slate-600">{hint}</p> })}
        </div>
    }
}

#[cfg(test)]
#[path = "new_lesson_test.rs"]
mod tests;
