//! Labeled wrapper around a form control.

use leptos::prelude::*;

#[component]
pub fn FormField(label: String, children: Children) -> impl IntoView {
    view! {
        <label class="block mb-4">
            <span class="block mb-1 font-medium text-slate-700">{label}</span>
            {children()}
        </label>
    }
}
