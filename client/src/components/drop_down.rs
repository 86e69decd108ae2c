//! Single-select dropdown menu.
//!
//! DESIGN
//! ======
//! Open/close uses a native `<details>` disclosure instead of a scripted
//! menu, and each entry is a link, so selecting an option is navigation.
//! The caller builds the hrefs; this component only draws the menu.

use leptos::prelude::*;

use super::class_names;

/// One selectable entry in a [`DropDown`] menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDownItem {
    pub href: String,
    pub label: String,
    pub selected: bool,
}

impl DropDownItem {
    #[must_use]
    pub fn new(href: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self { href: href.into(), label: label.into(), selected }
    }
}

/// Dropdown button showing the current `value`, with an item panel below.
#[component]
pub fn DropDown(value: String, items: Vec<DropDownItem>) -> impl IntoView {
    view! {
        <details class="dropdown relative block w-full text-left">
            <summary class="inline-flex items-center justify-between w-full px-4 py-2 text-gray-700 bg-white border border-gray-300 rounded-md shadow-sm cursor-pointer hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-black">
                {value}
                <svg viewBox="0 0 20 20" class="w-5 h-5 ml-2 -mr-1" fill="currentColor" aria-hidden="true">
                    <path d="M5.23 7.21a.75.75 0 011.06.02L10 11.17l3.71-3.94a.75.75 0 111.08 1.04l-4.25 4.5a.75.75 0 01-1.08 0l-4.25-4.5a.75.75 0 01.02-1.06z"/>
                </svg>
            </summary>
            <div class="absolute left-0 z-10 w-full mt-2 bg-white rounded-md shadow-lg ring-1 ring-black/5">
                {items.into_iter().map(drop_down_entry).collect_view()}
            </div>
        </details>
    }
}

fn drop_down_entry(item: DropDownItem) -> impl IntoView {
    let classes = class_names(&[
        "px-4 py-2 text-sm w-full text-left flex items-center justify-between text-gray-700 hover:bg-gray-100 hover:text-gray-900",
        if item.selected { "bg-gray-200" } else { "" },
    ]);
    view! {
        <a href=item.href class=classes>
            <span>{item.label}</span>
            {item.selected.then(|| view! {
                <svg viewBox="0 0 20 20" class="w-4 h-4" fill="currentColor" aria-hidden="true">
                    <path d="M16.7 5.3a1 1 0 010 1.4l-7.5 7.5a1 1 0 01-1.4 0l-3-3a1 1 0 111.4-1.4l2.3 2.29 6.8-6.8a1 1 0 011.4 0z"/>
                </svg>
            })}
        </a>
    }
}

#[cfg(test)]
#[path = "drop_down_test.rs"]
mod tests;
