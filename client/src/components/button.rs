//! Submit/action button with the two site variants.

use leptos::prelude::*;

use super::class_names;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

/// Classes for a button variant; shared with link-shaped buttons on the
/// marketing page.
#[must_use]
pub fn button_classes(variant: ButtonVariant, full_width: bool) -> String {
    let base = "px-4 py-2 font-medium rounded-xl text-center";
    let look = match variant {
        ButtonVariant::Primary => "text-white bg-black border-2 border-black hover:bg-black/80",
        ButtonVariant::Outline => "border-2 border-black hover:bg-gray-100/80",
    };
    class_names(&[base, look, if full_width { "w-full" } else { "" }])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] full_width: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="submit" class=button_classes(variant, full_width)>
            {children()}
        </button>
    }
}

#[cfg(test)]
#[path = "button_test.rs"]
mod tests;
