//! Presentational components shared across pages.

pub mod button;
pub mod drop_down;
pub mod form_field;
pub mod layout;

pub use button::{Button, ButtonVariant};
pub use drop_down::{DropDown, DropDownItem};
pub use form_field::FormField;
pub use layout::{Footer, Header, MainLayout};

/// Join class fragments, dropping empties.
#[must_use]
pub fn class_names(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
