//! Indeterminate spinner shared by loading screens and busy buttons.

use leptos::prelude::*;

/// Rendered spinner diameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "spinner spinner--small",
            Self::Medium => "spinner",
            Self::Large => "spinner spinner--large",
        }
    }
}

/// A rotating ring. Purely decorative; callers announce progress in text.
#[component]
pub fn Spinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    view! { <span class=size.class() aria-hidden="true"></span> }
}
