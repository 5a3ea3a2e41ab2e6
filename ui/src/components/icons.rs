//! Inline SVG icon set used by cards and form actions.

use leptos::prelude::*;

/// Built-in icon glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Save,
    Close,
    Car,
    Alert,
    Check,
    Clock,
}

/// Stroke icon drawn on a 20x20 grid.
#[component]
pub fn Icon(kind: IconKind) -> impl IntoView {
    let glyph = match kind {
        IconKind::Save => view! {
            <path d="M4 3h10l3 3v11H4z"></path>
            <path d="M7 3v5h6V3"></path>
            <rect x="7" y="11" width="7" height="6"></rect>
        }
        .into_any(),
        IconKind::Close => view! {
            <line x1="5" y1="5" x2="15" y2="15"></line>
            <line x1="15" y1="5" x2="5" y2="15"></line>
        }
        .into_any(),
        IconKind::Car => view! {
            <path d="M3 12l2-5h10l2 5v4H3z"></path>
            <circle cx="6.5" cy="16" r="1.5"></circle>
            <circle cx="13.5" cy="16" r="1.5"></circle>
        }
        .into_any(),
        IconKind::Alert => view! {
            <path d="M10 3l8 14H2z"></path>
            <line x1="10" y1="8" x2="10" y2="12"></line>
            <line x1="10" y1="14.5" x2="10" y2="15"></line>
        }
        .into_any(),
        IconKind::Check => view! { <polyline points="4,10.5 8,14.5 16,6"></polyline> }.into_any(),
        IconKind::Clock => view! {
            <circle cx="10" cy="10" r="7"></circle>
            <polyline points="10,6 10,10 13,12"></polyline>
        }
        .into_any(),
    };

    view! {
        <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
            {glyph}
        </svg>
    }
}
