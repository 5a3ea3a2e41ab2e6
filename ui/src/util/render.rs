//! Server-side rendering helper for markup assertions in tests.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render `build` to an HTML string inside a fresh reactive owner.
pub(crate) fn render_html<V>(build: impl FnOnce() -> V) -> String
where
    V: IntoView + 'static,
{
    Owner::new().with(|| build().into_view().to_html())
}
