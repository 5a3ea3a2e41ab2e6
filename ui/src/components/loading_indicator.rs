//! Loading screens for indeterminate waits.
//!
//! DESIGN
//! ======
//! The indicator is stateless: a `DisplayVariant` selects one of three
//! layouts and every other input is optional. The progress bar is decorative
//! (a CSS keyframe loop) and never reflects real progress.

#[cfg(test)]
#[path = "loading_indicator_test.rs"]
mod loading_indicator_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::components::spinner::{Spinner, SpinnerSize};
use crate::state::labels::{UiLabels, use_labels};
use crate::util::text::non_blank;

/// Rendering mode for [`LoadingIndicator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum DisplayVariant {
    #[default]
    Default,
    Minimal,
    Branded,
}

/// Regions a variant renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingLayout {
    pub full_screen: bool,
    pub brand_mark: bool,
    pub progress_bar: bool,
    pub subtitle: bool,
}

impl DisplayVariant {
    /// Resolve a variant by name. Unknown names resolve to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => Self::Minimal,
            "branded" => Self::Branded,
            _ => Self::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Branded => "branded",
        }
    }

    pub fn layout(self) -> LoadingLayout {
        match self {
            Self::Minimal => LoadingLayout {
                full_screen: false,
                brand_mark: false,
                progress_bar: false,
                subtitle: false,
            },
            Self::Branded => LoadingLayout {
                full_screen: true,
                brand_mark: true,
                progress_bar: true,
                subtitle: true,
            },
            Self::Default => LoadingLayout {
                full_screen: true,
                brand_mark: false,
                progress_bar: true,
                subtitle: true,
            },
        }
    }
}

impl From<&str> for DisplayVariant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for DisplayVariant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Text a loading screen shows once defaults and the variant are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingText {
    pub message: String,
    pub subtitle: Option<String>,
}

impl LoadingText {
    pub fn resolve(
        message: Option<String>,
        subtitle: Option<String>,
        variant: DisplayVariant,
        labels: &UiLabels,
    ) -> Self {
        let subtitle = if variant.layout().subtitle { non_blank(subtitle) } else { None };
        Self {
            message: message.unwrap_or_else(|| labels.loading.clone()),
            subtitle,
        }
    }
}

/// Indeterminate progress presentation.
#[component]
pub fn LoadingIndicator(
    /// Main status line. Defaults to the localized loading phrase.
    #[prop(optional, into)]
    message: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Layout selector; accepts a `DisplayVariant` or its name.
    #[prop(optional, into)]
    variant: DisplayVariant,
) -> impl IntoView {
    let labels = use_labels();
    let LoadingText { message, subtitle } = LoadingText::resolve(message, subtitle, variant, &labels);
    let layout = variant.layout();

    if !layout.full_screen {
        return view! {
            <div class="loading-indicator loading-indicator--minimal" role="status" aria-live="polite">
                <Spinner size=SpinnerSize::Small/>
                <span class="loading-indicator__message">{message}</span>
            </div>
        }
        .into_any();
    }

    let UiLabels { brand_title, brand_mark, .. } = labels;
    view! {
        <div
            class=format!("loading-indicator loading-indicator--{}", variant.name())
            role="status"
            aria-live="polite"
        >
            <div class="loading-indicator__panel">
                {layout
                    .brand_mark
                    .then(|| {
                        view! {
                            <div class="loading-indicator__brand">
                                <span class="loading-indicator__brand-mark">{brand_mark}</span>
                                <h1 class="loading-indicator__brand-title">{brand_title}</h1>
                            </div>
                        }
                    })}
                <Spinner size=SpinnerSize::Large/>
                <p class="loading-indicator__message">{message}</p>
                {subtitle.map(|text| view! { <p class="loading-indicator__subtitle">{text}</p> })}
                {layout
                    .progress_bar
                    .then(|| {
                        view! {
                            <div class="loading-indicator__track" aria-hidden="true">
                                <div class="loading-indicator__bar"></div>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
    .into_any()
}
