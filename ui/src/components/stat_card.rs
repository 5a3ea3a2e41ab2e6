//! Metric card for dashboard summaries.
//!
//! DESIGN
//! ======
//! A card is rebuilt from props on every render through `MetricDescriptor`.
//! Theme lookup is total (unknown colors are blue) and the card only becomes
//! an activation target when the parent supplies `on_activate`.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use std::fmt;

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::gesture::{GestureOutcome, dispatch, is_activation_key};
use crate::util::text::non_blank;
use crate::util::theme::ColorTheme;

/// Placeholder blocks shown while a card is loading: value, then title.
pub const SKELETON_BLOCKS: [&str; 2] = ["stat-card__skeleton--value", "stat-card__skeleton--title"];

/// A metric rendered as text. Integers print without a decimal point.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.0}"),
            Self::Decimal(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for MetricValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for MetricValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i32> for MetricValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for MetricValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<usize> for MetricValue {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Integer)
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        Self::Decimal(n)
    }
}

/// Direction of change shown under the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Resolve a trend by name. Unknown names resolve to `Flat`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Self::Up,
            "down" => Self::Down,
            _ => Self::Flat,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "\u{2191}",
            Self::Down => "\u{2193}",
            Self::Flat => "\u{2192}",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "stat-card__trend stat-card__trend--up",
            Self::Down => "stat-card__trend stat-card__trend--down",
            Self::Flat => "stat-card__trend stat-card__trend--flat",
        }
    }
}

impl From<&str> for Trend {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Trend {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Everything a card renders, resolved from props for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricDescriptor {
    pub title: String,
    pub value: MetricValue,
    pub subtitle: Option<String>,
    pub trend: Option<Trend>,
    pub trend_value: Option<MetricValue>,
    pub color: ColorTheme,
    /// A click handler was supplied.
    pub interactive: bool,
    pub loading: bool,
}

impl MetricDescriptor {
    pub fn new(title: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            trend: None,
            trend_value: None,
            color: ColorTheme::default(),
            interactive: false,
            loading: false,
        }
    }

    pub fn value_text(&self) -> String {
        self.value.to_string()
    }

    /// Arrow plus optional magnitude, e.g. `"↑ 12%"`.
    pub fn trend_label(&self) -> Option<String> {
        let trend = self.trend?;
        Some(match &self.trend_value {
            Some(value) => format!("{} {value}", trend.glyph()),
            None => trend.glyph().to_owned(),
        })
    }

    /// The card accepts activation gestures only once loaded.
    pub fn accepts_activation(&self) -> bool {
        self.interactive && !self.loading
    }

    pub fn card_class(&self) -> String {
        let palette = self.color.palette();
        let mut class = format!("stat-card {} {}", palette.background, palette.border);
        if self.accepts_activation() {
            class.push_str(" stat-card--interactive");
        }
        class
    }

    /// Route one activation gesture to `handler`.
    pub fn activate<F: FnOnce()>(&self, handler: Option<F>) -> GestureOutcome {
        if !self.accepts_activation() {
            return GestureOutcome::Unhandled;
        }
        dispatch(false, handler)
    }
}

/// Labeled metric with optional trend, icon badge and activation.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    /// Text or number; `7` renders as `"7"`.
    #[prop(into)]
    value: MetricValue,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(optional, into)] trend: Option<Trend>,
    #[prop(optional, into)] trend_value: Option<MetricValue>,
    /// Palette name or tag; unknown names render blue.
    #[prop(optional, into)]
    color: ColorTheme,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
) -> impl IntoView {
    let base = MetricDescriptor {
        title,
        value,
        subtitle: non_blank(subtitle),
        trend,
        trend_value,
        color,
        interactive: on_activate.is_some(),
        loading: false,
    };

    move || {
        let metric = MetricDescriptor {
            loading: loading.get(),
            ..base.clone()
        };

        if metric.loading {
            return view! {
                <div class="stat-card stat-card--loading" aria-busy="true">
                    {SKELETON_BLOCKS
                        .iter()
                        .map(|block| view! { <div class=format!("stat-card__skeleton {block}")></div> })
                        .collect_view()}
                </div>
            }
            .into_any();
        }

        let palette = metric.color.palette();
        let trend_view = metric
            .trend_label()
            .zip(metric.trend)
            .map(|(label, trend)| view! { <p class=trend.class()>{label}</p> });
        let body = view! {
            {icon
                .clone()
                .map(|icon| {
                    view! { <div class=format!("stat-card__icon {}", palette.icon)>{icon.run()}</div> }
                })}
            <p class=format!("stat-card__value {}", palette.value)>{metric.value_text()}</p>
            <p class="stat-card__title">{metric.title.clone()}</p>
            {metric.subtitle.clone().map(|text| view! { <p class="stat-card__subtitle">{text}</p> })}
            {trend_view}
        };

        if !metric.accepts_activation() {
            return view! { <div class=metric.card_class()>{body}</div> }.into_any();
        }

        let on_click = {
            let metric = metric.clone();
            move |_: leptos::ev::MouseEvent| {
                metric.activate(on_activate.map(|cb| move || cb.run(())));
            }
        };
        let on_keydown = {
            let metric = metric.clone();
            move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    metric.activate(on_activate.map(|cb| move || cb.run(())));
                }
            }
        };

        view! {
            <div
                class=metric.card_class()
                role="button"
                tabindex="0"
                on:click=on_click
                on:keydown=on_keydown
            >
                {body}
            </div>
        }
        .into_any()
    }
}
