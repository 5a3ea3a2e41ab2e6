//! Localized phrases provided to components through Leptos context.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use leptos::prelude::*;

/// Localized phrases shared by the component kit.
///
/// Provided once near the root via [`provide_labels`]. Components read it with
/// [`use_labels`] and fall back to the English defaults when no provider is
/// mounted, so a bare component still renders sensible text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiLabels {
    /// Default `LoadingIndicator` message.
    pub loading: String,
    /// Submit button label while a submission is in flight.
    pub working: String,
    /// Default submit button label.
    pub save: String,
    /// Default cancel button label.
    pub cancel: String,
    /// Title shown next to the brand mark in the branded loading screen.
    pub brand_title: String,
    /// Short text rendered inside the brand mark badge.
    pub brand_mark: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            loading: "Loading...".to_owned(),
            working: "Saving...".to_owned(),
            save: "Save".to_owned(),
            cancel: "Cancel".to_owned(),
            brand_title: "Vehicle Inspection".to_owned(),
            brand_mark: "VI".to_owned(),
        }
    }
}

/// Provide `labels` to every component below the current owner.
pub fn provide_labels(labels: UiLabels) {
    provide_context(labels);
}

/// Read the nearest provided labels, or the defaults when none exist.
pub fn use_labels() -> UiLabels {
    use_context::<UiLabels>().unwrap_or_default()
}
