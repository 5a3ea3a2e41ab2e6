//! Submit/cancel frame around caller-owned form content.
//!
//! DESIGN
//! ======
//! The shell never reads field values. It suppresses the browser's default
//! form navigation and turns one submit gesture into at most one `on_submit`
//! call. `is_submitting` belongs to the parent; a submit that arrives while
//! it is set is dropped, not queued.

#[cfg(test)]
#[path = "form_shell_test.rs"]
mod form_shell_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::spinner::{Spinner, SpinnerSize};
use crate::state::labels::use_labels;
use crate::util::gesture::{GestureOutcome, dispatch};
use crate::util::text::non_blank;

/// Interaction flags for one render or gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormInteractionState {
    pub is_submitting: bool,
    pub submit_disabled: bool,
    pub show_cancel: bool,
    pub has_submit: bool,
    pub has_cancel: bool,
}

impl Default for FormInteractionState {
    fn default() -> Self {
        Self {
            is_submitting: false,
            submit_disabled: false,
            show_cancel: true,
            has_submit: false,
            has_cancel: false,
        }
    }
}

impl FormInteractionState {
    /// Submit button is non-interactive.
    pub fn submit_locked(self) -> bool {
        self.is_submitting || self.submit_disabled
    }

    pub fn shows_cancel(self) -> bool {
        self.has_cancel && self.show_cancel
    }

    /// Footer exists only when the parent listens for at least one action.
    pub fn shows_footer(self) -> bool {
        self.has_submit || self.has_cancel
    }

    pub fn submit_label<'a>(self, idle: &'a str, working: &'a str) -> &'a str {
        if self.is_submitting { working } else { idle }
    }

    /// Route one submit gesture. Dropped while a submission is in flight.
    pub fn submit<F: FnOnce()>(self, handler: Option<F>) -> GestureOutcome {
        dispatch(self.is_submitting, handler)
    }

    pub fn cancel<F: FnOnce()>(self, handler: Option<F>) -> GestureOutcome {
        if !self.shows_cancel() {
            return GestureOutcome::Unhandled;
        }
        dispatch(false, handler)
    }
}

/// Header text, present only when at least one line has content.
pub fn form_header(title: Option<String>, subtitle: Option<String>) -> Option<(Option<String>, Option<String>)> {
    let title = non_blank(title);
    let subtitle = non_blank(subtitle);
    (title.is_some() || subtitle.is_some()).then_some((title, subtitle))
}

/// Form frame with optional header and submit/cancel footer.
#[component]
pub fn FormShell(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] on_submit: Option<Callback<()>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    /// Idle submit label. Defaults to the localized "Save".
    #[prop(optional, into)]
    submit_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(into, default = Signal::stored(false))] is_submitting: Signal<bool>,
    #[prop(default = true)] show_cancel: bool,
    #[prop(into, default = Signal::stored(false))] submit_disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let labels = use_labels();
    let submit_label = submit_label.unwrap_or(labels.save);
    let cancel_label = cancel_label.unwrap_or(labels.cancel);
    let working_label = labels.working;

    let interaction = move || FormInteractionState {
        is_submitting: is_submitting.get(),
        submit_disabled: submit_disabled.get(),
        show_cancel,
        has_submit: on_submit.is_some(),
        has_cancel: on_cancel.is_some(),
    };
    let frame = untrack(interaction);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        untrack(interaction).submit(on_submit.map(|cb| move || cb.run(())));
    };

    let header = form_header(title, subtitle).map(|(title, subtitle)| {
        view! {
            <header class="form-shell__header">
                {title.map(|text| view! { <h2 class="form-shell__title">{text}</h2> })}
                {subtitle.map(|text| view! { <p class="form-shell__subtitle">{text}</p> })}
            </header>
        }
    });

    let footer = frame.shows_footer().then(move || {
        let cancel_button = frame.shows_cancel().then(move || {
            view! {
                <button
                    type="button"
                    class="btn btn--secondary form-shell__cancel"
                    on:click=move |_| {
                        untrack(interaction).cancel(on_cancel.map(|cb| move || cb.run(())));
                    }
                >
                    <Icon kind=IconKind::Close/>
                    <span>{cancel_label}</span>
                </button>
            }
        });

        view! {
            <footer class="form-shell__footer">
                {cancel_button}
                <button
                    type="submit"
                    class="btn btn--primary form-shell__submit"
                    disabled=move || interaction().submit_locked()
                    aria-busy=move || if is_submitting.get() { "true" } else { "false" }
                >
                    {move || {
                        if is_submitting.get() {
                            view! { <Spinner size=SpinnerSize::Small/> }.into_any()
                        } else {
                            view! { <Icon kind=IconKind::Save/> }.into_any()
                        }
                    }}
                    <span>{move || interaction().submit_label(&submit_label, &working_label).to_owned()}</span>
                </button>
            </footer>
        }
    });

    view! {
        <form class="form-shell" on:submit=on_form_submit>
            {header}
            <div class="form-shell__body">{children()}</div>
            {footer}
        </form>
    }
}
