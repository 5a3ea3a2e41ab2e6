//! Component preview: stat grid, vehicle entry form and loading variants.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use leptos::prelude::*;

use crate::components::form_shell::FormShell;
use crate::components::icons::{Icon, IconKind};
use crate::components::loading_indicator::{DisplayVariant, LoadingIndicator};
use crate::components::stat_card::{StatCard, Trend};

const SIMULATED_SAVE_MS: u32 = 1200;
const SIMULATED_REFRESH_MS: u32 = 900;

/// Uppercase a plate and strip surrounding whitespace.
pub(crate) fn normalize_plate(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// A vehicle entry can be saved once plate and model are filled in.
pub(crate) fn entry_ready(plate: &str, model: &str) -> bool {
    !plate.trim().is_empty() && !model.trim().is_empty()
}

/// Parse an odometer reading, accepting thousands separators.
pub(crate) fn parse_odometer(raw: &str) -> Option<u32> {
    let digits: String = raw.trim().chars().filter(|c| *c != ',' && *c != '.').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Run `done` after `ms` in the browser; immediately elsewhere.
fn after_delay(ms: u32, done: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(ms, done).forget();
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        done();
    }
}

#[component]
pub fn PreviewPage() -> impl IntoView {
    let plate = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let odometer = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let saved = RwSignal::new(Vec::<String>::new());

    let stats_loading = RwSignal::new(false);
    let issue_views = RwSignal::new(0_u32);
    let variant = RwSignal::new(DisplayVariant::Default);

    let on_submit = Callback::new(move |()| {
        let entry = normalize_plate(&plate.get_untracked());
        submitting.set(true);
        after_delay(SIMULATED_SAVE_MS, move || {
            #[cfg(feature = "hydrate")]
            log::info!("saved vehicle entry {entry}");
            saved.update(|list| list.push(entry));
            plate.set(String::new());
            model.set(String::new());
            odometer.set(String::new());
            submitting.set(false);
        });
    });

    let on_cancel = Callback::new(move |()| {
        plate.set(String::new());
        model.set(String::new());
        odometer.set(String::new());
    });

    let on_refresh = move |_| {
        stats_loading.set(true);
        after_delay(SIMULATED_REFRESH_MS, move || stats_loading.set(false));
    };

    let saved_count = Signal::derive(move || saved.with(Vec::len));
    let incomplete = Signal::derive(move || !entry_ready(&plate.get(), &model.get()));
    let odometer_hint = move || match parse_odometer(&odometer.get()) {
        Some(km) => format!("{km} km"),
        None => String::new(),
    };

    view! {
        <main class="preview">
            <section class="preview__section">
                <header class="preview__section-header">
                    <h2>"Today"</h2>
                    <button class="btn btn--secondary" on:click=on_refresh>"Refresh"</button>
                </header>
                <div class="preview__stats">
                    <StatCard
                        title="Inspections"
                        value=12
                        subtitle="since 07:00"
                        trend=Trend::Up
                        trend_value="3"
                        icon=|| view! { <Icon kind=IconKind::Car/> }
                        loading=stats_loading
                    />
                    <StatCard
                        title="Approved"
                        value=9
                        color="green"
                        icon=|| view! { <Icon kind=IconKind::Check/> }
                        loading=stats_loading
                    />
                    <StatCard
                        title="Pending"
                        value=2
                        color="yellow"
                        trend=Trend::Flat
                        icon=|| view! { <Icon kind=IconKind::Clock/> }
                        loading=stats_loading
                    />
                    <StatCard
                        title="Open Issues"
                        value=7
                        color="red"
                        icon=|| view! { <Icon kind=IconKind::Alert/> }
                        on_activate=Callback::new(move |()| issue_views.update(|n| *n += 1))
                        loading=stats_loading
                    />
                    {move || {
                        view! {
                            <StatCard
                                title="Saved entries"
                                value=saved_count.get()
                                color="purple"
                                subtitle="unknown colors render blue"
                                loading=stats_loading
                            />
                        }
                    }}
                </div>
                <p class="preview__note">
                    {move || format!("Open issues viewed {} times, {} entries saved", issue_views.get(), saved_count.get())}
                </p>
            </section>

            <section class="preview__section">
                <FormShell
                    title="Vehicle Entry"
                    subtitle="Register a vehicle arriving for inspection"
                    on_submit=on_submit
                    on_cancel=on_cancel
                    is_submitting=submitting
                    submit_disabled=incomplete
                >
                    <label class="field">
                        <span class="field__label">"Plate"</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder="ABC1D23"
                            prop:value=move || plate.get()
                            on:input=move |ev| plate.set(normalize_plate(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Model"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || model.get()
                            on:input=move |ev| model.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Odometer"</span>
                        <input
                            class="field__input"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || odometer.get()
                            on:input=move |ev| odometer.set(event_target_value(&ev))
                        />
                        <span class="field__hint">{odometer_hint}</span>
                    </label>
                </FormShell>
                <ul class="preview__saved">
                    <For
                        each=move || saved.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        let:entry
                    >
                        <li>{entry.1}</li>
                    </For>
                </ul>
            </section>

            <section class="preview__section">
                <header class="preview__section-header">
                    <h2>"Loading states"</h2>
                    <div class="preview__variants">
                        {[DisplayVariant::Default, DisplayVariant::Minimal, DisplayVariant::Branded]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        class="btn btn--secondary"
                                        class:btn--active=move || variant.get() == option
                                        on:click=move |_| variant.set(option)
                                    >
                                        {option.name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </header>
                <div class="preview__frame">
                    {move || {
                        view! {
                            <LoadingIndicator
                                variant=variant.get()
                                subtitle="Fetching today's inspection queue"
                            />
                        }
                    }}
                </div>
            </section>
        </main>
    }
}
