use super::*;

const ALL_VARIANTS: [DisplayVariant; 3] = [DisplayVariant::Default, DisplayVariant::Minimal, DisplayVariant::Branded];

// =============================================================
// DisplayVariant
// =============================================================

#[test]
fn from_name_resolves_known_variants() {
    assert_eq!(DisplayVariant::from("default"), DisplayVariant::Default);
    assert_eq!(DisplayVariant::from("minimal"), DisplayVariant::Minimal);
    assert_eq!(DisplayVariant::from(" Branded "), DisplayVariant::Branded);
}

#[test]
fn unknown_variant_falls_back_to_default() {
    for name in ["fullscreen", "", "compact", "BRANDED!"] {
        assert_eq!(DisplayVariant::from(name), DisplayVariant::Default, "name {name:?}");
    }
}

#[test]
fn variant_deserializes_with_fallback() {
    let minimal: DisplayVariant = serde_json::from_str("\"minimal\"").unwrap();
    assert_eq!(minimal, DisplayVariant::Minimal);
    let unknown: DisplayVariant = serde_json::from_str("\"splash\"").unwrap();
    assert_eq!(unknown, DisplayVariant::Default);
}

// =============================================================
// Layouts
// =============================================================

#[test]
fn minimal_layout_is_compact_spinner_and_message() {
    let layout = DisplayVariant::Minimal.layout();
    assert!(!layout.full_screen);
    assert!(!layout.brand_mark);
    assert!(!layout.progress_bar);
}

#[test]
fn branded_layout_adds_brand_mark_to_full_screen() {
    let layout = DisplayVariant::Branded.layout();
    assert!(layout.full_screen);
    assert!(layout.brand_mark);
    assert!(layout.progress_bar);
}

#[test]
fn default_layout_has_progress_bar_without_brand() {
    let layout = DisplayVariant::Default.layout();
    assert!(layout.full_screen);
    assert!(!layout.brand_mark);
    assert!(layout.progress_bar);
}

#[test]
fn only_branded_variant_shows_brand_mark() {
    let branded: Vec<_> = ALL_VARIANTS.iter().filter(|v| v.layout().brand_mark).collect();
    assert_eq!(branded, vec![&DisplayVariant::Branded]);
}

// =============================================================
// Text resolution
// =============================================================

#[test]
fn message_defaults_to_localized_loading_phrase() {
    let labels = UiLabels::default();
    for variant in ALL_VARIANTS {
        let text = LoadingText::resolve(None, None, variant, &labels);
        assert_eq!(text.message, labels.loading);
    }
}

#[test]
fn message_uses_provided_labels() {
    let labels = UiLabels {
        loading: "Carregando...".to_owned(),
        ..UiLabels::default()
    };
    let text = LoadingText::resolve(None, None, DisplayVariant::Default, &labels);
    assert_eq!(text.message, "Carregando...");
}

#[test]
fn explicit_message_wins_over_default() {
    let text = LoadingText::resolve(
        Some("Fetching inspections".to_owned()),
        None,
        DisplayVariant::Minimal,
        &UiLabels::default(),
    );
    assert_eq!(text.message, "Fetching inspections");
}

#[test]
fn omitted_subtitle_is_never_rendered() {
    for variant in ALL_VARIANTS {
        let text = LoadingText::resolve(None, None, variant, &UiLabels::default());
        assert_eq!(text.subtitle, None);
        let blank = LoadingText::resolve(None, Some("  ".to_owned()), variant, &UiLabels::default());
        assert_eq!(blank.subtitle, None);
    }
}

#[test]
fn full_screen_variants_keep_subtitle() {
    for variant in [DisplayVariant::Default, DisplayVariant::Branded] {
        let text = LoadingText::resolve(None, Some("Syncing bay 2".to_owned()), variant, &UiLabels::default());
        assert_eq!(text.subtitle.as_deref(), Some("Syncing bay 2"));
    }
}

#[test]
fn minimal_variant_drops_subtitle() {
    let text = LoadingText::resolve(
        None,
        Some("Syncing bay 2".to_owned()),
        DisplayVariant::Minimal,
        &UiLabels::default(),
    );
    assert_eq!(text.subtitle, None);
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod markup {
    use leptos::prelude::*;

    use super::*;
    use crate::util::render::render_html;

    #[test]
    fn empty_subtitle_renders_no_subtitle_element() {
        for variant in ALL_VARIANTS {
            let html = render_html(move || view! { <LoadingIndicator variant=variant subtitle=""/> });
            assert!(!html.contains("loading-indicator__subtitle"), "{variant:?}: {html}");
        }
    }

    #[test]
    fn omitted_message_renders_loading_phrase() {
        let html = render_html(|| view! { <LoadingIndicator/> });
        assert!(html.contains(&UiLabels::default().loading), "{html}");
        assert!(html.contains("loading-indicator--default"), "{html}");
    }

    #[test]
    fn branded_renders_brand_mark_subtitle_and_progress() {
        let html = render_html(|| view! { <LoadingIndicator variant="branded" subtitle="Syncing bay 2"/> });
        assert!(html.contains("loading-indicator__brand-mark"), "{html}");
        assert!(html.contains("Syncing bay 2"), "{html}");
        assert!(html.contains("loading-indicator__bar"), "{html}");
    }

    #[test]
    fn minimal_renders_message_only() {
        let html = render_html(|| view! { <LoadingIndicator variant="minimal" message="Fetching"/> });
        assert!(html.contains("Fetching"), "{html}");
        assert!(!html.contains("loading-indicator__track"), "{html}");
        assert!(!html.contains("loading-indicator__brand"), "{html}");
    }

    #[test]
    fn unknown_variant_renders_default_layout() {
        let html = render_html(|| view! { <LoadingIndicator variant="splash"/> });
        assert!(html.contains("loading-indicator--default"), "{html}");
        assert!(!html.contains("loading-indicator__brand"), "{html}");
    }
}
