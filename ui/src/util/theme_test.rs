use super::*;

// =============================================================
// Name resolution
// =============================================================

#[test]
fn from_name_resolves_known_themes() {
    assert_eq!(ColorTheme::from_name("blue"), ColorTheme::Blue);
    assert_eq!(ColorTheme::from_name("green"), ColorTheme::Green);
    assert_eq!(ColorTheme::from_name("yellow"), ColorTheme::Yellow);
    assert_eq!(ColorTheme::from_name("red"), ColorTheme::Red);
}

#[test]
fn from_name_ignores_case_and_whitespace() {
    assert_eq!(ColorTheme::from_name("  RED "), ColorTheme::Red);
    assert_eq!(ColorTheme::from_name("Green"), ColorTheme::Green);
}

#[test]
fn unknown_names_fall_back_to_blue() {
    for name in ["purple", "", "   ", "blue-ish", "#ff0000"] {
        assert_eq!(ColorTheme::from(name), ColorTheme::Blue, "name {name:?}");
    }
}

#[test]
fn default_theme_is_blue() {
    assert_eq!(ColorTheme::default(), ColorTheme::Blue);
}

#[test]
fn name_round_trips_through_from_name() {
    for theme in [ColorTheme::Blue, ColorTheme::Green, ColorTheme::Yellow, ColorTheme::Red] {
        assert_eq!(ColorTheme::from_name(theme.name()), theme);
    }
}

// =============================================================
// Palettes
// =============================================================

#[test]
fn unknown_theme_uses_exactly_the_blue_roles() {
    let palette = ColorTheme::from("magenta").palette();
    assert_eq!(palette, ColorTheme::Blue.palette());
    assert_eq!(palette.background, "tone-blue-surface");
    assert_eq!(palette.border, "tone-blue-border");
    assert_eq!(palette.icon, "tone-blue-icon");
    assert_eq!(palette.value, "tone-blue-value");
}

#[test]
fn palettes_are_distinct_per_theme() {
    let themes = [ColorTheme::Blue, ColorTheme::Green, ColorTheme::Yellow, ColorTheme::Red];
    for (i, a) in themes.iter().enumerate() {
        for (j, b) in themes.iter().enumerate() {
            if i != j {
                assert_ne!(a.palette(), b.palette());
            }
        }
    }
}

#[test]
fn palette_roles_carry_theme_name() {
    let palette = ColorTheme::Yellow.palette();
    for role in [palette.background, palette.border, palette.icon, palette.value] {
        assert!(role.starts_with("tone-yellow-"), "role {role}");
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn deserializes_known_and_unknown_names() {
    let red: ColorTheme = serde_json::from_str("\"red\"").unwrap();
    assert_eq!(red, ColorTheme::Red);
    let unknown: ColorTheme = serde_json::from_str("\"teal\"").unwrap();
    assert_eq!(unknown, ColorTheme::Blue);
}
