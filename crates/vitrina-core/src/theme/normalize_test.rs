use serde_json::{json, Value};

use super::*;
use crate::theme::ids::SequentialIds;
use crate::theme::types::{
    AvatarShape, BackgroundType, BorderRadius, CartButtonStyle, FontSize, Platform, SchemaEnum,
    TextAlign,
};

fn run(raw: &Value) -> ThemeConfig {
    normalize(raw, &DEFAULT_THEME, &mut SequentialIds::new("gen"))
}

fn assert_enums_contained(theme: &ThemeConfig) {
    fn member<T: SchemaEnum + PartialEq>(value: T) {
        assert!(T::ALL.contains(&value));
    }
    member(theme.cards.add_button.shape);
    member(theme.global.background_type);
    member(theme.profile.avatar_shape);
    member(theme.checkout.button_style);
    for link in &theme.header.social_links {
        member(link.platform);
        member(link.style.border_radius);
    }
    let profile_styles = [&theme.profile.title_style, &theme.profile.bio_style];
    for style in [&theme.header.title, &theme.header.subtitle, &theme.header.bio]
        .into_iter()
        .chain(profile_styles.into_iter().flatten())
    {
        if let Some(align) = style.align {
            member(align);
        }
    }
}

// -----------------------------------------------------------------------
// Totality
// -----------------------------------------------------------------------

#[test]
fn non_object_inputs_yield_defaults() {
    for raw in [
        Value::Null,
        json!("theme"),
        json!(3.5),
        json!(true),
        json!([1, 2, 3]),
    ] {
        assert_eq!(run(&raw), *DEFAULT_THEME, "input: {raw}");
    }
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(run(&json!({})), *DEFAULT_THEME);
}

#[test]
fn wrong_typed_leaves_fall_back_individually() {
    let raw = json!({
        "header": {
            "title": { "fontFamily": 7, "color": "#abcdef", "fontSize": [], "bold": "yes" },
            "subtitle": "not an object",
            "bio": { "color": "" },
        },
        "cards": { "border": "false", "background": null, "cornerRadius": "16" },
        "global": { "backgroundType": 1, "backgroundValue": {} },
        "checkout": { "showQuantitySelector": 0, "currency": "USD" },
    });
    let theme = run(&raw);

    assert_eq!(theme.header.title.font_family, "Inter");
    assert_eq!(theme.header.title.color, "#abcdef");
    assert_eq!(theme.header.title.font_size, FontSize::token("2xl"));
    assert_eq!(theme.header.title.bold, Some(true));
    assert_eq!(theme.header.subtitle, DEFAULT_THEME.header.subtitle);
    assert_eq!(theme.header.bio.color, "#666666");
    assert!(theme.cards.border);
    assert_eq!(theme.cards.background, "#ffffff");
    assert!((theme.cards.corner_radius - 12.0).abs() < f64::EPSILON);
    assert_eq!(theme.global, DEFAULT_THEME.global);
    assert!(theme.checkout.show_quantity_selector);
    assert_eq!(theme.checkout.currency, "USD");
    assert_enums_contained(&theme);
}

#[test]
fn fully_valid_document_is_preserved() {
    let raw = json!({
        "header": {
            "title": { "fontFamily": "Lobster", "color": "#111111", "fontSize": 32.5, "bold": false, "italic": true, "align": "center" },
            "subtitle": { "fontFamily": "Lato", "color": "#222222", "fontSize": "xl", "bold": true },
            "bio": { "fontFamily": "Lato", "color": "#333333", "fontSize": "base", "align": "left" },
            "socialLinks": [
                { "id": "ig", "platform": "instagram", "url": "https://ig.co/a", "active": false,
                  "label": "IG", "color": "#e1306c",
                  "style": { "backgroundColor": "#ffffff", "iconColor": "#000000", "borderRadius": "md" } }
            ]
        },
        "cards": {
            "background": "#fafafa", "border": false, "cornerRadius": 4.5,
            "productTitle": { "color": "#010101", "fontFamily": "Poppins", "fontWeight": "black" },
            "productPrice": { "color": "#020202", "fontFamily": "Poppins" },
            "quantitySelector": { "bgColor": "#eeeeee", "textColor": "#030303", "borderColor": "#040404" },
            "addButton": { "bgColor": "#050505", "iconColor": "#060606", "shape": "square" }
        },
        "global": { "backgroundType": "gradient", "backgroundValue": "linear-gradient(#000, #fff)" },
        "checkout": { "whatsappNumber": "5215512345678", "currency": "USD", "showQuantitySelector": false,
                      "cartButtonText": "Pedir", "buttonStyle": "fixed" },
        "profile": { "displayName": "Ana", "bio": "Dulces", "avatarUrl": "https://cdn/a.png",
                     "shopName": "Dulces Ana", "avatarShape": "none", "avatarBorderColor": "#ff0000" }
    });
    let theme = run(&raw);

    assert_eq!(theme.header.title.font_size, FontSize::Px(32.5));
    assert_eq!(theme.header.title.bold, Some(false));
    assert_eq!(theme.header.title.italic, Some(true));
    assert_eq!(theme.header.title.align, Some(TextAlign::Center));
    assert_eq!(theme.header.social_links.len(), 1);
    assert_eq!(theme.header.social_links[0].id, "ig");
    assert!(!theme.header.social_links[0].active);
    assert_eq!(theme.header.social_links[0].style.border_radius, BorderRadius::Md);
    assert!(!theme.cards.border);
    assert_eq!(theme.cards.add_button.shape, ButtonShape::Square);
    assert_eq!(theme.global.background_type, BackgroundType::Gradient);
    assert_eq!(theme.checkout.button_style, CartButtonStyle::Fixed);
    assert_eq!(theme.profile.avatar_shape, AvatarShape::None);
    assert_eq!(theme.profile.avatar_border_color.as_deref(), Some("#ff0000"));

    // The typed output serializes back to exactly the input document.
    assert_eq!(serde_json::to_value(&theme).unwrap(), raw);
}

// -----------------------------------------------------------------------
// Array guarantee and links
// -----------------------------------------------------------------------

#[test]
fn garbage_social_links_become_empty_array() {
    for garbage in [json!("garbage"), json!({ "not": "array" }), json!(12)] {
        let theme = run(&json!({ "header": { "socialLinks": garbage } }));
        assert!(theme.header.social_links.is_empty());
    }
}

#[test]
fn root_social_links_scenario() {
    let raw = json!({ "socialLinks": [{ "platform": "instagram", "url": "http://ig.co/a" }] });
    let theme = run(&raw);

    assert_eq!(theme.header.social_links.len(), 1);
    let link = &theme.header.social_links[0];
    assert_eq!(link.id, "gen-1");
    assert_eq!(link.platform, Platform::Instagram);
    assert!(link.active);
    assert_eq!(link.style.border_radius, BorderRadius::Full);
}

// -----------------------------------------------------------------------
// Enum fallback
// -----------------------------------------------------------------------

#[test]
fn invalid_add_button_shape_falls_back_to_default() {
    let theme = run(&json!({ "cards": { "addButton": { "shape": "hexagon" } } }));
    assert_eq!(theme.cards.add_button.shape, DEFAULT_THEME.cards.add_button.shape);
}

#[test]
fn foreign_enum_values_never_propagate() {
    let raw = json!({
        "header": { "title": { "align": "justify" } },
        "global": { "backgroundType": "video" },
        "checkout": { "buttonStyle": "sticky" },
        "profile": { "avatarShape": "hexagon" },
    });
    let theme = run(&raw);
    assert_eq!(theme.header.title.align, None);
    assert_eq!(theme.global.background_type, BackgroundType::Solid);
    assert_eq!(theme.checkout.button_style, CartButtonStyle::Floating);
    assert_eq!(theme.profile.avatar_shape, AvatarShape::Circle);
}

#[test]
fn legacy_btn_shape_is_used_when_add_button_shape_is_invalid() {
    let theme = run(&json!({ "btn_shape": "rounded", "cards": {} }));
    assert_eq!(theme.cards.add_button.shape, ButtonShape::Rounded);

    let theme = run(&json!({ "cards": { "btn_shape": "square", "addButton": { "shape": "bad" } } }));
    assert_eq!(theme.cards.add_button.shape, ButtonShape::Square);

    let theme = run(&json!({ "btn_shape": "square", "cards": { "addButton": { "shape": "rounded" } } }));
    assert_eq!(theme.cards.add_button.shape, ButtonShape::Rounded);

    let theme = run(&json!({ "btn_shape": "blob", "cards": {} }));
    assert_eq!(theme.cards.add_button.shape, ButtonShape::Circle);
}

// -----------------------------------------------------------------------
// Optional sections
// -----------------------------------------------------------------------

#[test]
fn optional_sections_absent_stay_absent() {
    let theme = run(&json!({ "cards": { "button": "x" }, "profile": { "titleStyle": null } }));
    assert!(theme.cards.product_name.is_none());
    assert!(theme.cards.button.is_none());
    assert!(theme.profile.title_style.is_none());
    assert!(theme.profile.bio_style.is_none());
}

#[test]
fn optional_sections_present_are_filled_from_base() {
    let raw = json!({
        "cards": { "productName": {}, "button": { "bg": "#123123" } },
        "profile": { "titleStyle": { "color": "#ababab" }, "bioStyle": {} },
    });
    let theme = run(&raw);
    assert_eq!(theme.cards.product_name, Some(LegacyProductName::default()));
    let button = theme.cards.button.expect("button section");
    assert_eq!(button.bg, "#123123");
    assert_eq!(button.text, "#ffffff");
    let title = theme.profile.title_style.expect("title style");
    assert_eq!(title.color, "#ababab");
    assert_eq!(title.font_family, DEFAULT_THEME.header.title.font_family);
    assert_eq!(theme.profile.bio_style, Some(DEFAULT_THEME.header.bio.clone()));
}

// -----------------------------------------------------------------------
// Idempotence and purity
// -----------------------------------------------------------------------

#[test]
fn normalizing_twice_is_stable_once_ids_exist() {
    let raw = json!({
        "header": {
            "title": { "color": 5 },
            "socialLinks": [{ "platform": "x" }, "junk", { "id": "keep", "platform": "nope" }]
        },
        "cards": { "productName": { "color": "#999999" } },
        "profile": { "bioStyle": { "align": "right" } },
        "btn_shape": "square",
    });
    let once = run(&raw);
    let reserialized = serde_json::to_value(&once).unwrap();
    let twice = normalize(&reserialized, &DEFAULT_THEME, &mut SequentialIds::new("other"));
    assert_eq!(once, twice);
}

#[test]
fn normalizing_a_design_layout_twice_is_stable() {
    let raw = json!({
        "colors": { "background": "#0a0a0a", "text": 12, "primary": "#ff5500" },
        "fonts": { "heading": "Bebas Neue" },
        "profile": { "titleStyle": { "align": "center" }, "bioStyle": { "align": "justify" } },
        "socialLinks": [{ "platform": "tiktok" }, 3],
        "backgroundImage": "https://cdn.example.com/bg.png",
        "btn_shape": "rounded",
    });
    let once = run(&raw);
    assert_enums_contained(&once);
    let reserialized = serde_json::to_value(&once).unwrap();
    let twice = normalize(&reserialized, &DEFAULT_THEME, &mut SequentialIds::new("other"));
    assert_eq!(once, twice);
}

#[test]
fn root_btn_shape_applies_with_or_without_design_keys() {
    for raw in [
        json!({ "btn_shape": "square" }),
        json!({ "btn_shape": "square", "profile": { "displayName": "Ana" } }),
        json!({ "btn_shape": "square", "socialLinks": [] }),
    ] {
        assert_eq!(run(&raw).cards.add_button.shape, ButtonShape::Square, "input: {raw}");
    }
}

#[test]
fn profile_styles_start_from_caller_header_defaults() {
    let mut defaults = ThemeConfig::default();
    defaults.header.title.font_family = "Lobster".to_string();
    defaults.header.bio.color = "#123456".to_string();
    let raw = json!({ "profile": { "titleStyle": {}, "bioStyle": { "bold": true } } });
    let theme = normalize(&raw, &defaults, &mut SequentialIds::new("gen"));

    let title = theme.profile.title_style.expect("title style");
    assert_eq!(title.font_family, "Lobster");
    let bio = theme.profile.bio_style.expect("bio style");
    assert_eq!(bio.color, "#123456");
    assert_eq!(bio.bold, Some(true));
}

#[test]
fn same_input_same_output_with_deterministic_ids() {
    let raw = json!({ "header": { "socialLinks": [{}, {}] }, "global": { "backgroundValue": "#000" } });
    assert_eq!(run(&raw), run(&raw));
}

#[test]
fn custom_defaults_drive_fallbacks() {
    let defaults = ThemeConfig::default().with_default_currency("COP");
    let theme = normalize(&json!({ "checkout": { "currency": "" } }), &defaults, &mut UuidIds);
    assert_eq!(theme.checkout.currency, "COP");
}

#[test]
fn social_links_missing_keep_default_links() {
    let mut defaults = ThemeConfig::default();
    defaults.header.social_links = sanitize_links_for_test();
    let theme = normalize(&json!({ "header": {} }), &defaults, &mut UuidIds);
    assert_eq!(theme.header.social_links, defaults.header.social_links);
}

fn sanitize_links_for_test() -> Vec<crate::theme::types::SocialLink> {
    crate::theme::sanitize_links(
        &json!([{ "id": "site", "url": "https://example.com" }]),
        &mut SequentialIds::new("d"),
    )
}

// -----------------------------------------------------------------------
// Legacy design layout
// -----------------------------------------------------------------------

#[test]
fn design_layout_is_adapted_into_theme() {
    let raw = json!({
        "colors": { "background": "#0a0a0a", "text": "#f0f0f0", "cardBackground": "#1a1a1a", "primary": "#ff5500" },
        "fonts": { "heading": "Bebas Neue", "body": "Karla" },
        "profile": { "displayName": "Tienda Sol", "avatarShape": "rounded" },
        "socialLinks": [{ "id": "wa", "platform": "whatsapp", "url": "https://wa.me/1", "label": "WhatsApp" }],
        "checkout": { "whatsappNumber": "5215500000000", "buttonStyle": "fixed" },
        "cardStyle": { "borderRadius": 20, "buttonTextColor": "#000000", "priceColor": "#00aa00" },
    });
    let theme = run(&raw);

    assert_eq!(theme.global.background_type, BackgroundType::Solid);
    assert_eq!(theme.global.background_value, "#0a0a0a");
    assert_eq!(theme.header.title.color, "#f0f0f0");
    assert_eq!(theme.header.title.font_family, "Bebas Neue");
    assert_eq!(theme.header.bio.font_family, "Karla");
    assert_eq!(theme.cards.background, "#1a1a1a");
    assert!((theme.cards.corner_radius - 20.0).abs() < f64::EPSILON);
    assert_eq!(theme.cards.add_button.bg_color, "#ff5500");
    assert_eq!(theme.cards.add_button.icon_color, "#000000");
    assert_eq!(theme.cards.product_price.color, "#00aa00");
    assert_eq!(theme.profile.display_name, "Tienda Sol");
    assert_eq!(theme.profile.avatar_shape, AvatarShape::Rounded);
    assert_eq!(theme.checkout.whatsapp_number, "5215500000000");
    assert_eq!(theme.checkout.button_style, CartButtonStyle::Fixed);
    assert_eq!(theme.header.social_links[0].label.as_deref(), Some("WhatsApp"));
    assert_enums_contained(&theme);
}

#[test]
fn design_layout_with_non_array_links_keeps_the_rest() {
    let raw = json!({ "socialLinks": "broken", "colors": { "background": "#123456" } });
    let theme = run(&raw);
    assert!(theme.header.social_links.is_empty());
    assert_eq!(theme.global.background_value, "#123456");
}
