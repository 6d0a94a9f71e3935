//! Web font discovery for a normalized theme.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::theme::coerce::is_non_blank;
use crate::theme::ThemeConfig;

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// Families offered by the design editor's font picker.
pub const GOOGLE_FONTS: &[&str] = &[
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Oswald",
    "Raleway",
    "Merriweather",
    "Nunito",
    "Playfair Display",
    "Rubik",
    "Poppins",
    "Lobster",
    "Pacifico",
    "Dancing Script",
    "Abril Fatface",
    "Bebas Neue",
    "Anton",
    "Gloria Hallelujah",
    "Indie Flower",
    "Titan One",
    "Inter",
    "Roboto Condensed",
    "Slabo 27px",
    "Source Sans Pro",
    "PT Sans",
    "Noto Sans",
    "Ubuntu",
    "Roboto Slab",
    "PT Serif",
    "Arimo",
    "Bitter",
    "Muli",
    "Dosis",
    "Josefin Sans",
    "Oxygen",
    "Cabin",
    "Inconsolata",
    "Fira Sans",
    "Crimson Text",
    "Asap",
    "Quicksand",
    "Karla",
    "Hind",
    "Barlow",
    "Maven Pro",
    "Vollkorn",
    "Bree Serif",
    "Comfortaa",
    "Exo 2",
    "Righteous",
    "Fredoka One",
    "Permanent Marker",
    "Shadows Into Light",
    "Amatic SC",
    "Cinzel",
    "Courgette",
    "Great Vibes",
    "Sacramento",
    "Satisfy",
    "Yellowtail",
];

#[must_use]
pub fn is_google_font(family: &str) -> bool {
    GOOGLE_FONTS.contains(&family)
}

/// Every font family the theme references, in first-seen order.
#[must_use]
pub fn used_fonts(theme: &ThemeConfig) -> Vec<String> {
    let header = &theme.header;
    let cards = &theme.cards;
    let profile = &theme.profile;

    let candidates = [
        Some(&header.title.font_family),
        Some(&header.subtitle.font_family),
        Some(&header.bio.font_family),
        Some(&cards.product_title.font_family),
        Some(&cards.product_price.font_family),
        cards.product_name.as_ref().map(|p| &p.font_family),
        profile.title_style.as_ref().map(|s| &s.font_family),
        profile.bio_style.as_ref().map(|s| &s.font_family),
    ];

    let mut fonts: Vec<String> = Vec::new();
    for family in candidates.into_iter().flatten() {
        let family = family.trim();
        if is_non_blank(family) && !fonts.iter().any(|f| f == family) {
            fonts.push(family.to_owned());
        }
    }
    fonts
}

/// One stylesheet URL loading regular and bold weights of `families`.
///
/// Returns `None` when `families` has no non-blank entry.
#[must_use]
pub fn google_fonts_url(families: &[String]) -> Option<String> {
    let params: Vec<String> = families
        .iter()
        .filter(|f| is_non_blank(f))
        .map(|family| format!("family={}:wght@400;700", encode_family(family)))
        .collect();

    if params.is_empty() {
        return None;
    }
    Some(format!(
        "{GOOGLE_FONTS_CSS}?{}&display=swap",
        params.join("&")
    ))
}

fn encode_family(family: &str) -> String {
    family
        .split_whitespace()
        .map(|word| utf8_percent_encode(word, NON_ALPHANUMERIC).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
