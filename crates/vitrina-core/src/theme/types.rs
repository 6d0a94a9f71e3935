//! Typed shape of a merchant's storefront theme document.
//!
//! Every struct here is the *output* of normalization: all required fields
//! are populated and enum-typed fields hold a declared member. JSON field
//! names are camelCase to match the persisted `theme_config` column.

use serde::{Deserialize, Serialize};

/// A closed set of string values a theme field may take.
///
/// Implemented by every enum in the schema so the enum coercer can check
/// membership without knowing the concrete type.
pub trait SchemaEnum: Sized + Copy + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The wire spelling of this member.
    fn as_str(self) -> &'static str;

    /// Looks up the member spelled exactly `s` (case-sensitive).
    #[must_use]
    fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == s)
    }
}

macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl SchemaEnum for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

schema_enum! {
    /// Social network a header link points at.
    Platform {
        Whatsapp => "whatsapp",
        Telegram => "telegram",
        Instagram => "instagram",
        X => "x",
        Twitter => "twitter",
        Facebook => "facebook",
        Threads => "threads",
        Tiktok => "tiktok",
        Youtube => "youtube",
        Linkedin => "linkedin",
        Website => "website",
        Email => "email",
        Other => "other",
    }
}

schema_enum! {
    /// Corner rounding of a social link badge.
    BorderRadius {
        Full => "full",
        Lg => "lg",
        Md => "md",
        None => "none",
    }
}

schema_enum! {
    /// Shape of the "add to cart" button on product cards.
    ButtonShape {
        Circle => "circle",
        Rounded => "rounded",
        Square => "square",
    }
}

schema_enum! {
    /// How `global.backgroundValue` is interpreted.
    BackgroundType {
        Solid => "solid",
        Image => "image",
        Gradient => "gradient",
    }
}

schema_enum! {
    AvatarShape {
        Circle => "circle",
        Rounded => "rounded",
        Square => "square",
        None => "none",
    }
}

schema_enum! {
    TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

schema_enum! {
    /// Placement of the cart button that hands the order off to WhatsApp.
    CartButtonStyle {
        Floating => "floating",
        Fixed => "fixed",
    }
}

/// Either a size token (`"sm"`, `"2xl"`) or a pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Px(f64),
    Token(String),
}

impl FontSize {
    #[must_use]
    pub fn token(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub color: String,
    pub font_size: FontSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStyle {
    pub background_color: String,
    pub icon_color: String,
    pub border_radius: BorderRadius,
}

/// One entry in the storefront header's link row. Order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub style: LinkStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub bio: TextStyle,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTitleStyle {
    pub color: String,
    pub font_family: String,
    /// `"normal"`, `"bold"` or `"black"`; kept free-form.
    pub font_weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceStyle {
    pub color: String,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySelectorStyle {
    pub bg_color: String,
    pub text_color: String,
    pub border_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddButtonStyle {
    pub bg_color: String,
    pub icon_color: String,
    pub shape: ButtonShape,
}

/// Pre-`productTitle` card typography, still read by older storefront pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProductName {
    pub font_family: String,
    pub color: String,
}

/// Pre-`addButton` card button colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyButton {
    pub bg: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cards {
    pub background: String,
    pub border: bool,
    /// Card corner radius in pixels.
    pub corner_radius: f64,
    pub product_title: ProductTitleStyle,
    pub product_price: ProductPriceStyle,
    pub quantity_selector: QuantitySelectorStyle,
    pub add_button: AddButtonStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<LegacyProductName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<LegacyButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyle {
    pub background_type: BackgroundType,
    /// Hex color, image URL or CSS gradient depending on `background_type`.
    pub background_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSettings {
    /// Destination number for the WhatsApp order handoff; empty when unset.
    pub whatsapp_number: String,
    pub currency: String,
    pub show_quantity_selector: bool,
    pub cart_button_text: String,
    pub button_style: CartButtonStyle,
}

/// Merchant identity block rendered above the header links.
///
/// Text fields use the empty string for "not set"; the storefront fills them
/// from the profile row (see [`crate::ProfileRecord::storefront_theme`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStyle {
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub shop_name: String,
    pub avatar_shape: AvatarShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_style: Option<TextStyle>,
}

/// The single persisted theme document of a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub header: Header,
    pub cards: Cards,
    pub global: GlobalStyle,
    pub checkout: CheckoutSettings,
    pub profile: ProfileStyle,
}
