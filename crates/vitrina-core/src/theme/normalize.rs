//! The schema walker.
//!
//! Each section of [`ThemeConfig`] implements [`Sanitize`], rebuilding itself
//! field by field from a [`RawNode`] and the matching default section. Struct
//! literals are used throughout so a field added to the schema cannot be
//! forgotten here.

use std::borrow::Cow;

use serde_json::Value;

use super::coerce;
use super::defaults::DEFAULT_THEME;
use super::design;
use super::ids::{IdSource, UuidIds};
use super::links::sanitize_link_node;
use super::raw::RawNode;
use super::types::{
    AddButtonStyle, ButtonShape, Cards, CheckoutSettings, GlobalStyle, Header, LegacyButton,
    LegacyProductName, ProductPriceStyle, ProductTitleStyle, ProfileStyle, QuantitySelectorStyle,
    TextStyle, ThemeConfig,
};

pub(crate) trait Sanitize: Sized {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, ids: &mut dyn IdSource) -> Self;
}

/// Normalizes any JSON value into a fully-populated [`ThemeConfig`].
///
/// Non-object input returns a copy of `defaults`. Documents in the older
/// `DesignConfig` layout are adapted first. Links without an id draw one
/// from `ids`; everything else is a pure function of `raw` and `defaults`.
pub fn normalize(raw: &Value, defaults: &ThemeConfig, ids: &mut dyn IdSource) -> ThemeConfig {
    let Some(object) = raw.as_object() else {
        if !raw.is_null() {
            tracing::warn!(
                kind = RawNode::new(raw).kind(),
                "theme config is not an object; using defaults"
            );
        }
        return defaults.clone();
    };

    if design::is_design_layout(object) {
        tracing::debug!("adapting legacy design config layout");
        let adapted = design::adapt(object);
        return ThemeConfig::sanitize(RawNode::new(&adapted), defaults, ids);
    }

    ThemeConfig::sanitize(RawNode::new(raw), defaults, ids)
}

/// [`normalize`] against [`DEFAULT_THEME`] with random link ids.
#[must_use]
pub fn normalize_theme(raw: &Value) -> ThemeConfig {
    normalize(raw, &DEFAULT_THEME, &mut UuidIds)
}

/// `Some` only when `raw` is an object; absent optional sections stay absent.
fn optional_section<T: Sanitize>(
    raw: RawNode<'_>,
    defaults: Option<&T>,
    base: &T,
    ids: &mut dyn IdSource,
) -> Option<T> {
    raw.is_object()
        .then(|| T::sanitize(raw, defaults.unwrap_or(base), ids))
}

/// A valid `btn_shape` saved by the old editor, at the root or under `cards`.
fn legacy_button_shape(raw: RawNode<'_>) -> Option<ButtonShape> {
    coerce::enum_member(raw.field("btn_shape"))
        .or_else(|| coerce::enum_member(raw.path(&["cards", "btn_shape"])))
}

impl Sanitize for ThemeConfig {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, ids: &mut dyn IdSource) -> Self {
        let card_defaults = match legacy_button_shape(raw) {
            Some(shape) if shape != defaults.cards.add_button.shape => {
                let mut cards = defaults.cards.clone();
                cards.add_button.shape = shape;
                Cow::Owned(cards)
            }
            _ => Cow::Borrowed(&defaults.cards),
        };

        Self {
            header: Header::sanitize(raw.field("header"), &defaults.header, ids),
            cards: Cards::sanitize(raw.field("cards"), &card_defaults, ids),
            global: GlobalStyle::sanitize(raw.field("global"), &defaults.global, ids),
            checkout: CheckoutSettings::sanitize(raw.field("checkout"), &defaults.checkout, ids),
            profile: sanitize_profile(raw.field("profile"), &defaults.profile, &defaults.header, ids),
        }
    }
}

impl Sanitize for TextStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            font_family: coerce::string(raw.field("fontFamily"), &defaults.font_family),
            color: coerce::string(raw.field("color"), &defaults.color),
            font_size: coerce::font_size(raw.field("fontSize"), &defaults.font_size),
            bold: coerce::optional_boolean(raw.field("bold"), defaults.bold),
            italic: coerce::optional_boolean(raw.field("italic"), defaults.italic),
            align: coerce::optional_enumeration(raw.field("align"), defaults.align),
        }
    }
}

impl Sanitize for Header {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, ids: &mut dyn IdSource) -> Self {
        let links = raw.field("socialLinks");
        let social_links = if links.is_present() {
            sanitize_link_node(links, ids)
        } else {
            defaults.social_links.clone()
        };

        Self {
            title: TextStyle::sanitize(raw.field("title"), &defaults.title, ids),
            subtitle: TextStyle::sanitize(raw.field("subtitle"), &defaults.subtitle, ids),
            bio: TextStyle::sanitize(raw.field("bio"), &defaults.bio, ids),
            social_links,
        }
    }
}

impl Sanitize for ProductTitleStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            color: coerce::string(raw.field("color"), &defaults.color),
            font_family: coerce::string(raw.field("fontFamily"), &defaults.font_family),
            font_weight: coerce::string(raw.field("fontWeight"), &defaults.font_weight),
        }
    }
}

impl Sanitize for ProductPriceStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            color: coerce::string(raw.field("color"), &defaults.color),
            font_family: coerce::string(raw.field("fontFamily"), &defaults.font_family),
        }
    }
}

impl Sanitize for QuantitySelectorStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            bg_color: coerce::string(raw.field("bgColor"), &defaults.bg_color),
            text_color: coerce::string(raw.field("textColor"), &defaults.text_color),
            border_color: coerce::string(raw.field("borderColor"), &defaults.border_color),
        }
    }
}

impl Sanitize for AddButtonStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            bg_color: coerce::string(raw.field("bgColor"), &defaults.bg_color),
            icon_color: coerce::string(raw.field("iconColor"), &defaults.icon_color),
            shape: coerce::enumeration(raw.field("shape"), defaults.shape),
        }
    }
}

impl Sanitize for LegacyProductName {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            font_family: coerce::string(raw.field("fontFamily"), &defaults.font_family),
            color: coerce::string(raw.field("color"), &defaults.color),
        }
    }
}

impl Sanitize for LegacyButton {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            bg: coerce::string(raw.field("bg"), &defaults.bg),
            text: coerce::string(raw.field("text"), &defaults.text),
        }
    }
}

impl Sanitize for Cards {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, ids: &mut dyn IdSource) -> Self {
        Self {
            background: coerce::string(raw.field("background"), &defaults.background),
            border: coerce::boolean(raw.field("border"), defaults.border),
            corner_radius: coerce::number(raw.field("cornerRadius"), defaults.corner_radius),
            product_title: ProductTitleStyle::sanitize(
                raw.field("productTitle"),
                &defaults.product_title,
                ids,
            ),
            product_price: ProductPriceStyle::sanitize(
                raw.field("productPrice"),
                &defaults.product_price,
                ids,
            ),
            quantity_selector: QuantitySelectorStyle::sanitize(
                raw.field("quantitySelector"),
                &defaults.quantity_selector,
                ids,
            ),
            add_button: AddButtonStyle::sanitize(raw.field("addButton"), &defaults.add_button, ids),
            product_name: optional_section(
                raw.field("productName"),
                defaults.product_name.as_ref(),
                &LegacyProductName::default(),
                ids,
            ),
            button: optional_section(
                raw.field("button"),
                defaults.button.as_ref(),
                &LegacyButton::default(),
                ids,
            ),
        }
    }
}

impl Sanitize for GlobalStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            background_type: coerce::enumeration(
                raw.field("backgroundType"),
                defaults.background_type,
            ),
            background_value: coerce::string(
                raw.field("backgroundValue"),
                &defaults.background_value,
            ),
        }
    }
}

impl Sanitize for CheckoutSettings {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            whatsapp_number: coerce::string(raw.field("whatsappNumber"), &defaults.whatsapp_number),
            currency: coerce::string(raw.field("currency"), &defaults.currency),
            show_quantity_selector: coerce::boolean(
                raw.field("showQuantitySelector"),
                defaults.show_quantity_selector,
            ),
            cart_button_text: coerce::string(
                raw.field("cartButtonText"),
                &defaults.cart_button_text,
            ),
            button_style: coerce::enumeration(raw.field("buttonStyle"), defaults.button_style),
        }
    }
}

/// `titleStyle` and `bioStyle` start from the header's title and bio styles.
fn sanitize_profile(
    raw: RawNode<'_>,
    defaults: &ProfileStyle,
    header: &Header,
    ids: &mut dyn IdSource,
) -> ProfileStyle {
    ProfileStyle {
        display_name: coerce::string(raw.field("displayName"), &defaults.display_name),
        bio: coerce::string(raw.field("bio"), &defaults.bio),
        avatar_url: coerce::string(raw.field("avatarUrl"), &defaults.avatar_url),
        shop_name: coerce::string(raw.field("shopName"), &defaults.shop_name),
        avatar_shape: coerce::enumeration(raw.field("avatarShape"), defaults.avatar_shape),
        avatar_border_color: coerce::optional_string(
            raw.field("avatarBorderColor"),
            defaults.avatar_border_color.as_deref(),
        ),
        title_style: optional_section(
            raw.field("titleStyle"),
            defaults.title_style.as_ref(),
            &header.title,
            ids,
        ),
        bio_style: optional_section(
            raw.field("bioStyle"),
            defaults.bio_style.as_ref(),
            &header.bio,
            ids,
        ),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
