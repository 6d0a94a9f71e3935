//! The fallback table every normalized field is merged against.

use std::sync::LazyLock;

use super::types::{
    AddButtonStyle, AvatarShape, BackgroundType, BorderRadius, ButtonShape, Cards,
    CartButtonStyle, CheckoutSettings, FontSize, GlobalStyle, Header, LegacyButton,
    LegacyProductName, LinkStyle, Platform, ProductPriceStyle, ProductTitleStyle, ProfileStyle,
    QuantitySelectorStyle, TextStyle, ThemeConfig,
};

/// Shared instance of [`ThemeConfig::default`].
pub static DEFAULT_THEME: LazyLock<ThemeConfig> = LazyLock::new(ThemeConfig::default);

/// Link URL used when a saved link has none.
pub const DEFAULT_LINK_URL: &str = "#";
pub const DEFAULT_LINK_PLATFORM: Platform = Platform::Website;

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header: Header {
                title: TextStyle {
                    font_family: "Inter".to_string(),
                    color: "#000000".to_string(),
                    font_size: FontSize::token("2xl"),
                    bold: Some(true),
                    italic: None,
                    align: None,
                },
                subtitle: TextStyle {
                    font_family: "Inter".to_string(),
                    color: "#666666".to_string(),
                    font_size: FontSize::token("lg"),
                    bold: Some(false),
                    italic: None,
                    align: None,
                },
                bio: TextStyle {
                    font_family: "Roboto".to_string(),
                    color: "#666666".to_string(),
                    font_size: FontSize::token("sm"),
                    bold: None,
                    italic: None,
                    align: None,
                },
                social_links: Vec::new(),
            },
            cards: Cards {
                background: "#ffffff".to_string(),
                border: true,
                corner_radius: 12.0,
                product_title: ProductTitleStyle {
                    color: "#000000".to_string(),
                    font_family: "Inter".to_string(),
                    font_weight: "bold".to_string(),
                },
                product_price: ProductPriceStyle {
                    color: "#000000".to_string(),
                    font_family: "Inter".to_string(),
                },
                quantity_selector: QuantitySelectorStyle {
                    bg_color: "#f3f4f6".to_string(),
                    text_color: "#111827".to_string(),
                    border_color: "transparent".to_string(),
                },
                add_button: AddButtonStyle {
                    bg_color: "#000000".to_string(),
                    icon_color: "#ffffff".to_string(),
                    shape: ButtonShape::Circle,
                },
                product_name: None,
                button: None,
            },
            global: GlobalStyle {
                background_type: BackgroundType::Solid,
                background_value: "#f3f4f6".to_string(),
            },
            checkout: CheckoutSettings {
                whatsapp_number: String::new(),
                currency: "MXN".to_string(),
                show_quantity_selector: true,
                cart_button_text: "Enviar Pedido".to_string(),
                button_style: CartButtonStyle::Floating,
            },
            profile: ProfileStyle {
                display_name: String::new(),
                bio: String::new(),
                avatar_url: String::new(),
                shop_name: String::new(),
                avatar_shape: AvatarShape::Circle,
                avatar_border_color: None,
                title_style: None,
                bio_style: None,
            },
        }
    }
}

impl ThemeConfig {
    /// Returns a copy of this table whose checkout falls back to `currency`.
    #[must_use]
    pub fn with_default_currency(mut self, currency: &str) -> Self {
        currency.clone_into(&mut self.checkout.currency);
        self
    }
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_string(),
            icon_color: "#ffffff".to_string(),
            border_radius: BorderRadius::Full,
        }
    }
}

impl Default for LegacyProductName {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            color: "#000000".to_string(),
        }
    }
}

impl Default for LegacyButton {
    fn default() -> Self {
        Self {
            bg: "#000000".to_string(),
            text: "#ffffff".to_string(),
        }
    }
}
