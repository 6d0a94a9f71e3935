//! Storefront theme documents: schema, defaults and the normalizer that turns
//! whatever was saved into something the storefront can render.

pub mod coerce;
mod defaults;
mod design;
mod ids;
mod legacy;
mod links;
mod normalize;
pub mod raw;
mod save;
pub mod types;

pub use defaults::{DEFAULT_LINK_PLATFORM, DEFAULT_LINK_URL, DEFAULT_THEME};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use legacy::{bridge_legacy, is_empty_config, LegacyColumns};
pub use links::sanitize_links;
pub use normalize::{normalize, normalize_theme};
pub use raw::RawNode;
pub use save::{prepare_save, ThemeSave};
pub use types::{
    AddButtonStyle, AvatarShape, BackgroundType, BorderRadius, ButtonShape, Cards,
    CartButtonStyle, CheckoutSettings, FontSize, GlobalStyle, Header, LegacyButton,
    LegacyProductName, LinkStyle, Platform, ProductPriceStyle, ProductTitleStyle, ProfileStyle,
    QuantitySelectorStyle, SchemaEnum, SocialLink, TextAlign, TextStyle, ThemeConfig,
};
