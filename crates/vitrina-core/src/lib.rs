pub mod app_config;
pub mod config;
pub mod fonts;
pub mod profile;
pub mod theme;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fonts::{google_fonts_url, is_google_font, used_fonts, GOOGLE_FONTS};
pub use profile::{
    repair_profile, repair_profile_with, LegacyColumns, ProfileRecord, DEFAULT_SHOP_NAME,
    DEFAULT_USERNAME, UNKNOWN_PROFILE_ID,
};
pub use theme::{
    bridge_legacy, normalize, normalize_theme, prepare_save, sanitize_links, IdSource,
    SequentialIds, ThemeConfig, ThemeSave, UuidIds, DEFAULT_THEME,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
