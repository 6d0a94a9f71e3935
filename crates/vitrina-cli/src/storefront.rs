//! Storefront inspection against the live database.

use clap::Subcommand;
use uuid::Uuid;
use vitrina_core::ThemeConfig;
use vitrina_db::ProfileLookup;

/// Sub-commands available under `storefront`.
#[derive(Debug, Subcommand)]
pub enum StorefrontCommands {
    /// Print the repaired profile and safe theme of one storefront
    Show {
        /// Public storefront slug
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        slug: Option<String>,
        /// Profile id
        #[arg(long)]
        id: Option<Uuid>,
    },
}

impl StorefrontCommands {
    fn lookup(&self) -> Option<ProfileLookup> {
        match self {
            Self::Show { slug: Some(slug), .. } => Some(ProfileLookup::Slug(slug.clone())),
            Self::Show { id: Some(id), .. } => Some(ProfileLookup::Id(*id)),
            Self::Show { .. } => None,
        }
    }
}

pub(crate) async fn run_storefront(command: StorefrontCommands) -> anyhow::Result<()> {
    let lookup = command
        .lookup()
        .ok_or_else(|| anyhow::anyhow!("either --slug or --id is required"))?;

    let config = vitrina_core::load_app_config()?;
    let pool = vitrina_db::connect_pool(
        &config.database_url,
        vitrina_db::PoolConfig::from_app_config(&config),
    )
    .await?;
    let defaults = ThemeConfig::default().with_default_currency(&config.default_currency);

    let storefront = vitrina_db::get_safe_storefront(&pool, &lookup, &defaults).await?;
    if storefront.profile.is_none() {
        tracing::warn!(lookup = %lookup, "no profile found; showing default theme");
    }
    println!("{}", serde_json::to_string_pretty(&storefront)?);
    Ok(())
}
