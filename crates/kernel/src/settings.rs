use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "VITRINE_ENV";
const CONFIG_DIR_ENV: &str = "VITRINE_CONFIG_DIR";

/// Environment variables that carry the CMS endpoint, checked in order.
pub const CMS_URL_ENV_VARS: &[&str] = &["HYGRAPH_API_URL", "NEXT_PUBLIC_HYGRAPH_API_URL"];

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub cms: CmsSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `VITRINE_*` variables. `HYGRAPH_API_URL` wins over any file value.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("unable to resolve current directory")?
                .join("config"),
        };

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix("VITRINE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = parse_environment(&environment)?;

        if let Some(url) = cms_url_from_env() {
            settings.cms.api_url = Some(url);
        }

        Ok(settings)
    }
}

fn parse_environment(value: &str) -> anyhow::Result<Environment> {
    match value {
        "local" => Ok(Environment::Local),
        "staging" => Ok(Environment::Staging),
        "production" => Ok(Environment::Production),
        other => Err(anyhow!(
            "unsupported environment '{}'; expected local/staging/production",
            other
        )),
    }
}

fn cms_url_from_env() -> Option<String> {
    CMS_URL_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

/// Branding shown in the header, footer and page titles.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "StoreSettings::default_name")]
    pub name: String,
    #[serde(default = "StoreSettings::default_description")]
    pub description: String,
    #[serde(default = "StoreSettings::default_owner")]
    pub owner: String,
    #[serde(default)]
    pub developer_url: Option<String>,
}

impl StoreSettings {
    fn default_name() -> String {
        "Minha Loja".to_string()
    }

    fn default_description() -> String {
        "Um e-commerce moderno com catálogo servido por um CMS headless.".to_string()
    }

    fn default_owner() -> String {
        "OnTech".to_string()
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            description: Self::default_description(),
            owner: Self::default_owner(),
            developer_url: None,
        }
    }
}

/// Where catalog data comes from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    #[default]
    Hygraph,
    Fixture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsSettings {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub source: CatalogSourceKind,
    #[serde(default)]
    pub fixture_path: Option<String>,
    #[serde(default = "CmsSettings::default_page_size")]
    pub page_size: u32,
    #[serde(default = "CmsSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl CmsSettings {
    fn default_page_size() -> u32 {
        12
    }

    fn default_request_timeout_ms() -> u64 {
        10000
    }
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            api_url: None,
            auth_token: None,
            source: CatalogSourceKind::default(),
            fixture_path: None,
            page_size: Self::default_page_size(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

/// Stale times, in seconds. `categories_stale_secs = None` keeps categories
/// fresh for the lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "CacheSettings::default_products_stale_secs")]
    pub products_stale_secs: u64,
    #[serde(default = "CacheSettings::default_stale_secs")]
    pub product_stale_secs: u64,
    #[serde(default = "CacheSettings::default_stale_secs")]
    pub coupons_stale_secs: u64,
    #[serde(default)]
    pub categories_stale_secs: Option<u64>,
    #[serde(default = "CacheSettings::default_gc_secs")]
    pub gc_secs: u64,
    #[serde(default = "CacheSettings::default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl CacheSettings {
    fn default_stale_secs() -> u64 {
        300
    }

    fn default_products_stale_secs() -> u64 {
        60
    }

    fn default_gc_secs() -> u64 {
        600
    }

    fn default_sweep_interval_secs() -> u64 {
        60
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            products_stale_secs: Self::default_products_stale_secs(),
            product_stale_secs: Self::default_stale_secs(),
            coupons_stale_secs: Self::default_stale_secs(),
            categories_stale_secs: None,
            gc_secs: Self::default_gc_secs(),
            sweep_interval_secs: Self::default_sweep_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "SearchSettings::default_debounce_ms")]
    pub debounce_ms: u64,
}

impl SearchSettings {
    fn default_debounce_ms() -> u64 {
        500
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: Self::default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "info,tower_http=info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
