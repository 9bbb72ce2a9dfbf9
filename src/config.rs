use std::path::PathBuf;

use serde::Deserialize;

use crate::listing::format::{is_valid_datetime_format, DEFAULT_DATETIME_FORMAT};
use crate::listing::links::{validate_host, MirrorHost};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LinksConfig {
    /// Host for folder permalinks; first mirror when unset
    pub permalink_host: Option<String>,
    /// Site origin for raw-file permalinks; `https://{permalink host}` when unset
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    pub datetime_format: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { datetime_format: DEFAULT_DATETIME_FORMAT.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub protected_routes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct I18nConfig {
    /// JSON file mapping label keys to translations
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecurityConfig {
    pub enable_hsts: Option<bool>,
    pub hsts_max_age: Option<u64>,
    pub hsts_include_subdomains: Option<bool>,
    pub csp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mirrors: Vec<MirrorHost>,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    pub security: Option<SecurityConfig>,
}

const DEFAULTS: &str = include_str!("../config/default.toml");

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        match ::config::Config::builder()
            .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: wolkenliste.toml (in CWD)
        .add_source(::config::File::with_name("wolkenliste").required(false));

    if let Ok(custom_path) = std::env::var("WOLKENLISTE_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("WOLKENLISTE").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    // Server
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    // Mirrors
    if cfg.mirrors.is_empty() {
        return Err(anyhow::anyhow!("at least one mirror must be configured"));
    }
    for m in &cfg.mirrors {
        validate_host(&m.host).map_err(|e| anyhow::anyhow!("invalid mirror: {}", e))?;
        if m.label.trim().is_empty() {
            return Err(anyhow::anyhow!("mirror '{}' needs a label", m.host));
        }
    }
    if let Some(host) = &cfg.links.permalink_host {
        validate_host(host).map_err(|e| anyhow::anyhow!("invalid links.permalink_host: {}", e))?;
    }
    if let Some(base) = &cfg.links.base_url {
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(anyhow::anyhow!("links.base_url must start with http:// or https://"));
        }
    }

    // Listing
    if !is_valid_datetime_format(&cfg.listing.datetime_format) {
        return Err(anyhow::anyhow!("invalid listing.datetime_format: {:?}", cfg.listing.datetime_format));
    }

    // Auth
    if let Some(route) = cfg.auth.protected_routes.iter().find(|r| !r.starts_with('/')) {
        return Err(anyhow::anyhow!("protected route must start with '/': {}", route));
    }

    Ok(())
}
