use std::path::PathBuf;

use serde::Deserialize;

use crate::types::Category;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Root directory served as static files; gallery folders live below it.
    pub public_dir: PathBuf,
    /// Media reference used by every placeholder cell.
    pub fallback_asset: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub columns: usize,
    /// Active column indices per row, top to bottom.
    pub rows: Vec<Vec<usize>>,
    pub flow_columns: usize,
    pub mobile_columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Periodic,
    Flow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    pub folder: String,
    pub base_path: String,
    pub extensions: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    pub accent_modulus: usize,
    pub ordinal_width: usize,
    pub label: String,
    pub template: TemplateKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleriesConfig {
    pub everydays: GalleryConfig,
    pub images: GalleryConfig,
    pub toys: GalleryConfig,
    pub reels: GalleryConfig,
}

impl GalleriesConfig {
    pub fn get(&self, category: Category) -> &GalleryConfig {
        match category {
            Category::Everydays => &self.everydays,
            Category::Images => &self.images,
            Category::Toys => &self.toys,
            Category::Reels => &self.reels,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub root_path: String,
    pub mobile_path: String,
    pub mobile_indicators: Vec<String>,
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
    pub site: SiteConfig,
    pub assets: AssetsConfig,
    pub layout: LayoutConfig,
    pub galleries: GalleriesConfig,
    pub device: DeviceConfig,
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
        // Optional local file: folio.toml (in CWD)
        .add_source(::config::File::with_name("folio").required(false));

    if let Ok(custom_path) = std::env::var("FOLIO_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("FOLIO").separator("__"));

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

    // Layout
    if cfg.layout.columns == 0 {
        return Err(anyhow::anyhow!("layout.columns must be > 0"));
    }
    for (row, cols) in cfg.layout.rows.iter().enumerate() {
        if let Some(bad) = cols.iter().find(|&&c| c >= cfg.layout.columns) {
            return Err(anyhow::anyhow!(
                "layout.rows[{}] references column {} outside 0..{}",
                row,
                bad,
                cfg.layout.columns
            ));
        }
    }
    if cfg.layout.flow_columns == 0 || cfg.layout.mobile_columns == 0 {
        return Err(anyhow::anyhow!("layout.flow_columns and layout.mobile_columns must be > 0"));
    }

    // Galleries
    for category in Category::ALL {
        let g = cfg.galleries.get(category);
        let section = format!("galleries.{}", category.slug());
        if g.extensions.is_empty() {
            return Err(anyhow::anyhow!("{}.extensions must not be empty", section));
        }
        if !g.base_path.starts_with('/') {
            return Err(anyhow::anyhow!("{}.base_path must start with '/': {}", section, g.base_path));
        }
        if g.folder.trim().is_empty() {
            return Err(anyhow::anyhow!("{}.folder must not be empty", section));
        }
        for pattern in &g.excludes {
            globset::Glob::new(pattern)
                .map_err(|e| anyhow::anyhow!("{}.excludes: invalid pattern {:?}: {}", section, pattern, e))?;
        }
    }

    // Device routing
    let device = &cfg.device;
    if !device.root_path.starts_with('/') || !device.mobile_path.starts_with('/') {
        return Err(anyhow::anyhow!("device.root_path and device.mobile_path must start with '/'"));
    }
    if device.root_path == device.mobile_path {
        return Err(anyhow::anyhow!("device.root_path and device.mobile_path must differ"));
    }
    for path in [&device.root_path, &device.mobile_path] {
        if crate::routes::RESERVED_PATHS.contains(&path.as_str()) || path.starts_with("/api/") {
            return Err(anyhow::anyhow!("device path {} collides with a built-in route", path));
        }
    }
    if device.mobile_indicators.iter().any(|s| s.trim().is_empty()) {
        return Err(anyhow::anyhow!("device.mobile_indicators must not contain empty entries"));
    }

    Ok(())
}
