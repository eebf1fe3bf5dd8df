use serde::{Deserialize, Serialize};

/// Top-level application configuration, parsed from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Branding applied to PDF exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_studio")]
    pub nombre_estudio: String,
    /// Accent color as a hex string.
    #[serde(default = "default_color")]
    pub color_primario: String,
    #[serde(default)]
    pub pie_pagina: Option<String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            nombre_estudio: default_studio(),
            color_primario: default_color(),
            pie_pagina: None,
        }
    }
}

fn default_studio() -> String {
    "FlowPenal".to_string()
}

fn default_color() -> String {
    "#F5C542".to_string()
}

/// Feature flags toggling optional routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Serve the interactive API docs at /docs.
    #[serde(default = "default_true")]
    pub docs: bool,
    /// Expose the PDF export endpoint.
    #[serde(default = "default_true")]
    pub pdf_export: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            docs: true,
            pdf_export: true,
        }
    }
}

fn default_true() -> bool {
    true
}
