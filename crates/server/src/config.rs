use shared_types::AppConfig;
use std::sync::{LazyLock, OnceLock};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

static DEFAULT: LazyLock<AppConfig> = LazyLock::new(AppConfig::default);

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store the parsed configuration in the global
/// `OnceLock`. Safe to call multiple times — only the first call has effect.
///
/// If the file is missing or unparseable, every section falls back to its
/// defaults. Uses `eprintln!` because this runs before telemetry is up.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}) — using defaults");
            AppConfig::default()
        }
    });
}

/// Get the loaded configuration. Returns defaults if `load_config()` hasn't
/// been called yet (safe fallback).
pub fn config() -> &'static AppConfig {
    CONFIG.get().unwrap_or(&DEFAULT)
}
