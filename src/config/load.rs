use std::{env, path::PathBuf};

use tracing::debug;

use super::schema::Settings;

impl Settings {
    /// Load settings from environment and optional config file.
    ///
    /// Environment variables use the prefix `MPDSONG__`; the file is looked up
    /// through [`resolve_config_path`] and may be missing.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();
        debug!(path = ?config_path, "loading settings");

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MPDSONG")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("display.fields")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.display.fields.is_empty() {
            return Err("display.fields must name at least one field".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `MPDSONG_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MPDSONG_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/mpdsong/config.toml`
/// or `~/.config/mpdsong/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("mpdsong").join("config.toml"))
}
