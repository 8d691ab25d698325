use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `ALBUM_PLAYER__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ALBUM_PLAYER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let l = &self.layout;
        let sizes = [
            ("layout.artwork_width", l.artwork_width),
            ("layout.artwork_height", l.artwork_height),
            ("layout.album_spacing", l.album_spacing),
            ("layout.track_row_height", l.track_row_height),
            ("layout.button_width", l.button_width),
            ("layout.button_height", l.button_height),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) {
                return Err(format!("{name} must be > 0 (got {value})"));
            }
        }
        if l.track_row_right <= l.track_row_left {
            return Err("layout.track_row_right must be greater than layout.track_row_left".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `ALBUM_PLAYER_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ALBUM_PLAYER_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/album-player/config.toml`
/// or `~/.config/album-player/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("album-player").join("config.toml"))
}
