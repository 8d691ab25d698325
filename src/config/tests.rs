use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets or removes an env var for the lifetime of the guard.
struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_env_var() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ALBUM_PLAYER_CONFIG_PATH", "/tmp/album-player-test.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/album-player-test.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("album-player")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("album-player")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_classic_layout() {
    let s = Settings::default();
    assert_eq!(s.library.catalog_path, PathBuf::from("albums.txt"));
    assert_eq!(s.library.buttons_dir, PathBuf::from("images").join("button"));
    assert_eq!(s.layout.origin_x, 50.0);
    assert_eq!(s.layout.album_spacing, 200.0);
    assert_eq!(s.layout.play_button_x, 375.0);
    assert_eq!(s.playback.skip_buttons, SkipButtons::Album);
    assert!(!s.playback.auto_advance);
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_degenerate_layout() {
    let mut s = Settings::default();
    s.layout.track_row_height = 0.0;
    assert!(s.validate().unwrap_err().contains("track_row_height"));

    let mut s = Settings::default();
    s.layout.track_row_right = s.layout.track_row_left;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
catalog_path = "/srv/music/albums.txt"
tracks_dir = "/srv/music/tracks"

[layout]
album_spacing = 180.0
button_y = 480.0

[playback]
skip_buttons = "tracks"
auto_advance = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ALBUM_PLAYER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ALBUM_PLAYER__PLAYBACK__AUTO_ADVANCE");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.catalog_path, PathBuf::from("/srv/music/albums.txt"));
    assert_eq!(s.library.tracks_dir, PathBuf::from("/srv/music/tracks"));
    assert_eq!(s.library.images_dir, PathBuf::from("images"));
    assert_eq!(s.layout.album_spacing, 180.0);
    assert_eq!(s.layout.button_y, 480.0);
    assert_eq!(s.layout.artwork_width, 100.0);
    assert_eq!(s.playback.skip_buttons, SkipButtons::Track);
    assert!(s.playback.auto_advance);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
auto_advance = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ALBUM_PLAYER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ALBUM_PLAYER__PLAYBACK__AUTO_ADVANCE", "false");

    let s = Settings::load().unwrap();
    assert!(!s.playback.auto_advance);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "ALBUM_PLAYER_CONFIG_PATH",
        dir.path().join("nope.toml").to_str().unwrap(),
    );

    let s = Settings::load().unwrap();
    assert_eq!(s.library.catalog_path, PathBuf::from("albums.txt"));
    assert_eq!(s.playback.skip_buttons, SkipButtons::Album);
}
