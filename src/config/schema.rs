use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/album-player/config.toml` or
/// `~/.config/album-player/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ALBUM_PLAYER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub layout: LayoutSettings,
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// The line-oriented album catalog read at startup.
    pub catalog_path: PathBuf,
    /// Directory that artwork file names in the catalog are relative to.
    pub images_dir: PathBuf,
    /// Directory that track file names in the catalog are relative to.
    pub tracks_dir: PathBuf,
    /// Directory holding `playbtn.png`, `pausebtn.png`, `nextbtn.png` and `prevbtn.png`.
    pub buttons_dir: PathBuf,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("albums.txt"),
            images_dir: PathBuf::from("images"),
            tracks_dir: PathBuf::from("tracks"),
            buttons_dir: PathBuf::from("images").join("button"),
        }
    }
}

/// Screen geometry, in window points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub origin_x: f32,
    pub origin_y: f32,
    pub artwork_width: f32,
    pub artwork_height: f32,
    /// Horizontal distance between the left edges of two album slots.
    pub album_spacing: f32,
    /// Offset of the "title by artist" label from the artwork top.
    pub title_offset: f32,
    /// Gap between the artwork bottom and the first track row.
    pub track_list_gap: f32,
    pub track_row_height: f32,
    pub track_row_left: f32,
    pub track_row_right: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub button_y: f32,
    pub play_button_x: f32,
    pub prev_button_x: f32,
    pub next_button_x: f32,
    /// Baseline of the "now playing" label.
    pub now_playing_y: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            artwork_width: 100.0,
            artwork_height: 100.0,
            album_spacing: 200.0,
            title_offset: 110.0,
            track_list_gap: 40.0,
            track_row_height: 30.0,
            track_row_left: 50.0,
            track_row_right: 600.0,
            button_width: 50.0,
            button_height: 50.0,
            button_y: 450.0,
            play_button_x: 375.0,
            prev_button_x: 300.0,
            next_button_x: 450.0,
            now_playing_y: 550.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// What the Next/Prev transport buttons move through.
    pub skip_buttons: SkipButtons,
    /// Start the next track of the album when the current one ends.
    pub auto_advance: bool,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipButtons {
    /// Cycle through albums, wrapping at both ends.
    #[default]
    #[serde(alias = "albums")]
    Album,
    /// Step through the selected album's tracks, stopping at the ends.
    #[serde(alias = "tracks")]
    Track,
}
