//! Frame rendering.
//!
//! [`draw`] turns the controller state into draw calls on a [`Canvas`]. It
//! only reads state; the egui-backed canvas lives in `ui::canvas`.

use std::time::Duration;

use eframe::egui::{Color32, Pos2, Rect, vec2};

use crate::app::App;
use crate::audio::AudioBackend;
use crate::layout::{Layout, Transport, WINDOW_SIZE};

mod canvas;
mod textures;

pub use canvas::EguiCanvas;
pub use textures::Textures;

pub const TOP_COLOR: Color32 = Color32::from_rgb(0x1E, 0xB1, 0xFA);
pub const BOTTOM_COLOR: Color32 = Color32::from_rgb(0x1D, 0x4D, 0xB5);
pub const TRACK_COLOR: Color32 = Color32::WHITE;
pub const CURRENT_TRACK_COLOR: Color32 = Color32::YELLOW;
pub const NOW_PLAYING_COLOR: Color32 = Color32::GREEN;
pub const ERROR_COLOR: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);

const ALBUM_FONT_SIZE: f32 = 16.0;
const TRACK_FONT_SIZE: f32 = 20.0;
const ERROR_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ButtonIcon {
    Play,
    Pause,
    Prev,
    Next,
}

impl ButtonIcon {
    pub const ALL: [ButtonIcon; 4] = [
        ButtonIcon::Play,
        ButtonIcon::Pause,
        ButtonIcon::Prev,
        ButtonIcon::Next,
    ];

    /// Image file name inside the buttons directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ButtonIcon::Play => "playbtn.png",
            ButtonIcon::Pause => "pausebtn.png",
            ButtonIcon::Prev => "prevbtn.png",
            ButtonIcon::Next => "nextbtn.png",
        }
    }

    /// Stand-in glyph when the image is missing.
    pub fn glyph(self) -> &'static str {
        match self {
            ButtonIcon::Play => "▶",
            ButtonIcon::Pause => "⏸",
            ButtonIcon::Prev => "⏮",
            ButtonIcon::Next => "⏭",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Image {
    Artwork(usize),
    Button(ButtonIcon),
}

/// Drawing primitives used by [`draw`], in painting order.
pub trait Canvas {
    /// Fill `rect` with a vertical gradient.
    fn gradient(&mut self, rect: Rect, top: Color32, bottom: Color32);
    /// Draw `image` stretched to `rect`.
    fn image(&mut self, image: Image, rect: Rect);
    /// Draw `text` with its top-left corner at `pos`.
    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

/// Render one frame.
pub fn draw<B: AudioBackend>(canvas: &mut impl Canvas, app: &App<B>, layout: &Layout) {
    canvas.gradient(
        Rect::from_min_size(Pos2::ZERO, WINDOW_SIZE),
        TOP_COLOR,
        BOTTOM_COLOR,
    );

    for (index, album) in app.catalog().albums().iter().enumerate() {
        let slot = layout.artwork_rect(index);
        canvas.image(
            Image::Artwork(index),
            Rect::from_min_size(slot.min, vec2(album.artwork.width, album.artwork.height)),
        );
        canvas.text(
            layout.album_label_pos(index),
            &album.label(),
            ALBUM_FONT_SIZE,
            Color32::WHITE,
        );
    }

    if let Some(album) = app.selected_album() {
        let rows = album.tracks.len().min(layout.visible_rows());
        for (index, track) in album.tracks.iter().take(rows).enumerate() {
            let color = if app.current_track() == Some(index) {
                CURRENT_TRACK_COLOR
            } else {
                TRACK_COLOR
            };
            canvas.text(
                layout.track_row_rect(index).min,
                &track.title,
                TRACK_FONT_SIZE,
                color,
            );
        }
    }

    if let Some(track) = app.selected_track() {
        let mut label = format!("Now playing: {}", track.title);
        if let Some(time) = time_text(app.elapsed(), app.duration()) {
            label.push_str(&format!("  {time}"));
        }
        canvas.text(
            layout.now_playing_pos(),
            &label,
            TRACK_FONT_SIZE,
            NOW_PLAYING_COLOR,
        );
    }

    if let Some(err) = app.last_error() {
        canvas.text(
            layout.now_playing_pos() + vec2(0.0, TRACK_FONT_SIZE + 6.0),
            err,
            ERROR_FONT_SIZE,
            ERROR_COLOR,
        );
    }

    let play_icon = if app.is_playing() {
        ButtonIcon::Pause
    } else {
        ButtonIcon::Play
    };
    canvas.image(
        Image::Button(play_icon),
        layout.button_rect(Transport::PlayPause),
    );
    canvas.image(
        Image::Button(ButtonIcon::Prev),
        layout.button_rect(Transport::Prev),
    );
    canvas.image(
        Image::Button(ButtonIcon::Next),
        layout.button_rect(Transport::Next),
    );
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total`, or just `elapsed` when the length is unknown.
fn time_text(elapsed: Option<Duration>, total: Option<Duration>) -> Option<String> {
    let elapsed = elapsed?;
    Some(match total {
        Some(t) => format!("{} / {}", format_mmss(elapsed), format_mmss(t)),
        None => format_mmss(elapsed),
    })
}
