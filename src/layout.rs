//! Fixed screen layout and hit-testing.
//!
//! Albums sit in a row left to right from the origin. The selected album's
//! tracks are listed below that row, and the three transport buttons sit
//! near the bottom of the window. All regions include their edges.

use std::fmt;

use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::catalog::Catalog;
use crate::config::LayoutSettings;

/// Window size in points. The window is not resizable.
pub const WINDOW_SIZE: Vec2 = vec2(800.0, 600.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transport {
    PlayPause,
    Prev,
    Next,
}

impl Transport {
    /// Hit-test order.
    pub const ALL: [Transport; 3] = [Transport::PlayPause, Transport::Prev, Transport::Next];
}

/// What a click landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    Album(usize),
    Track { album: usize, track: usize },
    Transport(Transport),
}

/// Layout problems worth telling the user about at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    /// The album has more tracks than fit above the transport buttons.
    TracksClipped {
        album: usize,
        tracks: usize,
        visible: usize,
    },
    ArtworkOffscreen { album: usize },
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::TracksClipped {
                album,
                tracks,
                visible,
            } => write!(
                f,
                "album {} has {tracks} tracks but only {visible} fit on screen",
                album + 1
            ),
            LayoutIssue::ArtworkOffscreen { album } => {
                write!(f, "album {} is placed outside the window", album + 1)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    s: LayoutSettings,
}

impl Layout {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { s: settings }
    }

    pub fn artwork_rect(&self, album: usize) -> Rect {
        Rect::from_min_size(
            pos2(
                self.s.origin_x + album as f32 * self.s.album_spacing,
                self.s.origin_y,
            ),
            vec2(self.s.artwork_width, self.s.artwork_height),
        )
    }

    /// Top-left of the "title by artist" label.
    pub fn album_label_pos(&self, album: usize) -> Pos2 {
        self.artwork_rect(album).min + vec2(0.0, self.s.title_offset)
    }

    fn track_list_top(&self) -> f32 {
        self.s.origin_y + self.s.artwork_height + self.s.track_list_gap
    }

    pub fn track_row_rect(&self, track: usize) -> Rect {
        Rect::from_min_max(
            pos2(
                self.s.track_row_left,
                self.track_list_top() + track as f32 * self.s.track_row_height,
            ),
            pos2(
                self.s.track_row_right,
                self.track_list_top() + (track + 1) as f32 * self.s.track_row_height,
            ),
        )
    }

    /// Number of track rows that end above the transport buttons.
    ///
    /// Rows past this are neither drawn nor clickable, so the list can never
    /// cover the buttons.
    pub fn visible_rows(&self) -> usize {
        let room = self.s.button_y - self.track_list_top();
        if room <= 0.0 {
            0
        } else {
            (room / self.s.track_row_height).floor() as usize
        }
    }

    pub fn button_rect(&self, button: Transport) -> Rect {
        let x = match button {
            Transport::PlayPause => self.s.play_button_x,
            Transport::Prev => self.s.prev_button_x,
            Transport::Next => self.s.next_button_x,
        };
        Rect::from_min_size(
            pos2(x, self.s.button_y),
            vec2(self.s.button_width, self.s.button_height),
        )
    }

    pub fn now_playing_pos(&self) -> Pos2 {
        pos2(self.s.track_row_left, self.s.now_playing_y)
    }

    /// Resolve a click to a target.
    ///
    /// Albums are scanned in order; each album's artwork is checked before the
    /// track rows of that album (only the selected album has rows). Buttons
    /// come last. The first region containing `point` wins.
    pub fn hit_test(
        &self,
        point: Pos2,
        catalog: &Catalog,
        current_album: Option<usize>,
    ) -> Option<Target> {
        for (index, album) in catalog.albums().iter().enumerate() {
            if self.artwork_rect(index).contains(point) {
                return Some(Target::Album(index));
            }

            if current_album == Some(index) {
                let rows = album.tracks.len().min(self.visible_rows());
                if let Some(track) = (0..rows).find(|&t| self.track_row_rect(t).contains(point)) {
                    return Some(Target::Track {
                        album: index,
                        track,
                    });
                }
            }
        }

        Transport::ALL
            .into_iter()
            .find(|&b| self.button_rect(b).contains(point))
            .map(Target::Transport)
    }

    /// Report albums that do not fit the window.
    pub fn check(&self, catalog: &Catalog) -> Vec<LayoutIssue> {
        let window = Rect::from_min_size(Pos2::ZERO, WINDOW_SIZE);
        let visible = self.visible_rows();
        let mut issues = Vec::new();

        for (album, a) in catalog.albums().iter().enumerate() {
            if !window.contains_rect(self.artwork_rect(album)) {
                issues.push(LayoutIssue::ArtworkOffscreen { album });
            }
            if a.tracks.len() > visible {
                issues.push(LayoutIssue::TracksClipped {
                    album,
                    tracks: a.tracks.len(),
                    visible,
                });
            }
        }
        issues
    }
}
