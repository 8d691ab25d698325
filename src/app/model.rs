//! Application model types: `App` and `PlaybackState`.
//!
//! `App` is the playback controller. It owns the catalog, the current
//! selection, and the single active audio handle. The window forwards clicks
//! and keys to it and draws from it every frame.

use std::time::Duration;

use eframe::egui::Pos2;
use tracing::{debug, info};

use crate::audio::{AudioBackend, AudioHandle};
use crate::catalog::{Album, Catalog, Track};
use crate::config::{PlaybackSettings, SkipButtons};
use crate::error::AudioError;
use crate::layout::{Layout, Target, Transport};

/// The playback state of the application.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// The playback controller.
///
/// Invariants:
/// - `current_track` is only set while `current_album` is, and indexes into
///   that album's tracks.
/// - `playback` is `Stopped` exactly when there is no active handle.
pub struct App<B: AudioBackend> {
    catalog: Catalog,
    backend: B,
    active: Option<B::Handle>,

    current_album: Option<usize>,
    current_track: Option<usize>,
    playback: PlaybackState,
    last_error: Option<String>,

    skip_buttons: SkipButtons,
    auto_advance: bool,
}

impl<B: AudioBackend> App<B> {
    pub fn new(catalog: Catalog, backend: B, settings: &PlaybackSettings) -> Self {
        Self {
            catalog,
            backend,
            active: None,
            current_album: None,
            current_track: None,
            playback: PlaybackState::Stopped,
            last_error: None,
            skip_buttons: settings.skip_buttons,
            auto_advance: settings.auto_advance,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_album(&self) -> Option<usize> {
        self.current_album
    }

    /// Index of the selected track within the selected album.
    pub fn current_track(&self) -> Option<usize> {
        self.current_track
    }

    pub fn selected_album(&self) -> Option<&Album> {
        self.current_album.and_then(|a| self.catalog.album(a))
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.catalog.track(self.current_album?, self.current_track?)
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    /// Message of the last track that failed to start, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Position in the active track.
    pub fn elapsed(&self) -> Option<Duration> {
        self.active.as_ref().map(|h| h.position())
    }

    /// Length of the active track, when known.
    pub fn duration(&self) -> Option<Duration> {
        self.active.as_ref().and_then(|h| h.duration())
    }

    /// Expand album `index`. Playback is left alone.
    pub fn select_album(&mut self, index: usize) {
        assert!(
            index < self.catalog.len(),
            "album index {index} out of range (catalog has {})",
            self.catalog.len()
        );
        debug!(album = index, "album selected");
        self.current_album = Some(index);
        self.current_track = None;
    }

    /// Select a track and start playing it, replacing whatever was playing.
    ///
    /// If the track cannot be opened nothing is playing afterwards, no track
    /// is selected, and the error is kept for display.
    pub fn select_track(&mut self, album: usize, track: usize) -> Result<(), AudioError> {
        let location = match self.catalog.track(album, track) {
            Some(t) => t.location.clone(),
            None => panic!("track {track} of album {album} is not in the catalog"),
        };

        self.current_album = Some(album);
        self.stop_active();

        match self.backend.open(&location) {
            Ok(mut handle) => {
                handle.play();
                self.active = Some(handle);
                self.current_track = Some(track);
                self.playback = PlaybackState::Playing;
                self.last_error = None;
                info!(album, track, path = %location.display(), "playing");
                Ok(())
            }
            Err(e) => {
                self.current_track = None;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Pause the active handle or resume it.
    ///
    /// This acts on whatever is audible, even after album navigation has
    /// cleared the track selection. Without a handle, a selected track (one
    /// that has finished) is played again from the start. Otherwise it does
    /// nothing.
    pub fn toggle_play_pause(&mut self) -> Result<(), AudioError> {
        match (self.playback, self.active.as_mut()) {
            (PlaybackState::Playing, Some(handle)) => {
                handle.pause();
                self.playback = PlaybackState::Paused;
                debug!("paused");
            }
            (PlaybackState::Paused, Some(handle)) => {
                handle.play();
                self.playback = PlaybackState::Playing;
                debug!("resumed");
            }
            _ => {
                if let (Some(album), Some(track)) = (self.current_album, self.current_track) {
                    return self.select_track(album, track);
                }
            }
        }
        Ok(())
    }

    /// Play the next track of the selected album. No-op at the last track.
    pub fn skip_next(&mut self) -> Result<(), AudioError> {
        match self.neighbour(true) {
            Some((album, track)) => self.select_track(album, track),
            None => Ok(()),
        }
    }

    /// Play the previous track of the selected album. No-op at the first track.
    pub fn skip_previous(&mut self) -> Result<(), AudioError> {
        match self.neighbour(false) {
            Some((album, track)) => self.select_track(album, track),
            None => Ok(()),
        }
    }

    /// Select the following album, wrapping to the first.
    pub fn next_album(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let next = match self.current_album {
            Some(i) => (i + 1) % self.catalog.len(),
            None => 0,
        };
        self.select_album(next);
    }

    /// Select the preceding album, wrapping to the last.
    pub fn previous_album(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len();
        let prev = match self.current_album {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.select_album(prev);
    }

    /// Hit-test a click and run whatever it landed on.
    pub fn handle_click(
        &mut self,
        point: Pos2,
        layout: &Layout,
    ) -> Result<Option<Target>, AudioError> {
        let target = layout.hit_test(point, &self.catalog, self.current_album);
        if let Some(t) = target {
            self.activate(t)?;
        }
        Ok(target)
    }

    pub fn activate(&mut self, target: Target) -> Result<(), AudioError> {
        match target {
            Target::Album(index) => self.select_album(index),
            Target::Track { album, track } => self.select_track(album, track)?,
            Target::Transport(Transport::PlayPause) => self.toggle_play_pause()?,
            Target::Transport(Transport::Next) => match self.skip_buttons {
                SkipButtons::Album => self.next_album(),
                SkipButtons::Track => self.skip_next()?,
            },
            Target::Transport(Transport::Prev) => match self.skip_buttons {
                SkipButtons::Album => self.previous_album(),
                SkipButtons::Track => self.skip_previous()?,
            },
        }
        Ok(())
    }

    /// Per-frame housekeeping: notice when the active track has played out.
    pub fn tick(&mut self) -> Result<(), AudioError> {
        let finished = self.playback == PlaybackState::Playing
            && self.active.as_ref().is_some_and(|h| h.finished());
        if !finished {
            return Ok(());
        }

        debug!(track = ?self.current_track, "track finished");
        self.stop_active();
        if self.auto_advance {
            self.skip_next()?;
        }
        Ok(())
    }

    fn neighbour(&self, forward: bool) -> Option<(usize, usize)> {
        let album = self.current_album?;
        let tracks = &self.catalog.album(album)?.tracks;
        let current = self.current_track.filter(|&t| t < tracks.len())?;

        let next = if forward {
            current + 1
        } else {
            current.checked_sub(1)?
        };
        (next < tracks.len()).then_some((album, next))
    }

    fn stop_active(&mut self) {
        if let Some(mut handle) = self.active.take() {
            handle.stop();
        }
        self.playback = PlaybackState::Stopped;
    }
}
