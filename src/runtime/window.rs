//! The eframe window hosting the player.
//!
//! Each frame: collect clicks and key presses, apply them to the controller,
//! let the controller notice finished tracks, then draw.

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui::{self, Key, Pos2, ViewportBuilder};
use tracing::{error, trace};

use crate::app::App;
use crate::audio::RodioBackend;
use crate::error::AudioError;
use crate::layout::{Layout, WINDOW_SIZE};
use crate::ui::{self, EguiCanvas, Textures};

const WINDOW_TITLE: &str = "Music Player";
/// Keeps the elapsed time and end-of-track detection moving without input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Copy, Clone)]
enum Action {
    Click(Pos2),
    PlayPause,
    NextTrack,
    PrevTrack,
    NextAlbum,
    PrevAlbum,
}

struct PlayerWindow {
    app: App<RodioBackend>,
    layout: Layout,
    textures: Textures,
}

impl PlayerWindow {
    fn collect_actions(ctx: &egui::Context) -> Vec<Action> {
        ctx.input(|i| {
            let mut actions = Vec::new();
            if i.pointer.primary_clicked() {
                if let Some(pos) = i.pointer.interact_pos() {
                    actions.push(Action::Click(pos));
                }
            }
            let keys = [
                (Key::Space, Action::PlayPause),
                (Key::ArrowRight, Action::NextTrack),
                (Key::ArrowLeft, Action::PrevTrack),
                (Key::ArrowDown, Action::NextAlbum),
                (Key::ArrowUp, Action::PrevAlbum),
            ];
            actions.extend(
                keys.into_iter()
                    .filter(|(key, _)| i.key_pressed(*key))
                    .map(|(_, action)| action),
            );
            actions
        })
    }

    fn apply(&mut self, action: Action) -> Result<(), AudioError> {
        match action {
            Action::Click(pos) => {
                self.app.handle_click(pos, &self.layout)?;
            }
            Action::PlayPause => self.app.toggle_play_pause()?,
            Action::NextTrack => self.app.skip_next()?,
            Action::PrevTrack => self.app.skip_previous()?,
            Action::NextAlbum => self.app.next_album(),
            Action::PrevAlbum => self.app.previous_album(),
        }
        trace!(
            ?action,
            album = ?self.app.current_album(),
            track = ?self.app.current_track(),
            state = ?self.app.playback(),
            "action applied"
        );
        Ok(())
    }
}

impl eframe::App for PlayerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in Self::collect_actions(ctx) {
            if let Err(e) = self.apply(action) {
                error!(error = %e, ?action, "playback failed");
            }
        }
        if let Err(e) = self.app.tick() {
            error!(error = %e, "could not advance to the next track");
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel| {
                let mut canvas = EguiCanvas::new(panel.painter(), &self.textures);
                ui::draw(&mut canvas, &self.app, &self.layout);
            });

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

/// Open the fixed-size window and block until it is closed.
pub fn run(app: App<RodioBackend>, layout: Layout, buttons_dir: PathBuf) -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(
            move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                let textures = Textures::load(&cc.egui_ctx, app.catalog(), &buttons_dir);
                Ok(Box::new(PlayerWindow {
                    app,
                    layout,
                    textures,
                }))
            },
        ),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}
