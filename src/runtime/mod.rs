use anyhow::Context;
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioBackend;
use crate::catalog;
use crate::config::Settings;
use crate::layout::Layout;

mod logging;
mod window;

pub use logging::init_logging;

/// Load everything, open the audio device and run the window until it closes.
pub fn run() -> anyhow::Result<()> {
    let settings = load_settings();

    let catalog_path = &settings.library.catalog_path;
    let catalog = catalog::load(catalog_path, &settings)
        .with_context(|| format!("cannot load album catalog {}", catalog_path.display()))?;
    info!(
        albums = catalog.len(),
        tracks = catalog.albums().iter().map(|a| a.tracks.len()).sum::<usize>(),
        "catalog loaded"
    );

    let layout = Layout::new(settings.layout.clone());
    for issue in layout.check(&catalog) {
        warn!("{issue}");
    }

    let backend = RodioBackend::open_default().context("cannot open audio output")?;
    let app = App::new(catalog, backend, &settings.playback);

    window::run(app, layout, settings.library.buttons_dir.clone())
}

/// Settings from the config file and environment, or the defaults if either
/// cannot be read or fails validation. The warning names the offending key.
fn load_settings() -> Settings {
    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "failed to load config, using defaults");
            return Settings::default();
        }
    };
    match settings.validate() {
        Ok(()) => settings,
        Err(msg) => {
            warn!(problem = %msg, "invalid config, using defaults");
            Settings::default()
        }
    }
}
