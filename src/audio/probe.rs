use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;
use tracing::debug;

/// Read the track length from the file's tags/stream properties.
///
/// Returns `None` for unreadable files and for formats that report no length;
/// callers treat the duration as optional display information.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let duration = tagged.properties().duration();
            (!duration.is_zero()).then_some(duration)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no duration available");
            None
        }
    }
}
