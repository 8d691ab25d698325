//! `rodio` implementation of the audio collaborator.
//!
//! Each handle wraps a `Sink` connected to the shared output stream's mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use crate::error::AudioError;

use super::probe::probe_duration;
use super::types::{AudioBackend, AudioHandle};

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped; we log through tracing instead.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Handle = RodioHandle;

    fn open(&mut self, path: &Path) -> Result<RodioHandle, AudioError> {
        let source = open_decoder(path)?;
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        debug!(path = %path.display(), "sink ready");
        Ok(RodioHandle {
            sink,
            duration: probe_duration(path),
        })
    }
}

/// Open and start decoding `path`.
pub(super) fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub struct RodioHandle {
    sink: Sink,
    duration: Option<Duration>,
}

impl AudioHandle for RodioHandle {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn finished(&self) -> bool {
        self.sink.empty()
    }
}
