//! Recording audio backend for controller and rendering tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use super::types::{AudioBackend, AudioHandle};
use crate::error::AudioError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Open(PathBuf),
    Play(PathBuf),
    Pause(PathBuf),
    Stop(PathBuf),
}

#[derive(Default)]
struct Shared {
    calls: Vec<Call>,
    live: Vec<PathBuf>,
    finished: HashSet<PathBuf>,
    missing: HashSet<PathBuf>,
}

/// Cloning shares the recorded state, so a test can keep a probe while the
/// controller owns the backend.
#[derive(Clone, Default)]
pub struct FakeBackend {
    shared: Rc<RefCell<Shared>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.shared.borrow().calls.clone()
    }

    /// Paths of handles opened and not yet stopped.
    pub fn live(&self) -> Vec<PathBuf> {
        self.shared.borrow().live.clone()
    }

    /// Make opening `path` fail like a missing file.
    pub fn make_missing(&self, path: impl Into<PathBuf>) {
        self.shared.borrow_mut().missing.insert(path.into());
    }

    /// Report the handle for `path` as played out.
    pub fn finish(&self, path: impl Into<PathBuf>) {
        self.shared.borrow_mut().finished.insert(path.into());
    }
}

impl AudioBackend for FakeBackend {
    type Handle = FakeHandle;

    fn open(&mut self, path: &Path) -> Result<FakeHandle, AudioError> {
        let mut shared = self.shared.borrow_mut();
        if shared.missing.contains(path) {
            return Err(AudioError::Open {
                path: path.to_path_buf(),
                source: std::io::ErrorKind::NotFound.into(),
            });
        }
        shared.calls.push(Call::Open(path.to_path_buf()));
        shared.live.push(path.to_path_buf());
        Ok(FakeHandle {
            path: path.to_path_buf(),
            shared: Rc::clone(&self.shared),
        })
    }
}

pub struct FakeHandle {
    path: PathBuf,
    shared: Rc<RefCell<Shared>>,
}

impl AudioHandle for FakeHandle {
    fn play(&mut self) {
        self.shared.borrow_mut().calls.push(Call::Play(self.path.clone()));
    }

    fn pause(&mut self) {
        self.shared.borrow_mut().calls.push(Call::Pause(self.path.clone()));
    }

    fn stop(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.calls.push(Call::Stop(self.path.clone()));
        shared.live.retain(|p| p != &self.path);
    }

    fn position(&self) -> Duration {
        Duration::from_secs(42)
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(190))
    }

    fn finished(&self) -> bool {
        self.shared.borrow().finished.contains(&self.path)
    }
}
