//! Shared helpers for playback integration tests

// Not every test binary uses every helper.
#![allow(dead_code)]

use aria_core::types::{SourceRef, Track};
use aria_playback::MediaBackend;
use std::sync::{Arc, Mutex};

/// One command the engine issued to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load { source: String, generation: u64 },
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
    Shutdown,
}

/// Shared view into the commands a [`MockBackend`] received
#[derive(Clone)]
pub struct CommandLog(Arc<Mutex<Vec<Command>>>);

impl CommandLog {
    pub fn snapshot(&self) -> Vec<Command> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn count(&self, predicate: impl Fn(&Command) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    pub fn last_load(&self) -> Option<(String, u64)> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|c| match c {
                Command::Load { source, generation } => Some((source.clone(), *generation)),
                _ => None,
            })
    }
}

/// Recording media backend; tests inject events themselves
pub struct MockBackend {
    log: Arc<Mutex<Vec<Command>>>,
}

/// Create a recording backend plus a shared view of its command log
pub fn mock_backend() -> (Box<dyn MediaBackend>, CommandLog) {
    let log = Arc::new(Mutex::new(Vec::new()));
    (
        Box::new(MockBackend { log: log.clone() }),
        CommandLog(log),
    )
}

impl MediaBackend for MockBackend {
    fn load(&mut self, source: &SourceRef, generation: u64) {
        self.log.lock().unwrap().push(Command::Load {
            source: source.as_str().to_string(),
            generation,
        });
    }

    fn play(&mut self) {
        self.log.lock().unwrap().push(Command::Play);
    }

    fn pause(&mut self) {
        self.log.lock().unwrap().push(Command::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.log.lock().unwrap().push(Command::Seek(seconds));
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.lock().unwrap().push(Command::SetVolume(volume));
    }

    fn shutdown(&mut self) {
        self.log.lock().unwrap().push(Command::Shutdown);
    }
}

/// Test track with a predictable embed reference
pub fn track(id: &str) -> Track {
    Track::new(
        id,
        format!("Track {id}"),
        "Test Artist",
        SourceRef::EmbedId(format!("vid-{id}")),
    )
}
