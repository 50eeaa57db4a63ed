//! Mock host platform for testing and demonstration.
//!
//! `MockHost` grants synthetic streams without touching real hardware.
//! Tests can pick which acquisition primitive the host exposes, inject
//! a failure for the next request, and observe what was granted and
//! whether tracks were stopped.

use super::host::{
    DeviceInfo, HostError, HostPlatform, LegacyMedia, MediaStream, MediaTrack, ModernMedia,
};
use super::StreamConstraints;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Number of synthetic video tracks per granted mock stream.
const TRACKS_PER_STREAM: usize = 2;

/// A synthetic video track that records whether it was stopped.
#[derive(Debug, Default)]
pub struct MockTrack {
    stopped: AtomicBool,
}

impl MockTrack {
    /// Whether `stop()` has been called on this track.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

impl MediaTrack for MockTrack {
    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

/// A synthetic stream carrying [`MockTrack`]s.
#[derive(Debug)]
pub struct MockStream {
    tracks: Vec<Arc<MockTrack>>,
}

impl MockStream {
    fn new(track_count: usize) -> Self {
        Self {
            tracks: (0..track_count).map(|_| Arc::new(MockTrack::default())).collect(),
        }
    }

    /// The tracks carried by this stream, for inspection in tests.
    pub fn tracks(&self) -> &[Arc<MockTrack>] {
        &self.tracks
    }
}

impl MediaStream for MockStream {
    fn video_tracks(&self) -> Vec<Arc<dyn MediaTrack>> {
        self.tracks
            .iter()
            .map(|t| Arc::clone(t) as Arc<dyn MediaTrack>)
            .collect()
    }
}

/// Which acquisition primitive the mock host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockMode {
    Modern,
    Legacy,
    Absent,
}

/// Shared grant/failure behavior behind every mock primitive.
#[derive(Default)]
struct MockCore {
    failure: Mutex<Option<HostError>>,
    granted: Mutex<Vec<Arc<MockStream>>>,
}

impl MockCore {
    fn grant_or_fail(&self) -> Result<Arc<dyn MediaStream>, HostError> {
        if let Ok(mut failure) = self.failure.lock() {
            if let Some(err) = failure.take() {
                return Err(err);
            }
        }
        let stream = Arc::new(MockStream::new(TRACKS_PER_STREAM));
        if let Ok(mut granted) = self.granted.lock() {
            granted.push(Arc::clone(&stream));
        }
        Ok(stream)
    }
}

struct MockModern {
    core: Arc<MockCore>,
}

#[async_trait]
impl ModernMedia for MockModern {
    async fn request_stream(
        &self,
        _constraints: &StreamConstraints,
    ) -> Result<Arc<dyn MediaStream>, HostError> {
        self.core.grant_or_fail()
    }
}

struct MockLegacy {
    core: Arc<MockCore>,
}

impl LegacyMedia for MockLegacy {
    fn request_stream(
        &self,
        _constraints: &StreamConstraints,
        on_success: Box<dyn FnOnce(Arc<dyn MediaStream>) + Send>,
        on_failure: Box<dyn FnOnce(HostError) + Send>,
    ) {
        // Settles synchronously; real hosts settle after a prompt.
        match self.core.grant_or_fail() {
            Ok(stream) => on_success(stream),
            Err(err) => on_failure(err),
        }
    }
}

/// A configurable in-memory host platform.
pub struct MockHost {
    devices: Vec<DeviceInfo>,
    mode: MockMode,
    core: Arc<MockCore>,
    enumerate_calls: AtomicUsize,
    enumerate_failure: Mutex<Option<HostError>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// A host with the modern primitive and no devices.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            mode: MockMode::Modern,
            core: Arc::new(MockCore::default()),
            enumerate_calls: AtomicUsize::new(0),
            enumerate_failure: Mutex::new(None),
        }
    }

    /// A host reporting the given devices.
    pub fn with_devices(devices: Vec<DeviceInfo>) -> Self {
        Self {
            devices,
            ..Self::new()
        }
    }

    /// Exposes only the legacy callback primitive.
    pub fn legacy_only(mut self) -> Self {
        self.mode = MockMode::Legacy;
        self
    }

    /// Exposes no acquisition primitive at all.
    pub fn without_capability(mut self) -> Self {
        self.mode = MockMode::Absent;
        self
    }

    /// Makes the next stream request fail with the given error.
    pub fn fail_next_request(&self, err: HostError) {
        if let Ok(mut failure) = self.core.failure.lock() {
            *failure = Some(err);
        }
    }

    /// Makes the next device enumeration fail with the given error.
    pub fn fail_next_enumerate(&self, err: HostError) {
        if let Ok(mut failure) = self.enumerate_failure.lock() {
            *failure = Some(err);
        }
    }

    /// Number of times `enumerate_devices` was called.
    pub fn enumerate_calls(&self) -> usize {
        self.enumerate_calls.load(Ordering::SeqCst)
    }

    /// Every stream this host has granted, in grant order.
    pub fn granted_streams(&self) -> Vec<Arc<MockStream>> {
        self.core
            .granted
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HostPlatform for MockHost {
    async fn enumerate_devices(&self) -> Result<Vec<DeviceInfo>, HostError> {
        self.enumerate_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut failure) = self.enumerate_failure.lock() {
            if let Some(err) = failure.take() {
                return Err(err);
            }
        }
        Ok(self.devices.clone())
    }

    fn modern(&self) -> Option<Arc<dyn ModernMedia>> {
        (self.mode == MockMode::Modern).then(|| {
            Arc::new(MockModern {
                core: Arc::clone(&self.core),
            }) as Arc<dyn ModernMedia>
        })
    }

    fn legacy(&self) -> Vec<Arc<dyn LegacyMedia>> {
        match self.mode {
            MockMode::Legacy => vec![Arc::new(MockLegacy {
                core: Arc::clone(&self.core),
            }) as Arc<dyn LegacyMedia>],
            MockMode::Modern | MockMode::Absent => Vec::new(),
        }
    }
}
