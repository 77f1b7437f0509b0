use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use hidapi::HidApi;
use tracing::{debug, warn};

use super::RecorderInput;
use super::report::DeviceProfile;
use crate::model::{ChannelFrame, EMPTY_FRAME};

/// Poll interval for the reader thread; also bounds how long `stop`
/// waits for the thread to notice the shutdown flag.
const READ_TIMEOUT_MS: i32 = 10;

/// Report buffer size, larger than any supported report.
const REPORT_BUFFER: usize = 64;

/// State shared between the reader thread and `sample`.
///
/// One coarse mutex guards the latest decoded frame; both sides hold
/// it only for a whole-frame copy, never across device I/O.
struct SharedFrame {
    active: AtomicBool,
    frame: Mutex<ChannelFrame>,
}

impl SharedFrame {
    fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            frame: Mutex::new(EMPTY_FRAME),
        }
    }

    /// Decode a report and publish it as the latest frame.
    fn store_report(&self, profile: &DeviceProfile, report: &[u8]) {
        let decoded = profile.decoder.decode(report);
        *self.frame.lock().unwrap() = decoded;
    }
}

/// USB HID controller backend.
///
/// `start` opens the first device matching the profile and spawns a
/// reader thread that keeps the shared frame at the most recent
/// report. A missing device downgrades the backend to an all-false
/// sampler for the session; nothing is raised.
pub struct HidBackend {
    profile: DeviceProfile,
    shared: Arc<SharedFrame>,
    reader: Option<JoinHandle<()>>,
}

impl HidBackend {
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            profile,
            shared: Arc::new(SharedFrame::new()),
            reader: None,
        }
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }
}

impl RecorderInput for HidBackend {
    fn start(&mut self) {
        if self.reader.is_some() {
            return;
        }

        let opened = HidApi::new()
            .and_then(|api| api.open(self.profile.vendor_id, self.profile.product_id));
        let device = match opened {
            Ok(device) => device,
            Err(e) => {
                warn!(
                    "no device {:04x}:{:04x} ({e}); recording will see no input",
                    self.profile.vendor_id, self.profile.product_id
                );
                return;
            }
        };
        debug!(
            "opened device {:04x}:{:04x}",
            self.profile.vendor_id, self.profile.product_id
        );

        *self.shared.frame.lock().unwrap() = EMPTY_FRAME;
        self.shared.active.store(true, Ordering::SeqCst);

        let shared = self.shared.clone();
        let profile = self.profile;
        self.reader = Some(std::thread::spawn(move || {
            let mut buffer = [0u8; REPORT_BUFFER];
            while shared.active.load(Ordering::SeqCst) {
                match device.read_timeout(&mut buffer, READ_TIMEOUT_MS) {
                    Ok(0) => {}
                    Ok(len) => shared.store_report(&profile, &buffer[..len]),
                    Err(e) => {
                        warn!("device read failed ({e}); stopping reader");
                        break;
                    }
                }
            }
        }));
    }

    fn stop(&mut self) {
        self.shared.active.store(false, Ordering::SeqCst);
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }

    fn sample(&self) -> ChannelFrame {
        *self.shared.frame.lock().unwrap()
    }
}

impl Drop for HidBackend {
    fn drop(&mut self) {
        self.stop();
    }
}
