//! Driver seam toward the screen-reader abstraction layer.

use tracing::debug;
#[cfg(windows)]
use tracing::warn;

use crate::config::BoyConfig;
use crate::reason;

#[cfg(windows)]
use crate::controller::Controller;
#[cfg(windows)]
use crate::ffi::SpeakParams;

pub const DRIVER_NAME: &str = "BoyPCReader";

/// Operations the abstraction layer dispatches to a concrete reader.
///
/// Every operation reports `false` when the reader cannot perform it, so a
/// dispatcher can fall through to the next driver.
pub trait ScreenReaderDriver {
    fn name(&self) -> &'static str;
    fn supports_speech(&self) -> bool;
    fn supports_braille(&self) -> bool;

    /// Speak `text`, cutting off current speech when `interrupt` is set.
    fn speak(&mut self, text: &str, interrupt: bool) -> bool;

    /// Send `text` to a braille display.
    fn braille(&mut self, text: &str) -> bool;

    /// Stop any speech in progress.
    fn silence(&mut self) -> bool;

    /// Whether an utterance is still in progress.
    fn is_speaking(&mut self) -> bool;

    /// Whether the reader is running and reachable.
    fn is_active(&mut self) -> bool;

    /// Present `text` on every channel the reader supports.
    fn output(&mut self, text: &str, interrupt: bool) -> bool {
        let spoke = self.speak(text, interrupt);
        let brailled = self.braille(text);
        spoke || brailled
    }
}

/// BoyPCReader driver. Construction never fails: when the BoyCtrl library
/// cannot be loaded the driver stays inert and every operation degrades.
pub struct BoyDriver {
    config: BoyConfig,
    #[cfg(windows)]
    controller: Option<Controller>,
}

impl BoyDriver {
    /// Driver with switches from the default configuration file.
    pub fn new() -> Self {
        Self::with_config(BoyConfig::load_default())
    }

    #[cfg(windows)]
    pub fn with_config(config: BoyConfig) -> Self {
        let controller = match Controller::load() {
            Ok(controller) => {
                if let Err(err) = controller.set_any_key_stop(config.any_key_stop) {
                    debug!("any-key-stop switch unavailable: {}", err);
                }
                Some(controller)
            }
            Err(err) => {
                warn!("BoyCtrl unavailable: {}", err);
                None
            }
        };
        Self { config, controller }
    }

    #[cfg(not(windows))]
    pub fn with_config(config: BoyConfig) -> Self {
        debug!("BoyCtrl requires Windows; driver starts inert");
        Self { config }
    }

    pub fn config(&self) -> &BoyConfig {
        &self.config
    }
}

impl Default for BoyDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenReaderDriver for BoyDriver {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn supports_speech(&self) -> bool {
        true
    }

    fn supports_braille(&self) -> bool {
        false
    }

    #[cfg(windows)]
    fn speak(&mut self, text: &str, interrupt: bool) -> bool {
        let Some(controller) = &self.controller else {
            return false;
        };
        let mut params = SpeakParams::from(&self.config);
        if interrupt {
            // An interrupting utterance is never queued behind current speech.
            params.append = false;
        }
        match controller.speak(text, params) {
            Ok(()) => true,
            Err(err) => {
                warn!("speak failed: {}", err);
                false
            }
        }
    }

    #[cfg(not(windows))]
    fn speak(&mut self, _text: &str, _interrupt: bool) -> bool {
        false
    }

    fn braille(&mut self, _text: &str) -> bool {
        // BoyCtrl has no braille path.
        false
    }

    #[cfg(windows)]
    fn silence(&mut self) -> bool {
        let Some(controller) = &self.controller else {
            return false;
        };
        match controller.stop_speaking(self.config.with_slave) {
            Ok(()) => true,
            Err(err) => {
                warn!("stop failed: {}", err);
                false
            }
        }
    }

    #[cfg(not(windows))]
    fn silence(&mut self) -> bool {
        false
    }

    fn is_speaking(&mut self) -> bool {
        reason::is_speech_pending()
    }

    #[cfg(windows)]
    fn is_active(&mut self) -> bool {
        match &self.controller {
            Some(controller) => controller.is_reader_running(),
            None => false,
        }
    }

    #[cfg(not(windows))]
    fn is_active(&mut self) -> bool {
        false
    }
}
