//! Driver behavior without the vendor library.
//!
//! The test environment has no BoyCtrl installation, so these exercise the
//! degradation path: every operation reports unavailable instead of failing.

use boyctrl::{BoyConfig, BoyDriver, ScreenReaderDriver, DRIVER_NAME};

#[test]
fn test_capabilities() {
    let driver = BoyDriver::with_config(BoyConfig::default());
    assert_eq!(driver.name(), DRIVER_NAME);
    assert!(driver.supports_speech());
    assert!(!driver.supports_braille());
}

#[test]
fn test_inert_driver_reports_unavailable() {
    let mut driver = BoyDriver::with_config(BoyConfig::default());

    assert!(!driver.is_active());
    assert!(!driver.speak("hello", true));
    assert!(!driver.braille("hello"));
    assert!(!driver.silence());
    assert!(!driver.output("hello", false));

    // A rejected submission never leaves speech marked in progress.
    assert!(!driver.is_speaking());
}

#[test]
fn test_config_is_kept() {
    let config = BoyConfig {
        with_slave: true,
        ..BoyConfig::default()
    };
    let driver = BoyDriver::with_config(config.clone());
    assert_eq!(driver.config(), &config);
}

/// A driver with only a braille channel, to pin down the provided `output`.
struct BrailleOnly {
    brailled: Vec<String>,
}

impl ScreenReaderDriver for BrailleOnly {
    fn name(&self) -> &'static str {
        "BrailleOnly"
    }
    fn supports_speech(&self) -> bool {
        false
    }
    fn supports_braille(&self) -> bool {
        true
    }
    fn speak(&mut self, _text: &str, _interrupt: bool) -> bool {
        false
    }
    fn braille(&mut self, text: &str) -> bool {
        self.brailled.push(text.to_owned());
        true
    }
    fn silence(&mut self) -> bool {
        false
    }
    fn is_speaking(&mut self) -> bool {
        false
    }
    fn is_active(&mut self) -> bool {
        true
    }
}

#[test]
fn test_output_succeeds_on_either_channel() {
    let mut driver = BrailleOnly { brailled: Vec::new() };
    assert!(driver.output("status line", true));
    assert_eq!(driver.brailled, vec!["status line".to_owned()]);
}
