//! Screen-reader driver for the BoyPCReader ("BOY") engine.
//!
//! BoyPCReader ships a control library (`BoyCtrl-x64.dll` / `BoyCtrl.dll`)
//! whose exports have shifted across vendor releases. This crate loads the
//! library at runtime, resolves each export independently, and degrades to
//! inert behavior whenever the library or one of its entry points is missing.
//!
//! # Example
//!
//! ```ignore
//! use boyctrl::{BoyDriver, ScreenReaderDriver};
//!
//! let mut driver = BoyDriver::new();
//! if driver.is_active() {
//!     driver.speak("hello", true);
//! }
//! ```

mod config;
mod driver;
mod error;
pub mod ffi;
pub mod reason;

#[cfg(windows)]
mod controller;

pub use config::{BoyConfig, CONFIG_FILE_NAME};
pub use driver::{BoyDriver, ScreenReaderDriver, DRIVER_NAME};
pub use error::{BoyCtrlError, Result};
pub use reason::{is_speech_pending, last_completion, CompletionReason};

#[cfg(windows)]
pub use controller::Controller;
