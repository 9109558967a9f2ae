//! C-ABI surface of the BoyCtrl library.
//!
//! These signatures are taken from the BoyCtrl SDK headers. The vendor has
//! changed this ABI between releases (parameter counts, return types, and
//! which exports exist at all), so every export is resolved individually and
//! callers must treat each one as optional.

use crate::config::BoyConfig;

/// Library file name for the current target.
#[cfg(target_pointer_width = "64")]
pub const LIBRARY_NAME: &str = "BoyCtrl-x64.dll";
#[cfg(not(target_pointer_width = "64"))]
pub const LIBRARY_NAME: &str = "BoyCtrl.dll";

pub const EXPORT_INITIALIZE: &str = "BoyCtrlInitialize";
pub const EXPORT_UNINITIALIZE: &str = "BoyCtrlUninitialize";
pub const EXPORT_IS_READER_RUNNING: &str = "BoyCtrlIsReaderRunning";
pub const EXPORT_SPEAK: &str = "BoyCtrlSpeak";
pub const EXPORT_STOP_SPEAKING: &str = "BoyCtrlStopSpeaking";
pub const EXPORT_SET_ANY_KEY_STOP: &str = "BoyCtrlSetAnyKeyStopSpeaking";

/// Return code for a successful call.
pub const CALL_OK: i32 = 0;

/// Completion callback passed to [`SpeakFn`].
///
/// The reason codes are decoded by [`crate::reason::CompletionReason`].
pub type SpeakCompleteFn = extern "system" fn(reason: i32);

/// `BoyCtrlInitialize(logPath)` - the path may be null.
pub type InitializeFn = unsafe extern "system" fn(log_path: *const u16) -> i32;

/// `BoyCtrlUninitialize()`
pub type UninitializeFn = unsafe extern "system" fn();

/// `BoyCtrlIsReaderRunning()`
pub type IsReaderRunningFn = unsafe extern "system" fn() -> bool;

/// `BoyCtrlSpeak(text, withSlave, append, allowBreak, onCompletion)`
pub type SpeakFn = unsafe extern "system" fn(
    text: *const u16,
    with_slave: bool,
    append: bool,
    allow_break: bool,
    on_complete: Option<SpeakCompleteFn>,
) -> i32;

/// `BoyCtrlStopSpeaking(withSlave)`
pub type StopSpeakingFn = unsafe extern "system" fn(with_slave: bool) -> i32;

/// `BoyCtrlSetAnyKeyStopSpeaking(enabled)` - absent in older revisions.
pub type SetAnyKeyStopFn = unsafe extern "system" fn(enabled: bool);

/// The three boolean switches of a speak submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakParams {
    pub with_slave: bool,
    pub append: bool,
    pub allow_break: bool,
}

impl From<&BoyConfig> for SpeakParams {
    fn from(config: &BoyConfig) -> Self {
        Self {
            with_slave: config.with_slave,
            append: config.append,
            allow_break: config.allow_break,
        }
    }
}

/// Convert text to a null-terminated UTF-16 buffer for the engine.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
