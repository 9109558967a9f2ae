//! Loaded BoyCtrl library and its resolved entry points.
//!
//! Every export is resolved independently: a given vendor revision may lack
//! any of them, and a call through a missing export reports
//! [`BoyCtrlError::MissingExport`] instead of failing the whole driver.

#![cfg(windows)]

use std::ffi::CString;

use tracing::{debug, warn};
use windows::core::{PCSTR, PCWSTR};
use windows::Win32::Foundation::{FreeLibrary, HMODULE};
use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};

use crate::error::{BoyCtrlError, Result};
use crate::ffi::{
    self, InitializeFn, IsReaderRunningFn, SetAnyKeyStopFn, SpeakFn, SpeakParams, StopSpeakingFn,
    UninitializeFn,
};
use crate::reason::{self, CompletionReason};

/// Owns the module handle and the entry points resolved from it.
pub struct Controller {
    module: HMODULE,
    initialize: Option<InitializeFn>,
    uninitialize: Option<UninitializeFn>,
    is_reader_running: Option<IsReaderRunningFn>,
    speak: Option<SpeakFn>,
    stop_speaking: Option<StopSpeakingFn>,
    set_any_key_stop: Option<SetAnyKeyStopFn>,
}

/// Resolve one export to a typed function pointer, or `None` when the
/// loaded revision does not carry it.
unsafe fn resolve<F>(module: HMODULE, name: &'static str) -> Option<F> {
    let symbol = CString::new(name).ok()?;
    match GetProcAddress(module, PCSTR::from_raw(symbol.as_ptr() as *const u8)) {
        Some(address) => Some(std::mem::transmute_copy(&address)),
        None => {
            debug!("export {} not present in this BoyCtrl revision", name);
            None
        }
    }
}

impl Controller {
    /// Load the vendor library, resolve its exports, and initialize the
    /// engine when the initialize entry point exists.
    pub fn load() -> Result<Self> {
        let wide_name = ffi::to_wide(ffi::LIBRARY_NAME);
        let module = unsafe { LoadLibraryW(PCWSTR::from_raw(wide_name.as_ptr())) }
            .map_err(|err| BoyCtrlError::LibraryNotFound(format!("{}: {}", ffi::LIBRARY_NAME, err)))?;

        let controller = unsafe {
            Self {
                module,
                initialize: resolve(module, ffi::EXPORT_INITIALIZE),
                uninitialize: resolve(module, ffi::EXPORT_UNINITIALIZE),
                is_reader_running: resolve(module, ffi::EXPORT_IS_READER_RUNNING),
                speak: resolve(module, ffi::EXPORT_SPEAK),
                stop_speaking: resolve(module, ffi::EXPORT_STOP_SPEAKING),
                set_any_key_stop: resolve(module, ffi::EXPORT_SET_ANY_KEY_STOP),
            }
        };

        if let Some(initialize) = controller.initialize {
            // Null log path: the engine keeps its own default.
            let code = unsafe { initialize(std::ptr::null()) };
            if code != ffi::CALL_OK {
                warn!("{} reported code {}", ffi::EXPORT_INITIALIZE, code);
            }
        }

        debug!("loaded {}", ffi::LIBRARY_NAME);
        Ok(controller)
    }

    /// Hand an utterance to the engine. The completion callback updates the
    /// process-wide reason slot; the pending mark is placed before the call
    /// because the engine may complete synchronously.
    pub fn speak(&self, text: &str, params: SpeakParams) -> Result<()> {
        let speak = self.speak.ok_or(BoyCtrlError::MissingExport(ffi::EXPORT_SPEAK))?;
        let wide = ffi::to_wide(text);

        reason::mark_pending();
        let code = unsafe {
            speak(
                wide.as_ptr(),
                params.with_slave,
                params.append,
                params.allow_break,
                Some(reason::speak_complete),
            )
        };
        if code != ffi::CALL_OK {
            reason::clear();
            return Err(BoyCtrlError::Call { export: ffi::EXPORT_SPEAK, code });
        }
        Ok(())
    }

    /// Stop speech in progress and record the stop locally; the engine does
    /// not fire the completion callback for utterances it never accepted.
    pub fn stop_speaking(&self, with_slave: bool) -> Result<()> {
        let stop = self
            .stop_speaking
            .ok_or(BoyCtrlError::MissingExport(ffi::EXPORT_STOP_SPEAKING))?;

        let code = unsafe { stop(with_slave) };
        if code != ffi::CALL_OK {
            return Err(BoyCtrlError::Call { export: ffi::EXPORT_STOP_SPEAKING, code });
        }
        reason::mark(CompletionReason::Stopped);
        Ok(())
    }

    /// Whether the reader itself is up. `false` when the export is missing.
    pub fn is_reader_running(&self) -> bool {
        match self.is_reader_running {
            Some(is_running) => unsafe { is_running() },
            None => false,
        }
    }

    /// Engine-side "any key silences speech" switch.
    pub fn set_any_key_stop(&self, enabled: bool) -> Result<()> {
        let set = self
            .set_any_key_stop
            .ok_or(BoyCtrlError::MissingExport(ffi::EXPORT_SET_ANY_KEY_STOP))?;
        unsafe { set(enabled) };
        Ok(())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(uninitialize) = self.uninitialize {
            unsafe { uninitialize() };
        }
        unsafe {
            let _ = FreeLibrary(self.module);
        }
    }
}
