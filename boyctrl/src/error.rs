//! Error types for BoyCtrl operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoyCtrlError {
    #[error("BoyCtrl library not found: {0}")]
    LibraryNotFound(String),

    #[error("export not present in this BoyCtrl revision: {0}")]
    MissingExport(&'static str),

    #[error("{export} failed with code {code}")]
    Call { export: &'static str, code: i32 },
}

pub type Result<T> = std::result::Result<T, BoyCtrlError>;
