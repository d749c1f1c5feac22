use thiserror::Error;

/// Errors surfaced to the caller before or instead of execution.
/// Operation and rollback failures are not errors at this level; they are
/// recorded in the execution log and the rollback report.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("filesystem error: {0}")]
    Filesystem(String),
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        use crate::types::errors::ErrorKind::{Config, InvalidPath, Io};
        match e.kind {
            Config | InvalidPath => ApiError::Configuration(e.msg),
            Io => ApiError::Filesystem(e.msg),
        }
    }
}

// Stable identifiers carried in facts and summaries.
// SCREAMING_SNAKE_CASE matches the emitted IDs verbatim.
#[allow(non_camel_case_types, reason = "variants must match emitted fact IDs")]
#[derive(Clone, Copy, Debug)]
pub enum ErrorId {
    E_CONFIG,
    E_OPERATION,
    E_PROCESS,
    E_ROLLBACK,
    E_CANCELLED,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_CONFIG => "E_CONFIG",
        ErrorId::E_OPERATION => "E_OPERATION",
        ErrorId::E_PROCESS => "E_PROCESS",
        ErrorId::E_ROLLBACK => "E_ROLLBACK",
        ErrorId::E_CANCELLED => "E_CANCELLED",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_CONFIG => 10,
        ErrorId::E_OPERATION => 20,
        ErrorId::E_PROCESS => 30,
        ErrorId::E_ROLLBACK => 40,
        ErrorId::E_CANCELLED => 50,
        ErrorId::E_GENERIC => 1,
    }
}

/// Best-effort mapping from executor error strings to a chain of stable
/// summary error IDs. Always ends with the generic operation
/// classification so routing has a fallback.
#[must_use]
pub fn infer_summary_error_ids(errors: &[String]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    let joined = errors.join("; ").to_lowercase();
    if joined.contains("cancelled") {
        out.push(id_str(ErrorId::E_CANCELLED));
    }
    if joined.contains("exit") || joined.contains("spawn") {
        out.push(id_str(ErrorId::E_PROCESS));
    }
    if joined.contains("rollback") {
        out.push(id_str(ErrorId::E_ROLLBACK));
    }
    out.push(id_str(ErrorId::E_OPERATION));
    // Deduplicate while preserving order
    let mut seen = std::collections::HashSet::new();
    out.into_iter().filter(|id| seen.insert(*id)).collect()
}
