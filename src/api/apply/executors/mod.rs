use std::path::Path;
use std::time::Instant;

use serde_json::json;
use uuid::Uuid;

use crate::api::errors::{exit_code_for, id_str, ErrorId};
use crate::api::Gangway;
use crate::fs::atomic::write_atomic;
use crate::fs::meta::{kind_of, sha256_hex};
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::types::{Operation, Outcome};

pub(crate) mod desktop_entry;
pub(crate) mod run_process;
pub(crate) mod shortcut;
pub(crate) mod write_file;

/// Small, focused per-operation executor.
pub(crate) trait OperationExecutor<E: FactsEmitter, A: AuditSink> {
    fn execute(
        &self,
        api: &Gangway<E, A>,
        tctx: &AuditCtx<'_>,
        pid: &Uuid,
        op: &Operation,
        idx: usize,
        dry: bool,
    ) -> Outcome;
}

pub(crate) fn dispatch<E: FactsEmitter, A: AuditSink>(
    api: &Gangway<E, A>,
    tctx: &AuditCtx<'_>,
    pid: &Uuid,
    op: &Operation,
    idx: usize,
    dry: bool,
) -> Outcome {
    match op {
        Operation::CreateShortcut { .. } => {
            shortcut::ShortcutExec.execute(api, tctx, pid, op, idx, dry)
        }
        Operation::CreateDesktopEntry { .. } => {
            desktop_entry::DesktopEntryExec.execute(api, tctx, pid, op, idx, dry)
        }
        Operation::RunProcess { .. } => {
            run_process::RunProcessExec.execute(api, tctx, pid, op, idx, dry)
        }
        Operation::WriteFile { .. } => {
            write_file::WriteFileExec.execute(api, tctx, pid, op, idx, dry)
        }
    }
}

/// Shared write path for the artifact-producing executors: emit the attempt
/// fact, stage the write, emit the result fact with the content hash.
pub(crate) fn write_artifact<E: FactsEmitter, A: AuditSink>(
    api: &Gangway<E, A>,
    tctx: &AuditCtx<'_>,
    aid: &Uuid,
    path: &Path,
    contents: &str,
    dry: bool,
) -> Outcome {
    let slog = StageLogger::new(tctx);
    let before_kind = kind_of(path);
    slog.apply_attempt()
        .op(aid.to_string())
        .path(path.display().to_string())
        .emit_success();

    // Read-only occupancy check, so dry-run surfaces the same refusal a
    // commit would.
    if !api.policy.overwrite_artifacts && path.symlink_metadata().is_ok() {
        let message = format!("write {} refused: already exists", path.display());
        slog.apply_result()
            .op(aid.to_string())
            .path(path.display().to_string())
            .field("before_kind", json!(before_kind))
            .field("error_id", json!(id_str(ErrorId::E_OPERATION)))
            .field("exit_code", json!(exit_code_for(ErrorId::E_OPERATION)))
            .emit_failure();
        return Outcome::Err { message };
    }

    if dry {
        slog.apply_result()
            .op(aid.to_string())
            .path(path.display().to_string())
            .field("before_kind", json!(before_kind))
            .field("after_kind", json!("file"))
            .emit_success();
        return Outcome::Ok { duration_ms: 0 };
    }

    let t0 = Instant::now();
    match write_atomic(path, contents.as_bytes(), api.policy.overwrite_artifacts) {
        Ok(()) => {
            let duration_ms = u64::try_from(t0.elapsed().as_millis()).unwrap_or(u64::MAX);
            slog.apply_result()
                .op(aid.to_string())
                .path(path.display().to_string())
                .field("before_kind", json!(before_kind))
                .field("after_kind", json!(kind_of(path)))
                .field("content_hash", json!(sha256_hex(contents.as_bytes())))
                .field("duration_ms", json!(duration_ms))
                .emit_success();
            Outcome::Ok { duration_ms }
        }
        Err(e) => {
            let message = format!("write {} failed: {e}", path.display());
            slog.apply_result()
                .op(aid.to_string())
                .path(path.display().to_string())
                .field("before_kind", json!(before_kind))
                .field("error_id", json!(id_str(ErrorId::E_OPERATION)))
                .field("exit_code", json!(exit_code_for(ErrorId::E_OPERATION)))
                .emit_failure();
            Outcome::Err { message }
        }
    }
}
