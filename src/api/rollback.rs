//! Rollback stage: reverse-order, best-effort undo of a log's completed
//! prefix.
//!
//! An undo failure is recorded in the report and emitted as a failure fact
//! but never aborts the sweep; every completed operation gets its
//! attempted-undo regardless of individual outcomes.

use log::Level;
use serde_json::json;

use crate::fs::atomic::remove_file_if_exists;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{now_iso, AuditSink, FactsEmitter, StageLogger};
use crate::types::{ExecutionLog, Inverse, RollbackReport};

use super::errors::{exit_code_for, id_str, ErrorId};
use super::Gangway;

pub(super) fn sweep<E: FactsEmitter, A: AuditSink>(
    api: &Gangway<E, A>,
    log: &ExecutionLog,
) -> RollbackReport {
    let pid = log
        .plan_uuid
        .map(|u| u.to_string())
        .unwrap_or_default();
    let tctx = AuditCtx::new(
        &api.facts,
        pid,
        now_iso(),
        AuditMode {
            dry_run: false,
            redact: false,
        },
    );
    let slog = StageLogger::new(&tctx);
    api.audit.log(Level::Info, "rollback: starting");

    let mut report = RollbackReport::default();
    for op in log.completed().into_iter().rev() {
        report.attempted += 1;
        match op.inverse() {
            Inverse::RemoveFile { path } => {
                let p = path.as_path();
                match remove_file_if_exists(&p) {
                    Ok(_) => slog.rollback().path(p.display().to_string()).emit_success(),
                    Err(e) => {
                        report
                            .errors
                            .push(format!("rollback remove {} failed: {e}", p.display()));
                        slog.rollback().path(p.display().to_string()).emit_failure();
                    }
                }
            }
            Inverse::RunProcess { program, arguments } => {
                match api.process.run(&program, &arguments) {
                    Ok(()) => slog
                        .rollback()
                        .path(program.display().to_string())
                        .emit_success(),
                    Err(failure) => {
                        report.errors.push(format!(
                            "rollback run {} failed: {failure}",
                            program.display()
                        ));
                        slog.rollback()
                            .path(program.display().to_string())
                            .emit_failure();
                    }
                }
            }
            Inverse::Unsupported { reason } => {
                report
                    .errors
                    .push(format!("rollback of {} unsupported: {reason}", op.kind()));
                slog.rollback()
                    .path(op.artifact().display().to_string())
                    .field("reason", json!(reason))
                    .emit_failure();
            }
        }
    }

    let mut summary = slog
        .rollback_summary()
        .field("attempted", json!(report.attempted));
    if report.errors.is_empty() {
        summary.emit_success();
    } else {
        summary = summary
            .field("rollback_errors", json!(report.errors))
            .field("error_id", json!(id_str(ErrorId::E_ROLLBACK)))
            .field("exit_code", json!(exit_code_for(ErrorId::E_ROLLBACK)));
        summary.emit_failure();
    }
    api.audit.log(Level::Info, "rollback: finished");

    report
}
