//! Apply stage: sequential execution with halt-on-first-failure.
//!
//! Side-effects:
//! - Emits `apply.attempt` and `apply.result` facts per operation, plus a
//!   final summary fact with inferred stable error IDs.
//! - Polls the cancel probe between operations; a cancelled run appends a
//!   failed entry for the pending operation and halts, which the session
//!   driver treats exactly like an operation failure.
//! - In dry-run mode no filesystem or subprocess side effects occur and
//!   fact timestamps are redacted to the zero value.

use std::time::Instant;

use log::Level;
use serde_json::json;

use crate::api::errors::{exit_code_for, id_str, infer_summary_error_ids, ErrorId};
use crate::api::Gangway;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{ts_for_mode, AuditSink, FactsEmitter, StageLogger};
use crate::types::ids::{op_id, plan_id};
use crate::types::{ApplyMode, ExecutionLog, LogEntry, Outcome, Plan};

mod executors;

pub(crate) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Gangway<E, A>,
    plan: &Plan,
    mode: ApplyMode,
) -> ExecutionLog {
    let t0 = Instant::now();
    let dry = matches!(mode, ApplyMode::DryRun);
    let pid = plan_id(plan);
    let tctx = AuditCtx::new(
        &api.facts,
        pid.to_string(),
        ts_for_mode(&mode),
        AuditMode {
            dry_run: dry,
            redact: dry,
        },
    );
    let slog = StageLogger::new(&tctx);

    api.audit.log(Level::Info, "apply: starting");

    let mut entries: Vec<LogEntry> = Vec::new();
    for (idx, op) in plan.operations.iter().enumerate() {
        if let Some(cancel) = &api.cancel {
            if cancel.is_cancelled() {
                let message = format!("cancelled before {}", op.kind());
                slog.apply_attempt()
                    .op(op_id(&pid, op, idx).to_string())
                    .path(op.artifact().display().to_string())
                    .field("error_id", json!(id_str(ErrorId::E_CANCELLED)))
                    .field("exit_code", json!(exit_code_for(ErrorId::E_CANCELLED)))
                    .emit_failure();
                entries.push(LogEntry {
                    operation: op.clone(),
                    outcome: Outcome::Err { message },
                });
                break;
            }
        }

        let outcome = executors::dispatch(api, &tctx, &pid, op, idx, dry);
        let failed = !outcome.is_ok();
        entries.push(LogEntry {
            operation: op.clone(),
            outcome,
        });
        if failed {
            break;
        }
    }

    let errors: Vec<String> = entries
        .iter()
        .filter_map(|e| match &e.outcome {
            Outcome::Err { message } => Some(message.clone()),
            Outcome::Ok { .. } => None,
        })
        .collect();

    let mut summary = json!({
        "attempted": entries.len(),
        "planned": plan.operations.len(),
    });
    if !errors.is_empty() {
        if let Some(obj) = summary.as_object_mut() {
            obj.insert(
                "summary_error_ids".to_string(),
                json!(infer_summary_error_ids(&errors)),
            );
            obj.insert("error_id".to_string(), json!(id_str(ErrorId::E_OPERATION)));
            obj.insert(
                "exit_code".to_string(),
                json!(exit_code_for(ErrorId::E_OPERATION)),
            );
        }
        slog.apply_result().merge(summary).emit_failure();
    } else {
        slog.apply_result().merge(summary).emit_success();
    }

    api.audit.log(Level::Info, "apply: finished");

    ExecutionLog {
        plan_uuid: Some(pid),
        entries,
        duration_ms: u64::try_from(t0.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
}
