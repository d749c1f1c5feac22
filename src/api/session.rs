//! Session driver for the install state machine.
//!
//! `Building -> Planned -> Executing -> {Completed | Failed}`;
//! `Failed -> RollingBack -> RolledBack`. No transition skips a state;
//! `Completed` and `RolledBack` are terminal. A configuration error
//! surfaces before `Planned` and involves no rollback since nothing ran.

use log::Level;
use serde_json::json;

use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{ts_for_mode, AuditSink, FactsEmitter, StageLogger};
use crate::types::{ApplyMode, PlatformContext, SessionReport, SessionResult, SessionState};

use super::errors::{exit_code_for, id_str, ApiError, ErrorId};
use super::Gangway;

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Gangway<E, A>,
    ctx: &PlatformContext,
    mode: ApplyMode,
) -> Result<SessionReport, ApiError> {
    let dry = matches!(mode, ApplyMode::DryRun);
    let mut states = vec![SessionState::Building];

    let plan = match super::plan::build(api, ctx) {
        Ok(plan) => plan,
        Err(e) => {
            // Nothing ran, so no rollback; record the refusal in the
            // fact stream and surface it.
            let tctx = AuditCtx::new(
                &api.facts,
                String::new(),
                ts_for_mode(&mode),
                AuditMode {
                    dry_run: dry,
                    redact: dry,
                },
            );
            let slog = StageLogger::new(&tctx);
            slog.session_summary()
                .field("error", json!(e.to_string()))
                .field("error_id", json!(id_str(ErrorId::E_CONFIG)))
                .field("exit_code", json!(exit_code_for(ErrorId::E_CONFIG)))
                .emit_failure();
            return Err(e);
        }
    };
    states.push(SessionState::Planned);

    states.push(SessionState::Executing);
    let log = super::apply::run(api, &plan, mode);

    let (result, rollback) = if log.succeeded() {
        states.push(SessionState::Completed);
        (SessionResult::Completed, None)
    } else {
        states.push(SessionState::Failed);
        // Dry-run failures have no side effects to undo.
        if api.policy.auto_rollback && !dry {
            states.push(SessionState::RollingBack);
            let report = super::rollback::sweep(api, &log);
            states.push(SessionState::RolledBack);
            (SessionResult::RolledBack, Some(report))
        } else {
            (SessionResult::Failed, None)
        }
    };

    let pid = log
        .plan_uuid
        .map(|u| u.to_string())
        .unwrap_or_default();
    let tctx = AuditCtx::new(
        &api.facts,
        pid,
        ts_for_mode(&mode),
        AuditMode {
            dry_run: dry,
            redact: dry,
        },
    );
    let slog = StageLogger::new(&tctx);
    let mut ev = slog
        .session_summary()
        .field(
            "result",
            serde_json::to_value(result).unwrap_or_default(),
        )
        .field("attempted", json!(log.entries.len()));
    if let Some(rb) = &rollback {
        ev = ev.field("rollback", serde_json::to_value(rb).unwrap_or_default());
    }
    match result {
        SessionResult::Completed => ev.emit_success(),
        SessionResult::Failed | SessionResult::RolledBack => ev.emit_failure(),
    }
    api.audit.log(Level::Info, "session: finished");

    Ok(SessionReport {
        result,
        states,
        log,
        rollback,
    })
}
