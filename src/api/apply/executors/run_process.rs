use std::time::Instant;

use serde_json::json;
use uuid::Uuid;

use crate::api::errors::{exit_code_for, id_str, ErrorId};
use crate::api::Gangway;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::types::{ids::op_id, Operation, Outcome};

use super::OperationExecutor;

pub(crate) struct RunProcessExec;

impl<E: FactsEmitter, A: AuditSink> OperationExecutor<E, A> for RunProcessExec {
    fn execute(
        &self,
        api: &Gangway<E, A>,
        tctx: &AuditCtx<'_>,
        pid: &Uuid,
        op: &Operation,
        idx: usize,
        dry: bool,
    ) -> Outcome {
        let Operation::RunProcess {
            program, arguments, ..
        } = op
        else {
            return Outcome::Err {
                message: "expected RunProcess".to_string(),
            };
        };

        let aid = op_id(pid, op, idx);
        let slog = StageLogger::new(tctx);
        slog.apply_attempt()
            .op(aid.to_string())
            .path(program.display().to_string())
            .field("arguments", json!(arguments))
            .emit_success();

        if dry {
            slog.apply_result()
                .op(aid.to_string())
                .path(program.display().to_string())
                .emit_success();
            return Outcome::Ok { duration_ms: 0 };
        }

        let t0 = Instant::now();
        match api.process.run(program, arguments) {
            Ok(()) => {
                let duration_ms = u64::try_from(t0.elapsed().as_millis()).unwrap_or(u64::MAX);
                slog.apply_result()
                    .op(aid.to_string())
                    .path(program.display().to_string())
                    .field("duration_ms", json!(duration_ms))
                    .emit_success();
                Outcome::Ok { duration_ms }
            }
            Err(failure) => {
                let message = format!("run {} failed: {failure}", program.display());
                slog.apply_result()
                    .op(aid.to_string())
                    .path(program.display().to_string())
                    .field("process_exit", json!(failure.exit_code))
                    .field("error_id", json!(id_str(ErrorId::E_PROCESS)))
                    .field("exit_code", json!(exit_code_for(ErrorId::E_PROCESS)))
                    .emit_failure();
                Outcome::Err { message }
            }
        }
    }
}
