use uuid::Uuid;

use crate::api::Gangway;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::{ids::op_id, Operation, Outcome};

use super::OperationExecutor;

pub(crate) struct WriteFileExec;

impl<E: FactsEmitter, A: AuditSink> OperationExecutor<E, A> for WriteFileExec {
    fn execute(
        &self,
        api: &Gangway<E, A>,
        tctx: &AuditCtx<'_>,
        pid: &Uuid,
        op: &Operation,
        idx: usize,
        dry: bool,
    ) -> Outcome {
        let Operation::WriteFile { path, contents } = op else {
            return Outcome::Err {
                message: "expected WriteFile".to_string(),
            };
        };

        let aid = op_id(pid, op, idx);
        super::write_artifact(api, tctx, &aid, &path.as_path(), contents, dry)
    }
}
