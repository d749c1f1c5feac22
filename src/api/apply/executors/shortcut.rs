use uuid::Uuid;

use crate::api::Gangway;
use crate::fs::shortcut::render_shortcut;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::{ids::op_id, Operation, Outcome};

use super::OperationExecutor;

pub(crate) struct ShortcutExec;

impl<E: FactsEmitter, A: AuditSink> OperationExecutor<E, A> for ShortcutExec {
    fn execute(
        &self,
        api: &Gangway<E, A>,
        tctx: &AuditCtx<'_>,
        pid: &Uuid,
        op: &Operation,
        idx: usize,
        dry: bool,
    ) -> Outcome {
        let Operation::CreateShortcut {
            link,
            target,
            arguments,
        } = op
        else {
            return Outcome::Err {
                message: "expected CreateShortcut".to_string(),
            };
        };

        let aid = op_id(pid, op, idx);
        let contents = render_shortcut(target, arguments);
        super::write_artifact(api, tctx, &aid, &link.as_path(), &contents, dry)
    }
}
