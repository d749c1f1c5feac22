use uuid::Uuid;

use crate::api::Gangway;
use crate::fs::desktop::render_desktop_entry;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::{ids::op_id, Operation, Outcome};

use super::OperationExecutor;

pub(crate) struct DesktopEntryExec;

impl<E: FactsEmitter, A: AuditSink> OperationExecutor<E, A> for DesktopEntryExec {
    fn execute(
        &self,
        api: &Gangway<E, A>,
        tctx: &AuditCtx<'_>,
        pid: &Uuid,
        op: &Operation,
        idx: usize,
        dry: bool,
    ) -> Outcome {
        let Operation::CreateDesktopEntry { path, entry } = op else {
            return Outcome::Err {
                message: "expected CreateDesktopEntry".to_string(),
            };
        };

        let aid = op_id(pid, op, idx);
        let contents = render_desktop_entry(entry);
        super::write_artifact(api, tctx, &aid, &path.as_path(), &contents, dry)
    }
}
