// Facade for API module; delegates to submodules under src/api/

use crate::adapters::{CancelProbe, ProcessRunner, SystemProcessRunner};
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;
use crate::types::{ApplyMode, ExecutionLog, Plan, PlatformContext, RollbackReport, SessionReport};

mod apply;
mod builder;
pub mod errors;
mod plan;
mod rollback;
mod session;

pub use builder::ApiBuilder;

/// Provisioning engine facade: plan, apply, roll back, run sessions.
pub struct Gangway<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    process: Box<dyn ProcessRunner>,
    cancel: Option<Box<dyn CancelProbe>>, // None when the host never cancels
}

impl<E: FactsEmitter, A: AuditSink> Gangway<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            process: Box::new(SystemProcessRunner),
            cancel: None,
        }
    }

    pub fn with_process_runner(mut self, process: Box<dyn ProcessRunner>) -> Self {
        self.process = process;
        self
    }

    pub fn with_cancel_probe(mut self, cancel: Box<dyn CancelProbe>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Build the ordered operation list for `ctx`.
    ///
    /// Fails with [`errors::ApiError::Configuration`] on an unrecognized OS
    /// tag, a relative root directory, or a name that escapes its registry
    /// root; no operations run in that case.
    pub fn plan(&self, ctx: &PlatformContext) -> Result<Plan, errors::ApiError> {
        plan::build(self, ctx)
    }

    /// Execute `plan` strictly in order, halting at the first failure.
    /// The log is returned in all cases so callers can inspect partial
    /// progress.
    pub fn apply(&self, plan: &Plan, mode: ApplyMode) -> ExecutionLog {
        apply::run(self, plan, mode)
    }

    /// Undo the completed prefix of `log` in reverse order, best-effort.
    /// Only meaningful for logs produced by a commit-mode apply.
    pub fn rollback(&self, log: &ExecutionLog) -> RollbackReport {
        rollback::sweep(self, log)
    }

    /// Run one full session: plan, execute, and on failure roll back
    /// according to policy.
    pub fn run_session(
        &self,
        ctx: &PlatformContext,
        mode: ApplyMode,
    ) -> Result<SessionReport, errors::ApiError> {
        session::run(self, ctx, mode)
    }
}
