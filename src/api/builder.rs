use crate::adapters::{CancelProbe, ProcessRunner};
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;

/// Builder for constructing a Gangway with ergonomic chaining.
/// Mirrors `Gangway::new(...).with_*` but avoids duplication at call sites.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    process: Option<Box<dyn ProcessRunner>>,
    cancel: Option<Box<dyn CancelProbe>>,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            process: None,
            cancel: None,
        }
    }

    #[must_use]
    pub fn process_runner(mut self, process: Box<dyn ProcessRunner>) -> Self {
        self.process = Some(process);
        self
    }

    #[must_use]
    pub fn cancel_probe(mut self, cancel: Box<dyn CancelProbe>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn build(self) -> super::Gangway<E, A> {
        let mut api = super::Gangway::new(self.facts, self.audit, self.policy);
        if let Some(process) = self.process {
            api = api.with_process_runner(process);
        }
        if let Some(cancel) = self.cancel {
            api = api.with_cancel_probe(cancel);
        }
        api
    }
}
