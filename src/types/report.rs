use serde::Serialize;
use uuid::Uuid;

use super::plan::Operation;

/// Outcome of one attempted operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok { duration_ms: u64 },
    Err { message: String },
}

impl Outcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }
}

/// One attempted operation and what became of it.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub operation: Operation,
    pub outcome: Outcome,
}

/// Append-only record of attempted operations.
///
/// The entry order is always a prefix of the plan that produced it: the
/// executor appends exactly one entry per attempted operation and stops
/// after the first `Err`.
#[derive(Clone, Debug, Default)]
pub struct ExecutionLog {
    pub plan_uuid: Option<Uuid>,
    pub entries: Vec<LogEntry>,
    pub duration_ms: u64,
}

impl ExecutionLog {
    /// Whether every attempted operation succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_ok())
    }

    /// Completed operations in log order; the rollback engine walks these
    /// in reverse.
    #[must_use]
    pub fn completed(&self) -> Vec<&Operation> {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_ok())
            .map(|e| &e.operation)
            .collect()
    }

    /// Message of the halting failure, when one occurred.
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| match &e.outcome {
            Outcome::Err { message } => Some(message.as_str()),
            Outcome::Ok { .. } => None,
        })
    }
}

/// Best-effort record of one rollback sweep. Errors never abort the sweep;
/// they accumulate here.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RollbackReport {
    pub attempted: usize,
    pub errors: Vec<String>,
}

/// Session lifecycle states, in transition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Building,
    Planned,
    Executing,
    Completed,
    Failed,
    RollingBack,
    RolledBack,
}

/// Terminal result of one install session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionResult {
    Completed,
    Failed,
    RolledBack,
}

/// Everything a caller needs to inspect a finished session: the terminal
/// result, the states visited in order, the frozen execution log, and the
/// rollback report when a sweep ran.
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub result: SessionResult,
    pub states: Vec<SessionState>,
    pub log: ExecutionLog,
    pub rollback: Option<RollbackReport>,
}
