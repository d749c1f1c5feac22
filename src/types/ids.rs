//! Deterministic UUIDv5 identifiers for plans and operations.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `plan_id` and `op_id` are reproducible across runs for the same
//! serialized operation sequence.
use std::fmt::Write;
use uuid::Uuid;

use crate::constants::NS_TAG;

use super::plan::{Operation, Plan};

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Serialize an operation into a stable, human-readable string used for
/// UUIDv5 input.
fn serialize_operation(op: &Operation) -> String {
    match op {
        Operation::CreateShortcut {
            link,
            target,
            arguments,
        } => format!(
            "S:{}->{} {}",
            link.rel().display(),
            target.display(),
            arguments.join(" ")
        ),
        Operation::CreateDesktopEntry { path, .. } => format!("D:{}", path.rel().display()),
        Operation::RunProcess {
            program, arguments, ..
        } => format!("P:{} {}", program.display(), arguments.join(" ")),
        Operation::WriteFile { path, .. } => format!("W:{}", path.rel().display()),
    }
}

/// Compute a deterministic UUIDv5 for a plan by serializing operations in
/// order. Two plans with identical operation sequences (including ordering)
/// have the same `plan_id`.
#[must_use]
pub fn plan_id(plan: &Plan) -> Uuid {
    let ns = namespace();
    let mut s = String::new();
    for op in &plan.operations {
        s.push_str(&serialize_operation(op));
        s.push('\n');
    }
    Uuid::new_v5(&ns, s.as_bytes())
}

/// Compute a deterministic UUIDv5 for an operation as a function of the plan
/// ID, the operation's serialized form, and its stable position index.
#[must_use]
pub fn op_id(plan_id: &Uuid, op: &Operation, idx: usize) -> Uuid {
    let mut s = serialize_operation(op);
    let _ = write!(s, "#{idx}");
    Uuid::new_v5(plan_id, s.as_bytes())
}
