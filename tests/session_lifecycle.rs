//! Session state machine coverage: terminal results, visited states, and
//! the auto-rollback and cancellation policies.

mod common;

use common::{ScriptedRunner, TestAudit, TestEmitter};
use gangway::adapters::FlagCancelProbe;
use gangway::errors::ApiError;
use gangway::logging::JsonlSink;
use gangway::policy::Policy;
use gangway::types::{ApplyMode, Outcome, SessionResult, SessionState};
use gangway::Gangway;

#[test]
fn completed_session_visits_the_expected_states() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;

    let api = Gangway::new(JsonlSink::default(), JsonlSink::default(), Policy::default())
        .with_process_runner(Box::new(ScriptedRunner::ok()));

    let report = api.run_session(&ctx, ApplyMode::Commit).unwrap();
    assert_eq!(report.result, SessionResult::Completed);
    assert_eq!(report.log.entries.len(), 3);
    assert!(report.rollback.is_none());
    assert_eq!(
        report.states,
        vec![
            SessionState::Building,
            SessionState::Planned,
            SessionState::Executing,
            SessionState::Completed,
        ]
    );
}

#[test]
fn failing_session_rolls_back_and_terminates_in_rolled_back() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;

    let api = Gangway::new(JsonlSink::default(), JsonlSink::default(), Policy::default())
        .with_process_runner(Box::new(ScriptedRunner::failing_on(0)));

    let report = api.run_session(&ctx, ApplyMode::Commit).unwrap();
    assert_eq!(report.result, SessionResult::RolledBack);
    assert_eq!(
        report.states,
        vec![
            SessionState::Building,
            SessionState::Planned,
            SessionState::Executing,
            SessionState::Failed,
            SessionState::RollingBack,
            SessionState::RolledBack,
        ]
    );
    let rollback = report.rollback.unwrap();
    assert_eq!(rollback.attempted, 1);
    assert!(!td.path().join("start_menu/Foo.lnk").exists());
}

#[test]
fn failed_session_without_auto_rollback_keeps_partial_state() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;

    let policy = Policy {
        auto_rollback: false,
        ..Policy::default()
    };
    let api = Gangway::new(JsonlSink::default(), JsonlSink::default(), policy)
        .with_process_runner(Box::new(ScriptedRunner::failing_on(0)));

    let report = api.run_session(&ctx, ApplyMode::Commit).unwrap();
    assert_eq!(report.result, SessionResult::Failed);
    assert!(report.rollback.is_none());
    assert_eq!(*report.states.last().unwrap(), SessionState::Failed);
    // Partial progress is left for the caller to inspect.
    assert!(td.path().join("start_menu/Foo.lnk").exists());
    assert_eq!(report.log.entries.len(), 2);
}

#[test]
fn configuration_error_has_no_side_effects() {
    let td = tempfile::tempdir().unwrap();
    let ctx = common::context_for(td.path(), "beos");

    let api = Gangway::new(JsonlSink::default(), JsonlSink::default(), Policy::default())
        .with_process_runner(Box::new(ScriptedRunner::ok()));

    let before = common::files_under(td.path());
    match api.run_session(&ctx, ApplyMode::Commit) {
        Err(ApiError::Configuration(_)) => {}
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert_eq!(common::files_under(td.path()), before);
}

#[test]
fn cancelled_session_halts_and_rolls_back() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;

    let probe = FlagCancelProbe::new();
    probe.cancel();
    let api = Gangway::new(JsonlSink::default(), JsonlSink::default(), Policy::default())
        .with_process_runner(Box::new(ScriptedRunner::ok()))
        .with_cancel_probe(Box::new(probe.clone()));

    let report = api.run_session(&ctx, ApplyMode::Commit).unwrap();
    assert_eq!(report.result, SessionResult::RolledBack);
    assert_eq!(report.log.entries.len(), 1);
    match &report.log.entries[0].outcome {
        Outcome::Err { message } => assert!(message.contains("cancelled")),
        other => panic!("expected cancelled entry, got {other:?}"),
    }
    // Nothing completed, so the sweep had nothing to undo.
    assert_eq!(report.rollback.unwrap().attempted, 0);
    assert!(!td.path().join("start_menu/Foo.lnk").exists());
}

#[test]
fn dry_run_failures_do_not_roll_back() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;
    // Occupied artifact path plus strict policy fails the first operation
    // even in dry-run, where the check is read-only.
    std::fs::write(td.path().join("start_menu/Foo.lnk"), b"occupied").unwrap();

    let api = Gangway::new(
        JsonlSink::default(),
        JsonlSink::default(),
        Policy::strict_preset(),
    )
    .with_process_runner(Box::new(ScriptedRunner::ok()));

    let report = api.run_session(&ctx, ApplyMode::DryRun).unwrap();
    assert_eq!(report.result, SessionResult::Failed);
    assert!(report.rollback.is_none());
}

#[test]
fn session_summary_fact_reports_the_terminal_result() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;

    let facts = TestEmitter::default();
    let api = Gangway::new(facts.clone(), TestAudit, Policy::default())
        .with_process_runner(Box::new(ScriptedRunner::ok()));

    let report = api.run_session(&ctx, ApplyMode::Commit).unwrap();
    assert_eq!(report.result, SessionResult::Completed);

    let events = facts.events.lock().unwrap();
    let summary = events
        .iter()
        .find(|(_, event, _, _)| event == "session.summary")
        .expect("session.summary fact");
    assert_eq!(summary.2, "success");
    assert_eq!(
        summary.3.get("result").and_then(|v| v.as_str()),
        Some("Completed")
    );
}
