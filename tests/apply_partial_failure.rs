//! Halt-on-first-failure semantics for a three-operation Windows plan
//! whose middle operation (the redistributable) fails.

mod common;

use common::ScriptedRunner;
use gangway::logging::JsonlSink;
use gangway::policy::Policy;
use gangway::types::{ApplyMode, Outcome};
use gangway::Gangway;

#[test]
fn halts_after_the_failed_subprocess_and_rolls_back_only_the_prefix() {
    let td = tempfile::tempdir().unwrap();
    let mut ctx = common::win_context(td.path());
    ctx.offline_only = true;

    let runner = ScriptedRunner::failing_on(0);
    let api = Gangway::new(JsonlSink::default(), JsonlSink::default(), Policy::default())
        .with_process_runner(Box::new(runner.clone()));

    let plan = api.plan(&ctx).unwrap();
    assert_eq!(plan.operations.len(), 3);

    let log = api.apply(&plan, ApplyMode::Commit);

    // Exactly two entries: the launch shortcut succeeded, the subprocess
    // failed, and the uninstall shortcut was never attempted.
    assert_eq!(log.entries.len(), 2);
    assert!(matches!(log.entries[0].outcome, Outcome::Ok { .. }));
    assert!(matches!(log.entries[1].outcome, Outcome::Err { .. }));
    assert!(td.path().join("start_menu/Foo.lnk").exists());
    assert!(!td.path().join("start_menu/Uninstall.lnk").exists());

    let report = api.rollback(&log);
    assert_eq!(report.attempted, 1);
    assert!(report.errors.is_empty());
    assert!(!td.path().join("start_menu/Foo.lnk").exists());
    // Only the failed install invocation reached the runner; a failed
    // subprocess has nothing to undo.
    assert_eq!(runner.calls().len(), 1);
}
