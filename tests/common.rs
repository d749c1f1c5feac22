//! Shared test helpers for the gangway integration tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::Level;
use serde_json::Value;

use gangway::adapters::{ProcessFailure, ProcessRunner};
use gangway::logging::{AuditSink, FactsEmitter};
use gangway::types::{PlatformContext, RegistryDirs};

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default, Debug)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// A no-op audit sink for tests.
#[derive(Clone, Copy, Default)]
pub struct TestAudit;

impl AuditSink for TestAudit {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Process double that records every invocation and fails the call whose
/// zero-based index matches `fail_on_call`.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    pub calls: Arc<Mutex<Vec<(PathBuf, Vec<String>)>>>,
    pub fail_on_call: Option<usize>,
}

impl ScriptedRunner {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &Path, arguments: &[String]) -> Result<(), ProcessFailure> {
        let mut calls = self.calls.lock().unwrap();
        let idx = calls.len();
        calls.push((program.to_path_buf(), arguments.to_vec()));
        if self.fail_on_call == Some(idx) {
            Err(ProcessFailure {
                exit_code: Some(1),
                message: format!("{} exited with failure", program.display()),
            })
        } else {
            Ok(())
        }
    }
}

/// Context for `os_tag` rooted in a temp dir, with the target and registry
/// directories pre-created so round-trip checks see a stable baseline.
pub fn context_for(root: &Path, os_tag: &str) -> PlatformContext {
    let target = root.join("target");
    let registry = RegistryDirs {
        start_menu: root.join("start_menu"),
        desktop: root.join("desktop"),
        applications: root.join("applications"),
    };
    for dir in [
        &target,
        &registry.start_menu,
        &registry.desktop,
        &registry.applications,
    ] {
        std::fs::create_dir_all(dir).unwrap();
    }
    PlatformContext::new(os_tag, target, registry, "Foo")
}

/// Windows context rooted in a temp dir.
pub fn win_context(root: &Path) -> PlatformContext {
    context_for(root, "win")
}

/// All regular files under `root`, relative paths, sorted. Used to compare
/// observable filesystem state before and after a session.
pub fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    collect_files(root, root, &mut out);
    out.sort();
    out
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            out.push(path.strip_prefix(root).unwrap().to_path_buf());
        }
    }
}
