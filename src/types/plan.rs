use std::path::PathBuf;

use super::safepath::SafePath;

/// Execution mode for the apply stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyMode {
    DryRun,
    Commit,
}

impl Default for ApplyMode {
    fn default() -> Self {
        ApplyMode::DryRun
    }
}

/// Field set of a freedesktop entry written for X11 targets.
/// `Version` and `Type` are fixed at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: String,
    pub exec: PathBuf,
    pub icon: PathBuf,
    pub terminal: bool,
}

/// One reversible provisioning action. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Write a launch-shortcut descriptor at `link` pointing to `target`.
    CreateShortcut {
        link: SafePath,
        target: PathBuf,
        arguments: Vec<String>,
    },
    /// Write a freedesktop entry file at `path`.
    CreateDesktopEntry { path: SafePath, entry: DesktopEntry },
    /// Run `program` to completion, blocking the executor. The inverse is
    /// formed from `undo_arguments` when present.
    RunProcess {
        program: PathBuf,
        arguments: Vec<String>,
        undo_arguments: Option<Vec<String>>,
    },
    /// Write `contents` to `path`.
    WriteFile { path: SafePath, contents: String },
}

/// Inverse-action descriptor: how to undo one completed operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inverse {
    RemoveFile {
        path: SafePath,
    },
    RunProcess {
        program: PathBuf,
        arguments: Vec<String>,
    },
    /// No reliable inverse exists; rollback records the reason and moves on.
    Unsupported {
        reason: &'static str,
    },
}

impl Operation {
    /// Derive the inverse-action descriptor for this operation.
    #[must_use]
    pub fn inverse(&self) -> Inverse {
        match self {
            Operation::CreateShortcut { link, .. } => Inverse::RemoveFile { path: link.clone() },
            Operation::CreateDesktopEntry { path, .. } => {
                Inverse::RemoveFile { path: path.clone() }
            }
            Operation::RunProcess {
                program,
                undo_arguments,
                ..
            } => match undo_arguments {
                Some(arguments) => Inverse::RunProcess {
                    program: program.clone(),
                    arguments: arguments.clone(),
                },
                None => Inverse::Unsupported {
                    reason: "process has no undo invocation",
                },
            },
            Operation::WriteFile { path, .. } => Inverse::RemoveFile { path: path.clone() },
        }
    }

    /// Stable kind label used in facts and error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::CreateShortcut { .. } => "create_shortcut",
            Operation::CreateDesktopEntry { .. } => "create_desktop_entry",
            Operation::RunProcess { .. } => "run_process",
            Operation::WriteFile { .. } => "write_file",
        }
    }

    /// The path this operation touches: the written artifact, or the
    /// program for a subprocess.
    #[must_use]
    pub fn artifact(&self) -> PathBuf {
        match self {
            Operation::CreateShortcut { link, .. } => link.as_path(),
            Operation::CreateDesktopEntry { path, .. } => path.as_path(),
            Operation::RunProcess { program, .. } => program.clone(),
            Operation::WriteFile { path, .. } => path.as_path(),
        }
    }
}

/// Ordered operation list for one install session.
#[derive(Clone, Debug, Default)]
pub struct Plan {
    pub operations: Vec<Operation>,
}
