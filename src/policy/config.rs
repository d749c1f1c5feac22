/// Policy governs apply behavior and failure handling for one session.
#[derive(Clone, Debug)]
pub struct Policy {
    /// Replace existing artifacts at operation paths instead of failing
    /// the operation.
    pub overwrite_artifacts: bool,
    /// Roll back the completed prefix when a commit session fails.
    /// When disabled the session stops in the `Failed` terminal state and
    /// leaves partial progress for the caller to inspect.
    pub auto_rollback: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            overwrite_artifacts: true,
            auto_rollback: true,
        }
    }
}

impl Policy {
    /// Preset for hosts that must never clobber pre-existing artifacts:
    /// an occupied shortcut or entry path fails the operation and the
    /// session rolls back.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            overwrite_artifacts: false,
            auto_rollback: true,
        }
    }
}
