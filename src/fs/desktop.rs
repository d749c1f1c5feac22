//! Freedesktop desktop-entry rendering for X11 targets.
use crate::constants::DESKTOP_ENTRY_VERSION;
use crate::types::plan::DesktopEntry;

/// Render a `.desktop` file with the fixed field set:
/// `Version`, `Type`, `Terminal`, `Exec`, `Name`, `Icon`.
pub fn render_desktop_entry(entry: &DesktopEntry) -> String {
    format!(
        "[Desktop Entry]\nVersion={}\nType=Application\nTerminal={}\nExec={}\nName={}\nIcon={}\n",
        DESKTOP_ENTRY_VERSION,
        entry.terminal,
        entry.exec.display(),
        entry.name,
        entry.icon.display(),
    )
}
