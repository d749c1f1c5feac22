//! Shared crate-wide constants for Gangway.
//!
//! Centralizes magic values and default labels used across modules.
//! Adjusting these here will propagate through the crate.

/// File extension for shortcut descriptor files written into the host
/// shortcut registry (`<name>.lnk`).
pub const SHORTCUT_EXT: &str = "lnk";

/// File extension for freedesktop entries written on X11 targets.
pub const DESKTOP_ENTRY_EXT: &str = "desktop";

/// `Version=` value emitted in every desktop entry.
pub const DESKTOP_ENTRY_VERSION: &str = "1.1";

/// Icon file expected at the root of the install target directory and
/// referenced by desktop entries.
pub const ICON_FILE: &str = "main.png";

/// Subdirectory of a macOS bundle holding the launch binary.
pub const MAC_BUNDLE_BIN_DIR: &str = "Contents/MacOS";

/// Default redistributable runtime shipped alongside Windows installs.
pub const REDIST_BINARY: &str = "vc_redist.x64.exe";

/// Fixed silent-install arguments for the redistributable subprocess.
pub const REDIST_INSTALL_ARGS: &[&str] = &["/install", "/passive", "/norestart", "/quiet"];

/// Inverse invocation for the redistributable subprocess.
pub const REDIST_UNINSTALL_ARGS: &[&str] = &["/uninstall", "/passive", "/norestart", "/quiet"];

/// Default name of the maintenance tool binary when the host supplies none.
pub const DEFAULT_MAINTENANCE_TOOL: &str = "MaintenanceTool";

/// Shortcut names for the maintenance tool entry points.
pub const UNINSTALL_SHORTCUT_NAME: &str = "Uninstall";
pub const MANAGE_PACKAGES_SHORTCUT_NAME: &str = "ManagePackages";
pub const UPDATE_SHORTCUT_NAME: &str = "Update";

/// Maintenance tool arguments behind the shortcut entry points.
pub const MANAGE_PACKAGES_ARG: &str = "--manage-packages";
pub const UPDATER_ARG: &str = "--updater";
pub const UNINSTALL_ONLY_ARG: &str = "uninstallOnly=1";

/// Temporary filename suffix used while staging artifact writes.
/// The temporary name is constructed as `.{fname}.{pid}.{ctr}{TMP_SUFFIX}`.
pub const TMP_SUFFIX: &str = ".gangway.tmp";

/// UUIDv5 namespace tag for deterministic plan/operation IDs.
pub const NS_TAG: &str = "https://gangway/provision";
