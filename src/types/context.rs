use std::path::PathBuf;

use crate::constants::{DEFAULT_MAINTENANCE_TOOL, REDIST_BINARY};

use super::errors::{Error, Result};

/// Target operating system for one install session.
///
/// Closed set: the plan builder refuses any tag outside it, so nothing
/// downstream ever sees an unrecognized platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsTag {
    Windows,
    MacOs,
    X11,
}

impl OsTag {
    /// Parse the host-supplied tag (`win`, `mac`, `x11`).
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "win" => Ok(OsTag::Windows),
            "mac" => Ok(OsTag::MacOs),
            "x11" => Ok(OsTag::X11),
            other => Err(Error::config(format!("unsupported os tag: {other}"))),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OsTag::Windows => "win",
            OsTag::MacOs => "mac",
            OsTag::X11 => "x11",
        }
    }
}

/// Host shortcut-registry locations for the target platform.
#[derive(Clone, Debug)]
pub struct RegistryDirs {
    /// Start-menu programs directory (Windows).
    pub start_menu: PathBuf,
    /// User desktop directory (Windows).
    pub desktop: PathBuf,
    /// Applications directory for desktop entries and launch registrations
    /// (X11 and macOS).
    pub applications: PathBuf,
}

/// Read-only configuration snapshot for one install session.
///
/// Populated by the installer host before planning and never mutated
/// afterwards; the engine holds no other ambient state.
#[derive(Clone, Debug)]
pub struct PlatformContext {
    /// Raw host-supplied OS tag, validated by the plan builder.
    pub os_tag: String,
    /// Install target directory (absolute).
    pub target_dir: PathBuf,
    /// Shortcut-registry directories on the host.
    pub registry: RegistryDirs,
    /// Binary base name of the installed product.
    pub product_name: String,
    /// Human-facing name used for shortcut and entry labels.
    pub display_name: String,
    /// Binary base name of the maintenance tool.
    pub maintenance_tool: String,
    /// Offline installs get a single uninstall entry point instead of the
    /// full maintenance set.
    pub offline_only: bool,
    /// Whether the host requested a desktop launch shortcut.
    pub desktop_shortcut: bool,
    /// Redistributable binary bundled in the target directory, if any.
    pub redistributable: Option<String>,
}

impl PlatformContext {
    /// Context with the host-independent defaults: display name mirrors the
    /// product, standard maintenance tool, redistributable bundled, no
    /// desktop shortcut, online mode.
    pub fn new(
        os_tag: impl Into<String>,
        target_dir: PathBuf,
        registry: RegistryDirs,
        product_name: impl Into<String>,
    ) -> Self {
        let product_name = product_name.into();
        Self {
            os_tag: os_tag.into(),
            target_dir,
            registry,
            display_name: product_name.clone(),
            product_name,
            maintenance_tool: DEFAULT_MAINTENANCE_TOOL.to_string(),
            offline_only: false,
            desktop_shortcut: false,
            redistributable: Some(REDIST_BINARY.to_string()),
        }
    }
}
