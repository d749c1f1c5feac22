//! Shortcut descriptor rendering.
//!
//! The engine writes `.lnk`-equivalent descriptor files into the host
//! shortcut registry; encoding them into the platform's binary shortcut
//! format is the host integration's concern, not this crate's.
use std::path::Path;

/// Render the descriptor body for a launch shortcut.
pub fn render_shortcut(target: &Path, arguments: &[String]) -> String {
    let mut out = String::from("[Shortcut]\n");
    out.push_str(&format!("Target={}\n", target.display()));
    if !arguments.is_empty() {
        out.push_str(&format!("Arguments={}\n", arguments.join(" ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_target_only() {
        let body = render_shortcut(&PathBuf::from("/opt/app/Foo.exe"), &[]);
        assert_eq!(body, "[Shortcut]\nTarget=/opt/app/Foo.exe\n");
    }

    #[test]
    fn renders_arguments_when_present() {
        let body = render_shortcut(
            &PathBuf::from("/opt/app/tool.exe"),
            &["--manage-packages".to_string()],
        );
        assert!(body.ends_with("Arguments=--manage-packages\n"));
    }
}
