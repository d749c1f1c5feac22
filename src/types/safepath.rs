use std::path::{Component, Path, PathBuf};

use super::errors::{Error, Result};

/// A path proven to live under a fixed absolute root.
///
/// Every artifact path the engine writes or removes is built through
/// [`SafePath::from_rooted`], which rejects `..`, non-normal components,
/// and anything that would land outside the root. Shortcut registries,
/// application directories, and the install target each act as a root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafePath {
    root: PathBuf,
    rel: PathBuf,
}

impl SafePath {
    /// Validate `candidate` against `root` and return the confined path.
    ///
    /// Absolute candidates must already live under `root`; relative ones are
    /// normalized (dropping `.`) and re-rooted. `root` itself must be absolute.
    pub fn from_rooted(root: &Path, candidate: &Path) -> Result<Self> {
        if !root.is_absolute() {
            return Err(Error::invalid_path(format!(
                "root {} is not absolute",
                root.display()
            )));
        }
        let effective = if candidate.is_absolute() {
            candidate
                .strip_prefix(root)
                .map_err(|_| {
                    Error::invalid_path(format!(
                        "{} escapes {}",
                        candidate.display(),
                        root.display()
                    ))
                })?
                .to_path_buf()
        } else {
            candidate.to_path_buf()
        };

        let mut rel = PathBuf::new();
        for seg in effective.components() {
            match seg {
                Component::CurDir => {}
                Component::Normal(p) => rel.push(p),
                Component::ParentDir => {
                    return Err(Error::invalid_path(format!(
                        "{} contains a parent component",
                        candidate.display()
                    )));
                }
                _ => {
                    return Err(Error::invalid_path(format!(
                        "{} contains an unsupported component",
                        candidate.display()
                    )));
                }
            }
        }
        Ok(Self {
            root: root.to_path_buf(),
            rel,
        })
    }

    /// Full path: root joined with the relative component.
    pub fn as_path(&self) -> PathBuf {
        self.root.join(&self.rel)
    }

    /// The relative component under the root.
    pub fn rel(&self) -> &Path {
        &self.rel
    }

    /// The root this path is confined to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_parent_components() {
        let root = Path::new("/opt/app");
        assert!(SafePath::from_rooted(root, Path::new("../etc/passwd")).is_err());
    }

    #[test]
    fn rejects_relative_root() {
        assert!(SafePath::from_rooted(Path::new("opt"), Path::new("a.lnk")).is_err());
    }

    #[test]
    fn rejects_absolute_candidate_outside_root() {
        let root = Path::new("/opt/app");
        assert!(SafePath::from_rooted(root, Path::new("/etc/passwd")).is_err());
    }

    #[test]
    fn accepts_absolute_candidate_inside_root() {
        let root = Path::new("/opt/app");
        let sp = SafePath::from_rooted(root, Path::new("/opt/app/menu/Foo.lnk")).unwrap();
        assert_eq!(sp.rel(), Path::new("menu/Foo.lnk"));
        assert_eq!(sp.as_path(), Path::new("/opt/app/menu/Foo.lnk"));
    }

    #[test]
    fn normalizes_curdir_components() {
        let root = Path::new("/opt/app");
        let sp = SafePath::from_rooted(root, Path::new("./menu/./Foo.lnk")).unwrap();
        assert_eq!(sp.rel(), Path::new("menu/Foo.lnk"));
    }
}
