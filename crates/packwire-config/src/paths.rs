//! Absolute path resolution against the configuration root.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Join `fragment` onto `root` and lexically clean the result.
///
/// The fragment is always treated as relative: a leading `/` does not
/// discard `root`. Nothing touches the filesystem and malformed fragments
/// simply produce malformed paths.
///
/// # Example
///
/// ```
/// use packwire_config::resolve;
/// use std::path::{Path, PathBuf};
///
/// let out = resolve(Path::new("/srv/app"), "./public");
/// assert_eq!(out, PathBuf::from("/srv/app/public"));
/// ```
pub fn resolve(root: &Path, fragment: impl AsRef<Path>) -> PathBuf {
    let relative: PathBuf = fragment
        .as_ref()
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect();

    root.join(relative).clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_current_dir_segments() {
        let root = Path::new("/srv/app");
        assert_eq!(resolve(root, "./public"), root.join("public"));
        assert_eq!(
            resolve(root, "./src/Client/Client.fsproj"),
            PathBuf::from("/srv/app/src/Client/Client.fsproj")
        );
    }

    #[test]
    fn drops_trailing_separator() {
        let root = Path::new("/srv/app");
        assert_eq!(
            resolve(root, "./node_modules/"),
            PathBuf::from("/srv/app/node_modules")
        );
    }

    #[test]
    fn leading_slash_stays_under_root() {
        let root = Path::new("/srv/app");
        assert_eq!(resolve(root, "/public"), PathBuf::from("/srv/app/public"));
    }

    #[test]
    fn parent_segments_are_collapsed() {
        let root = Path::new("/srv/app");
        assert_eq!(resolve(root, "../shared"), PathBuf::from("/srv/shared"));
    }

    #[test]
    fn empty_fragment_is_root() {
        let root = Path::new("/srv/app");
        assert_eq!(resolve(root, ""), PathBuf::from("/srv/app"));
    }
}
