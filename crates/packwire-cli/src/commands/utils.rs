//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use packwire_config::{LayoutLoader, ProjectLayout};
use path_clean::PathClean;
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned cleaned; relative ones are joined onto `cwd`
/// first.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}

/// Absolute project root from `--root`, or the current directory.
pub fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let root = match &args.root {
        Some(root) => resolve_path(root, &cwd),
        None => cwd,
    };

    if !root.is_dir() {
        return Err(CliError::FileNotFound(root));
    }

    Ok(root)
}

/// Load the layout named by `--layout`, else `<root>/packwire.toml`, else
/// the defaults.
pub fn load_layout(root: &Path, args: &ProjectArgs) -> Result<ProjectLayout> {
    let loader = LayoutLoader::new(root);
    let layout = match &args.layout {
        Some(path) => loader.load_from(path)?,
        None => loader.load()?,
    };

    debug!(entry = %layout.entry.display(), "layout loaded");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_root_uses_flag() {
        let temp = TempDir::new().unwrap();
        let args = ProjectArgs {
            root: Some(temp.path().to_path_buf()),
            layout: None,
        };
        assert_eq!(project_root(&args).unwrap(), temp.path());
    }

    #[test]
    fn test_resolve_path_joins_relative_onto_cwd() {
        let cwd = Path::new("/work/repo");
        assert_eq!(resolve_path(Path::new("app"), cwd), PathBuf::from("/work/repo/app"));
        assert_eq!(resolve_path(Path::new("./app/../web"), cwd), PathBuf::from("/work/repo/web"));
        assert_eq!(resolve_path(Path::new("/srv/app/"), cwd), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_project_root_is_absolute() {
        let root = project_root(&ProjectArgs::default()).unwrap();
        assert!(root.is_absolute());
    }

    #[test]
    fn test_project_root_must_exist() {
        let temp = TempDir::new().unwrap();
        let args = ProjectArgs {
            root: Some(temp.path().join("missing")),
            layout: None,
        };
        assert!(matches!(project_root(&args), Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_layout_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let layout = load_layout(temp.path(), &ProjectArgs::default()).unwrap();
        assert_eq!(layout, ProjectLayout::default());
    }
}
