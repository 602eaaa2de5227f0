//! Files in the scratch directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::{Detected, Interpreter};
use crate::Kind;

/// Default scratch directory uploaded samples are stored in.
pub const DEFAULT_SCRATCH_DIR: &str = "/tmp";

/// Resolve a relative file name inside `root`.
///
/// The name is cleaned lexically as if it were rooted at `root`: `.` is
/// dropped and `..` removes the previous component but never climbs above
/// the root. Absolute names are treated as relative. The result therefore
/// always lies inside `root`.
///
/// Returns `None` if nothing is left after cleaning.
///
/// # Examples
/// ```
/// use inputtype::resolve_in_scratch;
/// use std::path::Path;
///
/// let root = Path::new("/tmp");
/// assert_eq!(resolve_in_scratch(root, "a/./b/../c"), Some(root.join("a/c")));
/// assert_eq!(resolve_in_scratch(root, "../etc/shadow"), Some(root.join("etc/shadow")));
/// assert_eq!(resolve_in_scratch(root, "a/.."), None);
/// ```
pub fn resolve_in_scratch(root: &Path, name: &str) -> Option<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::ParentDir => {
                parts.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if parts.is_empty() {
        return None;
    }

    let mut path = root.to_path_buf();
    path.extend(parts);
    Some(path)
}

/// Check that `path` exists and, with all symlinks resolved, still lies
/// inside `root`.
///
/// Returns `false` if either path cannot be resolved.
pub fn is_confined(root: &Path, path: &Path) -> bool {
    let (Ok(root), Ok(real)) = (fs::canonicalize(root), fs::canonicalize(path)) else {
        return false;
    };
    real.starts_with(root)
}

/// FileInterpreter accepts names of entries that exist in the scratch directory.
///
/// This is the only interpreter that touches the filesystem. Symlinks are
/// followed, but only if their target is inside the scratch directory too.
pub struct FileInterpreter {
    root: PathBuf,
}

impl FileInterpreter {
    /// Create an interpreter resolving names against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Interpreter for FileInterpreter {
    fn kind(&self) -> Kind {
        Kind::File
    }

    fn interpret(&self, input: &str) -> Option<Detected> {
        let path = resolve_in_scratch(&self.root, input)?;
        if is_confined(&self.root, &path) {
            Some(Detected::File(path))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_plain_name() {
        let root = Path::new("/srv/scratch");
        assert_eq!(
            resolve_in_scratch(root, "sample.bin"),
            Some(PathBuf::from("/srv/scratch/sample.bin"))
        );
    }

    #[test]
    fn test_resolve_stays_in_root() {
        let root = Path::new("/srv/scratch");
        assert_eq!(
            resolve_in_scratch(root, "../../../etc/passwd"),
            Some(PathBuf::from("/srv/scratch/etc/passwd"))
        );
        assert_eq!(
            resolve_in_scratch(root, "/etc/passwd"),
            Some(PathBuf::from("/srv/scratch/etc/passwd"))
        );
        assert_eq!(
            resolve_in_scratch(root, "a/b/../../../c"),
            Some(PathBuf::from("/srv/scratch/c"))
        );
    }

    #[test]
    fn test_resolve_empty_after_cleaning() {
        let root = Path::new("/srv/scratch");
        assert_eq!(resolve_in_scratch(root, "."), None);
        assert_eq!(resolve_in_scratch(root, ".."), None);
        assert_eq!(resolve_in_scratch(root, "/"), None);
    }

    #[test]
    fn test_interpret_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sample"), b"MZ").unwrap();

        let interpreter = FileInterpreter::new(dir.path());
        assert_eq!(
            interpreter.interpret("sample"),
            Some(Detected::File(dir.path().join("sample")))
        );
        assert_eq!(
            interpreter.interpret("../sample"),
            Some(Detected::File(dir.path().join("sample")))
        );
    }

    #[test]
    fn test_interpret_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let interpreter = FileInterpreter::new(dir.path());

        assert_eq!(interpreter.interpret("missing"), None);
        assert_eq!(interpreter.interpret("../invalidtopleveldirectory/invalidfile"), None);
        assert_eq!(interpreter.interpret("."), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_out_of_root_is_not_a_file() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let secret = outside.path().join("secret");
        fs::write(&secret, b"keys").unwrap();
        symlink(&secret, dir.path().join("innocent")).unwrap();
        symlink(outside.path(), dir.path().join("linkdir")).unwrap();

        let interpreter = FileInterpreter::new(dir.path());
        assert_eq!(interpreter.interpret("innocent"), None);
        assert_eq!(interpreter.interpret("linkdir/secret"), None);
        assert!(!is_confined(dir.path(), &dir.path().join("innocent")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_inside_root() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sample"), b"MZ").unwrap();
        symlink(dir.path().join("sample"), dir.path().join("alias")).unwrap();

        let interpreter = FileInterpreter::new(dir.path());
        assert_eq!(
            interpreter.interpret("alias"),
            Some(Detected::File(dir.path().join("alias")))
        );
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("gone");
        assert!(!is_confined(&root, &root.join("sample")));
    }
}
