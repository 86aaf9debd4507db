use super::errors::FixtureError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Removes every entry next to `root` whose file name starts with the file
/// name of `root`, including `root` itself. Directories go recursively;
/// symlinks are unlinked, never followed.
///
/// Returns the removed paths in sorted order. A missing parent directory or
/// an entry that disappears mid-sweep counts as already removed.
pub fn sweep_prefixed(root: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    let (parent, stem) = match (root.parent(), root.file_name()) {
        (Some(parent), Some(stem)) => (parent, stem),
        _ => {
            return Err(FixtureError::RootWithoutParent {
                path: root.display().to_string(),
            })
        }
    };

    let entries = match fs::read_dir(parent) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(FixtureError::ListParent {
                path: parent.display().to_string(),
                source,
            })
        }
    };

    let stem = stem.as_encoded_bytes();
    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FixtureError::ListParent {
            path: parent.display().to_string(),
            source,
        })?;
        if entry.file_name().as_encoded_bytes().starts_with(stem) {
            matches.push(entry.path());
        }
    }
    matches.sort();

    let mut removed = Vec::with_capacity(matches.len());
    for path in matches {
        match remove_entry(&path) {
            Ok(()) => removed.push(path),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(FixtureError::Remove {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
    Ok(removed)
}

fn remove_entry(path: &Path) -> std::io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
