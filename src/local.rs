// src/local.rs
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl LocalEntry {
    /// Case-folded name used for lookups against remote names.
    pub fn folded_name(&self) -> String {
        self.name.to_string_lossy().to_lowercase()
    }
}

/// Lists the direct children of `dir`, sorted by name.
/// Symlinks are classified by the link itself, not its target.
pub fn read_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<LocalEntry>> {
    let dir = dir.as_ref();
    let list_err = |source| Error::LocalList {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_type = entry.file_type().map_err(list_err)?;
        entries.push(LocalEntry {
            name: entry.file_name(),
            is_dir: file_type.is_dir(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(name: &str, is_dir: bool) -> LocalEntry {
        LocalEntry {
            name: name.into(),
            is_dir,
        }
    }

    #[test]
    fn lists_files_and_directories_sorted() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), b"b").unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entries = read_dir(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("a.txt", false),
                entry("b.txt", false),
                entry("sub", true),
            ]
        );
    }

    #[test]
    fn children_of_subdirectories_are_not_listed() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("inner.txt"), b"x").unwrap();

        let entries = read_dir(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_directory_is_a_local_list_error() {
        let tmp = tempdir().unwrap();
        let err = read_dir(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::LocalList { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_kept_raw() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir().unwrap();
        let raw = std::ffi::OsStr::from_bytes(b"r\xe9sum\xe9.txt");
        fs::write(tmp.path().join(raw), b"cv").unwrap();

        let entries = read_dir(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name.as_os_str(), raw);
        assert!(tmp.path().join(&entries[0].name).exists());
    }
}
