// src/compare.rs
use crate::dropbox::RemoteEntry;
use crate::local::LocalEntry;
use std::collections::HashSet;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

pub const REPORT_HEADER: &str = "Files missing in Dropbox:";

/// Names of local files with no remote entry of the same name, compared
/// case-insensitively. Directories are skipped. Order follows `local`.
pub fn missing_locally_in_remote(remote: &[RemoteEntry], local: &[LocalEntry]) -> Vec<OsString> {
    let remote_names: HashSet<String> = remote.iter().map(|e| e.name.to_lowercase()).collect();

    local
        .iter()
        .filter(|e| !e.is_dir)
        .filter(|e| !remote_names.contains(&e.folded_name()))
        .map(|e| e.name.clone())
        .collect()
}

/// Writes the report header followed by one `<local_dir>/<name>` per line.
/// Paths are written as their raw bytes.
pub fn write_report<W: Write>(
    mut out: W,
    local_dir: &Path,
    missing: &[OsString],
) -> io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for name in missing {
        let path = local_dir.join(name);
        out.write_all(path.as_os_str().as_encoded_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
