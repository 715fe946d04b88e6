//! Single-directory listing used by the snapshot builder.

use crate::tree::node::ListingStatus;
use crate::types::Inode;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate child of a listed directory
#[derive(Debug, Clone)]
pub(crate) struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    pub inode: Inode,
    /// Directory after following symlinks
    pub is_dir: bool,
    pub is_symlink: bool,
    pub writable: bool,
    pub mode: u32,
    pub size: u64,
}

/// Enumerate the immediate children of `dir`
///
/// Failure to open the directory yields no children and a non-populated
/// status; failures on individual entries skip only that entry. Errors are
/// logged, never returned.
pub(crate) fn list_directory(dir: &Path) -> (Vec<ChildEntry>, ListingStatus) {
    let mut children = Vec::new();
    let mut status = ListingStatus::Populated;

    for result in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let denied = e
                    .io_error()
                    .is_some_and(|io| io.kind() == ErrorKind::PermissionDenied);
                if denied {
                    tracing::warn!(path = %dir.display(), "Permission denied, listing as empty");
                    status = ListingStatus::PermissionDenied;
                } else {
                    tracing::warn!(path = %dir.display(), error = %e, "Failed to list directory");
                    status = ListingStatus::Failed(e.to_string());
                }
                break;
            }
            Err(e) => {
                tracing::warn!("Failed to read directory entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path().to_path_buf();
        let link_metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Failed to stat {}: {}", path.display(), e);
                continue;
            }
        };
        let is_symlink = link_metadata.file_type().is_symlink();
        // follow links for classification; a dangling link is listed as a file
        let metadata = if is_symlink {
            std::fs::metadata(&path).unwrap_or_else(|_| link_metadata.clone())
        } else {
            link_metadata.clone()
        };
        let is_dir = metadata.is_dir();

        children.push(ChildEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            inode: path_inode(&link_metadata),
            is_dir,
            is_symlink,
            writable: is_dir && is_writable(&path),
            mode: permission_bits(&metadata),
            size: metadata.len(),
            path,
        });
    }

    tracing::debug!(path = %dir.display(), children = children.len(), "Listed directory");
    (children, status)
}

/// Inode recorded for an entry (not following symlinks for children)
#[cfg(unix)]
pub(crate) fn path_inode(metadata: &std::fs::Metadata) -> Inode {
    use std::os::unix::fs::MetadataExt;
    metadata.ino()
}

#[cfg(not(unix))]
pub(crate) fn path_inode(_metadata: &std::fs::Metadata) -> Inode {
    0
}

#[cfg(unix)]
pub(crate) fn permission_bits(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
pub(crate) fn permission_bits(metadata: &std::fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

/// Whether the current user may create, rename or delete entries in `dir`
#[cfg(unix)]
pub(crate) fn is_writable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the duration of the call
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
pub(crate) fn is_writable(dir: &Path) -> bool {
    std::fs::metadata(dir).is_ok_and(|m| !m.permissions().readonly())
}
