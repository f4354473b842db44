//! Folder-name derivation
//!
//! Maps a project file path and a depth to the name of one of its ancestor
//! folders. Depth 0 is the folder holding the file, depth 1 its parent, and so
//! on. This is a pure string algorithm; nothing here touches the file system.

/// Path separator convention used while splitting a project path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSeparator {
    Slash,
    Backslash,
}

impl PathSeparator {
    /// Separator of the operating system the host runs on
    pub fn host() -> Self {
        if cfg!(windows) {
            PathSeparator::Backslash
        } else {
            PathSeparator::Slash
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            PathSeparator::Slash => '/',
            PathSeparator::Backslash => '\\',
        }
    }
}

/// Rewrite every `/` and `\` in `path` to `separator`
pub fn normalize_separators(path: &str, separator: PathSeparator) -> String {
    let canonical = separator.as_char();
    path.chars()
        .map(|c| if c == '/' || c == '\\' { canonical } else { c })
        .collect()
}

/// Name of the folder `depth` levels above the one containing the file
///
/// Uses the host operating system separator. Returns `None` when the path has
/// fewer folders than `depth + 1`.
///
/// # Examples
/// ```
/// use sequence_renamer::host::derive_folder_name;
///
/// let path = "/Volumes/Drive/ClientX/2024-Project/file.prproj";
/// assert_eq!(derive_folder_name(path, 0).as_deref(), Some("2024-Project"));
/// assert_eq!(derive_folder_name(path, 1).as_deref(), Some("ClientX"));
/// assert_eq!(derive_folder_name(path, 5), None);
/// ```
pub fn derive_folder_name(path: &str, depth: usize) -> Option<String> {
    derive_folder_name_with(path, depth, PathSeparator::host())
}

/// [`derive_folder_name`] with an explicit separator convention
pub fn derive_folder_name_with(
    path: &str,
    depth: usize,
    separator: PathSeparator,
) -> Option<String> {
    let normalized = normalize_separators(path, separator);
    let mut folders: Vec<&str> = normalized
        .split(separator.as_char())
        .filter(|segment| !segment.is_empty())
        .collect();

    // the last segment is the project file itself
    folders.pop()?;

    let index = folders.len().checked_sub(1)?.checked_sub(depth)?;
    folders.get(index).map(|name| name.to_string())
}
