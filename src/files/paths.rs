//! Path string helpers

use std::path::{Path, PathBuf};

use super::{FileError, FileResult};

/// Replace backslashes with forward slashes, for URLs and comparisons
/// that must look the same on every platform.
///
/// # Examples
///
/// ```
/// use webutils::files::normalize_separators;
///
/// assert_eq!(normalize_separators(r"static\css\app.css"), "static/css/app.css");
/// ```
pub fn normalize_separators(path: &str) -> String {
	path.replace('\\', "/")
}

/// The part of `path` below `base`, or `None` when `path` is not inside
/// `base`. Comparison is component-wise, so `/a/bc` is not inside `/a/b`.
pub fn relative_to(path: impl AsRef<Path>, base: impl AsRef<Path>) -> Option<PathBuf> {
	path.as_ref().strip_prefix(base.as_ref()).ok().map(Path::to_path_buf)
}

/// The file extension, lowercased. `None` for extensionless paths.
pub fn extension(path: impl AsRef<Path>) -> Option<String> {
	path.as_ref().extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

/// The path with its final extension removed
pub fn with_extension_removed(path: impl AsRef<Path>) -> PathBuf {
	path.as_ref().with_extension("")
}

/// Return the path when it names an existing regular file.
pub fn require_file(path: impl AsRef<Path>) -> FileResult<PathBuf> {
	let path = path.as_ref();
	if path.is_file() {
		Ok(path.to_path_buf())
	} else {
		Err(FileError::NotAFile(path.to_path_buf()))
	}
}

/// Return the path when it names an existing directory.
pub fn require_dir(path: impl AsRef<Path>) -> FileResult<PathBuf> {
	let path = path.as_ref();
	if path.is_dir() {
		Ok(path.to_path_buf())
	} else {
		Err(FileError::NotADirectory(path.to_path_buf()))
	}
}

/// The MIME type guessed from the extension, `application/octet-stream`
/// when nothing matches.
///
/// # Examples
///
/// ```
/// use webutils::files::mime_of;
///
/// assert_eq!(mime_of("report.pdf"), "application/pdf");
/// assert_eq!(mime_of("mystery.bin"), "application/octet-stream");
/// ```
pub fn mime_of(path: impl AsRef<Path>) -> String {
	mime_guess::from_path(path.as_ref())
		.first_or_octet_stream()
		.essence_str()
		.to_string()
}
