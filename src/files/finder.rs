//! Directory scanning with composable filters

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::convert;

use super::{FileResult, paths};

/// A builder that walks a directory tree and reports the files that
/// match every configured filter.
///
/// Unreadable entries are logged and skipped; a root that is not a
/// directory is an error. Results come back sorted.
///
/// # Examples
///
/// ```no_run
/// use webutils::files::FileFinder;
///
/// let handlers = FileFinder::new("src/handlers")
///     .extension("rs")
///     .type_names()?;
/// // handlers/user_profile.rs shows up as "UserProfile"
/// # Ok::<(), webutils::files::FileError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileFinder {
	root: PathBuf,
	recursive: bool,
	max_depth: Option<usize>,
	follow_links: bool,
	extensions: Vec<String>,
	pattern: Option<glob::Pattern>,
}

impl FileFinder {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			recursive: true,
			max_depth: None,
			follow_links: false,
			extensions: Vec::new(),
			pattern: None,
		}
	}

	/// Whether to descend into subdirectories. On by default;
	/// `recursive(false)` is shorthand for `max_depth(1)`.
	pub fn recursive(mut self, recursive: bool) -> Self {
		self.recursive = recursive;
		self
	}

	/// Limit how deep the walk goes; `1` means the root's direct
	/// children only. Takes precedence over [`recursive`](Self::recursive).
	pub fn max_depth(mut self, depth: usize) -> Self {
		self.max_depth = Some(depth);
		self
	}

	pub fn follow_links(mut self, follow: bool) -> Self {
		self.follow_links = follow;
		self
	}

	/// Keep only files with this extension (leading dot and case are
	/// ignored). Repeated calls accumulate.
	pub fn extension(mut self, ext: impl AsRef<str>) -> Self {
		self.extensions
			.push(ext.as_ref().trim_start_matches('.').to_lowercase());
		self
	}

	/// Keep only files with one of these extensions.
	pub fn extensions<I, S>(self, exts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		exts.into_iter().fold(self, |finder, ext| finder.extension(ext))
	}

	/// Keep only files whose name matches a glob pattern, e.g.
	/// `test_*.rs`. The pattern applies to the file name, not the path.
	pub fn pattern(mut self, pattern: &str) -> FileResult<Self> {
		let compiled = glob::Pattern::new(pattern).map_err(|source| {
			super::FileError::Pattern { pattern: pattern.to_string(), source }
		})?;
		self.pattern = Some(compiled);
		Ok(self)
	}

	/// Matching file paths, sorted
	pub fn paths(&self) -> FileResult<Vec<PathBuf>> {
		paths::require_dir(&self.root)?;

		let mut walker = WalkDir::new(&self.root).follow_links(self.follow_links);
		if let Some(depth) = self.effective_depth() {
			walker = walker.max_depth(depth);
		}

		let mut found = Vec::new();
		for entry in walker {
			let entry = match entry {
				Ok(entry) => entry,
				Err(err) => {
					tracing::warn!(
						"skipping unreadable entry under {}: {}",
						self.root.display(),
						err
					);
					continue;
				}
			};
			if !entry.file_type().is_file() {
				continue;
			}
			if self.matches(entry.path()) {
				found.push(entry.path().to_path_buf());
			}
		}
		found.sort();
		Ok(found)
	}

	/// Matching file names, sorted
	pub fn names(&self) -> FileResult<Vec<String>> {
		let mut names: Vec<String> = self
			.paths()?
			.iter()
			.filter_map(|path| path.file_name())
			.map(|name| name.to_string_lossy().into_owned())
			.collect();
		names.sort();
		Ok(names)
	}

	/// Matching file stems (names without the final extension), sorted
	pub fn stems(&self) -> FileResult<Vec<String>> {
		let mut stems: Vec<String> = self
			.paths()?
			.iter()
			.filter_map(|path| path.file_stem())
			.map(|stem| stem.to_string_lossy().into_owned())
			.collect();
		stems.sort();
		Ok(stems)
	}

	/// PascalCase type names derived from file stems, sorted and
	/// deduplicated. `user_profile.rs` becomes `UserProfile`.
	pub fn type_names(&self) -> FileResult<Vec<String>> {
		let mut names: Vec<String> = self
			.stems()?
			.iter()
			.map(|stem| convert::to_pascal_case(stem))
			.collect();
		names.sort();
		names.dedup();
		Ok(names)
	}

	fn effective_depth(&self) -> Option<usize> {
		match (self.max_depth, self.recursive) {
			(Some(depth), _) => Some(depth),
			(None, false) => Some(1),
			(None, true) => None,
		}
	}

	fn matches(&self, path: &Path) -> bool {
		if !self.extensions.is_empty() {
			match paths::extension(path) {
				Some(ext) if self.extensions.contains(&ext) => {}
				_ => return false,
			}
		}
		if let Some(pattern) = &self.pattern {
			let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
			if !pattern.matches(&name) {
				return false;
			}
		}
		true
	}
}
