//! File-system helpers
//!
//! Small wrappers around `std::fs` for the things web applications do
//! constantly: peeking at the first lines of a file, counting lines,
//! reading text with BOM handling, persisting JSON, appending to logs,
//! and discovering files on disk with [`FileFinder`].
//!
//! Every failure carries the path it happened on.

mod finder;
mod paths;

pub use finder::FileFinder;
pub use paths::{
	extension, mime_of, normalize_separators, relative_to, require_dir, require_file,
	with_extension_removed,
};

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the file helpers
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FileError {
	#[error("io error on {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("json error in {}: {source}", .path.display())]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("not a file: {}", .0.display())]
	NotAFile(PathBuf),
	#[error("not a directory: {}", .0.display())]
	NotADirectory(PathBuf),
	#[error("{} is {} encoded; only utf-8 text is supported", .path.display(), .bom.name())]
	UnsupportedEncoding { path: PathBuf, bom: Bom },
	#[error("invalid glob pattern '{pattern}': {source}")]
	Pattern {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},
}

pub type FileResult<T> = Result<T, FileError>;

fn io_err(path: &Path, source: std::io::Error) -> FileError {
	FileError::Io { path: path.to_path_buf(), source }
}

fn json_err(path: &Path, source: serde_json::Error) -> FileError {
	FileError::Json { path: path.to_path_buf(), source }
}

/// A byte-order mark found at the start of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bom {
	Utf8,
	Utf16Be,
	Utf16Le,
	Utf32Be,
	Utf32Le,
}

impl Bom {
	/// The conventional encoding name
	pub fn name(&self) -> &'static str {
		match self {
			Bom::Utf8 => "UTF-8",
			Bom::Utf16Be => "UTF-16 BE",
			Bom::Utf16Le => "UTF-16 LE",
			Bom::Utf32Be => "UTF-32 BE",
			Bom::Utf32Le => "UTF-32 LE",
		}
	}

	/// How many bytes the mark occupies
	pub fn byte_len(&self) -> usize {
		match self {
			Bom::Utf8 => 3,
			Bom::Utf16Be | Bom::Utf16Le => 2,
			Bom::Utf32Be | Bom::Utf32Le => 4,
		}
	}

	// UTF-32 LE starts with the UTF-16 LE mark, so longer marks first.
	fn from_leading_bytes(bytes: &[u8]) -> Option<Bom> {
		if bytes.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
			Some(Bom::Utf32Be)
		} else if bytes.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
			Some(Bom::Utf32Le)
		} else if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
			Some(Bom::Utf8)
		} else if bytes.starts_with(&[0xFE, 0xFF]) {
			Some(Bom::Utf16Be)
		} else if bytes.starts_with(&[0xFF, 0xFE]) {
			Some(Bom::Utf16Le)
		} else {
			None
		}
	}
}

impl std::fmt::Display for Bom {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Read at most `n` lines from the start of a file without loading the
/// rest.
pub fn read_first_lines(path: impl AsRef<Path>, n: usize) -> FileResult<Vec<String>> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|err| io_err(path, err))?;
	let mut lines = Vec::new();
	for line in BufReader::new(file).lines().take(n) {
		lines.push(line.map_err(|err| io_err(path, err))?);
	}
	Ok(lines)
}

/// Count the lines of a file. A trailing newline does not add an empty
/// last line.
pub fn line_count(path: impl AsRef<Path>) -> FileResult<usize> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|err| io_err(path, err))?;
	let mut count = 0;
	for line in BufReader::new(file).lines() {
		line.map_err(|err| io_err(path, err))?;
		count += 1;
	}
	Ok(count)
}

/// Read a file as UTF-8 text. A UTF-8 BOM is stripped; UTF-16/32 marks
/// are reported as [`FileError::UnsupportedEncoding`].
pub fn read_string(path: impl AsRef<Path>) -> FileResult<String> {
	let path = path.as_ref();
	let mut bytes = fs::read(path).map_err(|err| io_err(path, err))?;
	match Bom::from_leading_bytes(&bytes) {
		Some(Bom::Utf8) => {
			bytes.drain(..Bom::Utf8.byte_len());
		}
		Some(bom) => {
			return Err(FileError::UnsupportedEncoding { path: path.to_path_buf(), bom });
		}
		None => {}
	}
	String::from_utf8(bytes).map_err(|err| {
		io_err(path, std::io::Error::new(std::io::ErrorKind::InvalidData, err))
	})
}

/// Detect a byte-order mark without reading the whole file.
pub fn detect_bom(path: impl AsRef<Path>) -> FileResult<Option<Bom>> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|err| io_err(path, err))?;
	let mut head = Vec::with_capacity(4);
	file.take(4)
		.read_to_end(&mut head)
		.map_err(|err| io_err(path, err))?;
	Ok(Bom::from_leading_bytes(&head))
}

/// Serialize a value to a JSON file, optionally pretty-printed.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T, pretty: bool) -> FileResult<()> {
	let path = path.as_ref();
	let json = if pretty {
		serde_json::to_string_pretty(value)
	} else {
		serde_json::to_string(value)
	}
	.map_err(|err| json_err(path, err))?;
	fs::write(path, &json).map_err(|err| io_err(path, err))?;
	tracing::debug!("saved {} bytes of json to {}", json.len(), path.display());
	Ok(())
}

/// Load a value from a JSON file. A UTF-8 BOM is tolerated.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> FileResult<T> {
	let path = path.as_ref();
	let text = read_string(path)?;
	serde_json::from_str(&text).map_err(|err| json_err(path, err))
}

/// Append one line to a file, creating it when missing.
pub fn append_line(path: impl AsRef<Path>, line: &str) -> FileResult<()> {
	let path = path.as_ref();
	let mut file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|err| io_err(path, err))?;
	writeln!(file, "{line}").map_err(|err| io_err(path, err))
}
