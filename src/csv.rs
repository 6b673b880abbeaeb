//! CSV building and parsing helpers

use serde_json::Value;
use thiserror::Error;

/// Errors raised while building or parsing CSV
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsvError {
	#[error("csv processing failed: {0}")]
	Csv(#[from] csv::Error),

	#[error("row {index} has {actual} fields, header has {expected}")]
	RowTooWide { index: usize, expected: usize, actual: usize },

	#[error("expected a json array of objects, found {0}")]
	UnsupportedJson(&'static str),

	#[error("csv writer finalization failed: {0}")]
	Finalize(String),

	#[error("csv output was not valid utf-8")]
	NonUtf8Output,
}

/// Result type for CSV operations
pub type CsvResult<T> = Result<T, CsvError>;

/// A fluent CSV document builder.
///
/// Rows shorter than the header are padded with empty fields; rows longer
/// than the header are an error naming the offending row.
///
/// # Examples
///
/// ```
/// use webutils::csv::CsvBuilder;
///
/// let rendered = CsvBuilder::new()
///     .headers(["name", "age"])
///     .row(["ada", "36"])
///     .row(["grace"])
///     .build()
///     .unwrap();
/// assert_eq!(rendered, "name,age\nada,36\ngrace,\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvBuilder {
	delimiter: u8,
	quote_all: bool,
	headers: Option<Vec<String>>,
	rows: Vec<Vec<String>>,
}

impl Default for CsvBuilder {
	fn default() -> Self {
		Self { delimiter: b',', quote_all: false, headers: None, rows: Vec::new() }
	}
}

impl CsvBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use a different field delimiter, e.g. `b';'` or `b'\t'`
	pub fn delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}

	/// Quote every field instead of only where necessary
	pub fn quote_all(mut self, quote_all: bool) -> Self {
		self.quote_all = quote_all;
		self
	}

	/// Set the header row
	pub fn headers<I, S>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.headers = Some(headers.into_iter().map(Into::into).collect());
		self
	}

	/// Append one data row
	pub fn row<I, S>(mut self, row: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.rows.push(row.into_iter().map(Into::into).collect());
		self
	}

	/// Append many data rows
	pub fn rows<I, R, S>(mut self, rows: I) -> Self
	where
		I: IntoIterator<Item = R>,
		R: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for row in rows {
			self.rows.push(row.into_iter().map(Into::into).collect());
		}
		self
	}

	/// Build a CSV document from a JSON array of objects.
	///
	/// The header row comes from the first object's keys; later objects
	/// contribute values by key lookup, with missing keys as empty fields.
	/// Strings render bare, `null` as empty, other values in their JSON
	/// form.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use webutils::csv::CsvBuilder;
	///
	/// let data = json!([
	///     {"id": 1, "name": "ada"},
	///     {"id": 2, "name": "grace"},
	/// ]);
	/// let rendered = CsvBuilder::from_json(&data).unwrap().build().unwrap();
	/// assert_eq!(rendered, "id,name\n1,ada\n2,grace\n");
	/// ```
	pub fn from_json(value: &Value) -> CsvResult<Self> {
		let items = value
			.as_array()
			.ok_or_else(|| CsvError::UnsupportedJson(json_kind(value)))?;

		let mut builder = Self::new();
		let mut keys: Vec<String> = Vec::new();

		for (index, item) in items.iter().enumerate() {
			let object = item
				.as_object()
				.ok_or_else(|| CsvError::UnsupportedJson(json_kind(item)))?;
			if index == 0 {
				keys = object.keys().cloned().collect();
				builder.headers = Some(keys.clone());
			}
			let record = keys
				.iter()
				.map(|key| object.get(key).map(scalar_to_string).unwrap_or_default())
				.collect();
			builder.rows.push(record);
		}

		Ok(builder)
	}

	/// Render the document to a string
	pub fn build(&self) -> CsvResult<String> {
		let quote_style = if self.quote_all {
			csv::QuoteStyle::Always
		} else {
			csv::QuoteStyle::Necessary
		};
		let mut writer = csv::WriterBuilder::new()
			.delimiter(self.delimiter)
			.quote_style(quote_style)
			.from_writer(vec![]);

		let width = self.headers.as_ref().map(Vec::len);
		if let Some(headers) = &self.headers {
			writer.write_record(headers)?;
		}

		for (index, row) in self.rows.iter().enumerate() {
			match width {
				Some(expected) if row.len() > expected => {
					return Err(CsvError::RowTooWide { index, expected, actual: row.len() });
				}
				Some(expected) if row.len() < expected => {
					let mut padded = row.clone();
					padded.resize(expected, String::new());
					writer.write_record(&padded)?;
				}
				_ => writer.write_record(row)?,
			}
		}

		let bytes = writer
			.into_inner()
			.map_err(|err| CsvError::Finalize(err.to_string()))?;
		String::from_utf8(bytes).map_err(|_| CsvError::NonUtf8Output)
	}
}

/// Parse comma-separated text into rows of fields.
///
/// Records may have differing lengths; no header handling is applied.
///
/// # Examples
///
/// ```
/// use webutils::csv::parse_csv;
///
/// let rows = parse_csv("a,b\n\"c,d\",e\n").unwrap();
/// assert_eq!(rows, vec![vec!["a", "b"], vec!["c,d", "e"]]);
/// ```
pub fn parse_csv(input: &str) -> CsvResult<Vec<Vec<String>>> {
	parse_csv_with(input, b',')
}

/// Parse delimiter-separated text into rows of fields
pub fn parse_csv_with(input: &str, delimiter: u8) -> CsvResult<Vec<Vec<String>>> {
	let mut reader = csv::ReaderBuilder::new()
		.delimiter(delimiter)
		.has_headers(false)
		.flexible(true)
		.from_reader(input.as_bytes());

	let mut rows = Vec::new();
	for record in reader.records() {
		let record = record?;
		rows.push(record.iter().map(str::to_string).collect());
	}
	Ok(rows)
}

fn scalar_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "a nested array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_build_simple() {
		let rendered = CsvBuilder::new()
			.headers(["a", "b"])
			.row(["1", "2"])
			.row(["3", "4"])
			.build()
			.unwrap();
		assert_eq!(rendered, "a,b\n1,2\n3,4\n");
	}

	#[test]
	fn test_build_without_headers() {
		let rendered = CsvBuilder::new().row(["1", "2"]).build().unwrap();
		assert_eq!(rendered, "1,2\n");
	}

	#[test]
	fn test_build_empty() {
		assert_eq!(CsvBuilder::new().build().unwrap(), "");
	}

	#[test]
	fn test_custom_delimiter() {
		let rendered = CsvBuilder::new()
			.delimiter(b';')
			.headers(["a", "b"])
			.row(["1", "2"])
			.build()
			.unwrap();
		assert_eq!(rendered, "a;b\n1;2\n");
	}

	#[test]
	fn test_quoting_necessary_by_default() {
		let rendered = CsvBuilder::new().row(["a,b", "plain"]).build().unwrap();
		assert_eq!(rendered, "\"a,b\",plain\n");
	}

	#[test]
	fn test_quote_all() {
		let rendered = CsvBuilder::new().quote_all(true).row(["a", "b"]).build().unwrap();
		assert_eq!(rendered, "\"a\",\"b\"\n");
	}

	#[test]
	fn test_short_rows_padded() {
		let rendered = CsvBuilder::new()
			.headers(["a", "b", "c"])
			.row(["1"])
			.build()
			.unwrap();
		assert_eq!(rendered, "a,b,c\n1,,\n");
	}

	#[test]
	fn test_long_rows_error() {
		let result = CsvBuilder::new().headers(["a"]).row(["1", "2"]).build();
		assert!(matches!(
			result,
			Err(CsvError::RowTooWide { index: 0, expected: 1, actual: 2 })
		));
	}

	#[test]
	fn test_rows_bulk_append() {
		let rendered = CsvBuilder::new()
			.rows(vec![vec!["1", "2"], vec!["3", "4"]])
			.build()
			.unwrap();
		assert_eq!(rendered, "1,2\n3,4\n");
	}

	#[test]
	fn test_from_json() {
		let data = json!([
			{"id": 1, "name": "ada", "active": true},
			{"id": 2, "name": "grace", "active": null},
		]);
		let rendered = CsvBuilder::from_json(&data).unwrap().build().unwrap();
		assert_eq!(rendered, "active,id,name\ntrue,1,ada\n,2,grace\n");
	}

	#[test]
	fn test_from_json_missing_keys_empty() {
		let data = json!([
			{"a": "x", "b": "y"},
			{"a": "z"},
		]);
		let rendered = CsvBuilder::from_json(&data).unwrap().build().unwrap();
		assert_eq!(rendered, "a,b\nx,y\nz,\n");
	}

	#[test]
	fn test_from_json_rejects_non_arrays() {
		assert!(matches!(
			CsvBuilder::from_json(&json!({"not": "array"})),
			Err(CsvError::UnsupportedJson("an object"))
		));
		assert!(matches!(
			CsvBuilder::from_json(&json!([1, 2])),
			Err(CsvError::UnsupportedJson("a number"))
		));
	}

	#[test]
	fn test_from_json_empty_array() {
		let rendered = CsvBuilder::from_json(&json!([])).unwrap().build().unwrap();
		assert_eq!(rendered, "");
	}

	#[test]
	fn test_parse_csv() {
		let rows = parse_csv("a,b\nc,d\n").unwrap();
		assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
	}

	#[test]
	fn test_parse_csv_quoted_fields() {
		let rows = parse_csv("\"a,b\",\"line\nbreak\"\n").unwrap();
		assert_eq!(rows, vec![vec!["a,b", "line\nbreak"]]);
	}

	#[test]
	fn test_parse_csv_flexible_lengths() {
		let rows = parse_csv("a,b,c\nd\n").unwrap();
		assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d"]]);
	}

	#[test]
	fn test_parse_csv_with_delimiter() {
		let rows = parse_csv_with("a;b\n", b';').unwrap();
		assert_eq!(rows, vec![vec!["a", "b"]]);
	}

	#[test]
	fn test_parse_csv_empty() {
		assert!(parse_csv("").unwrap().is_empty());
	}

	#[test]
	fn test_build_parse_roundtrip() {
		let rendered = CsvBuilder::new()
			.headers(["name", "note"])
			.row(["ada", "says \"hi\""])
			.row(["grace", "a,b"])
			.build()
			.unwrap();
		let rows = parse_csv(&rendered).unwrap();
		assert_eq!(rows[0], vec!["name", "note"]);
		assert_eq!(rows[1], vec!["ada", "says \"hi\""]);
		assert_eq!(rows[2], vec!["grace", "a,b"]);
	}
}
