//! Human-readable byte sizes

use super::{ConvertError, ConvertResult};

const BINARY_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
const SI_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count using binary units (KiB, MiB, ...)
///
/// # Examples
///
/// ```
/// use webutils::convert::format_bytes;
///
/// assert_eq!(format_bytes(0, 0), "0 B");
/// assert_eq!(format_bytes(1024, 0), "1 KiB");
/// assert_eq!(format_bytes(1536, 1), "1.5 KiB");
/// assert_eq!(format_bytes(10 * 1024 * 1024, 0), "10 MiB");
/// ```
pub fn format_bytes(bytes: u64, precision: usize) -> String {
	format_with_base(bytes, 1024.0, &BINARY_UNITS, precision)
}

/// Format a byte count using SI units (KB, MB, ...)
///
/// # Examples
///
/// ```
/// use webutils::convert::format_bytes_si;
///
/// assert_eq!(format_bytes_si(1000, 0), "1 KB");
/// assert_eq!(format_bytes_si(2_500_000, 1), "2.5 MB");
/// ```
pub fn format_bytes_si(bytes: u64, precision: usize) -> String {
	format_with_base(bytes, 1000.0, &SI_UNITS, precision)
}

fn format_with_base(bytes: u64, base: f64, units: &[&str], precision: usize) -> String {
	let mut value = bytes as f64;
	let mut unit = 0;

	while value >= base && unit < units.len() - 1 {
		value /= base;
		unit += 1;
	}

	format!("{:.*} {}", precision, value, units[unit])
}

/// Parse a human-readable byte size back into a byte count.
///
/// Accepts bare numbers (taken as bytes), both binary and SI units, and is
/// case-insensitive: `"1.5 MiB"`, `"10KB"`, `"512"`.
///
/// # Examples
///
/// ```
/// use webutils::convert::parse_bytes;
///
/// assert_eq!(parse_bytes("512").unwrap(), 512);
/// assert_eq!(parse_bytes("1 KiB").unwrap(), 1024);
/// assert_eq!(parse_bytes("1.5kb").unwrap(), 1500);
/// assert!(parse_bytes("three bytes").is_err());
/// ```
pub fn parse_bytes(input: &str) -> ConvertResult<u64> {
	let trimmed = input.trim();
	let split = trimmed
		.find(|c: char| !c.is_ascii_digit() && c != '.')
		.unwrap_or(trimmed.len());
	let (number_part, unit_part) = trimmed.split_at(split);

	let value: f64 = number_part
		.parse()
		.map_err(|_| ConvertError::InvalidByteSize(trimmed.to_string()))?;

	let multiplier = match unit_part.trim().to_ascii_lowercase().as_str() {
		"" | "b" => 1.0,
		"kb" => 1000.0,
		"mb" => 1000.0 * 1000.0,
		"gb" => 1000.0 * 1000.0 * 1000.0,
		"tb" => 1000.0 * 1000.0 * 1000.0 * 1000.0,
		"kib" => 1024.0,
		"mib" => 1024.0 * 1024.0,
		"gib" => 1024.0 * 1024.0 * 1024.0,
		"tib" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
		other => return Err(ConvertError::UnknownByteUnit(other.to_string())),
	};

	Ok((value * multiplier).round() as u64)
}
