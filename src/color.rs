//! RGBA color values with hex, CSS and HSV conversions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing color notation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorError {
	#[error("invalid hex color '{0}': expected 3, 4, 6 or 8 hex digits")]
	InvalidHexLength(String),

	#[error("invalid hex digit in '{0}'")]
	InvalidHexDigit(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

/// An RGBA color with 8-bit channels. Alpha 255 is fully opaque.
///
/// # Examples
///
/// ```
/// use webutils::color::RgbaColor;
///
/// let color = RgbaColor::from_hex("#c30").unwrap();
/// assert_eq!(color, RgbaColor::rgb(0xcc, 0x33, 0x00));
/// assert_eq!(color.to_hex(), "#cc3300");
/// assert!(!color.is_dark());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbaColor {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
	pub alpha: u8,
}

/// A color in HSV space: hue in degrees (0-360), saturation and value
/// in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
	pub hue: f64,
	pub saturation: f64,
	pub value: f64,
}

impl RgbaColor {
	/// Create an opaque color from 8-bit channels
	pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
		Self { red, green, blue, alpha: 255 }
	}

	/// Create a color from 8-bit channels including alpha
	pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
		Self { red, green, blue, alpha }
	}

	/// Create an opaque color from percentage channels (0.0-100.0, clamped)
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::RgbaColor;
	///
	/// assert_eq!(RgbaColor::from_percent(100.0, 0.0, 50.0), RgbaColor::rgb(255, 0, 128));
	/// ```
	pub fn from_percent(red: f64, green: f64, blue: f64) -> Self {
		Self {
			red: channel_from_percent(red),
			green: channel_from_percent(green),
			blue: channel_from_percent(blue),
			alpha: 255,
		}
	}

	/// Parse hex color notation.
	///
	/// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, case-insensitive,
	/// with the leading `#` optional. Short digits expand by duplication,
	/// so `#c30` is `#cc3300`.
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::RgbaColor;
	///
	/// assert_eq!(RgbaColor::from_hex("#ffffff").unwrap(), RgbaColor::rgb(255, 255, 255));
	/// assert_eq!(RgbaColor::from_hex("F00").unwrap(), RgbaColor::rgb(255, 0, 0));
	/// assert_eq!(RgbaColor::from_hex("#00000080").unwrap().alpha, 128);
	/// assert!(RgbaColor::from_hex("#12345").is_err());
	/// ```
	pub fn from_hex(input: &str) -> ColorResult<Self> {
		let digits = input.trim().trim_start_matches('#');
		if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(ColorError::InvalidHexDigit(input.trim().to_string()));
		}

		match digits.len() {
			3 => Ok(Self {
				red: hex_nibble(digits, 0)?,
				green: hex_nibble(digits, 1)?,
				blue: hex_nibble(digits, 2)?,
				alpha: 255,
			}),
			4 => Ok(Self {
				red: hex_nibble(digits, 0)?,
				green: hex_nibble(digits, 1)?,
				blue: hex_nibble(digits, 2)?,
				alpha: hex_nibble(digits, 3)?,
			}),
			6 => Ok(Self {
				red: hex_pair(digits, 0)?,
				green: hex_pair(digits, 2)?,
				blue: hex_pair(digits, 4)?,
				alpha: 255,
			}),
			8 => Ok(Self {
				red: hex_pair(digits, 0)?,
				green: hex_pair(digits, 2)?,
				blue: hex_pair(digits, 4)?,
				alpha: hex_pair(digits, 6)?,
			}),
			_ => Err(ColorError::InvalidHexLength(input.trim().to_string())),
		}
	}

	/// Render as lowercase hex, with alpha digits only when not opaque
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::RgbaColor;
	///
	/// assert_eq!(RgbaColor::rgb(204, 51, 0).to_hex(), "#cc3300");
	/// assert_eq!(RgbaColor::rgba(0, 0, 0, 128).to_hex(), "#00000080");
	/// ```
	pub fn to_hex(&self) -> String {
		if self.alpha == 255 {
			format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
		} else {
			format!(
				"#{:02x}{:02x}{:02x}{:02x}",
				self.red, self.green, self.blue, self.alpha
			)
		}
	}

	/// Render as uppercase hex
	pub fn to_hex_upper(&self) -> String {
		self.to_hex().to_ascii_uppercase()
	}

	/// Render as a CSS `rgb()` / `rgba()` function
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::RgbaColor;
	///
	/// assert_eq!(RgbaColor::rgb(255, 0, 0).to_css(), "rgb(255, 0, 0)");
	/// assert_eq!(RgbaColor::rgba(0, 0, 0, 128).to_css(), "rgba(0, 0, 0, 0.5)");
	/// ```
	pub fn to_css(&self) -> String {
		if self.alpha == 255 {
			format!("rgb({}, {}, {})", self.red, self.green, self.blue)
		} else {
			format!(
				"rgba({}, {}, {}, {})",
				self.red,
				self.green,
				self.blue,
				format_alpha(self.alpha_unit())
			)
		}
	}

	/// Red channel as a percentage (0.0-100.0)
	pub fn red_percent(&self) -> f64 {
		f64::from(self.red) / 255.0 * 100.0
	}

	/// Green channel as a percentage (0.0-100.0)
	pub fn green_percent(&self) -> f64 {
		f64::from(self.green) / 255.0 * 100.0
	}

	/// Blue channel as a percentage (0.0-100.0)
	pub fn blue_percent(&self) -> f64 {
		f64::from(self.blue) / 255.0 * 100.0
	}

	/// Alpha as a unit value (0.0 transparent, 1.0 opaque)
	pub fn alpha_unit(&self) -> f64 {
		f64::from(self.alpha) / 255.0
	}

	/// Replace the alpha channel
	pub const fn with_alpha(mut self, alpha: u8) -> Self {
		self.alpha = alpha;
		self
	}

	/// Perceived brightness (BT.601 weights), 0.0 black to 1.0 white
	pub fn luma(&self) -> f64 {
		(0.299 * f64::from(self.red) + 0.587 * f64::from(self.green) + 0.114 * f64::from(self.blue))
			/ 255.0
	}

	/// Whether the color reads as dark (luma below 0.5)
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::RgbaColor;
	///
	/// assert!(RgbaColor::rgb(0, 0, 0).is_dark());
	/// assert!(!RgbaColor::rgb(255, 255, 0).is_dark());
	/// ```
	pub fn is_dark(&self) -> bool {
		self.luma() < 0.5
	}

	/// Convert to HSV. Alpha is not part of the HSV model and is dropped.
	pub fn to_hsv(&self) -> Hsv {
		let r = f64::from(self.red) / 255.0;
		let g = f64::from(self.green) / 255.0;
		let b = f64::from(self.blue) / 255.0;

		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let delta = max - min;

		let hue = if delta == 0.0 {
			0.0
		} else if max == r {
			60.0 * ((g - b) / delta).rem_euclid(6.0)
		} else if max == g {
			60.0 * ((b - r) / delta + 2.0)
		} else {
			60.0 * ((r - g) / delta + 4.0)
		};

		let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

		Hsv { hue, saturation, value: max * 100.0 }
	}

	/// Convert from HSV to an opaque color.
	///
	/// Hue wraps into 0-360; saturation and value are clamped to 0-100.
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::{Hsv, RgbaColor};
	///
	/// let red = RgbaColor::from_hsv(Hsv { hue: 0.0, saturation: 100.0, value: 100.0 });
	/// assert_eq!(red, RgbaColor::rgb(255, 0, 0));
	/// ```
	pub fn from_hsv(hsv: Hsv) -> Self {
		let h = hsv.hue.rem_euclid(360.0);
		let s = (hsv.saturation / 100.0).clamp(0.0, 1.0);
		let v = (hsv.value / 100.0).clamp(0.0, 1.0);

		let c = v * s;
		let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
		let m = v - c;

		let (r, g, b) = match h {
			h if h < 60.0 => (c, x, 0.0),
			h if h < 120.0 => (x, c, 0.0),
			h if h < 180.0 => (0.0, c, x),
			h if h < 240.0 => (0.0, x, c),
			h if h < 300.0 => (x, 0.0, c),
			_ => (c, 0.0, x),
		};

		Self {
			red: unit_to_channel(r + m),
			green: unit_to_channel(g + m),
			blue: unit_to_channel(b + m),
			alpha: 255,
		}
	}
}

impl fmt::Display for RgbaColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_hex())
	}
}

impl FromStr for RgbaColor {
	type Err = ColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

fn channel_from_percent(percent: f64) -> u8 {
	unit_to_channel(percent.clamp(0.0, 100.0) / 100.0)
}

fn unit_to_channel(unit: f64) -> u8 {
	(unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn format_alpha(alpha: f64) -> String {
	let mut formatted = format!("{:.2}", alpha);
	while formatted.ends_with('0') {
		formatted.pop();
	}
	if formatted.ends_with('.') {
		formatted.pop();
	}
	formatted
}

fn hex_pair(digits: &str, index: usize) -> ColorResult<u8> {
	u8::from_str_radix(&digits[index..index + 2], 16)
		.map_err(|_| ColorError::InvalidHexDigit(digits.to_string()))
}

fn hex_nibble(digits: &str, index: usize) -> ColorResult<u8> {
	let value = u8::from_str_radix(&digits[index..index + 1], 16)
		.map_err(|_| ColorError::InvalidHexDigit(digits.to_string()))?;
	Ok(value * 17)
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_hex_roundtrip(r in 0u8.., g in 0u8.., b in 0u8.., a in 0u8..) {
			let color = RgbaColor::rgba(r, g, b, a);
			let parsed = RgbaColor::from_hex(&color.to_hex()).unwrap();
			assert_eq!(parsed, color);
		}

		#[test]
		fn prop_hsv_roundtrip_within_quantisation(r in 0u8.., g in 0u8.., b in 0u8..) {
			let color = RgbaColor::rgb(r, g, b);
			let back = RgbaColor::from_hsv(color.to_hsv());
			assert!(i16::from(back.red).abs_diff(i16::from(color.red)) <= 1);
			assert!(i16::from(back.green).abs_diff(i16::from(color.green)) <= 1);
			assert!(i16::from(back.blue).abs_diff(i16::from(color.blue)) <= 1);
		}

		#[test]
		fn prop_luma_in_unit_range(r in 0u8.., g in 0u8.., b in 0u8..) {
			let luma = RgbaColor::rgb(r, g, b).luma();
			assert!((0.0..=1.0).contains(&luma));
		}

		#[test]
		fn prop_short_hex_expands_by_duplication(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
			let short = format!("#{:x}{:x}{:x}", r, g, b);
			let long = format!("#{:x}{:x}{:x}{:x}{:x}{:x}", r, r, g, g, b, b);
			assert_eq!(RgbaColor::from_hex(&short).unwrap(), RgbaColor::from_hex(&long).unwrap());
		}
	}
}
