//! Plain-text transforms

/// Best-effort ASCII rendition of a string.
///
/// Common Latin diacritics and ligatures fold to their ASCII base; non-ASCII
/// characters without a mapping are dropped.
///
/// # Examples
///
/// ```
/// use webutils::convert::transliterate;
///
/// assert_eq!(transliterate("Café"), "Cafe");
/// assert_eq!(transliterate("Straße"), "Strasse");
/// assert_eq!(transliterate("Æther"), "AEther");
/// assert_eq!(transliterate("日本語 abc"), " abc");
/// ```
pub fn transliterate(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	for ch in text.chars() {
		if ch.is_ascii() {
			result.push(ch);
		} else if let Some(mapped) = fold_char(ch) {
			result.push_str(mapped);
		}
	}
	result
}

fn fold_char(ch: char) -> Option<&'static str> {
	let mapped = match ch {
		'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
		'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
		'æ' => "ae",
		'Æ' => "AE",
		'ç' | 'ć' | 'č' => "c",
		'Ç' | 'Ć' | 'Č' => "C",
		'ď' | 'đ' | 'ð' => "d",
		'Ď' | 'Đ' | 'Ð' => "D",
		'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
		'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
		'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => "i",
		'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' => "I",
		'ľ' | 'ł' => "l",
		'Ľ' | 'Ł' => "L",
		'ñ' | 'ń' | 'ň' => "n",
		'Ñ' | 'Ń' | 'Ň' => "N",
		'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
		'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
		'œ' => "oe",
		'Œ' => "OE",
		'ŕ' | 'ř' => "r",
		'Ŕ' | 'Ř' => "R",
		'ś' | 'š' | 'ş' => "s",
		'Ś' | 'Š' | 'Ş' => "S",
		'ß' => "ss",
		'ť' | 'ţ' => "t",
		'Ť' | 'Ţ' => "T",
		'þ' => "th",
		'Þ' => "TH",
		'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
		'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
		'ý' | 'ÿ' => "y",
		'Ý' | 'Ÿ' => "Y",
		'ź' | 'ż' | 'ž' => "z",
		'Ź' | 'Ż' | 'Ž' => "Z",
		_ => return None,
	};
	Some(mapped)
}

/// Normalize `\r\n` and bare `\r` line endings to `\n`
///
/// # Examples
///
/// ```
/// use webutils::convert::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
/// ```
pub fn normalize_newlines(text: &str) -> String {
	text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Replace tab characters with runs of spaces
///
/// # Examples
///
/// ```
/// use webutils::convert::tabs_to_spaces;
///
/// assert_eq!(tabs_to_spaces("a\tb", 4), "a    b");
/// ```
pub fn tabs_to_spaces(text: &str, width: usize) -> String {
	text.replace('\t', &" ".repeat(width))
}

/// Replace runs of spaces with tab characters
///
/// # Examples
///
/// ```
/// use webutils::convert::spaces_to_tabs;
///
/// assert_eq!(spaces_to_tabs("a    b", 4), "a\tb");
/// ```
pub fn spaces_to_tabs(text: &str, width: usize) -> String {
	if width == 0 {
		return text.to_string();
	}
	text.replace(&" ".repeat(width), "\t")
}

/// Make control characters visible as bracketed mnemonics.
///
/// Useful for logs and diagnostics where invisible characters would
/// otherwise go unnoticed.
///
/// # Examples
///
/// ```
/// use webutils::convert::hidden_chars;
///
/// assert_eq!(hidden_chars("a\tb\r\n"), "a[TAB]b[CR][LF]");
/// assert_eq!(hidden_chars("x\u{1b}y"), "x[U+001B]y");
/// ```
pub fn hidden_chars(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'\r' => result.push_str("[CR]"),
			'\n' => result.push_str("[LF]"),
			'\t' => result.push_str("[TAB]"),
			'\0' => result.push_str("[NUL]"),
			_ if ch.is_control() => {
				result.push_str(&format!("[U+{:04X}]", ch as u32));
			}
			_ => result.push(ch),
		}
	}
	result
}

/// Truncate to a maximum number of characters, appending `...` when cut
///
/// The ellipsis counts against the limit. When `max_chars` is smaller
/// than the ellipsis itself, only a clipped ellipsis is returned.
///
/// # Examples
///
/// ```
/// use webutils::convert::truncate;
///
/// assert_eq!(truncate("Hello World", 20), "Hello World");
/// assert_eq!(truncate("Hello World", 8), "Hello...");
/// assert_eq!(truncate("Hello", 2), "..");
/// ```
pub fn truncate(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}

	let content_limit = max_chars.saturating_sub(3);
	let mut result = String::new();

	for (count, ch) in text.chars().enumerate() {
		if count >= content_limit {
			result.push_str(&"..."[..max_chars.min(3)]);
			break;
		}
		result.push(ch);
	}

	result
}

/// Greedily wrap text at word boundaries.
///
/// A single word longer than the width occupies its own line unsplit.
///
/// # Examples
///
/// ```
/// use webutils::convert::word_wrap;
///
/// let lines = word_wrap("the quick brown fox jumps", 10);
/// assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
/// ```
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current_line = String::new();
	let mut current_width = 0;

	for word in text.split_whitespace() {
		let word_len = word.chars().count();

		if current_width + word_len + 1 > width && !current_line.is_empty() {
			lines.push(std::mem::take(&mut current_line));
			current_width = 0;
		}

		if !current_line.is_empty() {
			current_line.push(' ');
			current_width += 1;
		}

		current_line.push_str(word);
		current_width += word_len;
	}

	if !current_line.is_empty() {
		lines.push(current_line);
	}

	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transliterate() {
		assert_eq!(transliterate("Café au lait"), "Cafe au lait");
		assert_eq!(transliterate("Straße"), "Strasse");
		assert_eq!(transliterate("Æon Œuvre"), "AEon OEuvre");
		assert_eq!(transliterate("naïve façade"), "naive facade");
	}

	#[test]
	fn test_transliterate_drops_unmapped() {
		assert_eq!(transliterate("日本語"), "");
		assert_eq!(transliterate("a★b"), "ab");
	}

	#[test]
	fn test_transliterate_ascii_untouched() {
		assert_eq!(transliterate("plain ASCII 123!"), "plain ASCII 123!");
	}

	#[test]
	fn test_normalize_newlines() {
		assert_eq!(normalize_newlines("a\r\nb"), "a\nb");
		assert_eq!(normalize_newlines("a\rb"), "a\nb");
		assert_eq!(normalize_newlines("a\nb"), "a\nb");
		assert_eq!(normalize_newlines("a\r\n\rb"), "a\n\nb");
	}

	#[test]
	fn test_tabs_to_spaces() {
		assert_eq!(tabs_to_spaces("\ta", 2), "  a");
		assert_eq!(tabs_to_spaces("a\t\tb", 1), "a  b");
	}

	#[test]
	fn test_spaces_to_tabs() {
		assert_eq!(spaces_to_tabs("    a", 4), "\ta");
		assert_eq!(spaces_to_tabs("  a", 4), "  a");
		assert_eq!(spaces_to_tabs("a", 0), "a");
	}

	#[test]
	fn test_hidden_chars() {
		assert_eq!(hidden_chars("a\tb"), "a[TAB]b");
		assert_eq!(hidden_chars("line\r\n"), "line[CR][LF]");
		assert_eq!(hidden_chars("null\0"), "null[NUL]");
		assert_eq!(hidden_chars("esc\u{1b}"), "esc[U+001B]");
		assert_eq!(hidden_chars("visible"), "visible");
	}

	#[test]
	fn test_truncate() {
		assert_eq!(truncate("Hello World", 20), "Hello World");
		assert_eq!(truncate("Hello World", 8), "Hello...");
		assert_eq!(truncate("Test", 10), "Test");
		assert_eq!(truncate("Hello", 5), "Hello");
	}

	#[test]
	fn test_truncate_tiny_limits() {
		assert_eq!(truncate("Hello", 0), "");
		assert_eq!(truncate("Hello", 1), ".");
		assert_eq!(truncate("Hello", 2), "..");
		assert_eq!(truncate("Hello", 3), "...");
		assert_eq!(truncate("Hello World", 4), "H...");
	}

	#[test]
	fn test_truncate_multibyte() {
		assert_eq!(truncate("こんにちは世界", 5), "こん...");
	}

	#[test]
	fn test_word_wrap() {
		let lines = word_wrap("the quick brown fox jumps over the lazy dog", 15);
		assert!(lines.iter().all(|line| line.chars().count() <= 15));
		assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
	}

	#[test]
	fn test_word_wrap_long_word_unsplit() {
		let lines = word_wrap("short incomprehensibilities end", 10);
		assert!(lines.contains(&"incomprehensibilities".to_string()));
	}

	#[test]
	fn test_word_wrap_empty() {
		assert!(word_wrap("", 10).is_empty());
		assert!(word_wrap("   ", 10).is_empty());
	}
}
