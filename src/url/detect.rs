//! Input filtering and link-type detection

use std::sync::OnceLock;

use regex::Regex;

use super::UrlType;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
	EMAIL_PATTERN.get_or_init(|| {
		Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
	})
}

/// Clean up pasted input before parsing: trim surrounding whitespace,
/// drop embedded line breaks and tabs, and decode `&amp;` left over from
/// HTML sources.
pub(crate) fn filter_input(raw: &str) -> String {
	raw.trim().replace(['\n', '\r', '\t'], "").replace("&amp;", "&")
}

/// Decide what kind of link a filtered input is.
///
/// Detection is prefix-first (`#`, `mailto:`, `tel:`); bare e-mail
/// addresses are recognized without the `mailto:` scheme.
pub(crate) fn classify(input: &str) -> UrlType {
	if input.starts_with('#') {
		return UrlType::Fragment;
	}
	if strip_prefix_ci(input, "mailto:").is_some() {
		return UrlType::Email;
	}
	if strip_prefix_ci(input, "tel:").is_some() {
		return UrlType::Phone;
	}
	if email_pattern().is_match(input) {
		return UrlType::Email;
	}
	UrlType::Url
}

/// Case-insensitive prefix strip for ASCII scheme prefixes
pub(crate) fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
	let (head, tail) = input.split_at_checked(prefix.len())?;
	head.eq_ignore_ascii_case(prefix).then_some(tail)
}
