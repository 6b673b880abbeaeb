//! Scanning free text for links

use std::sync::OnceLock;

use regex::Regex;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
	URL_PATTERN.get_or_init(|| {
		Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"'`]+"#).unwrap()
	})
}

fn email_pattern() -> &'static Regex {
	EMAIL_PATTERN.get_or_init(|| {
		Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
	})
}

/// Extracts link candidates from prose.
///
/// Candidates are `http(s)://` and `www.` runs. Trailing sentence
/// punctuation is trimmed; closing brackets are kept only while they
/// pair with an opener inside the candidate, so Wikipedia-style URLs
/// survive. Results are deduplicated in first-seen order.
///
/// # Examples
///
/// ```
/// use webutils::url::UrlFinder;
///
/// let found = UrlFinder::new()
///     .include_emails()
///     .find("see https://example.com/a, mail me at a@b.example.");
/// assert_eq!(found, vec!["https://example.com/a", "a@b.example"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlFinder {
	include_emails: bool,
}

impl UrlFinder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Also report bare e-mail addresses
	pub fn include_emails(mut self) -> Self {
		self.include_emails = true;
		self
	}

	pub fn find(&self, text: &str) -> Vec<String> {
		let mut candidates: Vec<(usize, String)> = Vec::new();

		for found in url_pattern().find_iter(text) {
			let trimmed = trim_trailing_punctuation(found.as_str());
			if !trimmed.is_empty() {
				candidates.push((found.start(), trimmed.to_string()));
			}
		}
		if self.include_emails {
			for found in email_pattern().find_iter(text) {
				candidates.push((found.start(), found.as_str().to_string()));
			}
		}

		candidates.sort_by_key(|(start, _)| *start);

		let mut unique = Vec::new();
		for (_, candidate) in candidates {
			if !unique.contains(&candidate) {
				unique.push(candidate);
			}
		}
		unique
	}
}

/// Scan text for URLs with the default finder.
///
/// # Examples
///
/// ```
/// use webutils::url::find_urls;
///
/// let found = find_urls("docs at https://example.com/doc. twice: https://example.com/doc");
/// assert_eq!(found, vec!["https://example.com/doc"]);
/// ```
pub fn find_urls(text: &str) -> Vec<String> {
	UrlFinder::new().find(text)
}

fn trim_trailing_punctuation(candidate: &str) -> &str {
	let mut result = candidate;
	loop {
		let Some(last) = result.chars().last() else {
			break;
		};
		let trim = match last {
			'.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' => true,
			')' => result.matches('(').count() < result.matches(')').count(),
			']' => result.matches('[').count() < result.matches(']').count(),
			'}' => result.matches('{').count() < result.matches('}').count(),
			_ => false,
		};
		if !trim {
			break;
		}
		result = &result[..result.len() - last.len_utf8()];
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_find_urls_basic() {
		let found = find_urls("start https://a.example/x and http://b.example end");
		assert_eq!(found, vec!["https://a.example/x", "http://b.example"]);
	}

	#[test]
	fn test_find_urls_www_form() {
		assert_eq!(find_urls("visit www.example.com today"), vec!["www.example.com"]);
	}

	#[test]
	fn test_find_urls_trims_sentence_punctuation() {
		assert_eq!(find_urls("read https://a.example/doc."), vec!["https://a.example/doc"]);
		assert_eq!(find_urls("really? https://a.example/q?!"), vec!["https://a.example/q"]);
		assert_eq!(find_urls("(see https://a.example/x)"), vec!["https://a.example/x"]);
	}

	#[test]
	fn test_find_urls_keeps_balanced_parens() {
		assert_eq!(
			find_urls("see https://en.example.org/wiki/Rust_(language)"),
			vec!["https://en.example.org/wiki/Rust_(language)"]
		);
	}

	#[test]
	fn test_find_urls_dedups_first_seen() {
		let found = find_urls("https://a.example then https://b.example then https://a.example");
		assert_eq!(found, vec!["https://a.example", "https://b.example"]);
	}

	#[test]
	fn test_find_urls_ignores_emails_by_default() {
		assert!(find_urls("mail a@b.example please").is_empty());
	}

	#[test]
	fn test_finder_includes_emails_in_text_order() {
		let found = UrlFinder::new()
			.include_emails()
			.find("a@b.example then https://a.example");
		assert_eq!(found, vec!["a@b.example", "https://a.example"]);
	}

	#[test]
	fn test_find_urls_case_insensitive_scheme() {
		assert_eq!(find_urls("HTTPS://A.EXAMPLE/P"), vec!["HTTPS://A.EXAMPLE/P"]);
	}

	#[test]
	fn test_find_urls_stops_at_markup() {
		assert_eq!(
			find_urls("<a href=\"https://a.example/x\">link</a>"),
			vec!["https://a.example/x"]
		);
	}

	#[test]
	fn test_find_urls_empty_text() {
		assert!(find_urls("").is_empty());
		assert!(find_urls("no links here").is_empty());
	}
}
