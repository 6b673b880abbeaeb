//! Identifier case conversion

/// Split an identifier into its words.
///
/// Boundaries are existing separators (space, `-`, `_` and any other
/// non-alphanumeric character), lower-to-upper transitions and the end of
/// an acronym (`HTTPServer` splits into `HTTP` + `Server`). Digits bind to
/// the word before them, so `v2Beta` splits into `v2` + `Beta`.
fn split_words(input: &str) -> Vec<String> {
	let chars: Vec<char> = input.chars().collect();
	let mut words = Vec::new();
	let mut current = String::new();

	for (i, &ch) in chars.iter().enumerate() {
		if !ch.is_alphanumeric() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			continue;
		}

		if let Some(prev) = current.chars().last() {
			let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && ch.is_uppercase();
			let acronym_end = prev.is_uppercase()
				&& ch.is_uppercase()
				&& chars.get(i + 1).is_some_and(|next| next.is_lowercase());
			if lower_to_upper || acronym_end {
				words.push(std::mem::take(&mut current));
			}
		}

		current.push(ch);
	}

	if !current.is_empty() {
		words.push(current);
	}

	words
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
		None => String::new(),
	}
}

/// Convert an identifier to `snake_case`
///
/// # Examples
///
/// ```
/// use webutils::convert::to_snake_case;
///
/// assert_eq!(to_snake_case("helloWorld"), "hello_world");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("v2Beta"), "v2_beta");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(input: &str) -> String {
	split_words(input)
		.iter()
		.map(|word| word.to_lowercase())
		.collect::<Vec<_>>()
		.join("_")
}

/// Convert an identifier to `kebab-case`
///
/// # Examples
///
/// ```
/// use webutils::convert::to_kebab_case;
///
/// assert_eq!(to_kebab_case("helloWorld"), "hello-world");
/// assert_eq!(to_kebab_case("Background Color"), "background-color");
/// ```
pub fn to_kebab_case(input: &str) -> String {
	split_words(input)
		.iter()
		.map(|word| word.to_lowercase())
		.collect::<Vec<_>>()
		.join("-")
}

/// Convert an identifier to `camelCase`
///
/// # Examples
///
/// ```
/// use webutils::convert::to_camel_case;
///
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("HTTP server"), "httpServer");
/// ```
pub fn to_camel_case(input: &str) -> String {
	let words = split_words(input);
	let mut result = String::new();
	for (i, word) in words.iter().enumerate() {
		if i == 0 {
			result.push_str(&word.to_lowercase());
		} else {
			result.push_str(&capitalize(word));
		}
	}
	result
}

/// Convert an identifier to `PascalCase`
///
/// # Examples
///
/// ```
/// use webutils::convert::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("user-profile"), "UserProfile");
/// assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
/// ```
pub fn to_pascal_case(input: &str) -> String {
	split_words(input).iter().map(|word| capitalize(word)).collect()
}

/// Convert an identifier to `Title Case`
///
/// # Examples
///
/// ```
/// use webutils::convert::to_title_case;
///
/// assert_eq!(to_title_case("hello_world"), "Hello World");
/// assert_eq!(to_title_case("backgroundColor"), "Background Color");
/// ```
pub fn to_title_case(input: &str) -> String {
	split_words(input)
		.iter()
		.map(|word| capitalize(word))
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_snake_case() {
		assert_eq!(to_snake_case("helloWorld"), "hello_world");
		assert_eq!(to_snake_case("HelloWorld"), "hello_world");
		assert_eq!(to_snake_case("hello world"), "hello_world");
		assert_eq!(to_snake_case("hello-world"), "hello_world");
		assert_eq!(to_snake_case("already_snake"), "already_snake");
	}

	#[test]
	fn test_to_snake_case_acronyms() {
		assert_eq!(to_snake_case("HTTPServer"), "http_server");
		assert_eq!(to_snake_case("parseXMLDocument"), "parse_xml_document");
		assert_eq!(to_snake_case("IOError"), "io_error");
	}

	#[test]
	fn test_digits_bind_to_previous_word() {
		assert_eq!(to_snake_case("v2Beta"), "v2_beta");
		assert_eq!(to_snake_case("utf8Decoder"), "utf8_decoder");
		assert_eq!(to_pascal_case("v2_beta"), "V2Beta");
	}

	#[test]
	fn test_to_kebab_case() {
		assert_eq!(to_kebab_case("backgroundColor"), "background-color");
		assert_eq!(to_kebab_case("Background Color"), "background-color");
		assert_eq!(to_kebab_case("background_color"), "background-color");
	}

	#[test]
	fn test_to_camel_case() {
		assert_eq!(to_camel_case("hello_world"), "helloWorld");
		assert_eq!(to_camel_case("hello-world"), "helloWorld");
		assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
		assert_eq!(to_camel_case("HTTP server"), "httpServer");
	}

	#[test]
	fn test_to_pascal_case() {
		assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
		assert_eq!(to_pascal_case("user-profile"), "UserProfile");
		assert_eq!(to_pascal_case("userProfile"), "UserProfile");
	}

	#[test]
	fn test_to_title_case() {
		assert_eq!(to_title_case("hello_world"), "Hello World");
		assert_eq!(to_title_case("backgroundColor"), "Background Color");
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(to_snake_case(""), "");
		assert_eq!(to_camel_case(""), "");
		assert_eq!(to_pascal_case(""), "");
	}

	#[test]
	fn test_consecutive_separators_collapse() {
		assert_eq!(to_snake_case("hello__world"), "hello_world");
		assert_eq!(to_snake_case("hello -- world"), "hello_world");
		assert_eq!(to_kebab_case("a...b"), "a-b");
	}

	#[test]
	fn test_non_alphanumeric_dropped() {
		assert_eq!(to_snake_case("hello!world"), "hello_world");
		assert_eq!(to_pascal_case("user@profile"), "UserProfile");
	}

	#[test]
	fn test_single_word() {
		assert_eq!(to_snake_case("hello"), "hello");
		assert_eq!(to_pascal_case("hello"), "Hello");
		assert_eq!(to_camel_case("Hello"), "hello");
	}
}
