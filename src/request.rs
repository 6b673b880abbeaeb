//! Request-parameter parsing and filtering
//!
//! [`parse_query`] turns a raw query string into decoded pairs, and
//! [`ParamSet`] filters those pairs against declared expectations: unknown
//! parameters are dropped, invalid values are replaced by their defaults
//! and recorded as rejections.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use regex::Regex;
use thiserror::Error;

use crate::convert;

/// Parse a query string into decoded key/value pairs.
///
/// Pairs split on `&` and on the first `=` only, so values may contain
/// `=`. `+` decodes as a space, percent-escapes decode lossily, a leading
/// `?` is tolerated and keys without `=` get an empty value.
///
/// # Examples
///
/// ```
/// use webutils::request::parse_query;
///
/// let pairs = parse_query("?q=a+b&filter=x%3D1&flag");
/// assert_eq!(pairs, vec![
///     ("q".to_string(), "a b".to_string()),
///     ("filter".to_string(), "x=1".to_string()),
///     ("flag".to_string(), String::new()),
/// ]);
/// ```
pub fn parse_query(query: &str) -> Vec<(String, String)> {
	let query = query.strip_prefix('?').unwrap_or(query);
	let mut pairs = Vec::new();

	for pair in query.split('&') {
		if pair.is_empty() {
			continue;
		}
		let mut parts = pair.splitn(2, '=');
		let key = parts.next().unwrap_or("");
		let value = parts.next().unwrap_or("");
		if key.is_empty() {
			continue;
		}
		pairs.push((decode_component(key), decode_component(value)));
	}

	pairs
}

fn decode_component(component: &str) -> String {
	let replaced = component.replace('+', " ");
	percent_decode_str(&replaced).decode_utf8_lossy().into_owned()
}

/// Why a parameter value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RejectReason {
	#[error("missing required parameter")]
	Missing,
	#[error("expected an integer")]
	NotInteger,
	#[error("expected a number")]
	NotFloat,
	#[error("expected a boolean")]
	NotBoolean,
	#[error("expected letters only")]
	NotAlpha,
	#[error("expected letters or digits only")]
	NotAlnum,
	#[error("expected a slug")]
	NotSlug,
	#[error("value not in the allowed set")]
	NotAllowed,
	#[error("value does not match the expected pattern")]
	NoMatch,
	#[error("expected a comma-separated list of ids")]
	NotIdList,
}

/// A parameter that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRejection {
	pub name: String,
	pub value: String,
	pub reason: RejectReason,
}

#[derive(Debug, Clone, Default)]
enum ParamKind {
	#[default]
	Any,
	Integer,
	Float,
	Boolean,
	Alpha,
	Alnum,
	Slug,
	OneOf(Vec<String>),
	Matches(Regex),
	IdList,
}

/// One declared parameter, configured fluently via [`ParamSet::register`]
#[derive(Debug, Clone)]
pub struct Param {
	name: String,
	kind: ParamKind,
	default: Option<String>,
	required: bool,
}

impl Param {
	fn new(name: String) -> Self {
		Self { name, kind: ParamKind::Any, default: None, required: false }
	}

	/// Accept any value. This is the default kind.
	pub fn any(&mut self) -> &mut Self {
		self.kind = ParamKind::Any;
		self
	}

	/// Accept only integers; values normalize to their canonical form
	pub fn integer(&mut self) -> &mut Self {
		self.kind = ParamKind::Integer;
		self
	}

	/// Accept only floating-point numbers
	pub fn float(&mut self) -> &mut Self {
		self.kind = ParamKind::Float;
		self
	}

	/// Accept boolean spellings (`true/false`, `yes/no`, `1/0`, `on/off`);
	/// values normalize to `true`/`false`
	pub fn boolean(&mut self) -> &mut Self {
		self.kind = ParamKind::Boolean;
		self
	}

	/// Accept letters only
	pub fn alpha(&mut self) -> &mut Self {
		self.kind = ParamKind::Alpha;
		self
	}

	/// Accept letters and digits only
	pub fn alnum(&mut self) -> &mut Self {
		self.kind = ParamKind::Alnum;
		self
	}

	/// Accept URL slugs: lowercase ASCII letters, digits and single hyphens
	pub fn slug(&mut self) -> &mut Self {
		self.kind = ParamKind::Slug;
		self
	}

	/// Accept only values from a whitelist
	pub fn one_of<I, S>(&mut self, allowed: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.kind = ParamKind::OneOf(allowed.into_iter().map(Into::into).collect());
		self
	}

	/// Accept values matching a pattern
	pub fn matches(&mut self, pattern: Regex) -> &mut Self {
		self.kind = ParamKind::Matches(pattern);
		self
	}

	/// Accept comma-separated lists of positive integers; empty entries
	/// are skipped and the value normalizes to `1,2,3` form
	pub fn id_list(&mut self) -> &mut Self {
		self.kind = ParamKind::IdList;
		self
	}

	/// Value to use when the parameter is missing or invalid
	pub fn default(&mut self, value: impl Into<String>) -> &mut Self {
		self.default = Some(value.into());
		self
	}

	/// Record a rejection when the parameter is absent
	pub fn required(&mut self) -> &mut Self {
		self.required = true;
		self
	}

	fn validate(&self, raw: &str) -> Result<String, RejectReason> {
		match &self.kind {
			ParamKind::Any => Ok(raw.to_string()),
			ParamKind::Integer => raw
				.parse::<i64>()
				.map(|n| n.to_string())
				.map_err(|_| RejectReason::NotInteger),
			ParamKind::Float => raw
				.parse::<f64>()
				.map(|_| raw.to_string())
				.map_err(|_| RejectReason::NotFloat),
			ParamKind::Boolean => convert::parse_bool(raw)
				.map(|b| b.to_string())
				.map_err(|_| RejectReason::NotBoolean),
			ParamKind::Alpha => {
				if !raw.is_empty() && raw.chars().all(char::is_alphabetic) {
					Ok(raw.to_string())
				} else {
					Err(RejectReason::NotAlpha)
				}
			}
			ParamKind::Alnum => {
				if !raw.is_empty() && raw.chars().all(char::is_alphanumeric) {
					Ok(raw.to_string())
				} else {
					Err(RejectReason::NotAlnum)
				}
			}
			ParamKind::Slug => {
				let valid = !raw.is_empty()
					&& !raw.starts_with('-')
					&& !raw.ends_with('-')
					&& !raw.contains("--")
					&& raw
						.chars()
						.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
				if valid { Ok(raw.to_string()) } else { Err(RejectReason::NotSlug) }
			}
			ParamKind::OneOf(allowed) => {
				if allowed.iter().any(|a| a == raw) {
					Ok(raw.to_string())
				} else {
					Err(RejectReason::NotAllowed)
				}
			}
			ParamKind::Matches(pattern) => {
				if pattern.is_match(raw) {
					Ok(raw.to_string())
				} else {
					Err(RejectReason::NoMatch)
				}
			}
			ParamKind::IdList => {
				let mut ids = Vec::new();
				for entry in raw.split(',') {
					let entry = entry.trim();
					if entry.is_empty() {
						continue;
					}
					match entry.parse::<u64>() {
						Ok(id) if id > 0 => ids.push(id.to_string()),
						_ => return Err(RejectReason::NotIdList),
					}
				}
				if ids.is_empty() {
					return Err(RejectReason::NotIdList);
				}
				Ok(ids.join(","))
			}
		}
	}
}

/// The declared set of parameters a request handler expects
///
/// # Examples
///
/// ```
/// use webutils::request::{parse_query, ParamSet};
///
/// let mut params = ParamSet::new();
/// params.register("page").integer().default("1");
/// params.register("sort").one_of(["asc", "desc"]);
///
/// let result = params.filter(&parse_query("page=3&sort=evil&other=x"));
/// assert_eq!(result.get_int("page"), Some(3));
/// assert_eq!(result.get("sort"), None);
/// assert!(result.is_rejected("sort"));
/// assert_eq!(result.get("other"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
	params: Vec<Param>,
}

impl ParamSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare a parameter and return it for fluent configuration.
	/// Re-registering a name resets its configuration.
	pub fn register(&mut self, name: impl Into<String>) -> &mut Param {
		let name = name.into();
		if let Some(index) = self.params.iter().position(|p| p.name == name) {
			self.params[index] = Param::new(name);
			return &mut self.params[index];
		}
		self.params.push(Param::new(name));
		let index = self.params.len() - 1;
		&mut self.params[index]
	}

	/// Filter decoded pairs against the declared parameters.
	///
	/// Unknown parameters are dropped. Values are trimmed before
	/// validation. When a key occurs more than once the last occurrence
	/// wins. Invalid values fall back to the declared default (or stay
	/// absent) and are recorded as rejections.
	pub fn filter(&self, pairs: &[(String, String)]) -> FilterResult {
		let mut result = FilterResult::default();

		for param in &self.params {
			let raw = pairs
				.iter()
				.rev()
				.find(|(name, _)| *name == param.name)
				.map(|(_, value)| value.trim());

			match raw {
				Some(raw) => match param.validate(raw) {
					Ok(value) => {
						result.values.insert(param.name.clone(), value);
					}
					Err(reason) => {
						tracing::debug!(
							"rejected parameter '{}' = '{}': {}",
							param.name,
							raw,
							reason
						);
						if let Some(default) = &param.default {
							result.values.insert(param.name.clone(), default.clone());
						}
						result.rejections.push(ParamRejection {
							name: param.name.clone(),
							value: raw.to_string(),
							reason,
						});
					}
				},
				None => {
					if let Some(default) = &param.default {
						result.values.insert(param.name.clone(), default.clone());
					} else if param.required {
						result.rejections.push(ParamRejection {
							name: param.name.clone(),
							value: String::new(),
							reason: RejectReason::Missing,
						});
					}
				}
			}
		}

		result
	}

	/// Parse a raw query string and filter it in one step
	pub fn filter_query(&self, query: &str) -> FilterResult {
		self.filter(&parse_query(query))
	}
}

/// The outcome of [`ParamSet::filter`]: accepted values plus rejections
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
	values: HashMap<String, String>,
	rejections: Vec<ParamRejection>,
}

impl FilterResult {
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	pub fn get_int(&self, name: &str) -> Option<i64> {
		self.get(name)?.parse().ok()
	}

	pub fn get_float(&self, name: &str) -> Option<f64> {
		self.get(name)?.parse().ok()
	}

	pub fn get_bool(&self, name: &str) -> Option<bool> {
		convert::parse_bool(self.get(name)?).ok()
	}

	/// Ids from an `id_list` parameter, empty when absent
	pub fn get_id_list(&self, name: &str) -> Vec<u64> {
		self.get(name)
			.map(|value| value.split(',').filter_map(|id| id.parse().ok()).collect())
			.unwrap_or_default()
	}

	pub fn is_rejected(&self, name: &str) -> bool {
		self.rejections.iter().any(|r| r.name == name)
	}

	pub fn rejections(&self) -> &[ParamRejection] {
		&self.rejections
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
