// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field::ContactField;
use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const PHONE_PATTERN: &str = r"^\+?[0-9\s-]{10,}$";
const MESSAGE_MIN_LENGTH: usize = 10;

static CONTACT_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
	let email_pattern = Regex::new(EMAIL_PATTERN).expect("email pattern is valid");
	let phone_pattern = Regex::new(PHONE_PATTERN).expect("phone pattern is valid");

	FieldRules::permissive()
		.with(ContactField::Name, FieldRule::required("Name is required"))
		.with(
			ContactField::Email,
			FieldRule::required("Email is required").with_pattern(email_pattern, "Invalid email address"),
		)
		.with(
			ContactField::Phone,
			FieldRule::optional().with_pattern(phone_pattern, "Invalid phone number"),
		)
		.with(
			ContactField::Message,
			FieldRule::required("Message is required").with_min_length(MESSAGE_MIN_LENGTH, "Message is too short"),
		)
});

/// Validates one field of a contact form, returning the error message for the value.
/// An empty message means the value is valid.
pub fn validate_field(field: ContactField, value: &str) -> String {
	FieldRules::contact().validate(field, value)
}

/// How a single field is checked.
///
/// Checks run in order: required, then pattern, then minimum length. The first failing check supplies the
/// message. Empty values skip the pattern and length checks, so optional fields accept them. A required field
/// counts a whitespace-only value as empty; an optional one only skips its checks when the value is truly empty.
#[derive(Clone, Debug, Default)]
pub struct FieldRule {
	required: Option<&'static str>,
	pattern: Option<(Regex, &'static str)>,
	min_length: Option<(usize, &'static str)>,
}

impl FieldRule {
	pub fn optional() -> Self {
		Self::default()
	}

	pub fn required(message: &'static str) -> Self {
		Self {
			required: Some(message),
			..Self::default()
		}
	}

	/// Requires the raw value to match `pattern`.
	pub fn with_pattern(mut self, pattern: Regex, message: &'static str) -> Self {
		self.pattern = Some((pattern, message));
		self
	}

	/// Requires the trimmed value to be at least `min_length` characters long.
	pub fn with_min_length(mut self, min_length: usize, message: &'static str) -> Self {
		self.min_length = Some((min_length, message));
		self
	}

	pub fn check(&self, value: &str) -> String {
		let trimmed = value.trim();
		match self.required {
			Some(message) if trimmed.is_empty() => return String::from(message),
			None if value.is_empty() => return String::new(),
			_ => {}
		}

		if let Some((pattern, message)) = &self.pattern {
			if !pattern.is_match(value) {
				return String::from(*message);
			}
		}

		if let Some((min_length, message)) = self.min_length {
			if trimmed.chars().count() < min_length {
				return String::from(message);
			}
		}

		String::new()
	}
}

/// The validation rule for every field of a form.
#[derive(Clone, Debug, Default)]
pub struct FieldRules {
	rules: [FieldRule; ContactField::ALL.len()],
}

impl FieldRules {
	/// A table that accepts any value for every field.
	pub fn permissive() -> Self {
		Self::default()
	}

	/// The rules shared by every contact form on the site and by the contact endpoint.
	pub fn contact() -> &'static Self {
		&CONTACT_RULES
	}

	pub fn with(mut self, field: ContactField, rule: FieldRule) -> Self {
		self.rules[field as usize] = rule;
		self
	}

	pub fn rule(&self, field: ContactField) -> &FieldRule {
		&self.rules[field as usize]
	}

	pub fn validate(&self, field: ContactField, value: &str) -> String {
		self.rule(field).check(value)
	}

	/// Validates a full set of values, returning the fields that fail along with their messages.
	pub fn failures<'a>(&self, values: impl Fn(ContactField) -> &'a str) -> Vec<(ContactField, String)> {
		ContactField::ALL
			.into_iter()
			.filter_map(|field| {
				let error = self.validate(field, values(field));
				if error.is_empty() { None } else { Some((field, error)) }
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn name_is_required() {
		assert_eq!(validate_field(ContactField::Name, ""), "Name is required");
		assert_eq!(validate_field(ContactField::Name, "   \t"), "Name is required");
		assert_eq!(validate_field(ContactField::Name, "Jane"), "");
	}

	#[test]
	fn email_rules() {
		assert_eq!(validate_field(ContactField::Email, ""), "Email is required");
		assert_eq!(validate_field(ContactField::Email, "  "), "Email is required");
		assert_eq!(validate_field(ContactField::Email, "not-an-email"), "Invalid email address");
		assert_eq!(validate_field(ContactField::Email, "a@b"), "Invalid email address");
		assert_eq!(validate_field(ContactField::Email, "a@b.c"), "Invalid email address");
		assert_eq!(validate_field(ContactField::Email, "a@b.com"), "");
		assert_eq!(validate_field(ContactField::Email, "Jane.Doe+site@Example.CO.uk"), "");
		assert_eq!(validate_field(ContactField::Email, "\u{17f}@b.com"), "Invalid email address");
		assert_eq!(validate_field(ContactField::Email, "a@b.\u{212a}\u{212a}"), "Invalid email address");
		assert_eq!(validate_field(ContactField::Email, "jane@\u{212a}elvin.com"), "Invalid email address");
	}

	#[test]
	fn phone_is_optional_but_checked_when_present() {
		assert_eq!(validate_field(ContactField::Phone, ""), "");
		assert_eq!(validate_field(ContactField::Phone, "123"), "Invalid phone number");
		assert_eq!(validate_field(ContactField::Phone, "555-123-4567"), "");
		assert_eq!(validate_field(ContactField::Phone, "+1 555 123 4567"), "");
		assert_eq!(validate_field(ContactField::Phone, "555-CALL-NOW"), "Invalid phone number");
		assert_eq!(validate_field(ContactField::Phone, "555+1234567"), "Invalid phone number");
		assert_eq!(validate_field(ContactField::Phone, "   "), "Invalid phone number");
	}

	#[test]
	fn message_rules() {
		assert_eq!(validate_field(ContactField::Message, ""), "Message is required");
		assert_eq!(validate_field(ContactField::Message, "short"), "Message is too short");
		assert_eq!(validate_field(ContactField::Message, "  short    "), "Message is too short");
		assert_eq!(validate_field(ContactField::Message, "this is long enough"), "");
		assert_eq!(validate_field(ContactField::Message, "0123456789"), "");
	}

	#[test]
	fn service_is_never_invalid() {
		assert_eq!(validate_field(ContactField::Service, ""), "");
		assert_eq!(validate_field(ContactField::Service, "anything at all"), "");
	}

	#[test]
	fn validation_is_deterministic() {
		for field in ContactField::ALL {
			for value in ["", "x", "a@b.com", "555-123-4567", "this is long enough"] {
				assert_eq!(validate_field(field, value), validate_field(field, value));
			}
		}
	}

	#[test]
	fn permissive_table_accepts_everything() {
		let rules = FieldRules::permissive();
		for field in ContactField::ALL {
			assert_eq!(rules.validate(field, ""), "");
		}
	}

	#[test]
	fn failures_lists_each_bad_field() {
		let failures = FieldRules::contact().failures(|field| match field {
			ContactField::Email => "a@b.com",
			ContactField::Message => "hello",
			_ => "",
		});
		assert_eq!(
			failures,
			vec![
				(ContactField::Name, String::from("Name is required")),
				(ContactField::Message, String::from("Message is too short")),
			]
		);
	}
}
