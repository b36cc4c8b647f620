// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields a contact form collects.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
	Name,
	Email,
	Phone,
	Service,
	Message,
}

impl ContactField {
	/// Every field, in the order forms display them.
	pub const ALL: [ContactField; 5] = [Self::Name, Self::Email, Self::Phone, Self::Service, Self::Message];

	/// The key used for this field in submitted payloads and input names.
	pub fn key(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::Service => "service",
			Self::Message => "message",
		}
	}

	fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for ContactField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.key())
	}
}

/// The state of one user-editable input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormField {
	/// The raw input, stored exactly as typed.
	pub value: String,
	/// The current validation message. Empty when the value is valid.
	pub error: String,
	/// Whether the field has lost focus or been part of a submit attempt.
	pub touched: bool,
}

impl FormField {
	/// The error that should be shown to the user, if any.
	///
	/// Errors stay hidden until the field has been touched.
	pub fn visible_error(&self) -> Option<&str> {
		if self.touched && !self.error.is_empty() {
			Some(&self.error)
		} else {
			None
		}
	}
}

/// Per-field state for a whole contact form.
///
/// The set of fields is fixed: there's exactly one entry for each [ContactField].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
	fields: [FormField; ContactField::ALL.len()],
}

impl FormState {
	pub fn field(&self, field: ContactField) -> &FormField {
		&self.fields[field.index()]
	}

	pub(super) fn field_mut(&mut self, field: ContactField) -> &mut FormField {
		&mut self.fields[field.index()]
	}

	pub fn value(&self, field: ContactField) -> &str {
		&self.field(field).value
	}

	/// Whether any field currently holds a validation error, shown or not.
	pub fn has_errors(&self) -> bool {
		self.fields.iter().any(|field| !field.error.is_empty())
	}

	pub fn iter(&self) -> impl Iterator<Item = (ContactField, &FormField)> {
		ContactField::ALL.into_iter().zip(self.fields.iter())
	}
}
