// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field::{ContactField, FormField, FormState};
use super::rules::FieldRules;
use super::submitter::{ContactPayload, ContactSubmitter, SubmitError, subject_for_service};
use leptos::logging::{log, warn};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

/// Where a form is in its submission lifecycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	Error,
}

/// Collects, validates, and submits the fields of a contact form.
///
/// At most one submission is in flight at a time: [Self::begin_submit] refuses to start another while the
/// status is [SubmitStatus::Submitting], and only [Self::complete_submit] leaves that status.
#[derive(Clone, Debug)]
pub struct FormController {
	rules: &'static FieldRules,
	destination: String,
	state: FormState,
	status: SubmitStatus,
	message: Option<String>,
}

impl FormController {
	/// Creates a controller for a form whose submissions are addressed to `destination`.
	pub fn new(destination: impl Into<String>) -> Self {
		Self::with_rules(FieldRules::contact(), destination)
	}

	pub fn with_rules(rules: &'static FieldRules, destination: impl Into<String>) -> Self {
		Self {
			rules,
			destination: destination.into(),
			state: FormState::default(),
			status: SubmitStatus::Idle,
			message: None,
		}
	}

	pub fn field(&self, field: ContactField) -> &FormField {
		self.state.field(field)
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn submit_status(&self) -> SubmitStatus {
		self.status
	}

	pub fn submit_message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	pub fn is_submitting(&self) -> bool {
		self.status == SubmitStatus::Submitting
	}

	/// Stores a new raw value for a field.
	///
	/// The field's error is only recomputed once the field has been touched. Editing after a finished
	/// submission clears the success or failure banner.
	pub fn set_field_value(&mut self, field: ContactField, value: impl Into<String>) {
		let rules = self.rules;
		let entry = self.state.field_mut(field);
		entry.value = value.into();
		if entry.touched {
			entry.error = rules.validate(field, &entry.value);
		}

		if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
			self.status = SubmitStatus::Idle;
			self.message = None;
		}
	}

	/// Marks a field as touched (it lost focus) and reveals its validation result.
	pub fn mark_touched(&mut self, field: ContactField) {
		let rules = self.rules;
		let entry = self.state.field_mut(field);
		entry.touched = true;
		entry.error = rules.validate(field, &entry.value);
	}

	/// Returns the form to its initial empty state.
	pub fn reset(&mut self) {
		self.state = FormState::default();
		self.status = SubmitStatus::Idle;
		self.message = None;
	}

	/// Validates every field and, if all are valid, moves to [SubmitStatus::Submitting] and returns the
	/// payload to deliver.
	///
	/// Returns `None` without changing anything while a submission is already in flight, and `None` with
	/// every field touched and its error recomputed when validation fails.
	pub fn begin_submit(&mut self) -> Option<ContactPayload> {
		if self.is_submitting() {
			log!("Ignoring submit while a submission is in flight");
			return None;
		}
		self.status = SubmitStatus::Idle;
		self.message = None;

		for field in ContactField::ALL {
			self.mark_touched(field);
		}
		if self.state.has_errors() {
			return None;
		}

		self.status = SubmitStatus::Submitting;
		Some(self.payload())
	}

	/// Records the outcome of the submission started by [Self::begin_submit].
	pub fn complete_submit(&mut self, result: Result<(), SubmitError>) {
		if !self.is_submitting() {
			warn!("Submission result arrived with no submission in flight");
			return;
		}

		match result {
			Ok(()) => {
				self.state = FormState::default();
				self.status = SubmitStatus::Success;
				self.message = Some(String::from(SUCCESS_MESSAGE));
			}
			Err(error) => {
				warn!("{}", failure_report(&error));
				self.status = SubmitStatus::Error;
				self.message = Some(String::from(FAILURE_MESSAGE));
			}
		}
	}

	/// Validates and, if valid, submits the form through `submitter`.
	pub async fn submit<S: ContactSubmitter + ?Sized>(&mut self, submitter: &S) {
		let Some(payload) = self.begin_submit() else {
			return;
		};
		let result = submitter.submit(&payload).await;
		self.complete_submit(result);
	}

	fn payload(&self) -> ContactPayload {
		let value = |field| self.state.value(field).to_string();
		ContactPayload {
			name: value(ContactField::Name),
			email: value(ContactField::Email),
			phone: value(ContactField::Phone),
			service: value(ContactField::Service),
			message: value(ContactField::Message),
			to: self.destination.clone(),
			subject: subject_for_service(self.state.value(ContactField::Service)),
		}
	}
}

// Logged through leptos so the cause reaches the browser console as well as stderr.
fn failure_report(error: &SubmitError) -> String {
	format!("Failed to submit contact form: {}", error)
}
