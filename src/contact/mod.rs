// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contact form state, validation, and submission, shared by every contact form on the site.

mod controller;
mod field;
mod rules;
mod submitter;

pub use controller::{FAILURE_MESSAGE, FormController, SUCCESS_MESSAGE, SubmitStatus};
pub use field::{ContactField, FormField, FormState};
pub use rules::{FieldRule, FieldRules, validate_field};
pub use submitter::{
	CONTACT_ENDPOINT, ContactPayload, ContactResponse, ContactSubmitter, DEFAULT_SUBJECT, HttpSubmitter, SubmitError,
	interpret_response, subject_for_service,
};
