// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field::ContactField;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The path of the endpoint contact forms post to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Subject used when no service was selected.
pub const DEFAULT_SUBJECT: &str = "General Inquiry";

/// The body of a contact form submission.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContactPayload {
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default)]
	pub service: String,
	pub message: String,
	/// Where the inquiry should be delivered.
	#[serde(default)]
	pub to: String,
	#[serde(default)]
	pub subject: String,
}

impl ContactPayload {
	pub fn value(&self, field: ContactField) -> &str {
		match field {
			ContactField::Name => &self.name,
			ContactField::Email => &self.email,
			ContactField::Phone => &self.phone,
			ContactField::Service => &self.service,
			ContactField::Message => &self.message,
		}
	}
}

/// Builds the subject line for an inquiry about the given service.
pub fn subject_for_service(service: &str) -> String {
	let service = service.trim();
	if service.is_empty() {
		String::from(DEFAULT_SUBJECT)
	} else {
		format!("{} Inquiry", service)
	}
}

/// The body the contact endpoint responds with.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContactResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl ContactResponse {
	pub fn delivered() -> Self {
		Self {
			success: true,
			message: None,
		}
	}

	pub fn failed(message: impl Into<String>) -> Self {
		Self {
			success: false,
			message: Some(message.into()),
		}
	}
}

#[derive(Debug, Error)]
pub enum SubmitError {
	#[error("request failed: {0}")]
	Network(#[from] reqwest::Error),
	#[error("server responded with status {0}")]
	Status(u16),
	#[error("malformed response: {0}")]
	MalformedResponse(String),
	#[error("server rejected the submission: {}", .0.as_deref().unwrap_or("no reason given"))]
	Rejected(Option<String>),
	#[error("no submission endpoint available: {0}")]
	Unavailable(String),
}

/// Delivers contact form submissions somewhere.
#[async_trait(?Send)]
pub trait ContactSubmitter {
	async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// Posts submissions as JSON to the contact endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpSubmitter {
	/// Creates a submitter posting to `endpoint`, which must be an absolute URL.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}

	/// Creates a submitter posting to the contact endpoint on the given origin (e.g. `https://example.com`).
	pub fn for_origin(origin: &str) -> Self {
		Self::new(format!("{}{}", origin.trim_end_matches('/'), CONTACT_ENDPOINT))
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait(?Send)]
impl ContactSubmitter for HttpSubmitter {
	async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
		let response = self.client.post(&self.endpoint).json(payload).send().await?;
		let status = response.status().as_u16();
		let body = response.text().await?;
		interpret_response(status, &body)
	}
}

/// Decides whether a response from the contact endpoint means the submission was delivered.
///
/// Only a 2xx status with a JSON body whose `success` flag is `true` counts.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
	if !(200..300).contains(&status) {
		return Err(SubmitError::Status(status));
	}

	let body: Value = serde_json::from_str(body).map_err(|error| SubmitError::MalformedResponse(error.to_string()))?;
	match body.get("success") {
		Some(Value::Bool(true)) => Ok(()),
		Some(Value::Bool(false)) => {
			let message = body.get("message").and_then(Value::as_str).map(String::from);
			Err(SubmitError::Rejected(message))
		}
		Some(_) => Err(SubmitError::MalformedResponse(String::from("success flag is not a boolean"))),
		None => Err(SubmitError::MalformedResponse(String::from("missing success flag"))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_needs_true_flag() {
		assert!(interpret_response(200, r#"{"success":true}"#).is_ok());
		assert!(interpret_response(201, r#"{"success":true,"message":"queued"}"#).is_ok());
	}

	#[test]
	fn error_status_fails_regardless_of_body() {
		assert!(matches!(
			interpret_response(500, r#"{"success":true}"#),
			Err(SubmitError::Status(500))
		));
		assert!(matches!(interpret_response(404, ""), Err(SubmitError::Status(404))));
	}

	#[test]
	fn malformed_bodies_fail() {
		assert!(matches!(
			interpret_response(200, "<html>oops</html>"),
			Err(SubmitError::MalformedResponse(_))
		));
		assert!(matches!(
			interpret_response(200, r#"{"ok":true}"#),
			Err(SubmitError::MalformedResponse(_))
		));
		assert!(matches!(
			interpret_response(200, r#"{"success":"true"}"#),
			Err(SubmitError::MalformedResponse(_))
		));
	}

	#[test]
	fn false_flag_is_a_rejection() {
		let result = interpret_response(200, r#"{"success":false,"message":"Invalid email address"}"#);
		match result {
			Err(SubmitError::Rejected(Some(message))) => assert_eq!(message, "Invalid email address"),
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn subject_uses_service_when_selected() {
		assert_eq!(subject_for_service(""), "General Inquiry");
		assert_eq!(subject_for_service("  "), "General Inquiry");
		assert_eq!(subject_for_service("Fiber Optic Installation"), "Fiber Optic Installation Inquiry");
	}

	#[test]
	fn origin_endpoint_joins_cleanly() {
		assert_eq!(
			HttpSubmitter::for_origin("https://example.com/").endpoint(),
			"https://example.com/api/contact"
		);
		assert_eq!(
			HttpSubmitter::for_origin("http://127.0.0.1:3000").endpoint(),
			"http://127.0.0.1:3000/api/contact"
		);
	}

	#[test]
	fn payload_tolerates_missing_optional_fields() {
		let payload: ContactPayload =
			serde_json::from_str(r#"{"name":"Jane","email":"jane@example.com","message":"Hello there, friends"}"#)
				.unwrap();
		assert_eq!(payload.value(ContactField::Phone), "");
		assert_eq!(payload.value(ContactField::Service), "");
		assert_eq!(payload.value(ContactField::Name), "Jane");
	}
}
