// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ContactConfig;
use crate::contact::{ContactPayload, subject_for_service};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
	#[error("relay request failed")]
	Request(#[from] reqwest::Error),
	#[error("relay responded with status {0}")]
	Status(u16),
}

/// A contact inquiry as handed to the mail relay.
#[derive(Clone, Debug, Serialize)]
pub struct Inquiry {
	pub to: String,
	pub reply_to: String,
	pub subject: String,
	pub text: String,
	pub received_at: DateTime<Utc>,
}

/// Delivers contact inquiries to the configured mail relay.
#[derive(Clone, Debug)]
pub struct MailRelay {
	client: reqwest::Client,
	destination: String,
	relay_url: Option<String>,
	relay_token: Option<String>,
}

impl MailRelay {
	pub fn new(config: &ContactConfig) -> Self {
		Self {
			client: reqwest::Client::new(),
			destination: config.destination.clone(),
			relay_url: config.relay_url.clone(),
			relay_token: config.relay_token.clone(),
		}
	}

	/// Builds the inquiry for a submission.
	///
	/// The destination always comes from the configuration, never from the submission.
	pub fn inquiry(&self, payload: &ContactPayload) -> Inquiry {
		Inquiry {
			to: self.destination.clone(),
			reply_to: payload.email.trim().to_string(),
			subject: subject_for_service(&payload.service),
			text: inquiry_text(payload),
			received_at: Utc::now(),
		}
	}

	pub async fn deliver(&self, payload: &ContactPayload) -> Result<(), RelayError> {
		let inquiry = self.inquiry(payload);

		let Some(relay_url) = &self.relay_url else {
			tracing::info!(
				to = %inquiry.to,
				reply_to = %inquiry.reply_to,
				subject = %inquiry.subject,
				text = %inquiry.text,
				"No mail relay configured; recording contact inquiry in the log"
			);
			return Ok(());
		};

		let mut request = self.client.post(relay_url).json(&inquiry);
		if let Some(token) = &self.relay_token {
			request = request.bearer_auth(token);
		}

		let response = request.send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(RelayError::Status(status.as_u16()));
		}

		tracing::info!(subject = %inquiry.subject, "Delivered contact inquiry");
		Ok(())
	}
}

/// Formats the plain-text body of an inquiry email.
pub fn inquiry_text(payload: &ContactPayload) -> String {
	let optional = |value: &str| {
		let value = value.trim();
		if value.is_empty() {
			String::from("Not provided")
		} else {
			value.to_string()
		}
	};

	format!(
		"Name: {}\nEmail: {}\nPhone: {}\nService: {}\n\n{}\n",
		payload.name.trim(),
		payload.email.trim(),
		optional(&payload.phone),
		optional(&payload.service),
		payload.message.trim()
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::Router;
	use axum::extract::State;
	use axum::http::{HeaderMap, StatusCode};
	use axum::routing::post;
	use serde_json::Value;
	use std::sync::{Arc, Mutex};
	use tokio::net::TcpListener;

	#[derive(Clone)]
	struct StubRelay {
		received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
		status: StatusCode,
	}

	async fn receive(State(stub): State<StubRelay>, headers: HeaderMap, axum::Json(body): axum::Json<Value>) -> StatusCode {
		let authorization = headers
			.get("authorization")
			.and_then(|value| value.to_str().ok())
			.map(String::from);
		stub.received.lock().unwrap().push((authorization, body));
		stub.status
	}

	async fn spawn_stub(status: StatusCode) -> (String, StubRelay) {
		let stub = StubRelay {
			received: Arc::new(Mutex::new(Vec::new())),
			status,
		};
		let app = Router::new().route("/send", post(receive)).with_state(stub.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});
		(format!("http://{}/send", addr), stub)
	}

	fn config(relay_url: Option<String>, relay_token: Option<&str>) -> ContactConfig {
		ContactConfig {
			destination: String::from("office@summitcomms.example"),
			relay_url,
			relay_token: relay_token.map(String::from),
		}
	}

	fn payload() -> ContactPayload {
		ContactPayload {
			name: String::from("Jane"),
			email: String::from(" jane@example.com "),
			phone: String::new(),
			service: String::from("Directional Drilling"),
			message: String::from("We need a bore under a county road."),
			to: String::from("attacker@example.com"),
			subject: String::from("Spoofed subject"),
		}
	}

	#[test]
	fn inquiry_ignores_client_addressing() {
		let relay = MailRelay::new(&config(None, None));
		let inquiry = relay.inquiry(&payload());
		assert_eq!(inquiry.to, "office@summitcomms.example");
		assert_eq!(inquiry.reply_to, "jane@example.com");
		assert_eq!(inquiry.subject, "Directional Drilling Inquiry");
	}

	#[test]
	fn inquiry_text_marks_missing_optional_fields() {
		let text = inquiry_text(&payload());
		assert_eq!(
			text,
			"Name: Jane\nEmail: jane@example.com\nPhone: Not provided\nService: Directional Drilling\n\nWe need a bore under a county road.\n"
		);
	}

	#[tokio::test]
	async fn unconfigured_relay_only_logs() {
		let relay = MailRelay::new(&config(None, None));
		assert!(relay.deliver(&payload()).await.is_ok());
	}

	#[tokio::test]
	async fn delivers_to_relay_with_token() {
		let (url, stub) = spawn_stub(StatusCode::ACCEPTED).await;
		let relay = MailRelay::new(&config(Some(url), Some("secret")));
		relay.deliver(&payload()).await.unwrap();

		let received = stub.received.lock().unwrap();
		assert_eq!(received.len(), 1);
		let (authorization, body) = &received[0];
		assert_eq!(authorization.as_deref(), Some("Bearer secret"));
		assert_eq!(body["to"], "office@summitcomms.example");
		assert_eq!(body["reply_to"], "jane@example.com");
		assert_eq!(body["subject"], "Directional Drilling Inquiry");
		assert!(body["received_at"].is_string());
	}

	#[tokio::test]
	async fn relay_error_status_is_reported() {
		let (url, _stub) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR).await;
		let relay = MailRelay::new(&config(Some(url), None));
		let result = relay.deliver(&payload()).await;
		assert!(matches!(result, Err(RelayError::Status(500))));
	}
}
