// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use summit_site::contact::{
	CONTACT_ENDPOINT, ContactField, ContactPayload, FAILURE_MESSAGE, FormController, FormState, HttpSubmitter,
	SUCCESS_MESSAGE, SubmitStatus,
};
use tokio::net::TcpListener;

const DESTINATION: &str = "info@summitcomms.example";

#[derive(Clone)]
struct StubEndpoint {
	received: Arc<Mutex<Vec<ContactPayload>>>,
	status: StatusCode,
	body: Value,
}

async fn receive(State(stub): State<StubEndpoint>, Json(payload): Json<ContactPayload>) -> (StatusCode, Json<Value>) {
	stub.received.lock().unwrap().push(payload);
	(stub.status, Json(stub.body.clone()))
}

async fn spawn_endpoint(status: StatusCode, body: Value) -> (String, StubEndpoint) {
	let stub = StubEndpoint {
		received: Arc::new(Mutex::new(Vec::new())),
		status,
		body,
	};
	let app = Router::new()
		.route(CONTACT_ENDPOINT, post(receive))
		.with_state(stub.clone());
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});
	(format!("http://{}", addr), stub)
}

fn fill(controller: &mut FormController, name: &str, email: &str, phone: &str, message: &str) {
	controller.set_field_value(ContactField::Name, name);
	controller.set_field_value(ContactField::Email, email);
	controller.set_field_value(ContactField::Phone, phone);
	controller.set_field_value(ContactField::Message, message);
}

#[tokio::test]
async fn invalid_form_is_rejected_locally() {
	let (origin, stub) = spawn_endpoint(StatusCode::OK, json!({ "success": true })).await;
	let submitter = HttpSubmitter::for_origin(&origin);

	let mut controller = FormController::new(DESTINATION);
	fill(&mut controller, "", "a@b.com", "", "hello");
	controller.submit(&submitter).await;

	assert!(stub.received.lock().unwrap().is_empty());
	assert_eq!(controller.submit_status(), SubmitStatus::Idle);
	assert_eq!(controller.field(ContactField::Name).visible_error(), Some("Name is required"));
	assert_eq!(
		controller.field(ContactField::Message).visible_error(),
		Some("Message is too short")
	);
	assert_eq!(controller.field(ContactField::Email).visible_error(), None);
	assert_eq!(controller.field(ContactField::Phone).visible_error(), None);
}

#[tokio::test]
async fn valid_form_posts_once_and_resets() {
	let (origin, stub) = spawn_endpoint(StatusCode::OK, json!({ "success": true })).await;
	let submitter = HttpSubmitter::for_origin(&origin);

	let mut controller = FormController::new(DESTINATION);
	fill(
		&mut controller,
		"Jane",
		"jane@example.com",
		"",
		"This is a sufficiently long message.",
	);
	controller.submit(&submitter).await;

	let received = stub.received.lock().unwrap();
	assert_eq!(received.len(), 1);
	assert_eq!(
		received[0],
		ContactPayload {
			name: String::from("Jane"),
			email: String::from("jane@example.com"),
			phone: String::new(),
			service: String::new(),
			message: String::from("This is a sufficiently long message."),
			to: String::from(DESTINATION),
			subject: String::from("General Inquiry"),
		}
	);

	assert_eq!(controller.state(), &FormState::default());
	assert_eq!(controller.submit_status(), SubmitStatus::Success);
	assert_eq!(controller.submit_message(), Some(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn unreachable_endpoint_keeps_entered_values() {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	let submitter = HttpSubmitter::for_origin(&format!("http://{}", addr));

	let mut controller = FormController::new(DESTINATION);
	fill(
		&mut controller,
		"Jane",
		"jane@example.com",
		"",
		"This is a sufficiently long message.",
	);
	controller.submit(&submitter).await;

	assert_eq!(controller.submit_status(), SubmitStatus::Error);
	assert_eq!(controller.submit_message(), Some(FAILURE_MESSAGE));
	assert_eq!(controller.field(ContactField::Name).value, "Jane");
	assert_eq!(controller.field(ContactField::Email).value, "jane@example.com");
	assert_eq!(controller.field(ContactField::Phone).value, "");
	assert_eq!(
		controller.field(ContactField::Message).value,
		"This is a sufficiently long message."
	);
}

#[tokio::test]
async fn server_error_and_false_flag_are_failures() {
	for (status, body) in [
		(StatusCode::INTERNAL_SERVER_ERROR, json!({ "success": true })),
		(StatusCode::OK, json!({ "success": false, "message": "Invalid email address" })),
		(StatusCode::OK, json!({ "ok": true })),
	] {
		let (origin, stub) = spawn_endpoint(status, body).await;
		let submitter = HttpSubmitter::for_origin(&origin);

		let mut controller = FormController::new(DESTINATION);
		fill(
			&mut controller,
			"Jane",
			"jane@example.com",
			"555-123-4567",
			"This is a sufficiently long message.",
		);
		controller.submit(&submitter).await;

		assert_eq!(stub.received.lock().unwrap().len(), 1);
		assert_eq!(controller.submit_status(), SubmitStatus::Error);
		assert_eq!(controller.field(ContactField::Phone).value, "555-123-4567");
	}
}
