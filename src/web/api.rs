// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::relay::MailRelay;
use crate::contact::{ContactPayload, ContactResponse, FieldRules};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

const DELIVERY_FAILURE_MESSAGE: &str = "Unable to deliver message";

/// Handles contact form submissions.
///
/// Submissions are validated again with the same rules the forms use before being handed to the mail relay.
pub async fn contact_route(
	State(relay): State<Arc<MailRelay>>,
	Json(payload): Json<ContactPayload>,
) -> (StatusCode, Json<ContactResponse>) {
	let failures = FieldRules::contact().failures(|field| payload.value(field));
	if let Some((field, reason)) = failures.into_iter().next() {
		tracing::info!(%field, %reason, "Rejected invalid contact submission");
		return (StatusCode::UNPROCESSABLE_ENTITY, Json(ContactResponse::failed(reason)));
	}

	match relay.deliver(&payload).await {
		Ok(()) => (StatusCode::OK, Json(ContactResponse::delivered())),
		Err(error) => {
			tracing::error!(source = ?error, "Failed to deliver contact inquiry");
			(
				StatusCode::BAD_GATEWAY,
				Json(ContactResponse::failed(DELIVERY_FAILURE_MESSAGE)),
			)
		}
	}
}
