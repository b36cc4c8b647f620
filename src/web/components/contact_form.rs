// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::contact::{ContactField, ContactSubmitter, FormController, HttpSubmitter, SubmitError, SubmitStatus};
use crate::content::{CONTACT_EMAIL, service_titles};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// A contact form bound to its own [FormController].
///
/// The compact variant (used in page sections) leaves out the optional phone and service inputs.
#[component]
pub fn ContactForm(#[prop(optional)] compact: bool) -> impl IntoView {
	let controller = RwSignal::new(FormController::new(CONTACT_EMAIL));

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		let Some(payload) = controller.try_update(FormController::begin_submit).flatten() else {
			return;
		};

		spawn_local(async move {
			let result = match contact_submitter() {
				Ok(submitter) => submitter.submit(&payload).await,
				Err(error) => Err(error),
			};
			controller.try_update(|form| form.complete_submit(result));
		});
	};

	let is_submitting = move || controller.with(FormController::is_submitting);

	view! {
		<form class="contact_form" novalidate=true on:submit=form_submit>
			<StatusBanner controller />
			<FieldInput controller field=ContactField::Name label="Name" placeholder="Your name" />
			<FieldInput
				controller
				field=ContactField::Email
				label="Email"
				input_type="email"
				placeholder="you@company.com"
			/>
			<Show when=move || !compact>
				<FieldInput
					controller
					field=ContactField::Phone
					label="Phone (optional)"
					input_type="tel"
					placeholder="555-123-4567"
				/>
				<ServiceSelect controller />
			</Show>
			<div class="contact_form_field">
				<label for="contact_message">"Message"</label>
				<textarea
					id="contact_message"
					name={ContactField::Message.key()}
					rows=5
					placeholder="Tell us about your project"
					prop:value=move || controller.with(|form| form.field(ContactField::Message).value.clone())
					on:input=move |event| {
						controller.update(|form| form.set_field_value(ContactField::Message, event_target_value(&event)))
					}
					on:blur=move |_| controller.update(|form| form.mark_touched(ContactField::Message))
				/>
				<FieldError controller field=ContactField::Message />
			</div>
			<div class="contact_form_submit">
				<button type="submit" disabled=is_submitting>
					{move || if is_submitting() { "Sending..." } else { "Send Message" }}
				</button>
			</div>
		</form>
	}
}

#[component]
fn FieldInput(
	controller: RwSignal<FormController>,
	field: ContactField,
	label: &'static str,
	#[prop(default = "text")] input_type: &'static str,
	#[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
	let id = format!("contact_{}", field.key());

	view! {
		<div class="contact_form_field">
			<label for=id.clone()>{label}</label>
			<input
				id=id
				name={field.key()}
				type=input_type
				placeholder=placeholder
				class:contact_form_invalid=move || controller.with(|form| form.field(field).visible_error().is_some())
				prop:value=move || controller.with(|form| form.field(field).value.clone())
				on:input=move |event| controller.update(|form| form.set_field_value(field, event_target_value(&event)))
				on:blur=move |_| controller.update(|form| form.mark_touched(field))
			/>
			<FieldError controller field />
		</div>
	}
}

#[component]
fn ServiceSelect(controller: RwSignal<FormController>) -> impl IntoView {
	view! {
		<div class="contact_form_field">
			<label for="contact_service">"Service"</label>
			<select
				id="contact_service"
				name={ContactField::Service.key()}
				prop:value=move || controller.with(|form| form.field(ContactField::Service).value.clone())
				on:change=move |event| {
					controller.update(|form| form.set_field_value(ContactField::Service, event_target_value(&event)))
				}
			>
				<option value="">"Select a service"</option>
				{
					service_titles().map(|title| view! {
						<option value=title>{title}</option>
					}).collect::<Vec<_>>()
				}
			</select>
		</div>
	}
}

#[component]
fn FieldError(controller: RwSignal<FormController>, field: ContactField) -> impl IntoView {
	move || {
		controller
			.with(|form| form.field(field).visible_error().map(String::from))
			.map(|error| view! { <p class="contact_form_error">{error}</p> })
	}
}

#[component]
fn StatusBanner(controller: RwSignal<FormController>) -> impl IntoView {
	move || {
		controller
			.with(|form| {
				form.submit_message()
					.map(|message| (form.submit_status(), message.to_string()))
			})
			.map(|(status, message)| {
				let class = if status == SubmitStatus::Success {
					"contact_form_status contact_form_status_success"
				} else {
					"contact_form_status contact_form_status_error"
				};
				view! { <div class=class role="status">{message}</div> }
			})
	}
}

/// Builds a submitter for the contact endpoint of the site the page was loaded from.
fn contact_submitter() -> Result<HttpSubmitter, SubmitError> {
	let origin = window()
		.location()
		.origin()
		.map_err(|error| SubmitError::Unavailable(format!("{:?}", error)))?;
	Ok(HttpSubmitter::for_origin(&origin))
}
