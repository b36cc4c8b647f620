// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, OFFICE_ADDRESS};
use crate::web::components::ContactForm;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ContactPage() -> impl IntoView {
	view! {
		<Title text="Contact | Summit Communications & Construction" />
		<h1 class="page_title">"Contact Us"</h1>
		<div id="contact_layout">
			<div id="contact_form_column">
				<ContactForm />
			</div>
			<aside id="contact_details">
				<h2>"Office"</h2>
				<address>{OFFICE_ADDRESS}</address>
				<h2>"Phone"</h2>
				<p>{CONTACT_PHONE}</p>
				<h2>"Email"</h2>
				<p><a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a></p>
				<h2>"Hours"</h2>
				<p>"Monday to Friday, 7:00 AM to 5:00 PM"</p>
			</aside>
		</div>
	}
}
