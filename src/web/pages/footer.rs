// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{COMPANY_NAME, CONTACT_EMAIL, CONTACT_PHONE, OFFICE_ADDRESS, SERVICES};
use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
	view! {
		<footer id="footer">
			<div class="footer_column">
				<h2>{COMPANY_NAME}</h2>
				<address>{OFFICE_ADDRESS}</address>
				<a href=format!("tel:{}", CONTACT_PHONE.replace(|c: char| !c.is_ascii_digit(), ""))>{CONTACT_PHONE}</a>
				<a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
			</div>
			<div class="footer_column">
				<h2>"Services"</h2>
				<ul>
					{
						SERVICES.iter().map(|service| view! {
							<li><a href="/services">{service.title}</a></li>
						}).collect::<Vec<_>>()
					}
				</ul>
			</div>
		</footer>
	}
}
