// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::SERVICES;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ServicesPage() -> impl IntoView {
	view! {
		<Title text="Services | Summit Communications & Construction" />
		<h1 class="page_title">"Our Services"</h1>
		<div id="service_list">
			{
				SERVICES.iter().map(|service| view! {
					<section class="service_detail" id=service.slug>
						<h2>{service.title}</h2>
						<p>{service.summary}</p>
						<ul>
							{service.highlights.iter().map(|highlight| view! { <li>{*highlight}</li> }).collect::<Vec<_>>()}
						</ul>
					</section>
				}).collect::<Vec<_>>()
			}
		</div>
		<div class="page_call_to_action">
			<a class="button" href="/contact">"Request a Quote"</a>
		</div>
	}
}
