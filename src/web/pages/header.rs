// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::COMPANY_NAME;
use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
	("/", "Home"),
	("/services", "Services"),
	("/projects", "Projects"),
	("/construction", "Construction"),
	("/contact", "Contact"),
];

#[component]
pub fn PageHeader() -> impl IntoView {
	let (menu_open, set_menu_open) = signal(false);

	view! {
		<header id="header">
			<a id="header_brand" href="/">
				<img id="header_logo" src="/images/logo.svg" alt="" />
				<span id="header_company_name">{COMPANY_NAME}</span>
			</a>
			<button
				type="button"
				id="header_menu_toggle"
				aria-label="Toggle navigation"
				aria-expanded=move || menu_open.get().to_string()
				on:click=move |_| set_menu_open.update(|open| *open = !*open)
			>
				"☰"
			</button>
			<nav id="header_nav" class:header_nav_open=move || menu_open.get()>
				{
					NAV_LINKS.iter().map(|(href, text)| view! {
						<a href=*href on:click=move |_| set_menu_open.set(false)>{*text}</a>
					}).collect::<Vec<_>>()
				}
			</nav>
		</header>
	}
}
