// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::construction::ConstructionPage;
use super::contact::ContactPage;
use super::errors::not_found::NotFound;
use super::footer::PageFooter;
use super::header::PageHeader;
use super::home::HomePage;
use super::projects::ProjectsPage;
use super::services::ServicesPage;
use crate::content::COMPANY_NAME;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/summit-site.css" />
		<Title text=COMPANY_NAME />

		<Router>
			<PageHeader />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=HomePage />
					<Route path=path!("/services") view=ServicesPage />
					<Route path=path!("/projects") view=ProjectsPage />
					<Route path=path!("/construction") view=ConstructionPage />
					<Route path=path!("/contact") view=ContactPage />
				</Routes>
			</main>
			<PageFooter />
		</Router>
	}
}
