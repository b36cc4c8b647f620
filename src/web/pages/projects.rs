// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::components::ProjectGallery;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ProjectsPage() -> impl IntoView {
	view! {
		<Title text="Projects | Summit Communications & Construction" />
		<h1 class="page_title">"Our Projects"</h1>
		<p class="page_intro">"A selection of recent builds across the region."</p>
		<ProjectGallery />
	}
}
