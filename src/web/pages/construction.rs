// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{CONSTRUCTION_PROCESS, PROJECTS, ProjectCategory, filter_projects};
use crate::web::components::ProjectCard;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ConstructionPage() -> impl IntoView {
	view! {
		<Title text="Construction | Summit Communications & Construction" />
		<h1 class="page_title">"Construction"</h1>
		<p class="page_intro">
			"Our construction division handles the civil and site work behind every network we build, from equipment "
			"shelters and foundations to trenching and surface restoration."
		</p>
		<section id="construction_process">
			<h2>"How We Work"</h2>
			<ol class="process_steps">
				{
					CONSTRUCTION_PROCESS.iter().map(|step| view! {
						<li class="process_step">
							<h3>{step.title}</h3>
							<p>{step.description}</p>
						</li>
					}).collect::<Vec<_>>()
				}
			</ol>
		</section>
		<section id="construction_projects">
			<h2>"Construction Projects"</h2>
			<div class="project_grid">
				{
					filter_projects(PROJECTS, Some(ProjectCategory::Construction))
						.into_iter()
						.map(|project| view! { <ProjectCard project /> })
						.collect::<Vec<_>>()
				}
			</div>
		</section>
		<div class="page_call_to_action">
			<a class="button" href="/contact">"Discuss Your Site"</a>
		</div>
	}
}
