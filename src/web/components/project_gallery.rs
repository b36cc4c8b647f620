// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{PROJECTS, Project, ProjectCategory, filter_projects};
use leptos::prelude::*;

#[component]
pub fn ProjectGallery() -> impl IntoView {
	let (category, set_category) = signal(None::<ProjectCategory>);

	view! {
		<div class="project_filters">
			<FilterButton label="All" value=None category set_category />
			{
				ProjectCategory::ALL.into_iter().map(|option| view! {
					<FilterButton label=option.label() value=Some(option) category set_category />
				}).collect::<Vec<_>>()
			}
		</div>
		<div class="project_grid">
			{
				move || filter_projects(PROJECTS, category.get())
					.into_iter()
					.map(|project| view! { <ProjectCard project /> })
					.collect::<Vec<_>>()
			}
		</div>
	}
}

#[component]
fn FilterButton(
	label: &'static str,
	value: Option<ProjectCategory>,
	category: ReadSignal<Option<ProjectCategory>>,
	set_category: WriteSignal<Option<ProjectCategory>>,
) -> impl IntoView {
	view! {
		<button
			type="button"
			class="project_filter"
			class:project_filter_active=move || category.get() == value
			on:click=move |_| set_category.set(value)
		>
			{label}
		</button>
	}
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
	view! {
		<article class="project_card">
			<img class="project_card_image" src=project.image alt=project.title />
			<div class="project_card_body">
				<span class="project_card_category">{project.category.label()}</span>
				<h3>{project.title}</h3>
				<div class="project_card_meta">
					{project.location} " · " {project.year}
				</div>
				<p>{project.summary}</p>
			</div>
		</article>
	}
}
