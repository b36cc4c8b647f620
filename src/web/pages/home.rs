// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{SERVICES, featured_projects};
use crate::web::components::{ContactForm, HeroCarousel, ProjectCard, TestimonialSlider};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
	view! {
		<HeroCarousel />
		<section id="home_services">
			<h2>"What We Do"</h2>
			<div class="service_grid">
				{
					SERVICES.iter().map(|service| view! {
						<a class="service_tile" href="/services">
							<h3>{service.title}</h3>
							<p>{service.summary}</p>
						</a>
					}).collect::<Vec<_>>()
				}
			</div>
		</section>
		<section id="home_projects">
			<h2>"Featured Projects"</h2>
			<div class="project_grid">
				{featured_projects().map(|project| view! { <ProjectCard project /> }).collect::<Vec<_>>()}
			</div>
			<a class="button" href="/projects">"View All Projects"</a>
		</section>
		<TestimonialSlider />
		<section id="home_contact">
			<h2>"Start Your Project"</h2>
			<p>"Tell us what you're building and we'll get back to you within one business day."</p>
			<ContactForm compact=true />
		</section>
	}
}
