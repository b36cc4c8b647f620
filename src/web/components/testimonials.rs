// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::carousel::{CarouselControls, CarouselState, use_autoplay};
use crate::content::TESTIMONIALS;
use leptos::prelude::*;
use std::time::Duration;

const TESTIMONIAL_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(8);

#[component]
pub fn TestimonialSlider() -> impl IntoView {
	let state = RwSignal::new(CarouselState::new(TESTIMONIALS.len()));
	let paused = RwSignal::new(false);
	use_autoplay(state, paused, TESTIMONIAL_AUTOPLAY_INTERVAL);

	view! {
		<section
			class="testimonial_slider"
			on:mouseenter=move |_| paused.set(true)
			on:mouseleave=move |_| paused.set(false)
		>
			<h2>"What Our Clients Say"</h2>
			{
				TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| view! {
					<blockquote
						class="testimonial"
						class:testimonial_active=move || state.with(|state| state.is_active(index))
					>
						<p class="testimonial_quote">{testimonial.quote}</p>
						<footer>
							<span class="testimonial_author">{testimonial.author}</span>
							<span class="testimonial_role">{testimonial.role}</span>
						</footer>
					</blockquote>
				}).collect::<Vec<_>>()
			}
			<CarouselControls state label="testimonial" />
		</section>
	}
}
