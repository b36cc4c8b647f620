// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::HERO_SLIDES;
use leptos::prelude::*;
use std::time::Duration;

const HERO_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(6);

/// Which slide of a carousel is showing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CarouselState {
	len: usize,
	index: usize,
}

impl CarouselState {
	pub fn new(len: usize) -> Self {
		Self { len, index: 0 }
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn is_active(&self, index: usize) -> bool {
		!self.is_empty() && self.index == index
	}

	/// Moves to the next slide, wrapping to the first after the last.
	pub fn next(&mut self) {
		if !self.is_empty() {
			self.index = (self.index + 1) % self.len;
		}
	}

	/// Moves to the previous slide, wrapping to the last before the first.
	pub fn previous(&mut self) {
		if !self.is_empty() {
			self.index = (self.index + self.len - 1) % self.len;
		}
	}

	/// Jumps to a slide. Out-of-range indices are ignored.
	pub fn go_to(&mut self, index: usize) {
		if index < self.len {
			self.index = index;
		}
	}
}

/// Advances `state` every `interval` while `paused` is false.
///
/// The timer belongs to the calling component: it starts once the component is mounted in the browser and is
/// cleared when the component is cleaned up.
pub fn use_autoplay(state: RwSignal<CarouselState>, paused: RwSignal<bool>, interval: Duration) {
	Effect::new(move |_| {
		let handle = set_interval_with_handle(
			move || {
				if !paused.get_untracked() {
					state.update(CarouselState::next);
				}
			},
			interval,
		);
		match handle {
			Ok(handle) => on_cleanup(move || handle.clear()),
			Err(error) => leptos::logging::warn!("Failed to start carousel autoplay: {:?}", error),
		}
	});
}

#[component]
pub fn CarouselControls(state: RwSignal<CarouselState>, #[prop(into)] label: String) -> impl IntoView {
	let slide_count = state.with_untracked(CarouselState::len);

	view! {
		<button
			type="button"
			class="carousel_previous"
			aria-label=format!("Previous {}", label)
			on:click=move |_| state.update(CarouselState::previous)
		>
			"‹"
		</button>
		<button
			type="button"
			class="carousel_next"
			aria-label=format!("Next {}", label)
			on:click=move |_| state.update(CarouselState::next)
		>
			"›"
		</button>
		<div class="carousel_dots">
			{
				(0..slide_count).map(|index| view! {
					<button
						type="button"
						class="carousel_dot"
						class:carousel_dot_active=move || state.with(|state| state.is_active(index))
						aria-label=format!("Go to {} {}", label, index + 1)
						on:click=move |_| state.update(|state| state.go_to(index))
					/>
				}).collect::<Vec<_>>()
			}
		</div>
	}
}

#[component]
pub fn HeroCarousel() -> impl IntoView {
	let state = RwSignal::new(CarouselState::new(HERO_SLIDES.len()));
	let paused = RwSignal::new(false);
	use_autoplay(state, paused, HERO_AUTOPLAY_INTERVAL);

	view! {
		<section
			id="hero_carousel"
			on:mouseenter=move |_| paused.set(true)
			on:mouseleave=move |_| paused.set(false)
		>
			{
				HERO_SLIDES.iter().enumerate().map(|(index, slide)| view! {
					<div
						class="hero_slide"
						class:hero_slide_active=move || state.with(|state| state.is_active(index))
					>
						<img class="hero_slide_image" src=slide.image alt="" />
						<div class="hero_slide_text">
							<h1>{slide.heading}</h1>
							<p>{slide.tagline}</p>
							<a class="button" href=slide.link>{slide.link_text}</a>
						</div>
					</div>
				}).collect::<Vec<_>>()
			}
			<CarouselControls state label="slide" />
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn next_wraps_around() {
		let mut state = CarouselState::new(3);
		state.next();
		state.next();
		assert_eq!(state.index(), 2);
		state.next();
		assert_eq!(state.index(), 0);
	}

	#[test]
	fn previous_wraps_around() {
		let mut state = CarouselState::new(3);
		state.previous();
		assert_eq!(state.index(), 2);
		state.previous();
		assert_eq!(state.index(), 1);
	}

	#[test]
	fn go_to_ignores_out_of_range() {
		let mut state = CarouselState::new(3);
		state.go_to(1);
		assert_eq!(state.index(), 1);
		state.go_to(3);
		assert_eq!(state.index(), 1);
	}

	#[test]
	fn empty_carousel_stays_put() {
		let mut state = CarouselState::new(0);
		state.next();
		state.previous();
		state.go_to(0);
		assert_eq!(state.index(), 0);
		assert!(!state.is_active(0));
	}
}
