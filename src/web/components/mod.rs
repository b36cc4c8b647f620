// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod carousel;
mod contact_form;
mod project_gallery;
mod testimonials;

pub use carousel::{CarouselState, HeroCarousel, use_autoplay};
pub use contact_form::ContactForm;
pub use project_gallery::{ProjectCard, ProjectGallery};
pub use testimonials::TestimonialSlider;
