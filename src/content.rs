// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The static records the site's pages are rendered from.

use std::fmt;

pub const COMPANY_NAME: &str = "Summit Communications & Construction";
pub const CONTACT_EMAIL: &str = "info@summitcomms.example";
pub const CONTACT_PHONE: &str = "(555) 201-4400";
pub const OFFICE_ADDRESS: &str = "1200 Ridgeline Parkway, Suite 300, Denver, CO 80202";

pub struct Service {
	pub slug: &'static str,
	pub title: &'static str,
	pub summary: &'static str,
	pub highlights: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
	Service {
		slug: "fiber",
		title: "Fiber Optic Installation",
		summary: "Aerial and underground fiber builds from design through splicing, testing, and turn-up.",
		highlights: &[
			"Aerial strand and lash",
			"Fusion splicing and OTDR testing",
			"FTTH drops and MDU wiring",
		],
	},
	Service {
		slug: "towers",
		title: "Tower Services",
		summary: "Wireless site construction, antenna and radio swaps, and structural modifications.",
		highlights: &[
			"New site builds and collocations",
			"5G equipment upgrades",
			"Tower inspections and audits",
		],
	},
	Service {
		slug: "directional-drilling",
		title: "Directional Drilling",
		summary: "Horizontal directional drilling for conduit placement with minimal surface disruption.",
		highlights: &[
			"Road and river crossings",
			"Conduit and innerduct placement",
			"Locating and potholing",
		],
	},
	Service {
		slug: "structured-cabling",
		title: "Structured Cabling",
		summary: "Copper and fiber backbone, horizontal cabling, and data center infrastructure.",
		highlights: &[
			"Cat6A and fiber backbone",
			"Rack and cabinet builds",
			"Certification and documentation",
		],
	},
	Service {
		slug: "construction",
		title: "General Construction",
		summary: "Site work, foundations, and shelters supporting communications infrastructure.",
		highlights: &[
			"Equipment shelters and pads",
			"Trenching and restoration",
			"Civil and site preparation",
		],
	},
];

/// The service titles offered in the contact form's service selector.
pub fn service_titles() -> impl Iterator<Item = &'static str> {
	SERVICES.iter().map(|service| service.title)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectCategory {
	Fiber,
	Wireless,
	Underground,
	Construction,
}

impl ProjectCategory {
	pub const ALL: [ProjectCategory; 4] = [Self::Fiber, Self::Wireless, Self::Underground, Self::Construction];

	pub fn label(self) -> &'static str {
		match self {
			Self::Fiber => "Fiber",
			Self::Wireless => "Wireless",
			Self::Underground => "Underground",
			Self::Construction => "Construction",
		}
	}
}

impl fmt::Display for ProjectCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

pub struct Project {
	pub title: &'static str,
	pub category: ProjectCategory,
	pub location: &'static str,
	pub year: u16,
	pub summary: &'static str,
	pub image: &'static str,
	pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
	Project {
		title: "Front Range Fiber Ring",
		category: ProjectCategory::Fiber,
		location: "Boulder County, CO",
		year: 2024,
		summary: "86 miles of aerial and underground fiber connecting twelve municipal facilities.",
		image: "/images/projects/fiber-ring.jpg",
		featured: true,
	},
	Project {
		title: "Rural Broadband Expansion",
		category: ProjectCategory::Fiber,
		location: "Weld County, CO",
		year: 2023,
		summary: "Fiber-to-the-home build passing 4,200 rural households.",
		image: "/images/projects/rural-broadband.jpg",
		featured: false,
	},
	Project {
		title: "Mountain Corridor 5G Upgrade",
		category: ProjectCategory::Wireless,
		location: "I-70 Corridor, CO",
		year: 2024,
		summary: "Radio and antenna upgrades across 38 macro sites along the interstate.",
		image: "/images/projects/mountain-5g.jpg",
		featured: true,
	},
	Project {
		title: "Stadium DAS Installation",
		category: ProjectCategory::Wireless,
		location: "Denver, CO",
		year: 2022,
		summary: "Distributed antenna system covering a 76,000-seat venue.",
		image: "/images/projects/stadium-das.jpg",
		featured: false,
	},
	Project {
		title: "South Platte River Crossing",
		category: ProjectCategory::Underground,
		location: "Adams County, CO",
		year: 2023,
		summary: "1,400-foot directional bore placing four conduits beneath the river.",
		image: "/images/projects/river-crossing.jpg",
		featured: true,
	},
	Project {
		title: "Regional Data Center Shelter",
		category: ProjectCategory::Construction,
		location: "Colorado Springs, CO",
		year: 2022,
		summary: "Foundation, shelter, and generator pad for a carrier aggregation site.",
		image: "/images/projects/data-center-shelter.jpg",
		featured: false,
	},
];

/// Selects the projects in a category, or every project when no category is given.
///
/// Display order follows [PROJECTS].
pub fn filter_projects(projects: &[Project], category: Option<ProjectCategory>) -> Vec<&Project> {
	projects
		.iter()
		.filter(|project| category.is_none_or(|category| project.category == category))
		.collect()
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
	PROJECTS.iter().filter(|project| project.featured)
}

pub struct Testimonial {
	pub quote: &'static str,
	pub author: &'static str,
	pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
	Testimonial {
		quote: "They finished our fiber ring ahead of schedule and the as-built documentation was the best we've received from any contractor.",
		author: "Maria Alvarez",
		role: "Network Engineering Manager, Front Range Municipal Network",
	},
	Testimonial {
		quote: "Safety, communication, and quality on every tower. We keep bringing them back for our upgrade cycles.",
		author: "Derek Olsen",
		role: "Construction Manager, regional wireless carrier",
	},
	Testimonial {
		quote: "The river crossing was the riskiest part of our route. Their drilling crew made it look routine.",
		author: "Priya Natarajan",
		role: "Project Director, Plains Broadband Cooperative",
	},
];

pub struct HeroSlide {
	pub heading: &'static str,
	pub tagline: &'static str,
	pub image: &'static str,
	pub link: &'static str,
	pub link_text: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
	HeroSlide {
		heading: "Building the networks that connect communities",
		tagline: "Fiber, wireless, and underground infrastructure across the Mountain West.",
		image: "/images/hero/fiber-crew.jpg",
		link: "/services",
		link_text: "Our Services",
	},
	HeroSlide {
		heading: "From tower top to trench",
		tagline: "One contractor for every phase of your communications build.",
		image: "/images/hero/tower-climb.jpg",
		link: "/projects",
		link_text: "See Our Work",
	},
	HeroSlide {
		heading: "Construction done safely and on schedule",
		tagline: "Site work, shelters, and civil construction backed by a spotless safety record.",
		image: "/images/hero/site-work.jpg",
		link: "/construction",
		link_text: "Construction",
	},
];

pub struct ProcessStep {
	pub title: &'static str,
	pub description: &'static str,
}

pub const CONSTRUCTION_PROCESS: &[ProcessStep] = &[
	ProcessStep {
		title: "Survey & Design",
		description: "Field surveys, permitting support, and engineering drawings.",
	},
	ProcessStep {
		title: "Site Preparation",
		description: "Clearing, grading, trenching, and utility locates.",
	},
	ProcessStep {
		title: "Build",
		description: "Foundations, shelters, conduit, and structure installation.",
	},
	ProcessStep {
		title: "Restore & Close Out",
		description: "Surface restoration, inspections, and as-built documentation.",
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_category_keeps_every_project() {
		assert_eq!(filter_projects(PROJECTS, None).len(), PROJECTS.len());
	}

	#[test]
	fn category_filter_keeps_order_and_matches_only() {
		let fiber = filter_projects(PROJECTS, Some(ProjectCategory::Fiber));
		let titles: Vec<&str> = fiber.iter().map(|project| project.title).collect();
		assert_eq!(titles, vec!["Front Range Fiber Ring", "Rural Broadband Expansion"]);
	}

	#[test]
	fn every_category_has_projects() {
		for category in ProjectCategory::ALL {
			assert!(
				!filter_projects(PROJECTS, Some(category)).is_empty(),
				"no projects in {}",
				category
			);
		}
	}

	#[test]
	fn service_selector_lists_every_service() {
		assert_eq!(service_titles().count(), SERVICES.len());
		assert!(service_titles().any(|title| title == "Tower Services"));
	}
}
