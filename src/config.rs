// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, miette};
use std::net::SocketAddr;
use tokio::fs::read_to_string;

const DEFAULT_LOG_FILTER: &str = "info";

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_contents(&config_file_contents)
}

pub fn parse_config_contents(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse().into_diagnostic()?;

	let web = block(&document, "web")?;
	let bind_addr = required_string(web, "web", "bind-addr")?
		.parse()
		.into_diagnostic()?;

	let contact = block(&document, "contact")?;
	let destination = required_string(contact, "contact", "destination")?;
	let relay_url = optional_string(contact, "relay-url")?;
	let relay_token = optional_string(contact, "relay-token")?;

	let log_filter = optional_string(&document, "log-filter")?.unwrap_or_else(|| String::from(DEFAULT_LOG_FILTER));

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		contact: ContactConfig {
			destination,
			relay_url,
			relay_token,
		},
		log_filter,
	})
}

fn block<'a>(document: &'a KdlDocument, name: &str) -> Result<&'a KdlDocument> {
	document
		.get(name)
		.and_then(KdlNode::children)
		.ok_or_else(|| miette!("Configuration is missing the `{}` block", name))
}

fn required_string(block: &KdlDocument, block_name: &str, name: &str) -> Result<String> {
	optional_string(block, name)?.ok_or_else(|| miette!("Configuration is missing `{}` in the `{}` block", name, block_name))
}

fn optional_string(block: &KdlDocument, name: &str) -> Result<Option<String>> {
	match block.get_arg(name) {
		Some(value) => value
			.as_string()
			.map(|value| Some(value.to_string()))
			.ok_or_else(|| miette!("Configuration value `{}` must be a string", name)),
		None => Ok(None),
	}
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub contact: ContactConfig,
	pub log_filter: String,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
}

#[derive(Debug)]
pub struct ContactConfig {
	/// The address inquiries are delivered to.
	pub destination: String,
	/// The mail relay inquiries are posted to. Inquiries are only logged when this isn't set.
	pub relay_url: Option<String>,
	pub relay_token: Option<String>,
}
