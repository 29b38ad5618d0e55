//! The Sendy API client.
//!
//! Every call posts one form to the installation and reads back plain text.
//! A request that cannot be completed does not produce an `Err`: its error
//! message takes the place of the response body and is classified like any
//! other answer from the server.

use secrecy::ExposeSecret;
use url::Url;

use crate::backend::{DefaultTransport, Transport};
use crate::config::Config;
use crate::error::SendyError;
use crate::protocol::commands::{SendyCommand, SendyEndpoint};
use crate::protocol::{CampaignContent, CampaignOptions, FormFields, SendyReply};

pub struct SendyClient<T = DefaultTransport> {
	config: Config,
	base_url: Url,
	transport: T,
}

impl SendyClient<DefaultTransport> {
	/// Validate `config` and open an HTTP session bound to its installation URL.
	///
	/// # Errors
	///
	/// `SendyError::ConfigError` for the first missing value, or the error
	/// raised while parsing the URL or loading proxy and TLS settings.
	pub fn new(config: Config) -> Result<Self, SendyError> {
		config.validate()?;
		let transport = DefaultTransport::new(&config)?;
		Self::with_transport(config, transport)
	}
}

impl<T: Transport> SendyClient<T> {
	/// Same as `new`, sending requests through `transport`.
	///
	/// # Errors
	///
	/// `SendyError::ConfigError` for the first missing value, or
	/// `SendyError::ParseError` when the installation URL is not absolute.
	pub fn with_transport(config: Config, transport: T) -> Result<Self, SendyError> {
		config.validate()?;
		let base_url = Url::parse(&config.installation_url)?;
		Ok(Self {
			config,
			base_url,
			transport,
		})
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Overlay the list and key on the caller's fields. Both `list` and
	/// `list_id` are sent since older and newer endpoints disagree on the name.
	pub fn authenticate(&self, mut fields: FormFields) -> FormFields {
		fields.insert("list", self.config.list_id.as_str());
		fields.insert("list_id", self.config.list_id.as_str());
		fields.insert("api_key", self.config.api_key.expose_secret().as_str());
		fields.insert("boolean", "true");
		fields
	}
}

#[maybe_async::maybe_async]
impl<T: Transport> SendyClient<T> {
	/// Add a subscriber to the configured list.
	pub async fn subscribe<F: Into<FormFields>>(&self, fields: F) -> SendyReply {
		let raw = self.build_and_send(SendyCommand::Subscribe, fields.into()).await;
		SendyReply::from_subscribe(raw)
	}

	/// Update a subscriber keyed by `email`, creating it when unknown.
	/// An `email` inside `fields` takes precedence.
	pub async fn update<F: Into<FormFields>>(&self, email: &str, fields: F) -> SendyReply {
		let mut values = FormFields::new();
		values.insert("email", email);
		let fields: FormFields = fields.into();
		values.extend(fields);
		self.subscribe(values).await
	}

	pub async fn unsubscribe(&self, email: &str) -> SendyReply {
		let raw = self
			.build_and_send(SendyCommand::Unsubscribe, FormFields::from([("email", email)]))
			.await;
		SendyReply::from_acknowledgement(raw, "Unsubscribed")
	}

	pub async fn delete(&self, email: &str) -> SendyReply {
		let raw = self
			.build_and_send(SendyCommand::Delete, FormFields::from([("email", email)]))
			.await;
		SendyReply::from_acknowledgement(raw, "Deleted")
	}

	/// Raw subscription status, e.g. `Subscribed` or `Email does not exist in list`.
	/// See `SubscriptionStatus` for a typed view.
	pub async fn status(&self, email: &str) -> String {
		self.build_and_send(SendyCommand::SubscriptionStatus, FormFields::from([("email", email)]))
			.await
	}

	/// Raw active subscriber count of the configured list.
	pub async fn count(&self) -> String {
		self.build_and_send(SendyCommand::ActiveSubscriberCount, FormFields::new())
			.await
	}

	/// Create a campaign, sending it right away when `send` is set and saving
	/// it as a draft otherwise. Returns the server's answer as is.
	///
	/// # Errors
	///
	/// `SendyError::ValidationError` when a required field is missing; nothing
	/// is sent in that case.
	pub async fn create_campaign(
		&self,
		options: CampaignOptions,
		content: CampaignContent,
		send: bool,
	) -> Result<String, SendyError> {
		let fields = options.into_form(content, send, &self.config.list_id)?;
		Ok(self.build_and_send(SendyCommand::CreateCampaign, fields).await)
	}

	async fn build_and_send(&self, command: SendyCommand, fields: FormFields) -> String {
		match self.send(command, fields).await {
			Ok(body) => body,
			Err(e) => {
				tracing::warn!(command = command.as_str(), error = %e, "sendy request failed");
				e.to_string()
			}
		}
	}

	async fn send(&self, command: SendyCommand, fields: FormFields) -> Result<String, SendyError> {
		let endpoint = SendyEndpoint::from_command(command);
		let url = self.base_url.join(endpoint.url)?;
		tracing::debug!(command = endpoint.command.as_str(), %url, "sending sendy request");

		let body = self.authenticate(fields).encode();
		let response = self.transport.post_form(url, body).await?;
		tracing::debug!(command = endpoint.command.as_str(), status = response.status_code(), "sendy response");
		Ok(response.text())
	}
}
