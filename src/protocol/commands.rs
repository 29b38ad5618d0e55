//! Commands that can be sent to the server

/// Commands that can be sent to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendyCommand {
	Subscribe,
	Unsubscribe,
	Delete,
	SubscriptionStatus,
	ActiveSubscriberCount,
	CreateCampaign,
}

impl SendyCommand {
	pub fn as_str(&self) -> &'static str {
		match self {
			SendyCommand::Subscribe => "subscribe",
			SendyCommand::Unsubscribe => "unsubscribe",
			SendyCommand::Delete => "delete",
			SendyCommand::SubscriptionStatus => "subscription-status",
			SendyCommand::ActiveSubscriberCount => "active-subscriber-count",
			SendyCommand::CreateCampaign => "create-campaign",
		}
	}
}

/// Ephemeral endpoint representation
///
/// Paths are resolved against the installation URL, so the ones without a
/// leading slash stay relative to it while the others replace its path.
pub struct SendyEndpoint<'a> {
	pub url: &'a str,
	pub command: SendyCommand,
}

impl<'a> SendyEndpoint<'a> {
	/// Create a new endpoint from a command
	pub fn from_command(command: SendyCommand) -> SendyEndpoint<'a> {
		let url = match command {
			SendyCommand::Subscribe => "subscribe",
			SendyCommand::Unsubscribe => "unsubscribe",
			SendyCommand::Delete => "/api/subscribers/delete.php",
			SendyCommand::SubscriptionStatus => "api/subscribers/subscription-status.php",
			SendyCommand::ActiveSubscriberCount => "api/subscribers/active-subscriber-count.php",
			SendyCommand::CreateCampaign => "/api/campaigns/create.php",
		};
		Self { url, command }
	}
}
