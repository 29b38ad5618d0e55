use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a call that changes a subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendyReply {
	pub status: bool,
	pub message: String,
}

impl SendyReply {
	pub fn success<S: Into<String>>(message: S) -> Self {
		Self {
			status: true,
			message: message.into(),
		}
	}

	pub fn failure<S: Into<String>>(message: S) -> Self {
		Self {
			status: false,
			message: message.into(),
		}
	}

	/// Sendy answers `1` for a new subscription and `Already subscribed.` for a
	/// known one; anything else is the error text.
	pub fn from_subscribe(raw: String) -> Self {
		match raw.as_str() {
			"1" => Self::success("Subscribed."),
			"Already subscribed." => Self::success(raw),
			_ => Self::failure(raw),
		}
	}

	/// `1` means done and is reported as `message`; anything else is the error text.
	pub fn from_acknowledgement(raw: String, message: &str) -> Self {
		match raw.as_str() {
			"1" => Self::success(message),
			_ => Self::failure(raw),
		}
	}
}

/// Subscription states reported by `subscription-status.php`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
	Subscribed,
	Unsubscribed,
	Unconfirmed,
	Bounced,
	SoftBounced,
	Complained,
}

impl SubscriptionStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			SubscriptionStatus::Subscribed => "Subscribed",
			SubscriptionStatus::Unsubscribed => "Unsubscribed",
			SubscriptionStatus::Unconfirmed => "Unconfirmed",
			SubscriptionStatus::Bounced => "Bounced",
			SubscriptionStatus::SoftBounced => "Soft bounced",
			SubscriptionStatus::Complained => "Complained",
		}
	}
}

impl fmt::Display for SubscriptionStatus {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Parsing fails with the unrecognised text, which is then an error message
/// such as `Email does not exist in list`.
impl FromStr for SubscriptionStatus {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Subscribed" => Ok(SubscriptionStatus::Subscribed),
			"Unsubscribed" => Ok(SubscriptionStatus::Unsubscribed),
			"Unconfirmed" => Ok(SubscriptionStatus::Unconfirmed),
			"Bounced" => Ok(SubscriptionStatus::Bounced),
			"Soft bounced" => Ok(SubscriptionStatus::SoftBounced),
			"Complained" => Ok(SubscriptionStatus::Complained),
			other => Err(other.to_string()),
		}
	}
}
