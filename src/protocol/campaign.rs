//! Campaign creation payloads
//!
//! Note: Sendy has been known to ignore `list_ids` when a campaign is created
//! through the API. The field is still sent as given.

use std::collections::HashMap;
use typed_builder::TypedBuilder;

use crate::error::SendyError;
use crate::protocol::form::FormFields;

/// Campaign metadata for `/api/campaigns/create.php`
#[derive(TypedBuilder, Debug, PartialEq, Default)]
pub struct CampaignOptions {
	/// Sender name, required
	#[builder(default, setter(into, strip_option))]
	pub from_name: Option<String>,

	/// Sender email, required
	#[builder(default, setter(into, strip_option))]
	pub from_email: Option<String>,

	/// Reply-to address, required
	#[builder(default, setter(into, strip_option))]
	pub reply_to: Option<String>,

	/// Internal campaign title
	#[builder(default, setter(into, strip_option))]
	pub title: Option<String>,

	/// Email subject, required
	#[builder(default, setter(into, strip_option))]
	pub subject: Option<String>,

	/// Comma separated list IDs; the configured list is used when absent
	#[builder(default, setter(into, strip_option))]
	pub list_ids: Option<String>,

	/// Comma separated segment IDs
	#[builder(default, setter(into, strip_option))]
	pub segment_ids: Option<String>,

	/// Comma separated list IDs to exclude
	#[builder(default, setter(into, strip_option))]
	pub exclude_list_ids: Option<String>,

	/// Comma separated segment IDs to exclude
	#[builder(default, setter(into, strip_option))]
	pub exclude_segments_ids: Option<String>,

	/// Brand the campaign belongs to, required when sending
	#[builder(default, setter(into, strip_option))]
	pub brand_id: Option<String>,

	/// Query string appended to links
	#[builder(default, setter(into, strip_option))]
	pub query_string: Option<String>,

	/// 0 disables open tracking, 1 enables it, 2 anonymises it
	#[builder(default, setter(strip_option))]
	pub track_opens: Option<u8>,

	/// 0 disables click tracking, 1 enables it, 2 anonymises it
	#[builder(default, setter(strip_option))]
	pub track_clicks: Option<u8>,

	/// Schedule date and time, e.g. `June 15, 2024 6:05pm`
	#[builder(default, setter(into, strip_option))]
	pub schedule_date_time: Option<String>,

	/// Timezone for the schedule, e.g. `America/New_York`
	#[builder(default, setter(into, strip_option))]
	pub schedule_timezone: Option<String>,

	/// Fields not covered above
	#[builder(default)]
	pub additional_fields: HashMap<String, String>,
}

/// Campaign body
#[derive(TypedBuilder, Debug, PartialEq, Default)]
pub struct CampaignContent {
	/// HTML version, required
	#[builder(default, setter(into, strip_option))]
	pub html_text: Option<String>,

	/// Plain text version
	#[builder(default, setter(into, strip_option))]
	pub plain_text: Option<String>,
}

fn require(fields: &FormFields, field: &'static str) -> Result<(), SendyError> {
	match fields.get(field) {
		Some(v) if !v.is_empty() => Ok(()),
		_ => Err(SendyError::ValidationError(field)),
	}
}

impl CampaignOptions {
	/// Validate and flatten options and content into one form.
	///
	/// Named options take precedence over `additional_fields`, and a required
	/// field may come from either. Required fields are checked in the order
	/// `from_name`, `from_email`, `reply_to`, `subject`, `html_text`, then
	/// `brand_id` when `send` is set.
	///
	/// # Errors
	///
	/// `SendyError::ValidationError` naming the first missing field.
	pub fn into_form(
		self,
		content: CampaignContent,
		send: bool,
		default_list_ids: &str,
	) -> Result<FormFields, SendyError> {
		let mut fields = FormFields::new();
		fields.extend(self.additional_fields);

		let named = [
			("from_name", self.from_name),
			("from_email", self.from_email),
			("reply_to", self.reply_to),
			("title", self.title),
			("subject", self.subject),
			("list_ids", self.list_ids),
			("segment_ids", self.segment_ids),
			("exclude_list_ids", self.exclude_list_ids),
			("exclude_segments_ids", self.exclude_segments_ids),
			("brand_id", self.brand_id),
			("query_string", self.query_string),
			("track_opens", self.track_opens.map(|v| v.to_string())),
			("track_clicks", self.track_clicks.map(|v| v.to_string())),
			("schedule_date_time", self.schedule_date_time),
			("schedule_timezone", self.schedule_timezone),
			("html_text", content.html_text),
			("plain_text", content.plain_text),
		];
		fields.extend(named.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))));

		for field in ["from_name", "from_email", "reply_to", "subject", "html_text"] {
			require(&fields, field)?;
		}
		if send {
			require(&fields, "brand_id")?;
		}

		fields.insert_if_empty("list_ids", default_list_ids);
		fields.insert("send_campaign", if send { "1" } else { "0" });

		Ok(fields)
	}
}
