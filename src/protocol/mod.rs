pub mod campaign;
pub mod commands;
pub mod form;
pub mod reply;

pub use campaign::{CampaignContent, CampaignOptions};
pub use form::{FormFields, Subscriber};
pub use reply::{SendyReply, SubscriptionStatus};
