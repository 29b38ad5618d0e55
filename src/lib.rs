//!# Sendy Client for Rust
//!
//! This crate provides an HTTP client for the API of a [Sendy](https://sendy.co)
//! newsletter installation. It manages list subscribers and creates campaigns.
//! It supports both synchronous and asynchronous operation using the `attohttpc`
//! and `reqwest` libraries, respectively.
//!
//! ## Features
//!
//! - **Sync** (default): Blocking client using `attohttpc`.
//! - **Async**: Asynchronous client using `reqwest`.
//! - Proxy and custom root certificate support.
//!
//! Network failures never surface as errors: the failure text is returned in
//! place of the server's answer. Only a missing configuration value or campaign
//! field is reported as a `SendyError`.

// Ensure async and sync features are mutually exclusive
#[cfg(all(feature = "async", feature = "sync"))]
compile_error!("Features 'async' and 'sync' are mutually exclusive. Please enable only one.");

#[cfg(not(any(feature = "async", feature = "sync")))]
compile_error!("Either 'async' or 'sync' feature must be enabled.");

pub mod config;
pub mod error;
pub mod protocol;

pub mod backend;
pub mod client;

/// ### Synchronous Client
///
/// ```rust,no_run
/// # #[cfg(feature = "sync")]
/// # fn main() -> Result<(), sendy_client::error::SendyError> {
/// use sendy_client::{config, SendyClient, Subscriber};
///
/// let config = config::Config::builder()
///     .list_id("my-list-id")
///     .installation_url("https://newsletter.example.com")
///     .api_key("my-api-key")
///     .build();
/// let client = SendyClient::new(config)?;
///
/// let subscriber = Subscriber::builder()
///     .email("jane@example.com")
///     .name("Jane")
///     .build();
/// let reply = client.subscribe(subscriber);
/// if !reply.status {
///     eprintln!("Subscription failed: {}", reply.message);
/// }
/// println!("Status: {}", client.status("jane@example.com"));
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "sync"))]
/// # fn main() {}
/// ```
pub use client::SendyClient;

pub use protocol::{
	CampaignContent, CampaignOptions, FormFields, SendyReply, Subscriber, SubscriptionStatus,
};
