#[cfg(feature = "sync")]
pub mod sync_client;
pub mod traits;
#[cfg(feature = "async")]
pub mod async_client;

pub use traits::*;

/// Transport used by `SendyClient::new`
#[cfg(feature = "sync")]
pub type DefaultTransport = sync_client::AttoTransport;

/// Transport used by `SendyClient::new`
#[cfg(feature = "async")]
pub type DefaultTransport = async_client::ReqwestTransport;
