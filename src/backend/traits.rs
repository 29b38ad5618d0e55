use bytes::Bytes;
use url::Url;
use crate::error::SendyError;

/// Raw response data
#[derive(Debug)]
pub struct ResponseData {
	bytes: Bytes,
	status_code: u16,
}

impl ResponseData {
	pub fn new(bytes: Bytes, status_code: u16) -> ResponseData {
		ResponseData { bytes, status_code }
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}

	pub fn status_code(&self) -> u16 {
		self.status_code
	}

	/// Body as text; invalid UTF-8 sequences become U+FFFD
	pub fn text(&self) -> String {
		String::from_utf8_lossy(self.as_slice()).into_owned()
	}
}

/// Sends a form-encoded POST to the Sendy server.
///
/// Implementations return `Err` for connection failures, timeouts and non-2xx
/// statuses; the client turns those into response text.
#[maybe_async::maybe_async]
pub trait Transport {
	async fn post_form(&self, url: Url, body: String) -> Result<ResponseData, SendyError>;
}
