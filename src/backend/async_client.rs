use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;
use crate::backend::traits::*;
use crate::config::{Config, REQUEST_TIMEOUT};
use crate::error::SendyError;

/// Non-blocking transport over a shared `reqwest` client
pub struct ReqwestTransport {
	inner: Client,
}

impl ReqwestTransport {
	pub fn new(options: &Config) -> Result<ReqwestTransport, SendyError> {
		let client = Client::builder()
			.timeout(REQUEST_TIMEOUT);

		let client = if let Some(ref proxy) = options.proxy_config {
			client.proxy(reqwest::Proxy::all(proxy.url()?)?)
		} else {
			client
		};

		let client = if let Some(ref tls) = options.tls_settings {
			let ca_data = std::fs::read(std::fs::canonicalize(tls.ca_path.as_str())?)?;
			client.add_root_certificate(reqwest::Certificate::from_pem(&ca_data)?)
		} else {
			client
		};

		Ok(ReqwestTransport {
			inner: client.build()?,
		})
	}
}

#[maybe_async::async_impl]
impl Transport for ReqwestTransport {
	async fn post_form(&self, url: Url, body: String) -> Result<ResponseData, SendyError> {
		let response = self
			.inner
			.post(url)
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(body)
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(SendyError::HttpError(format!(
				"Status: {}",
				response.status()
			)));
		}

		let status_code = response.status().as_u16();
		let body = response.bytes().await?;
		Ok(ResponseData::new(body, status_code))
	}
}
