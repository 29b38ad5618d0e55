use attohttpc::header::CONTENT_TYPE;
use attohttpc::{ProxySettingsBuilder, Session};
use std::fs;
use bytes::Bytes;
use url::Url;
use crate::backend::traits::*;
use crate::config::{Config, REQUEST_TIMEOUT};
use crate::error::SendyError;

/// Blocking transport over a reusable `attohttpc` session
pub struct AttoTransport {
	inner: Session,
}

impl AttoTransport {
	pub fn new(options: &Config) -> Result<AttoTransport, SendyError> {
		let mut client = Session::new();
		client.timeout(REQUEST_TIMEOUT);

		if let Some(ref proxy) = options.proxy_config {
			let proxy_url = proxy.url()?;
			let proxy = ProxySettingsBuilder::new()
				.http_proxy(proxy_url.clone())
				.https_proxy(proxy_url)
				.build();
			client.proxy_settings(proxy);
		}

		if let Some(ref tls) = options.tls_settings {
			let ca_data = fs::read(fs::canonicalize(tls.ca_path.as_str())?)?;
			let ca_cert = native_tls::Certificate::from_pem(&ca_data)
				.map_err(|e| SendyError::HttpError(e.to_string()))?;
			client.add_root_certificate(ca_cert);
		}

		Ok(AttoTransport { inner: client })
	}
}

impl Transport for AttoTransport {
	fn post_form(&self, url: Url, body: String) -> Result<ResponseData, SendyError> {
		let response = self
			.inner
			.post(url)
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.bytes(body.into_bytes())
			.send()?;

		if !response.is_success() {
			return Err(SendyError::HttpError(format!(
				"Status: {}",
				response.status()
			)));
		}

		let status_code = response.status().as_u16();
		let body_vec = response.bytes()?;
		Ok(ResponseData::new(Bytes::from(body_vec), status_code))
	}
}
