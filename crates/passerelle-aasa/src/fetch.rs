//! Manifest retrieval over HTTP.
//!
//! [`ManifestFetcher`] is the transport seam: the validator only needs one
//! GET per candidate URL and never wants redirects followed, so the trait is
//! a single method returning the raw status, content type, and body.
//! [`HttpFetcher`] is the production implementation on `reqwest`;
//! [`ManifestBody::classify`] turns a raw response into the one decision the
//! rest of the pipeline branches on.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

/// Content type announcing a CMS-signed manifest.
pub const SIGNED_CONTENT_TYPE: &str = "application/pkcs7-mime";

/// Connect and read ceiling per request, so one unreachable domain cannot
/// stall a whole run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A raw response from one candidate URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
	pub status: u16,
	pub content_type: Option<String>,
	pub body: Vec<u8>,
}

/// Why a response cannot serve as a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
	/// A 3xx answer. Redirects are never followed.
	Redirect { status: u16 },
	/// Any other non-200 answer.
	Status { status: u16 },
	/// A 200 answer with no `Content-Type` header.
	MissingContentType,
	/// An unsigned manifest on a non-HTTPS URL.
	InsecureTransport,
}

/// The classification of one fetched response, decided once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestBody {
	/// A CMS-signed payload; verify before parsing.
	Signed(Vec<u8>),
	/// A plain JSON payload, served over HTTPS.
	Plain(Vec<u8>),
	/// Not usable as a manifest.
	Rejected(Rejection),
}

impl ManifestBody {
	/// Decide what a response is.
	///
	/// A signed manifest is accepted from any transport, its signature vouches
	/// for it; a plain one only over HTTPS. The content type check is a
	/// case-insensitive substring match, so parameters like `charset` and the
	/// `smime-type` attribute do not interfere.
	pub fn classify(url: &Url, response: FetchedResponse) -> Self {
		if (300..400).contains(&response.status) {
			return Self::Rejected(Rejection::Redirect {
				status: response.status,
			});
		}
		if response.status != 200 {
			return Self::Rejected(Rejection::Status {
				status: response.status,
			});
		}

		let Some(content_type) = response.content_type else {
			return Self::Rejected(Rejection::MissingContentType);
		};
		if content_type.to_ascii_lowercase().contains(SIGNED_CONTENT_TYPE) {
			return Self::Signed(response.body);
		}

		if url.scheme() != "https" {
			return Self::Rejected(Rejection::InsecureTransport);
		}
		Self::Plain(response.body)
	}
}

/// Fetches one URL, no redirects, no retries.
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
	async fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError>;
}

/// The production fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
	client: reqwest::Client,
}

impl HttpFetcher {
	/// Build a fetcher with the default 10 second request ceiling.
	pub fn new() -> Result<Self, FetchError> {
		Self::with_timeout(REQUEST_TIMEOUT)
	}

	/// Build a fetcher with an explicit connect and read ceiling.
	pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
		let client = reqwest::Client::builder()
			.redirect(reqwest::redirect::Policy::none())
			.connect_timeout(timeout)
			.timeout(timeout)
			.build()
			.map_err(|error| FetchError::Client(error.to_string()))?;
		Ok(Self { client })
	}
}

#[async_trait]
impl ManifestFetcher for HttpFetcher {
	async fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError> {
		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.map_err(|error| FetchError::Network {
				url: url.to_string(),
				reason: error.to_string(),
			})?;

		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(reqwest::header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string);
		let body = response
			.bytes()
			.await
			.map_err(|error| FetchError::Network {
				url: url.to_string(),
				reason: error.to_string(),
			})?
			.to_vec();

		Ok(FetchedResponse {
			status,
			content_type,
			body,
		})
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn https_url() -> Url {
		Url::parse("https://example.com/.well-known/apple-app-site-association").unwrap()
	}

	fn response(status: u16, content_type: Option<&str>) -> FetchedResponse {
		FetchedResponse {
			status,
			content_type: content_type.map(str::to_string),
			body: b"{}".to_vec(),
		}
	}

	#[rstest]
	#[case(301)]
	#[case(302)]
	#[case(307)]
	fn redirects_are_rejected(#[case] status: u16) {
		let body = ManifestBody::classify(&https_url(), response(status, Some("text/html")));

		assert_eq!(body, ManifestBody::Rejected(Rejection::Redirect { status }));
	}

	#[rstest]
	#[case(404)]
	#[case(500)]
	#[case(204)]
	fn non_200_statuses_are_rejected(#[case] status: u16) {
		let body = ManifestBody::classify(&https_url(), response(status, Some("application/json")));

		assert_eq!(body, ManifestBody::Rejected(Rejection::Status { status }));
	}

	#[rstest]
	fn missing_content_type_is_rejected() {
		let body = ManifestBody::classify(&https_url(), response(200, None));

		assert_eq!(body, ManifestBody::Rejected(Rejection::MissingContentType));
	}

	#[rstest]
	#[case("application/pkcs7-mime")]
	#[case("application/pkcs7-mime; smime-type=signed-data")]
	#[case("Application/PKCS7-Mime")]
	fn signed_content_types_classify_as_signed(#[case] content_type: &str) {
		let body = ManifestBody::classify(&https_url(), response(200, Some(content_type)));

		assert_eq!(body, ManifestBody::Signed(b"{}".to_vec()));
	}

	#[rstest]
	#[case("application/json")]
	#[case("text/plain")]
	#[case("application/octet-stream")]
	fn plain_content_over_https_is_accepted(#[case] content_type: &str) {
		let body = ManifestBody::classify(&https_url(), response(200, Some(content_type)));

		assert_eq!(body, ManifestBody::Plain(b"{}".to_vec()));
	}

	#[rstest]
	fn plain_content_over_http_is_rejected() {
		let url = Url::parse("http://example.com/apple-app-site-association").unwrap();

		let body = ManifestBody::classify(&url, response(200, Some("application/json")));

		assert_eq!(body, ManifestBody::Rejected(Rejection::InsecureTransport));
	}

	#[rstest]
	fn signed_content_over_http_is_still_signed() {
		let url = Url::parse("http://example.com/apple-app-site-association").unwrap();

		let body = ManifestBody::classify(&url, response(200, Some(SIGNED_CONTENT_TYPE)));

		assert_eq!(body, ManifestBody::Signed(b"{}".to_vec()));
	}
}
