//! CMS signature verification for signed manifests.
//!
//! Apple serves signed apple-app-site-association files as RFC 5652
//! `SignedData` structures with the manifest JSON embedded as the signed
//! content. [`CmsVerifier`] checks every signer's signature against that
//! content and hands the content back; it deliberately applies no
//! certificate chain constraints beyond the signatures themselves.

use cryptographic_message_syntax::SignedData;

use crate::error::VerifyError;

/// Verifies a signed manifest and extracts its payload.
pub trait SignatureVerifier: Send + Sync {
	fn verify(&self, signed: &[u8]) -> Result<Vec<u8>, VerifyError>;
}

/// The production verifier, on `cryptographic-message-syntax`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmsVerifier;

impl SignatureVerifier for CmsVerifier {
	fn verify(&self, signed: &[u8]) -> Result<Vec<u8>, VerifyError> {
		let signed_data =
			SignedData::parse_ber(signed).map_err(|error| VerifyError::Malformed(error.to_string()))?;

		let mut signers = 0;
		for signer in signed_data.signers() {
			signer
				.verify_signature_with_signed_data(&signed_data)
				.map_err(|error| VerifyError::Signature(error.to_string()))?;
			signers += 1;
		}
		if signers == 0 {
			return Err(VerifyError::NoSigners);
		}

		signed_data
			.signed_content()
			.map(|content| content.to_vec())
			.ok_or(VerifyError::MissingContent)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(b"garbage bytes, not BER at all".as_slice())]
	#[case(br#"{"applinks": {"details": []}}"#.as_slice())]
	#[case(b"".as_slice())]
	fn non_cms_payloads_are_malformed(#[case] payload: &[u8]) {
		let error = CmsVerifier.verify(payload).unwrap_err();

		assert!(matches!(error, VerifyError::Malformed(_)), "got {error:?}");
	}
}
