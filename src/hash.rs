//! Hash related utils.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

use crate::Error;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 encoded HMAC with SHA1 hash.
///
/// The key is used as raw bytes; only the padding the HMAC construction
/// itself performs is applied. If the primitive rejects the key material
/// the failure is returned to the caller instead of being swallowed.
pub fn base64_hmac_sha1(key: &[u8], content: &[u8]) -> crate::Result<String> {
    let mut h = Hmac::<Sha1>::new_from_slice(key)
        .map_err(|e| Error::credential_invalid("hmac rejected signing key").with_source(e))?;
    h.update(content);

    Ok(base64_encode(&h.finalize().into_bytes()))
}
