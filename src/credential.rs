use std::fmt::{Debug, Formatter};

/// Credential for signature version 2.
#[derive(Clone)]
pub struct Credential {
    /// Access key id, placed verbatim in the authorization value.
    pub access_key_id: String,
    /// Secret access key, used only as the HMAC signing key.
    pub secret_access_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// Whether both parts of the credential are present.
    ///
    /// Signing does not require this to hold; an empty secret signs with an
    /// empty key and produces a signature the service will reject.
    pub fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}
