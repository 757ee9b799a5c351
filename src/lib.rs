//! AWS S3 signature version 2 request signing.
//!
//! This crate computes the `Authorization` header value for object-storage
//! APIs that authenticate requests with the shared-secret HMAC-SHA1 scheme
//! known as signature version 2. It contains the signing logic only; an
//! HTTP client layer gathers the request attributes, calls
//! [`authorization`], and attaches the result before dispatch.
//!
//! ## Overview
//!
//! Four pure functions compose linearly:
//!
//! - [`canonicalize_headers`]: normalize `x-amz` headers into the signed
//!   header block
//! - [`string_to_sign`]: assemble the canonical signing payload
//! - [`sign`]: HMAC-SHA1 the payload, base64 the result
//! - [`authorization`]: wrap the signature into `AWS <key>:<signature>`
//!
//! ## Trust model
//!
//! Inputs are not validated, by design: signature verification on the
//! service side depends on exact byte output, so malformed attributes flow
//! through unchanged and simply produce a signature the service rejects.
//! Callers that need stricter guarantees validate before signing. The one
//! exception is the HMAC primitive itself rejecting the key material,
//! which surfaces as an error.
//!
//! ## Example
//!
//! ```
//! use s3_sigv2::{authorization, Credential, SigningRequest};
//!
//! # fn main() -> s3_sigv2::Result<()> {
//! let req = SigningRequest::new(
//!     "PUT",
//!     "/bucket/key",
//!     Credential::new("AKIDEXAMPLE", "secret"),
//! )
//! .with_content_type("text/plain")
//! .with_date("Thu, 01 Jan 1970 00:00:00 GMT")
//! .with_header("x-amz-acl", "private");
//!
//! let value = authorization(&req)?;
//! assert!(value.starts_with("AWS AKIDEXAMPLE:"));
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;

mod constants;

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

mod sign;
pub use sign::{
    authorization, canonicalize_headers, query_string_to_sign, sign, sign_query, string_to_sign,
    Date, SigningRequest,
};
