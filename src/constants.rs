// Headers and prefixes used in signature version 2.
pub const X_AMZ_PREFIX: &str = "x-amz";
pub const CONTENT_MD5: &str = "content-md5";
