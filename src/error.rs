use thiserror::Error;

/// Local failure modes of the client.
///
/// Remote-side failures are not errors at this level: the service reports
/// them through the `error_code` field of [`crate::types::ApiResult`], which
/// is passed through as plain data for the caller to branch on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http transport failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token grant rejected: {0}")]
    Auth(String),
    #[error("malformed remote response: {0}")]
    Malformed(String),
}
