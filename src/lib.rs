//! Thin client wrapper around a cloud face-recognition REST API.
//!
//! [`FaceServiceClient`] exposes face matching, 1:N and M:N search,
//! user/group enrollment and attribute detection. Each operation is one
//! blocking round trip whose response is reshaped into an
//! [`ApiResult`](types::ApiResult): the service's `error_code` plus, on
//! success, its `result` payload verbatim. Authentication, storage of
//! enrolled faces and all recognition work live on the service side.
//!
//! ```no_run
//! use face_api::{FaceServiceClient, ImageSource};
//!
//! fn main() -> anyhow::Result<()> {
//!     let client = FaceServiceClient::new("app-id", "api-key", "secret-key");
//!     let probe = ImageSource::from_file("probe.jpg")?;
//!     let outcome = client.search(&probe)?;
//!     if outcome.is_ok() {
//!         println!("{:?}", outcome.result);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod remote;
pub mod types;

pub use client::{DEFAULT_GROUP_ID, FaceServiceClient};
pub use config::Config;
pub use error::Error;
pub use image::{ImageSource, file_to_base64};
pub use types::ApiResult;
