//! The wrapper itself: forwards calls to the remote service and applies the
//! uniform `{error_code, result}` normalization.

use crate::config::Config;
use crate::error::Error;
use crate::image::ImageSource;
use crate::remote::rest_client::RestFaceApi;
use crate::remote::traits::FaceApi;
use crate::types::ApiResult;
use std::sync::Arc;

/// Group used for search and enrollment until `add_group` switches it.
pub const DEFAULT_GROUP_ID: &str = "service_robot";

/// Attributes requested by `detect`. Fixed; the wrapper exposes no knob for
/// other attribute sets.
const DETECT_FACE_FIELDS: &str = "age,gender,emotion";

/// Client for the remote face-recognition service.
///
/// Holds one transport for its lifetime plus the current group identifier.
/// Every operation is one blocking round trip. The only state transition is
/// the group switch performed by a successful [`add_group`](Self::add_group);
/// it takes `&mut self`, so sharing a client across threads needs external
/// synchronization.
pub struct FaceServiceClient {
    remote: Arc<dyn FaceApi>,
    group_id: String,
}

impl FaceServiceClient {
    /// Build a client over the real REST transport. Does not contact the
    /// network; the access token is fetched on the first call.
    pub fn new(app_id: &str, api_key: &str, secret_key: &str) -> Self {
        Self::with_transport(Arc::new(RestFaceApi::new(app_id, api_key, secret_key)))
    }

    /// Build a client from environment-backed configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_transport(Arc::new(RestFaceApi::with_endpoint(
            &config.app_id,
            &config.api_key,
            &config.secret_key,
            &config.endpoint,
        )))
    }

    /// Build a client over an arbitrary transport. This is the seam tests
    /// use to substitute a fake service.
    pub fn with_transport(remote: Arc<dyn FaceApi>) -> Self {
        Self {
            remote,
            group_id: DEFAULT_GROUP_ID.to_string(),
        }
    }

    /// The group identifier search and enrollment currently run against.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Compare two faces. On success the result carries a similarity score
    /// and the two face tokens in argument order. Whether a score means
    /// "same person" (the service documents ~80 as the usual cutoff) is left
    /// to the caller.
    pub fn match_faces(&self, a: &ImageSource, b: &ImageSource) -> Result<ApiResult, Error> {
        self.normalize(self.remote.match_faces([a, b])?)
    }

    /// 1:N search of `image` against the current group. On success the
    /// result carries the detected face token and the ranked candidate list.
    pub fn search(&self, image: &ImageSource) -> Result<ApiResult, Error> {
        self.normalize(self.remote.search(image, &self.group_id)?)
    }

    /// M:N search: like [`search`](Self::search) but matching up to
    /// `max_face_num` detected faces, each with its own candidate list.
    /// The service treats 1 as the default bound.
    pub fn multi_search(&self, image: &ImageSource, max_face_num: u32) -> Result<ApiResult, Error> {
        self.normalize(self.remote.multi_search(image, &self.group_id, max_face_num)?)
    }

    /// Enroll `image` under `user_id` in the current group. If the user
    /// already exists, the service appends the face to their face set rather
    /// than replacing it. On success the result carries the new face token
    /// and its bounding box.
    pub fn add_user(&self, image: &ImageSource, user_id: &str) -> Result<ApiResult, Error> {
        self.normalize(self.remote.add_user(image, &self.group_id, user_id)?)
    }

    /// Detect every face in `image` and report age, gender and emotion for
    /// each.
    pub fn detect(&self, image: &ImageSource) -> Result<ApiResult, Error> {
        self.normalize(self.remote.detect(image, DETECT_FACE_FIELDS)?)
    }

    /// Create a user group. On success the client switches its held group
    /// identifier to `group_id`, affecting all subsequent search and
    /// enrollment calls, and returns `true`. On a remote failure the held
    /// identifier is left unchanged and `false` is returned.
    pub fn add_group(&mut self, group_id: &str) -> Result<bool, Error> {
        let outcome = self.normalize(self.remote.group_add(group_id)?)?;
        if outcome.is_ok() {
            self.group_id = group_id.to_string();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn normalize(&self, raw: serde_json::Value) -> Result<ApiResult, Error> {
        let normalized = ApiResult::from_raw(raw)?;
        if !normalized.is_ok() {
            tracing::warn!(error_code = normalized.error_code, "face api call failed");
        }
        Ok(normalized)
    }
}
