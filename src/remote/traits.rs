use crate::error::Error;
use crate::image::ImageSource;
use serde_json::Value;

/// The remote face-recognition service, as this crate consumes it.
///
/// Each call returns the raw JSON mapping the service produced, containing at
/// least `error_code` and, on success, `result`. Normalization happens above
/// this seam, in the wrapper.
pub trait FaceApi: Send + Sync {
    /// Compare two faces; the service preserves the order of `images` in its
    /// reply.
    fn match_faces(&self, images: [&ImageSource; 2]) -> Result<Value, Error>;

    /// 1:N lookup of `image` against the members of `group_id`.
    fn search(&self, image: &ImageSource, group_id: &str) -> Result<Value, Error>;

    /// M:N lookup; the service detects up to `max_face_num` faces in `image`.
    fn multi_search(
        &self,
        image: &ImageSource,
        group_id: &str,
        max_face_num: u32,
    ) -> Result<Value, Error>;

    /// Enroll `image` under `user_id` in `group_id`. If the user exists the
    /// service appends to their face set.
    fn add_user(&self, image: &ImageSource, group_id: &str, user_id: &str)
    -> Result<Value, Error>;

    /// Detect faces and report the attributes named in `face_fields`
    /// (comma-separated).
    fn detect(&self, image: &ImageSource, face_fields: &str) -> Result<Value, Error>;

    /// Create a user group.
    fn group_add(&self, group_id: &str) -> Result<Value, Error>;
}
