//! The normalized response record and read-only views of the structures the
//! remote service returns.
//!
//! Everything below `ApiResult::result` is remote-defined and consumed
//! read-only: the wrapper copies it verbatim and never validates nested
//! fields, so it stays forward-compatible with schema additions on the
//! service side. The typed views exist for callers who want them; decoding
//! is opt-in via [`ApiResult::decode`].

use crate::error::Error;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// The one cross-cutting contract: `result` is `Some` only when
/// `error_code == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub error_code: i64,
    pub result: Option<Value>,
}

impl ApiResult {
    /// Reshape a raw remote response into the normalized record.
    ///
    /// `error_code` and `result` are taken verbatim; when the code is
    /// nonzero, `result` is dropped regardless of what the response carried.
    /// A response without an integer `error_code` does not fit the remote
    /// contract at all and is surfaced as [`Error::Malformed`].
    pub fn from_raw(raw: Value) -> Result<Self, Error> {
        let error_code = raw
            .get("error_code")
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::Malformed(format!("no integer error_code in {raw}")))?;
        let result = if error_code == 0 {
            raw.get("result").filter(|v| !v.is_null()).cloned()
        } else {
            None
        };
        Ok(ApiResult { error_code, result })
    }

    /// True when the remote service reported success.
    pub fn is_ok(&self) -> bool {
        self.error_code == 0
    }

    /// Decode the success payload into one of the typed views.
    ///
    /// Returns `Ok(None)` when there is no payload (failure responses).
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match &self.result {
            Some(value) => serde_json::from_value(value.clone()).map(Some),
            None => Ok(None),
        }
    }
}

/// Bounding box of a detected face.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaceLocation {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// Head pose angles in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaceAngle {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

/// A labeled attribute with the service's confidence, e.g. gender or emotion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttributeScore {
    #[serde(rename = "type")]
    pub label: String,
    pub probability: f64,
}

/// One detected face with the attribute set the wrapper requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaceRecord {
    pub face_token: String,
    pub location: FaceLocation,
    pub face_probability: f64,
    pub angle: FaceAngle,
    pub age: f64,
    pub gender: AttributeScore,
    pub emotion: AttributeScore,
}

/// One enrolled user scored against a probe face.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchCandidate {
    pub group_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_info: String,
    pub score: f64,
}

/// Success payload of `match_faces`: similarity score plus the two face
/// tokens in the caller's argument order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub face_list: Vec<MatchedFace>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchedFace {
    pub face_token: String,
}

/// Success payload of `search`: the probe's token and the ranked candidates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub face_token: String,
    pub user_list: Vec<MatchCandidate>,
}

/// Success payload of `add_user`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddUserResult {
    pub face_token: String,
    pub location: FaceLocation,
}

/// Success payload of `detect`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectResult {
    pub face_num: u32,
    pub face_list: Vec<FaceRecord>,
}

/// Success payload of `multi_search`: per detected face, its token, bounding
/// box and own candidate list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiSearchResult {
    pub face_num: u32,
    pub face_list: Vec<MultiSearchFace>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiSearchFace {
    pub face_token: String,
    pub location: FaceLocation,
    pub user_list: Vec<MatchCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_raw_keeps_result_on_success() {
        let raw = json!({"error_code": 0, "result": {"score": 91.2}});
        let normalized = ApiResult::from_raw(raw).unwrap();
        assert_eq!(normalized.error_code, 0);
        assert_eq!(normalized.result, Some(json!({"score": 91.2})));
    }

    #[test]
    fn from_raw_drops_result_on_failure() {
        let raw = json!({"error_code": 222202, "result": {"leaked": true}});
        let normalized = ApiResult::from_raw(raw).unwrap();
        assert_eq!(normalized.error_code, 222202);
        assert!(normalized.result.is_none());
    }

    #[test]
    fn from_raw_rejects_missing_error_code() {
        assert!(ApiResult::from_raw(json!({"result": {}})).is_err());
        assert!(ApiResult::from_raw(json!({"error_code": "0"})).is_err());
    }

    #[test]
    fn decode_reads_detect_payload() {
        let raw = json!({
            "error_code": 0,
            "result": {
                "face_num": 1,
                "face_list": [{
                    "face_token": "c0cf63842720dd966421a7fe719e5f7e",
                    "location": {"left": 313.76, "top": 477.84, "width": 414, "height": 417, "rotation": -3},
                    "face_probability": 1,
                    "angle": {"yaw": -8.25, "pitch": 10.36, "roll": -4.63},
                    "age": 24,
                    "gender": {"type": "male", "probability": 1},
                    "emotion": {"type": "happy", "probability": 0.94}
                }]
            }
        });
        let normalized = ApiResult::from_raw(raw).unwrap();
        let detect: DetectResult = normalized.decode().unwrap().unwrap();
        assert_eq!(detect.face_num, 1);
        assert_eq!(detect.face_list[0].gender.label, "male");
        assert_eq!(detect.face_list[0].age, 24.0);
    }

    #[test]
    fn decode_is_none_without_payload() {
        let normalized = ApiResult {
            error_code: 18,
            result: None,
        };
        let decoded: Option<SearchResult> = normalized.decode().unwrap();
        assert!(decoded.is_none());
    }
}
