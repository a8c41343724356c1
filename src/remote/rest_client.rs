//! Blocking REST transport for the remote face-recognition service.
//!
//! Owns credential exchange: an OAuth client-credentials token is fetched on
//! first use and reused until shortly before its expiry. Construction never
//! touches the network.

use crate::error::Error;
use crate::image::ImageSource;
use crate::remote::traits::FaceApi;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_ENDPOINT: &str = "https://aip.baidubce.com";
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

struct CachedToken {
    value: String,
    expires_at: Instant,
}

pub struct RestFaceApi {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    secret_key: String,
    token: Mutex<Option<CachedToken>>,
}

impl RestFaceApi {
    pub fn new(app_id: &str, api_key: &str, secret_key: &str) -> Self {
        Self::with_endpoint(app_id, api_key, secret_key, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(app_id: &str, api_key: &str, secret_key: &str, endpoint: &str) -> Self {
        tracing::debug!(app_id, endpoint, "face api transport configured");
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
            token: Mutex::new(None),
        }
    }

    /// Return the cached access token, fetching a fresh one when absent or
    /// about to expire.
    fn access_token(&self) -> Result<String, Error> {
        let mut slot = self.token.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = slot.as_ref()
            && cached.expires_at > Instant::now() + TOKEN_REFRESH_MARGIN
        {
            return Ok(cached.value.clone());
        }

        let raw: Value = self
            .http
            .post(format!("{}/oauth/2.0/token", self.endpoint))
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.api_key.as_str()),
                ("client_secret", self.secret_key.as_str()),
            ])
            .send()?
            .json()?;

        if let Some(error) = raw.get("error").and_then(Value::as_str) {
            let description = raw
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or(error);
            tracing::warn!(error, "token grant rejected");
            return Err(Error::Auth(description.to_string()));
        }

        let value = raw
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Malformed("token response without access_token".to_string()))?
            .to_string();
        let expires_in = raw
            .get("expires_in")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        *slot = Some(CachedToken {
            value: value.clone(),
            expires_at: Instant::now() + Duration::from_secs(expires_in),
        });
        Ok(value)
    }

    /// One POST to a face API operation; returns the raw JSON mapping.
    fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        let token = self.access_token()?;
        tracing::debug!(path, "calling face api");
        let raw: Value = self
            .http
            .post(format!("{}/rest/2.0/face/v3/{}", self.endpoint, path))
            .query(&[("access_token", token.as_str())])
            .json(body)
            .send()?
            .json()?;
        Ok(raw)
    }
}

impl FaceApi for RestFaceApi {
    fn match_faces(&self, images: [&ImageSource; 2]) -> Result<Value, Error> {
        self.post("match", &json!([images[0], images[1]]))
    }

    fn search(&self, image: &ImageSource, group_id: &str) -> Result<Value, Error> {
        self.post(
            "search",
            &json!({
                "image": image.payload(),
                "image_type": image.type_label(),
                "group_id_list": group_id,
            }),
        )
    }

    fn multi_search(
        &self,
        image: &ImageSource,
        group_id: &str,
        max_face_num: u32,
    ) -> Result<Value, Error> {
        self.post(
            "multi-search",
            &json!({
                "image": image.payload(),
                "image_type": image.type_label(),
                "group_id_list": group_id,
                "max_face_num": max_face_num,
            }),
        )
    }

    fn add_user(
        &self,
        image: &ImageSource,
        group_id: &str,
        user_id: &str,
    ) -> Result<Value, Error> {
        self.post(
            "faceset/user/add",
            &json!({
                "image": image.payload(),
                "image_type": image.type_label(),
                "group_id": group_id,
                "user_id": user_id,
            }),
        )
    }

    fn detect(&self, image: &ImageSource, face_fields: &str) -> Result<Value, Error> {
        self.post(
            "detect",
            &json!({
                "image": image.payload(),
                "image_type": image.type_label(),
                "face_field": face_fields,
            }),
        )
    }

    fn group_add(&self, group_id: &str) -> Result<Value, Error> {
        self.post("faceset/group/add", &json!({ "group_id": group_id }))
    }
}
