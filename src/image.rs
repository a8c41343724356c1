//! How an image is handed to the remote service.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::io;
use std::path::Path;

/// An image as the remote API accepts it: either an inline base64 payload or
/// a face token the service issued from an earlier detection.
///
/// The payload is forwarded unchanged; no base64 syntax check and no token
/// format check happen locally. Malformed input comes back from the service
/// as a nonzero `error_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Base64(String),
    FaceToken(String),
}

impl ImageSource {
    /// Read a file and wrap its standard base64 encoding.
    ///
    /// The whole file is read into memory; no size limit is enforced.
    /// I/O failures are returned raw.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(ImageSource::Base64(file_to_base64(path)?))
    }

    /// The string forwarded in the `image` field.
    pub fn payload(&self) -> &str {
        match self {
            ImageSource::Base64(s) | ImageSource::FaceToken(s) => s,
        }
    }

    /// The `image_type` label the remote API expects.
    pub fn type_label(&self) -> &'static str {
        match self {
            ImageSource::Base64(_) => "BASE64",
            ImageSource::FaceToken(_) => "FACE_TOKEN",
        }
    }
}

impl Serialize for ImageSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ImageSource", 2)?;
        s.serialize_field("image", self.payload())?;
        s.serialize_field("image_type", self.type_label())?;
        s.end()
    }
}

/// Read a file fully into memory and return its standard base64 text
/// encoding. Read failures propagate unwrapped.
pub fn file_to_base64(path: impl AsRef<Path>) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_to_base64_encodes_raw_bytes() {
        let path = std::env::temp_dir().join("face_api_b64_probe.bin");
        std::fs::write(&path, [0x00u8, 0x01]).unwrap();
        assert_eq!(file_to_base64(&path).unwrap(), "AAE=");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn file_to_base64_propagates_missing_file() {
        let err = file_to_base64("/nonexistent/face_api_probe").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn source_serializes_with_vendor_field_names() {
        let src = ImageSource::FaceToken("abc123".to_string());
        let json = serde_json::to_value(&src).unwrap();
        assert_eq!(json["image"], "abc123");
        assert_eq!(json["image_type"], "FACE_TOKEN");
    }

    #[test]
    fn from_file_wraps_base64_variant() {
        let path = std::env::temp_dir().join("face_api_b64_variant.bin");
        std::fs::write(&path, b"hi").unwrap();
        let src = ImageSource::from_file(&path).unwrap();
        assert_eq!(src, ImageSource::Base64("aGk=".to_string()));
        std::fs::remove_file(&path).ok();
    }
}
