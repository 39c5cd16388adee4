use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderValue},
};
use std::convert::Infallible;

use tutuu_ai_core::device::{DeviceId, DEVICE_ID_HEADER};

/// The single device-id lookup shared by handlers, the request logger and
/// the fault interceptor.
pub fn device_id(headers: &HeaderMap) -> DeviceId {
    DeviceId::from_header(headers.get(DEVICE_ID_HEADER).map(HeaderValue::as_bytes))
}

/// Extractor for the calling device. Never rejects.
#[derive(Debug, Clone)]
pub struct ClientDevice(pub DeviceId);

#[async_trait]
impl<S> FromRequestParts<S> for ClientDevice
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(device_id(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(DEVICE_ID_HEADER, HeaderValue::from_static("test-device-123"));
        assert_eq!(device_id(&headers).as_str(), "test-device-123");
    }

    #[test]
    fn header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Device-Id", HeaderValue::from_static("d1"));
        assert_eq!(device_id(&headers).as_str(), "d1");
    }

    #[test]
    fn falls_back_to_unknown() {
        assert!(device_id(&HeaderMap::new()).is_unknown());

        let mut headers = HeaderMap::new();
        headers.insert(DEVICE_ID_HEADER, HeaderValue::from_static(""));
        assert!(device_id(&headers).is_unknown());
    }

    #[test]
    fn opaque_non_utf8_bytes_fall_back() {
        let mut headers = HeaderMap::new();
        headers.insert(DEVICE_ID_HEADER, HeaderValue::from_bytes(&[0xc3, 0x28]).unwrap());
        assert!(device_id(&headers).is_unknown());
    }
}
