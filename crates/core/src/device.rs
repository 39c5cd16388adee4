//! Client device identity carried in the `x-device-id` request header.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEVICE_ID_HEADER: &str = "x-device-id";
pub const UNKNOWN_DEVICE: &str = "unknown";

/// Opaque client-supplied identifier used for correlation and logging only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn unknown() -> Self {
        Self(UNKNOWN_DEVICE.to_string())
    }

    /// Resolves the raw header bytes. The value is kept verbatim when it is
    /// present, non-empty and valid UTF-8; otherwise the `unknown` sentinel wins.
    pub fn from_header(raw: Option<&[u8]>) -> Self {
        raw.filter(|bytes| !bytes.is_empty())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(|value| Self(value.to_string()))
            .unwrap_or_else(Self::unknown)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_DEVICE
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
