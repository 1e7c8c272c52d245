use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Status code of a successful response
pub const OK: u16 = 200;

/// Status code of a failed response
pub const ERROR: u16 = 500;

/// The outcome of an entry point.
///
/// Serializes as `{"outcome":"success","payload":"<base64>"}` or
/// `{"outcome":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Response {
    /// The invocation succeeded, producing `payload` (possibly empty)
    Success {
        /// The bytes returned to the caller
        #[serde(with = "base64_payload")]
        payload: Vec<u8>,
    },
    /// The invocation failed; none of its writes may be applied
    Error {
        /// A human readable reason
        message: String,
    },
}

impl Response {
    /// A success carrying `payload`
    pub fn success(payload: Vec<u8>) -> Self {
        Response::Success { payload }
    }

    /// A failure described by `error`
    pub fn error(error: impl Display) -> Self {
        Response::Error {
            message: error.to_string(),
        }
    }

    /// [OK] or [ERROR]
    pub fn status(&self) -> u16 {
        match self {
            Response::Success { .. } => OK,
            Response::Error { .. } => ERROR,
        }
    }

    /// Whether the invocation succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// The payload of a success; empty for a failure
    pub fn payload(&self) -> &[u8] {
        match self {
            Response::Success { payload } => payload,
            Response::Error { .. } => &[],
        }
    }

    /// The message of a failure
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Error { message } => Some(message),
        }
    }
}

impl<E> From<Result<Vec<u8>, E>> for Response
where
    E: Display,
{
    fn from(result: Result<Vec<u8>, E>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(error) => Response::error(error),
        }
    }
}

mod base64_payload {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(payload))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(D::Error::custom)
    }
}
