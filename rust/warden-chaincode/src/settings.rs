use serde::{Deserialize, Serialize};

/// Knobs of a [crate::Chaincode].
///
/// Settings deserialize from JSON; omitted fields keep their defaults:
///
/// ```rust
/// use warden_chaincode::ChaincodeSettings;
///
/// let settings = ChaincodeSettings::from_json(r#"{ "strict_operations": true }"#).unwrap();
/// assert!(settings.strict_operations);
/// assert_eq!(ChaincodeSettings::from_json("{}").unwrap(), ChaincodeSettings::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChaincodeSettings {
    /// Fail invocations of unrecognized operations with
    /// [crate::WardenChaincodeError::UnknownOperation] instead of answering
    /// them with an empty success
    pub strict_operations: bool,
}

impl ChaincodeSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
