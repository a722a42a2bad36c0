use thiserror::Error;

use crate::action::LinkKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Rejection of an incoming deep link or QR payload.
///
/// Every variant shares the [`UriValidatorError::TAG`] discriminant; callers
/// tell them apart by message only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriValidatorError {
    #[error("Unsupported link [uriValidator]")]
    UnsupportedLink,

    #[error("Missing data [{0}]")]
    MissingData(LinkKind),

    #[error("Incorrect data format [{0}]")]
    IncorrectDataFormat(LinkKind),

    /// Catch-all for input that could not be inspected at all.
    #[error("Incorrect format [uriValidator]")]
    IncorrectFormat,
}

impl UriValidatorError {
    pub const TAG: &'static str = "uri-validation-error";

    #[must_use]
    pub fn tag(&self) -> &'static str {
        Self::TAG
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// JSON shape shown to the user and printed by the CLI.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.tag(),
                "message": self.message(),
            }
        })
    }
}
