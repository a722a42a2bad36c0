//! Classification of incoming links into campaign actions.
//!
//! [`validate`] is total: every input ends in exactly one of a
//! [`UriValidatorResult`] or a [`UriValidatorError`], and nothing escapes as a
//! panic. It is safe to call on every incoming link.

use std::sync::LazyLock;

use regex::Regex;

use crate::action::{LinkKind, Outcome};
use crate::payload::{decode_envelope, CheckinPayload, ReferralPayload};
use crate::uri::ParsedUri;
use crate::UriValidatorError;

/// Query parameter carrying the referral envelope.
pub const REFERRAL_INFO_PARAM: &str = "info";

/// Trailing `checkin/<segment>` with an optional final slash.
static CHECKIN_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"checkin/([^/]+)/?$").expect("valid regex"));

/// Classify a decomposed link.
///
/// # Errors
///
/// Returns [`UriValidatorError`] when the path is absent, its prefix is not on
/// the allow-list, the payload is missing, or the payload does not decode to
/// the expected shape.
pub fn validate(uri: &ParsedUri) -> Outcome {
    let Some(raw_path) = uri.path.as_deref() else {
        tracing::debug!("link has no path");
        return Err(UriValidatorError::IncorrectFormat);
    };

    let path = raw_path.strip_suffix('/').unwrap_or(raw_path);

    let Some(kind) = LinkKind::from_path(path) else {
        tracing::debug!(path, "unsupported link prefix");
        return Err(UriValidatorError::UnsupportedLink);
    };

    let outcome = match kind {
        LinkKind::Referral => validate_referral(uri),
        LinkKind::Checkin => validate_checkin(path),
    };

    match &outcome {
        Ok(result) => {
            tracing::debug!(%kind, location_id = result.location_id(), "link classified");
        }
        Err(err) => tracing::debug!(%kind, error = %err, "link rejected"),
    }

    outcome
}

/// Parse and classify a raw link string in one step.
///
/// # Errors
///
/// See [`validate`]. A string that is not a URL at all is
/// [`UriValidatorError::IncorrectFormat`].
pub fn validate_str(raw: &str) -> Outcome {
    validate(&ParsedUri::parse(raw))
}

fn validate_referral(uri: &ParsedUri) -> Outcome {
    let info = uri
        .query(REFERRAL_INFO_PARAM)
        .filter(|v| !v.is_empty())
        .ok_or(UriValidatorError::MissingData(LinkKind::Referral))?;

    decode_envelope::<ReferralPayload>(info)
        .ok_or(UriValidatorError::IncorrectDataFormat(LinkKind::Referral))
}

fn validate_checkin(path: &str) -> Outcome {
    let segment = CHECKIN_SEGMENT_RE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(UriValidatorError::MissingData(LinkKind::Checkin))?;

    decode_envelope::<CheckinPayload>(segment)
        .ok_or(UriValidatorError::IncorrectDataFormat(LinkKind::Checkin))
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
