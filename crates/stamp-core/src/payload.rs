//! Base64 JSON envelopes carried inside campaign links.
//!
//! Field names are the backend wire contract. The check-in payload uses
//! `campaign_short_code` while the referral payload uses `referralCode`.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::action::UriValidatorResult;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Encoder used for generated links. URL-safe so a check-in payload never
/// contains `/` and stays a single path segment.
const URL_SAFE_ENCODER: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, base64::engine::general_purpose::NO_PAD);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ReferralPayload {
    #[serde(rename = "locationId")]
    pub location_id: String,
    #[serde(rename = "referralCode")]
    pub referral_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CheckinPayload {
    #[serde(rename = "locationId")]
    pub location_id: String,
    #[serde(rename = "campaign_short_code", alias = "campaignShortCode")]
    pub campaign_short_code: String,
}

/// A decoded envelope that can become a [`UriValidatorResult`].
pub(crate) trait Envelope: DeserializeOwned {
    /// `None` when a required field is empty.
    fn into_result(self) -> Option<UriValidatorResult>;
}

impl Envelope for ReferralPayload {
    fn into_result(self) -> Option<UriValidatorResult> {
        if self.location_id.is_empty() || self.referral_code.is_empty() {
            return None;
        }
        Some(UriValidatorResult::Referral {
            location_id: self.location_id,
            referral_code: self.referral_code,
        })
    }
}

impl Envelope for CheckinPayload {
    fn into_result(self) -> Option<UriValidatorResult> {
        if self.location_id.is_empty() || self.campaign_short_code.is_empty() {
            return None;
        }
        Some(UriValidatorResult::CheckIn {
            location_id: self.location_id,
            campaign_short_code: self.campaign_short_code,
        })
    }
}

/// Decode `raw` as base64 (standard or URL-safe, padding optional), then as a
/// strictly-shaped JSON object.
pub(crate) fn decode_envelope<T: Envelope>(raw: &str) -> Option<UriValidatorResult> {
    let bytes = STANDARD_LENIENT
        .decode(raw)
        .or_else(|_| URL_SAFE_LENIENT.decode(raw))
        .map_err(|e| tracing::debug!(error = %e, "envelope is not base64"))
        .ok()?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| tracing::debug!(error = %e, "envelope is not JSON"))
        .ok()?;

    // Serde would otherwise accept a positional array for a struct.
    if !value.is_object() {
        tracing::debug!("envelope JSON is not an object");
        return None;
    }

    T::deserialize(value)
        .map_err(|e| tracing::debug!(error = %e, "envelope JSON does not match payload shape"))
        .ok()?
        .into_result()
}

pub(crate) fn encode_envelope<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(payload)?;
    Ok(URL_SAFE_ENCODER.encode(json))
}
