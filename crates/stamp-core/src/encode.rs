//! Campaign link generation, the inverse of [`crate::validate`].

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::payload::{encode_envelope, CheckinPayload, ReferralPayload};
use crate::validator::REFERRAL_INFO_PARAM;

/// Build `<base>/checkin/<envelope>` for a location campaign.
///
/// `base` is either a custom scheme root (`stamp://`) or a universal-link
/// origin (`https://app.stamp.example`).
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized.
pub fn encode_checkin_link(
    base: &str,
    location_id: &str,
    campaign_short_code: &str,
) -> Result<String, serde_json::Error> {
    let envelope = encode_envelope(&CheckinPayload {
        location_id: location_id.to_owned(),
        campaign_short_code: campaign_short_code.to_owned(),
    })?;
    Ok(format!("{}checkin/{envelope}", link_root(base)))
}

/// Build `<base>/referral?info=<envelope>` for a referral invitation.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized.
pub fn encode_referral_link(
    base: &str,
    location_id: &str,
    referral_code: &str,
) -> Result<String, serde_json::Error> {
    let envelope = encode_envelope(&ReferralPayload {
        location_id: location_id.to_owned(),
        referral_code: referral_code.to_owned(),
    })?;
    let info = utf8_percent_encode(&envelope, NON_ALPHANUMERIC);
    Ok(format!(
        "{}referral?{REFERRAL_INFO_PARAM}={info}",
        link_root(base)
    ))
}

/// `stamp://` stays as is; `https://host` and `https://host/` become `https://host/`.
fn link_root(base: &str) -> String {
    if base.ends_with("://") || base.ends_with('/') {
        base.to_owned()
    } else {
        format!("{base}/")
    }
}
