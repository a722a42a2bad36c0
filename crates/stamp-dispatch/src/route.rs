use serde::Serialize;
use stamp_core::UriValidatorResult;

/// Parameters for the location-detail screen.
///
/// Exactly one of `campaign_short_code` or `referral_code` is set when the
/// route comes from a classified link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetailParams {
    pub location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_short_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Navigation targets reachable from a scanned or opened link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "params")]
pub enum Route {
    LocationDetail(LocationDetailParams),
}

impl From<UriValidatorResult> for Route {
    fn from(result: UriValidatorResult) -> Self {
        route_for(result)
    }
}

/// Map a classified link to its screen. Both campaign actions land on the
/// location-detail route family.
#[must_use]
pub fn route_for(result: UriValidatorResult) -> Route {
    let params = match result {
        UriValidatorResult::CheckIn {
            location_id,
            campaign_short_code,
        } => LocationDetailParams {
            location_id,
            campaign_short_code: Some(campaign_short_code),
            referral_code: None,
        },
        UriValidatorResult::Referral {
            location_id,
            referral_code,
        } => LocationDetailParams {
            location_id,
            campaign_short_code: None,
            referral_code: Some(referral_code),
        },
    };
    Route::LocationDetail(params)
}
