use serde::{Deserialize, Serialize};

/// Link families the app knows how to act on, keyed by path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Referral,
    Checkin,
}

impl LinkKind {
    /// Allow-list checked in order against the normalized path.
    pub const ALL: &'static [LinkKind] = &[LinkKind::Referral, LinkKind::Checkin];

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            LinkKind::Referral => "referral",
            LinkKind::Checkin => "checkin",
        }
    }

    /// Case-sensitive prefix match; `"referrals"` still counts as a referral link.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| path.starts_with(kind.prefix()))
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A recognized campaign action decoded from a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UriValidatorResult {
    CheckIn {
        #[serde(rename = "locationId")]
        location_id: String,
        campaign_short_code: String,
    },
    Referral {
        #[serde(rename = "locationId")]
        location_id: String,
        #[serde(rename = "referralCode")]
        referral_code: String,
    },
}

impl UriValidatorResult {
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        match self {
            UriValidatorResult::CheckIn { .. } => LinkKind::Checkin,
            UriValidatorResult::Referral { .. } => LinkKind::Referral,
        }
    }

    #[must_use]
    pub fn location_id(&self) -> &str {
        match self {
            UriValidatorResult::CheckIn { location_id, .. }
            | UriValidatorResult::Referral { location_id, .. } => location_id,
        }
    }
}

/// Outcome of classifying one link: exactly one of a result or an error.
pub type Outcome = Result<UriValidatorResult, crate::UriValidatorError>;
