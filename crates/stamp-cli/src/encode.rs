//! `stamp encode` handlers.

use crate::EncodeCommands;

pub(crate) fn run_encode(
    config: &stamp_core::AppConfig,
    command: EncodeCommands,
) -> anyhow::Result<()> {
    let link = match command {
        EncodeCommands::Checkin {
            location_id,
            campaign,
            base,
        } => {
            let base = base.as_deref().unwrap_or(&config.link_base_url);
            stamp_core::encode_checkin_link(base, &location_id, &campaign)?
        }
        EncodeCommands::Referral {
            location_id,
            referral_code,
            base,
        } => {
            let base = base.as_deref().unwrap_or(&config.link_base_url);
            stamp_core::encode_referral_link(base, &location_id, &referral_code)?
        }
    };

    tracing::debug!(%link, "encoded campaign link");
    println!("{link}");
    Ok(())
}
