//! Deep-link and QR payload handling for the stamp loyalty client.

pub mod action;
pub mod app_config;
pub mod config;
pub mod encode;
pub mod error;
mod payload;
pub mod uri;
pub mod validator;

pub use action::{LinkKind, Outcome, UriValidatorResult};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use encode::{encode_checkin_link, encode_referral_link};
pub use error::{ConfigError, UriValidatorError};
pub use uri::ParsedUri;
pub use validator::{validate, validate_str};
