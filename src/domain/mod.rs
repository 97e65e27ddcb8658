//! Plain data: the contact message and the JSON settings documents.

pub mod contact;
pub mod mail_settings;
pub mod pendant_settings;

pub use contact::{ContactMessage, CONTACT_FIELDS};
pub use mail_settings::{MailSettings, ProviderKind, SettingsError};
pub use pendant_settings::{
    CameraSettings, CurveType, LinkMode, PendantSettings, MAX_CURVE_RESOLUTION, MAX_ITERATIONS, MAX_LINKS,
};
