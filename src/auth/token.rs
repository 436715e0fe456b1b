//! The token stored inside the auth cookie.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::admin::AdminId;

mod expiry_format {
    //! Fixed-width serde format for the token expiry.
    //!
    //! The default [time::OffsetDateTime] serializer writes single-digit
    //! hours ("0:00:00.0" at midnight) which its own parser then rejects, so
    //! a token issued at exactly midnight would fail to round-trip. This
    //! format pads every component.
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{
        OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
    };

    /// Expiry format, e.g. "2026-08-29 17:05:00.0 +00:00:00".
    const EXPIRY_FORMAT: &[BorrowedFormatItem] = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond] [offset_hour \
             sign:mandatory]:[offset_minute]:[offset_second]"
    );

    pub fn serialize<S>(expiry: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = expiry
            .format(EXPIRY_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&raw, EXPIRY_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// The proof of a completed log-in, serialized as JSON into a private
/// cookie. Holds who logged in and until when the session is valid.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Token {
    /// The admin account the session belongs to.
    pub admin_id: AdminId,

    /// When the session stops being valid.
    #[serde(
        serialize_with = "expiry_format::serialize",
        deserialize_with = "expiry_format::deserialize"
    )]
    pub expires_at: OffsetDateTime,
}
