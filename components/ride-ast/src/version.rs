use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Version of the script standard library a script was compiled against.
///
/// The version selects both the set of functions a script may call and
/// the complexity charged for them.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Copy,
    Clone,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum::Display,
)]
#[serde(try_from = "String")]
pub enum RideVersion {
    V2,
    V3,
}

/// `strum` derives `TryFrom<&str>`; serde hands us owned `String`s
impl TryFrom<String> for RideVersion {
    type Error = strum::ParseError;

    fn try_from(s: String) -> Result<RideVersion, Self::Error> {
        RideVersion::try_from(s.as_str())
    }
}

impl RideVersion {
    /// The most recent supported library version.
    pub fn latest() -> RideVersion {
        RideVersion::V3
    }
}
