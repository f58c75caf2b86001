use crate::{CronError, Result};
use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};

const LOCAL: &str = "Local";

/// Time location which a compiled schedule is evaluated in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub enum Location {
    /// Local timezone of the process.
    #[default]
    Local,
    /// Named IANA timezone.
    Zone(Tz),
}

impl Location {
    /// Resolves a location by name.
    ///
    /// `Local` is the process timezone, an empty name is UTC,
    /// everything else is looked up in the IANA timezone database.
    pub fn load(name: &str) -> Result<Self> {
        match name {
            LOCAL => Ok(Self::Local),
            "" => Ok(Self::Zone(Tz::UTC)),
            _ => Tz::from_str(name).map(Self::Zone).map_err(|_| CronError::InvalidLocation {
                name: name.to_owned(),
                reason: format!("unknown time zone {name}"),
            }),
        }
    }

    /// Named timezone, `None` for the local one.
    pub fn tz(&self) -> Option<Tz> {
        match self {
            Self::Local => None,
            Self::Zone(tz) => Some(*tz),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "{LOCAL}"),
            Self::Zone(tz) => write!(f, "{}", tz.name()),
        }
    }
}

impl FromStr for Location {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::load(s)
    }
}

impl TryFrom<String> for Location {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::load(&value)
    }
}

impl From<Location> for String {
    fn from(value: Location) -> Self {
        value.to_string()
    }
}

impl From<Tz> for Location {
    fn from(value: Tz) -> Self {
        Self::Zone(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("UTC", Location::Zone(Tz::UTC))]
    #[case("", Location::Zone(Tz::UTC))]
    #[case("Local", Location::Local)]
    #[case("America/New_York", Location::Zone(Tz::America__New_York))]
    #[case("Europe/Kyiv", Location::Zone(Tz::Europe__Kyiv))]
    #[case("EET", Location::Zone(Tz::EET))]
    fn test_load_valid(#[case] name: &str, #[case] expected: Location) {
        assert_eq!(Location::load(name), Ok(expected));
    }

    #[rstest]
    #[case("Mars/Olympus_Mons")]
    #[case("local")]
    #[case("utc ")]
    #[case("Europe/")]
    fn test_load_invalid(#[case] name: &str) {
        assert!(
            matches!(Location::load(name), Err(CronError::InvalidLocation { name: n, .. }) if n == name),
            "name = '{name}'"
        );
    }

    #[rstest]
    #[case(Location::Local, "Local")]
    #[case(Location::Zone(Tz::UTC), "UTC")]
    #[case(Location::Zone(Tz::Europe__Paris), "Europe/Paris")]
    fn test_display_round_trip(#[case] location: Location, #[case] expected: &str) {
        assert_eq!(location.to_string(), expected);
        assert_eq!(expected.parse::<Location>(), Ok(location));
    }

    #[test]
    fn test_tz() {
        assert_eq!(Location::Local.tz(), None);
        assert_eq!(Location::from(Tz::Asia__Tokyo).tz(), Some(Tz::Asia__Tokyo));
        assert_eq!(Location::default(), Location::Local);
    }
}
