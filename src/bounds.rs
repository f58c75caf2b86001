use std::fmt::Display;

/// Legal values of a single schedule field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Minimal legal value (inclusive).
    pub min: u8,
    /// Maximal legal value (inclusive).
    pub max: u8,
    /// Mnemonic names of values, lowercase; only months and days of week have them.
    pub names: Option<&'static [(&'static str, u8)]>,
}

impl Bounds {
    /// Looks up a mnemonic value, case-insensitively.
    pub fn name_value(&self, name: &str) -> Option<u8> {
        self.names?
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

const MONTH_NAMES: &[(&str, u8)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

const DOW_NAMES: &[(&str, u8)] = &[
    ("sun", 0),
    ("mon", 1),
    ("tue", 2),
    ("wed", 3),
    ("thu", 4),
    ("fri", 5),
    ("sat", 6),
    ("sunday", 0),
    ("monday", 1),
    ("tuesday", 2),
    ("wednesday", 3),
    ("thursday", 4),
    ("friday", 5),
    ("saturday", 6),
];

/// Seconds: 0-59.
pub const SECONDS: Bounds = Bounds {
    min: 0,
    max: 59,
    names: None,
};
/// Minutes: 0-59.
pub const MINUTES: Bounds = Bounds {
    min: 0,
    max: 59,
    names: None,
};
/// Hours: 0-23.
pub const HOURS: Bounds = Bounds {
    min: 0,
    max: 23,
    names: None,
};
/// Days of month: 1-31.
pub const DOMS: Bounds = Bounds {
    min: 1,
    max: 31,
    names: None,
};
/// Months: 1-12 or JAN-DEC.
pub const MONTHS: Bounds = Bounds {
    min: 1,
    max: 12,
    names: Some(MONTH_NAMES),
};
/// Days of week: 0-6 or SUN-SAT.
pub const DOWS: Bounds = Bounds {
    min: 0,
    max: 6,
    names: Some(DOW_NAMES),
};

/// Schedule field, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Seconds.
    Second = 0,
    /// Minutes.
    Minute = 1,
    /// Hours.
    Hour = 2,
    /// Day of month.
    Dom = 3,
    /// Month.
    Month = 4,
    /// Day of week.
    Dow = 5,
}

impl Field {
    /// All fields in the order they appear in a full spec.
    pub const ALL: [Field; 6] = [
        Field::Second,
        Field::Minute,
        Field::Hour,
        Field::Dom,
        Field::Month,
        Field::Dow,
    ];

    const DEFAULTS: [&'static str; 6] = ["0", "0", "0", "*", "*", "*"];

    /// Legal values of the field.
    pub const fn bounds(&self) -> Bounds {
        match self {
            Self::Second => SECONDS,
            Self::Minute => MINUTES,
            Self::Hour => HOURS,
            Self::Dom => DOMS,
            Self::Month => MONTHS,
            Self::Dow => DOWS,
        }
    }

    /// Expression used when the field isn't part of the parser configuration.
    pub const fn default_expr(&self) -> &'static str {
        Self::DEFAULTS[*self as usize]
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Dom => "day of month",
            Self::Month => "month",
            Self::Dow => "day of week",
        };
        write!(f, "{name}")
    }
}
