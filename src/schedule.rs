use crate::{bounds::Field, location::Location, mask::FieldMask, parser, CronError, Result};
use chrono::TimeDelta;
use std::{fmt::Display, str::FromStr, time::Duration};

/// Result of the spec compilation.
///
/// Calendar-based specs and descriptors compile into [`SpecSchedule`],
/// `@every <duration>` into [`ConstantDelaySchedule`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// Set of calendar instants defined by field masks.
    Spec(SpecSchedule),
    /// Fixed interval between activations.
    Every(ConstantDelaySchedule),
}

impl Schedule {
    /// Returns compiled field masks if this is a calendar-based schedule.
    pub fn as_spec(&self) -> Option<&SpecSchedule> {
        match self {
            Self::Spec(spec) => Some(spec),
            Self::Every(_) => None,
        }
    }

    /// Returns fixed interval if this is `@every` schedule.
    pub fn as_every(&self) -> Option<&ConstantDelaySchedule> {
        match self {
            Self::Spec(_) => None,
            Self::Every(every) => Some(every),
        }
    }

    /// Returns `true` for `@every` schedule.
    #[inline]
    pub fn is_every(&self) -> bool {
        matches!(self, Self::Every(_))
    }
}

impl From<SpecSchedule> for Schedule {
    fn from(value: SpecSchedule) -> Self {
        Self::Spec(value)
    }
}

impl From<ConstantDelaySchedule> for Schedule {
    fn from(value: ConstantDelaySchedule) -> Self {
        Self::Every(value)
    }
}

/// Parses spec with the [standard](crate::parse_standard) parser.
impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_standard(s)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        parser::parse_standard(value)
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        parser::parse_standard(&value)
    }
}

/// Compiled calendar schedule: a mask of permitted values for each field and the location to evaluate it in.
///
/// Day of month and day of week masks carry [`FieldMask::STAR_BIT`] when written as a wildcard;
/// when both are restricted, an instant matches if either of them matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecSchedule {
    second: FieldMask,
    minute: FieldMask,
    hour: FieldMask,
    dom: FieldMask,
    month: FieldMask,
    dow: FieldMask,
    location: Location,
}

impl SpecSchedule {
    /// Assembles schedule from masks in canonical field order.
    pub(crate) fn from_masks(masks: [FieldMask; 6], location: Location) -> Self {
        let [second, minute, hour, dom, month, dow] = masks;
        Self {
            second,
            minute,
            hour,
            dom,
            month,
            dow,
            location,
        }
    }

    /// Seconds mask.
    #[inline]
    pub fn second(&self) -> FieldMask {
        self.second
    }

    /// Minutes mask.
    #[inline]
    pub fn minute(&self) -> FieldMask {
        self.minute
    }

    /// Hours mask.
    #[inline]
    pub fn hour(&self) -> FieldMask {
        self.hour
    }

    /// Days of month mask.
    #[inline]
    pub fn dom(&self) -> FieldMask {
        self.dom
    }

    /// Months mask.
    #[inline]
    pub fn month(&self) -> FieldMask {
        self.month
    }

    /// Days of week mask.
    #[inline]
    pub fn dow(&self) -> FieldMask {
        self.dow
    }

    /// Mask of the specified field.
    pub fn field(&self, field: Field) -> FieldMask {
        match field {
            Field::Second => self.second,
            Field::Minute => self.minute,
            Field::Hour => self.hour,
            Field::Dom => self.dom,
            Field::Month => self.month,
            Field::Dow => self.dow,
        }
    }

    /// Location the schedule is evaluated in.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Renders masks as lists of values in canonical order: `TZ=UTC 0 0,30 * *1,2,...`.
impl Display for SpecSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TZ={} {} {} {} {} {} {}",
            self.location, self.second, self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}

/// Schedule which fires once per fixed delay, with one second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantDelaySchedule {
    delay: Duration,
}

impl ConstantDelaySchedule {
    /// Constructs schedule from a (possibly negative) delay.
    ///
    /// Delays shorter than one second are raised to one second, longer ones are truncated to whole seconds.
    pub fn every(delay: TimeDelta) -> Self {
        let delay = Duration::from_secs(delay.num_seconds().max(1).unsigned_abs());
        Self { delay }
    }

    /// Delay between activations.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Display for ConstantDelaySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@every {}s", self.delay.as_secs())
    }
}
