use crate::{bounds::Field, CronError, Result};

/// Building block of a parser configuration.
///
/// Most options specify which fields are present in a spec; the order of fields never changes.
/// Fields which aren't included take their [default values](Field::default_expr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseOption {
    /// Seconds field, default `0`.
    Second,
    /// Optional seconds field, default `0`.
    SecondOptional,
    /// Minutes field, default `0`.
    Minute,
    /// Hours field, default `0`.
    Hour,
    /// Day of month field, default `*`.
    Dom,
    /// Month field, default `*`.
    Month,
    /// Day of week field, default `*`.
    Dow,
    /// Optional day of week field, default `*`.
    DowOptional,
    /// Allow descriptors such as `@monthly`, `@weekly`, `@every 1h`.
    Descriptor,
}

/// How a field is represented in a spec.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Field is never written, its default value is used.
    #[default]
    Absent,
    /// Field must be written.
    Required,
    /// Field may be omitted; only the first (seconds) or the last (day of week) field may be optional.
    Optional,
}

/// Validated parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<ParseOption>"))]
#[cfg_attr(feature = "serde", serde(into = "Vec<ParseOption>"))]
pub struct ParseOptions {
    fields: [Presence; 6],
    descriptors: bool,
}

impl ParseOptions {
    /// Standard crontab layout: minute, hour, day of month, month, day of week and descriptors.
    pub const STANDARD: Self = Self {
        fields: [
            Presence::Absent,
            Presence::Required,
            Presence::Required,
            Presence::Required,
            Presence::Required,
            Presence::Required,
        ],
        descriptors: true,
    };

    /// Builds configuration from a set of options.
    ///
    /// It's impossible to infer which of two optional fields is omitted,
    /// so requesting both `SecondOptional` and `DowOptional` is an error.
    pub fn new(options: &[ParseOption]) -> Result<Self> {
        let mut fields = [Presence::Absent; 6];
        let mut descriptors = false;

        for option in options {
            match option {
                ParseOption::Second => fields[Field::Second.index()].require(),
                ParseOption::SecondOptional => fields[Field::Second.index()] = Presence::Optional,
                ParseOption::Minute => fields[Field::Minute.index()].require(),
                ParseOption::Hour => fields[Field::Hour.index()].require(),
                ParseOption::Dom => fields[Field::Dom.index()].require(),
                ParseOption::Month => fields[Field::Month.index()].require(),
                ParseOption::Dow => fields[Field::Dow.index()].require(),
                ParseOption::DowOptional => fields[Field::Dow.index()] = Presence::Optional,
                ParseOption::Descriptor => descriptors = true,
            }
        }

        let this = Self { fields, descriptors };
        if this.optional_field().count() > 1 {
            return Err(CronError::MultipleOptionals);
        }

        Ok(this)
    }

    /// Presence of the field in a spec.
    #[inline]
    pub fn presence(&self, field: Field) -> Presence {
        self.fields[field.index()]
    }

    /// Returns `true` if descriptors are accepted.
    #[inline]
    pub fn descriptors(&self) -> bool {
        self.descriptors
    }

    /// Minimal and maximal number of fields in a spec.
    pub fn field_count(&self) -> (usize, usize) {
        let max = self.fields.iter().filter(|p| **p != Presence::Absent).count();
        let min = max - self.optional_field().count();
        (min, max)
    }

    fn optional_field(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|field| self.presence(*field) == Presence::Optional)
    }

    /// Expands spec fields to the full canonical list of six field expressions.
    ///
    /// Omitted optional field and fields which aren't configured get their default values.
    pub(crate) fn normalize<'a>(&self, fields: &[&'a str]) -> Result<[&'a str; 6]> {
        let (min, max) = self.field_count();
        let found = fields.len();

        if found < min || found > max {
            let fields = fields.iter().map(|f| f.to_string()).collect();
            return Err(if min == max {
                CronError::FieldCount {
                    expected: min,
                    found,
                    fields,
                }
            } else {
                CronError::FieldCountRange {
                    min,
                    max,
                    found,
                    fields,
                }
            });
        }

        let omitted = if found < max { self.optional_field().next() } else { None };

        let mut supplied = fields.iter();
        let mut expanded: [&'a str; 6] = Field::ALL.map(|field| field.default_expr());
        for field in Field::ALL {
            let take = match self.presence(field) {
                Presence::Absent => false,
                Presence::Required => true,
                Presence::Optional => omitted != Some(field),
            };
            if take {
                if let Some(expr) = supplied.next() {
                    expanded[field.index()] = *expr;
                }
            }
        }

        Ok(expanded)
    }
}

impl Presence {
    #[inline]
    fn require(&mut self) {
        if *self == Presence::Absent {
            *self = Presence::Required;
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<Vec<ParseOption>> for ParseOptions {
    type Error = CronError;

    fn try_from(value: Vec<ParseOption>) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<ParseOptions> for Vec<ParseOption> {
    fn from(value: ParseOptions) -> Self {
        let mut options = Field::ALL
            .into_iter()
            .filter_map(|field| match (field, value.presence(field)) {
                (_, Presence::Absent) => None,
                (Field::Second, Presence::Optional) => Some(ParseOption::SecondOptional),
                (Field::Dow, Presence::Optional) => Some(ParseOption::DowOptional),
                (Field::Second, _) => Some(ParseOption::Second),
                (Field::Minute, _) => Some(ParseOption::Minute),
                (Field::Hour, _) => Some(ParseOption::Hour),
                (Field::Dom, _) => Some(ParseOption::Dom),
                (Field::Month, _) => Some(ParseOption::Month),
                (Field::Dow, _) => Some(ParseOption::Dow),
            })
            .collect::<Vec<_>>();
        if value.descriptors {
            options.push(ParseOption::Descriptor);
        }
        options
    }
}
