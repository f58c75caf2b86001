use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Both optional fields (seconds and day of week) were requested in a parser configuration.
    #[error("multiple optionals may not be configured")]
    MultipleOptionals,
    /// Empty schedule spec.
    #[error("empty spec string")]
    EmptySpec,
    /// Timezone prefix names an unknown location.
    #[error("provided bad location {name}: {reason}")]
    InvalidLocation {
        /// Name of the location as written in the spec.
        name: String,
        /// Why the lookup failed.
        reason: String,
    },
    /// Spec is a descriptor, but the parser is configured without descriptors support.
    #[error("parser does not accept descriptors: {0}")]
    DescriptorsNotAccepted(String),
    /// Unknown `@` descriptor.
    #[error("unrecognized descriptor: {0}")]
    UnrecognizedDescriptor(String),
    /// Duration of the `@every` descriptor can't be parsed.
    #[error("failed to parse duration {descriptor}: {reason}")]
    InvalidDuration {
        /// The whole descriptor.
        descriptor: String,
        /// Why the duration is invalid.
        reason: String,
    },
    /// Number of fields differs from the configured one.
    #[error("expected exactly {expected} fields, found {found}: {fields:?}")]
    FieldCount {
        /// Required number of fields.
        expected: usize,
        /// Number of fields in the spec.
        found: usize,
        /// Fields of the spec.
        fields: Vec<String>,
    },
    /// Number of fields is out of the configured range (when an optional field is configured).
    #[error("expected {min} to {max} fields, found {found}: {fields:?}")]
    FieldCountRange {
        /// Minimum number of fields.
        min: usize,
        /// Maximum number of fields.
        max: usize,
        /// Number of fields in the spec.
        found: usize,
        /// Fields of the spec.
        fields: Vec<String>,
    },
    /// Empty element in a comma-separated list.
    #[error("empty range in field: {0}")]
    EmptyRange(String),
    /// Value is neither a known name nor an integer.
    #[error("failed to parse int from {expr}: {reason}")]
    InvalidNumber {
        /// Offending value.
        expr: String,
        /// Why it's not a number.
        reason: String,
    },
    /// Value is a negative integer.
    #[error("negative number ({value}) not allowed: {expr}")]
    NegativeNumber {
        /// Parsed value.
        value: i64,
        /// Offending value.
        expr: String,
    },
    /// Value looks like a name but the field has no such name.
    #[error("unknown name {name}: {expr}")]
    UnknownName {
        /// Offending name.
        name: String,
        /// Range expression the name belongs to.
        expr: String,
    },
    /// Range has more than one `-`.
    #[error("too many hyphens: {0}")]
    TooManyHyphens(String),
    /// Range has more than one `/`.
    #[error("too many slashes: {0}")]
    TooManySlashes(String),
    /// Range starts below the field minimum.
    #[error("beginning of range ({start}) below minimum ({min}): {expr}")]
    BelowMinimum {
        /// Beginning of range.
        start: u32,
        /// Field minimum.
        min: u8,
        /// Offending range expression.
        expr: String,
    },
    /// Range ends above the field maximum.
    #[error("end of range ({end}) above maximum ({max}): {expr}")]
    AboveMaximum {
        /// End of range.
        end: u32,
        /// Field maximum.
        max: u8,
        /// Offending range expression.
        expr: String,
    },
    /// Range starts after its end.
    #[error("beginning of range ({start}) beyond end of range ({end}): {expr}")]
    StartBeyondEnd {
        /// Beginning of range.
        start: u32,
        /// End of range.
        end: u32,
        /// Offending range expression.
        expr: String,
    },
    /// Step of range is zero.
    #[error("step of range should be a positive number: {0}")]
    ZeroStep(String),
}
