//! Configurable cron spec compiler.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate turns cron specs into compact schedules:
//! every field is compiled into a 64-bit mask of permitted values,
//! so a scheduler can check any instant against it with a few bitwise operations.
//!
//! _This crate doesn't calculate next activation times and doesn't run jobs._
//! It only parses and validates specs.
//!
//! ## Cron spec format
//!
//! The set of fields in a spec is configurable with [`ParseOption`]s, but their order is fixed:
//! seconds, minutes, hours, day of month, month, day of week.
//! Fields which aren't configured take their default values.
//! Either seconds or day of week (but not both) may be configured as optional,
//! then it may be omitted in a spec.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Default | Allowed values  | Allowed special characters |
//! |--------------|---------|-----------------|----------------------------|
//! | Seconds      | 0       | 0-59            | * ? , - /                  |
//! | Minutes      | 0       | 0-59            | * ? , - /                  |
//! | Hours        | 0       | 0-23            | * ? , - /                  |
//! | Day of Month | *       | 1-31            | * ? , - /                  |
//! | Month        | *       | 1-12 or JAN-DEC | * ? , - /                  |
//! | Day of Week  | *       | 0-6 or SUN-SAT  | * ? , - /                  |
//!
//! Patterns meanings:
//! - `*` or `?` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`; `N/step` means from `N` up to the field's maximum.
//!
//! Month and day of week names are case-insensitive, both short (`jan`, `mon`) and full (`january`, `monday`) forms are accepted.
//!
//! Wildcard fields are marked with [`FieldMask::STAR_BIT`]; a stepped wildcard like `*/5` isn't a wildcard anymore.
//!
//! Also, if the parser accepts descriptors, short aliases for well-known specs are allowed:
//!
//! | Descriptor                 | Equivalent      |
//! |----------------------------|-----------------|
//! | `@yearly` (or `@annually`) | 0 0 0 1 1 *     |
//! | `@monthly`                 | 0 0 0 1 * *     |
//! | `@weekly`                  | 0 0 0 * * 0     |
//! | `@daily` (or `@midnight`)  | 0 0 0 * * *     |
//! | `@hourly`                  | 0 0 * * * *     |
//! | `@every <duration>`        | fixed interval  |
//!
//! Duration of `@every` is a sequence of numbers with units, like `1h30m`, `90s` or `1.5h`;
//! it's rounded down to whole seconds, but never shorter than one second.
//!
//! ### Spec with timezone
//! Any spec may be prefixed with a timezone, for example:
//! - `TZ=Europe/Paris @monthly`
//! - `CRON_TZ=EET 0 12 * * *`
//!
//! `Local` means the process timezone (the default one), everything else is looked up in the IANA timezone database.
//!
//! ## How to use
//!
//! Use [`parse_standard`] for a traditional 5-fields crontab spec, or build a [`Parser`] with the required set of fields.
//!
//! ```rust
//! use cron_spec::{parse_standard, ParseOption, Parser, Result};
//!
//! fn compile() -> Result<()> {
//!     let schedule = parse_standard("30 2 * * MON-FRI")?;
//!     let spec = schedule.as_spec().unwrap();
//!     assert!(spec.minute().contains(30));
//!     assert!(spec.dow().contains(5));
//!     assert!(!spec.dow().contains(6));
//!
//!     // Quartz-like: seconds are optional
//!     let parser = Parser::new(&[
//!         ParseOption::SecondOptional,
//!         ParseOption::Minute,
//!         ParseOption::Hour,
//!         ParseOption::Dom,
//!         ParseOption::Month,
//!         ParseOption::Dow,
//!         ParseOption::Descriptor,
//!     ])?;
//!     assert_eq!(parser.parse("0 30 2 * * *")?, parser.parse("30 2 * * *")?);
//!
//!     Ok(())
//! }
//! # compile().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementations for compiled schedules and parser options.

/// Fields of a schedule and their legal values.
pub mod bounds;
mod duration;
/// Crate specific Error implementation.
pub mod error;
/// Timezone of a schedule.
pub mod location;
/// Compiled field masks.
pub mod mask;
/// Parser configuration.
pub mod options;
/// Spec compiler.
pub mod parser;
mod pattern;
/// Compiled schedules.
pub mod schedule;
mod series;
mod utils;

// Re-export of public entities.
pub use bounds::{Bounds, Field};
pub use error::CronError;
pub use location::Location;
pub use mask::FieldMask;
pub use options::{ParseOption, ParseOptions, Presence};
pub use parser::{parse_standard, Parser};
pub use schedule::{ConstantDelaySchedule, Schedule, SpecSchedule};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
